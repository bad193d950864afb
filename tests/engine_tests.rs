// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Cross-engine checks over the whole built-in catalog.

use partscout::adapters::AdapterResolver;
use partscout::authenticity::AuthenticityAssessor;
use partscout::catalog::Catalog;
use partscout::config::Settings;
use partscout::graymarket::{GrayMarketAnalyzer, RiskLevel};
use partscout::matcher::{InventoryMatcher, MatchKind};
use partscout::model::{AvailabilityStatus, LegacyPort};
use partscout::negotiation::PriceNegotiator;
use partscout::workaround::WorkaroundComposer;

fn fixtures() -> (Catalog, Settings) {
    (Catalog::builtin(), Settings::default())
}

#[test]
fn test_authenticity_scores_stay_in_range() {
    let (catalog, settings) = fixtures();
    let assessor = AuthenticityAssessor::new(&catalog, &settings.quality);
    for component in catalog.inventory() {
        let analysis = assessor.analyze(component, None);
        assert!(
            (0.0..=100.0).contains(&analysis.score),
            "{} scored {}",
            component.id,
            analysis.score
        );
        assert!((0.0..=1.0).contains(&analysis.quality.overall));
    }
}

#[test]
fn test_oem_outscores_unbranded_listing() {
    let (catalog, settings) = fixtures();
    let assessor = AuthenticityAssessor::new(&catalog, &settings.quality);
    let oem = catalog.component("cpu-i7-12700k").unwrap();
    let unbranded = catalog.component("cpu-i7-12700k-unbranded").unwrap();
    assert!(assessor.score(oem) > assessor.score(unbranded));
}

#[test]
fn test_gray_market_bounds_across_catalog() {
    let (catalog, _) = fixtures();
    let analyzer = GrayMarketAnalyzer::new(&catalog);
    for component in catalog.inventory() {
        let analysis = analyzer.analyze(component);
        let pricing = &analysis.pricing;
        assert!((10.0..=40.0).contains(&pricing.discount_percent), "{}", component.id);
        assert!(pricing.gray_price <= pricing.retail_price);
        assert!((0.0..=1.0).contains(&analysis.risks.overall));
        assert_eq!(analysis.risk_level, RiskLevel::from_overall(analysis.risks.overall));
        assert_eq!(analysis.risks.risk_factors.len(), analysis.risks.mitigations.len());
        assert!(analysis.availability.estimated_days > 0.0);
    }
}

#[test]
fn test_adapter_results_are_sorted_for_every_port() {
    let (catalog, settings) = fixtures();
    let resolver = AdapterResolver::new(&catalog, &settings.adapters);
    for port in LegacyPort::ALL {
        let adapters = resolver.identify_adapters(port.as_str(), None);
        assert!(!adapters.is_empty(), "no adapters for {}", port);
        for adapter in &adapters {
            assert!((0.0..=100.0).contains(&adapter.compatibility_percent));
            assert!((0.0..=1.0).contains(&adapter.reliability));
        }
        for pair in adapters.windows(2) {
            assert!(pair[0].band >= pair[1].band);
        }
    }
}

#[test]
fn test_search_then_negotiate_best_match() {
    let (catalog, settings) = fixtures();
    let results = InventoryMatcher::new(&catalog, &settings).search("DDR4 3200MHz memory");
    assert!(results.iter().all(|r| r.kind == MatchKind::Specification));
    let best = results[0].component.as_ref().unwrap();

    let negotiator = PriceNegotiator::new(&catalog, &settings.negotiation);
    let single = negotiator.calculate_discount(best, 1, None, 9);
    let bulk = negotiator.calculate_discount(best, 100, None, 9);
    assert!(bulk.discount_percentage > single.discount_percentage);
    assert!(bulk.recommended_price < single.recommended_price);
    assert!(bulk.next_tier.is_none() || bulk.next_tier.unwrap().min_quantity > 100);
}

#[test]
fn test_workarounds_from_in_stock_pool() {
    let (catalog, settings) = fixtures();
    let composer = WorkaroundComposer::new(&catalog, &settings.workarounds);
    let target = catalog.component("cool-laminar-rm1").unwrap();
    let pool: Vec<_> = catalog
        .inventory()
        .iter()
        .filter(|c| {
            !matches!(
                c.availability,
                AvailabilityStatus::OutOfStock | AvailabilityStatus::Discontinued
            )
        })
        .collect();

    let solutions = composer.find_alternatives(target, &pool);
    assert!(!solutions.is_empty());
    for solution in &solutions {
        assert!(solution.components.iter().all(|c| c.id != target.id));
        assert!(solution.reliability > 0.0 && solution.reliability <= 1.0);
        assert!(solution.total_cost > 0.0);
    }
    for pair in solutions.windows(2) {
        assert!(pair[0].reliability >= pair[1].reliability);
    }
}
