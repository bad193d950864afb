// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use proptest::prelude::*;

use partscout::authenticity::AuthenticityAssessor;
use partscout::catalog::{Catalog, PatternLibrary};
use partscout::config::Settings;
use partscout::matcher::InventoryMatcher;
use partscout::model::{Category, CompatibilityBand};
use partscout::negotiation::PriceNegotiator;
use partscout::parser::SpecificationParser;
use partscout::scoring::{ScoreScale, WeightedScore};

const TOKENS: &[&str] = &[
    "intel", "amd", "i7-12700K", "RTX", "4090", "DDR4", "DDR5", "16GB", "3200MHz", "3.6GHz",
    "LGA1700", "AM4", "PCIe", "SATA", "NVMe", "450W", "750W", "12V", "ATX", "DIMM", "fan",
    "ssd", "memory", "processor", "psu", "1TB", "-5v", "cooler",
];

const VENDORS: &[Option<&str>] = &[
    None,
    Some("techsource-direct"),
    Some("budget-bits"),
    Some("certified-refurb"),
    Some("unknown-vendor"),
];

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(128),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn arb_query() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(TOKENS), 0..6).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn prop_parser_confidence_is_bounded(query in ".{0,60}") {
        let patterns = PatternLibrary::new();
        let result = SpecificationParser::new(&patterns).parse(&query);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert_eq!(result.ambiguities.len(), result.clarification_prompts.len());
        prop_assert!(!result.normalized_query.contains("  "));
    }

    #[test]
    fn prop_parser_ignores_extra_whitespace(query in arb_query()) {
        let patterns = PatternLibrary::new();
        let parser = SpecificationParser::new(&patterns);
        let spaced = format!("  {}\t ", query.replace(' ', "   "));
        prop_assert_eq!(parser.parse(&query).specification, parser.parse(&spaced).specification);
    }

    #[test]
    fn prop_unrecognized_queries_are_ambiguous(query in "[qxz ]{0,20}") {
        let patterns = PatternLibrary::new();
        let result = SpecificationParser::new(&patterns).parse(&query);
        prop_assert_eq!(result.specification.category, Category::Peripherals);
        prop_assert!(result.is_ambiguous());
    }

    #[test]
    fn prop_search_results_are_ranked(query in arb_query()) {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let results = InventoryMatcher::new(&catalog, &settings).search(&query);
        prop_assert!(!results.is_empty());
        for result in &results {
            prop_assert!((0.0..=1.0).contains(&result.compatibility_score));
            prop_assert!((0.0..=1.0).contains(&result.quality_score));
        }
        for pair in results.windows(2) {
            prop_assert_ne!(pair[0].rank_cmp(&pair[1]), std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn prop_authenticity_score_is_percent(index in 0usize..64, grams in proptest::option::of(0.0f64..5000.0)) {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let component = &catalog.inventory()[index % catalog.inventory().len()];
        let analysis = AuthenticityAssessor::new(&catalog, &settings.quality).analyze(component, grams);
        prop_assert!((0.0..=100.0).contains(&analysis.score));
    }

    #[test]
    fn prop_band_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(CompatibilityBand::from_percent(low) <= CompatibilityBand::from_percent(high));
    }

    #[test]
    fn prop_weighted_score_is_bounded(
        criteria in proptest::collection::vec((0.0f64..2.0, -0.5f64..1.5, any::<bool>()), 0..8)
    ) {
        let mut score = WeightedScore::new();
        for (i, (weight, achieved, applicable)) in criteria.iter().enumerate() {
            let label = format!("c{}", i);
            if *applicable {
                score.add(label, *weight, *achieved);
            } else {
                score.skip(label, *weight);
            }
        }
        let result = score.finish(ScoreScale::Percent);
        prop_assert!((0.0..=100.0).contains(&result.score));
        let total: f64 = result.breakdown.iter().map(|e| e.contribution).sum();
        prop_assert!((total - result.score).abs() < 1e-6);
    }

    #[test]
    fn prop_discount_respects_cap(
        index in 0usize..64,
        quantity in 1u32..500,
        vendor in proptest::sample::select(VENDORS),
        month in 1u32..=12,
    ) {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let component = &catalog.inventory()[index % catalog.inventory().len()];
        let result = PriceNegotiator::new(&catalog, &settings.negotiation)
            .calculate_discount(component, quantity, vendor, month);
        prop_assert!(result.discount_percentage >= 0.0);
        prop_assert!(result.discount_percentage <= settings.negotiation.max_discount_percent);
        prop_assert_eq!(
            result.recommended_price,
            result.base_price * (1.0 - result.discount_percentage / 100.0)
        );
    }

    #[test]
    fn prop_wholesale_processor_discount(
        quantity in 50u32..1000,
        vendor in proptest::sample::select(VENDORS),
        month in 1u32..=12,
    ) {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let negotiator = PriceNegotiator::new(&catalog, &settings.negotiation);
        for component in catalog.components_in(Category::Processor) {
            let result = negotiator.calculate_discount(component, quantity, vendor, month);
            prop_assert!(result.discount_percentage >= 30.0, "{}: {}", component.id, result.discount_percentage);
        }
    }
}
