// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Gray-market pricing, delivery and risk estimates

use serde::{Deserialize, Serialize};

use crate::catalog::profiles::{BASE_COMPATIBILITY_RISK, BASE_QUALITY_RISK, BASE_WARRANTY_RISK};
use crate::catalog::Catalog;
use crate::model::{AuthenticityLevel, AvailabilityStatus, Component, ComponentRef};
use crate::scoring::ScoreScale;

const MIN_GRAY_DISCOUNT: f64 = 10.0;
const MAX_GRAY_DISCOUNT: f64 = 40.0;
const OUT_OF_STOCK_PENALTY: f64 = 5.0;
/// Relative change over the trend window that counts as movement
const TREND_THRESHOLD: f64 = 0.05;
const TREND_WINDOW: usize = 3;

const QUALITY_FLAG: f64 = 0.5;
const WARRANTY_FLAG: f64 = 0.7;
const COMPATIBILITY_FLAG: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTrend {
    Rising,
    Falling,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_overall(overall: f64) -> RiskLevel {
        if overall < 0.35 {
            RiskLevel::Low
        } else if overall < 0.6 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrayPricing {
    pub retail_price: f64,
    pub gray_price: f64,
    /// Percent below retail
    pub discount_percent: f64,
    pub savings: f64,
    pub trend: PriceTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityForecast {
    pub status: AvailabilityStatus,
    pub base_days: f64,
    pub status_multiplier: f64,
    pub supply_chain_multiplier: f64,
    pub estimated_days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub quality_risk: f64,
    pub warranty_risk: f64,
    pub compatibility_risk: f64,
    pub overall: f64,
    pub risk_factors: Vec<String>,
    pub mitigations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrayMarketAnalysis {
    pub component: ComponentRef,
    pub market_location: String,
    pub pricing: GrayPricing,
    pub availability: AvailabilityForecast,
    pub risks: RiskAssessment,
    pub risk_level: RiskLevel,
}

pub struct GrayMarketAnalyzer<'a> {
    catalog: &'a Catalog,
}

impl<'a> GrayMarketAnalyzer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn analyze(&self, component: &Component) -> GrayMarketAnalysis {
        let pricing = self.analyze_pricing(component);
        let availability = self.predict_availability(component);
        let risks = self.assess_risks(component);
        let risk_level = RiskLevel::from_overall(risks.overall);

        tracing::debug!(
            component = %component.id,
            gray_price = pricing.gray_price,
            days = availability.estimated_days,
            risk = risks.overall,
            "gray-market analysis"
        );

        GrayMarketAnalysis {
            component: component.summary(),
            market_location: component.market_location.clone(),
            pricing,
            availability,
            risks,
            risk_level,
        }
    }

    pub fn analyze_pricing(&self, component: &Component) -> GrayPricing {
        let profile = self.catalog.profile(component.category());
        let mut discount = profile.gray_discount_percent;
        if component.availability == AvailabilityStatus::OutOfStock {
            discount -= OUT_OF_STOCK_PENALTY;
        }
        let discount = discount.clamp(MIN_GRAY_DISCOUNT, MAX_GRAY_DISCOUNT);
        let retail_price = component.pricing.base_price();
        let gray_price = retail_price * (1.0 - discount / 100.0);

        GrayPricing {
            retail_price,
            gray_price,
            discount_percent: discount,
            savings: retail_price - gray_price,
            trend: price_trend(&component.price_history),
        }
    }

    pub fn predict_availability(&self, component: &Component) -> AvailabilityForecast {
        let profile = self.catalog.profile(component.category());
        let location = self.catalog.location(&component.market_location);
        let status_multiplier = component.availability.delivery_multiplier();

        AvailabilityForecast {
            status: component.availability,
            base_days: profile.base_delivery_days,
            status_multiplier,
            supply_chain_multiplier: location.supply_chain_multiplier,
            estimated_days: profile.base_delivery_days
                * status_multiplier
                * location.supply_chain_multiplier,
        }
    }

    pub fn assess_risks(&self, component: &Component) -> RiskAssessment {
        let factors = &self.catalog.profile(component.category()).risk;
        let quality_risk = ScoreScale::Unit.clamp(BASE_QUALITY_RISK * factors.quality);
        let warranty_risk = ScoreScale::Unit.clamp(BASE_WARRANTY_RISK * factors.warranty);
        let compatibility_risk = ScoreScale::Unit.clamp(BASE_COMPATIBILITY_RISK * factors.compatibility);
        let overall = (quality_risk + warranty_risk + compatibility_risk) / 3.0;

        let mut risk_factors = Vec::new();
        let mut mitigations = Vec::new();
        if quality_risk > QUALITY_FLAG {
            risk_factors.push(format!("Elevated quality risk for {} parts", component.category()));
            mitigations.push("Inspect samples and run burn-in tests before accepting the lot".to_string());
        }
        if warranty_risk > WARRANTY_FLAG {
            risk_factors.push("Manufacturer warranty is unlikely to be honored".to_string());
            mitigations.push("Negotiate a seller-backed return window".to_string());
        }
        if compatibility_risk > COMPATIBILITY_FLAG {
            risk_factors.push("Regional or firmware variants may not fit the target platform".to_string());
            mitigations.push("Confirm revision and firmware against the target platform before purchase".to_string());
        }
        if component.authenticity == AuthenticityLevel::Unknown {
            risk_factors.push("Authenticity cannot be established".to_string());
            mitigations.push("Request provenance documents or run an authenticity check".to_string());
        }

        RiskAssessment {
            quality_risk,
            warranty_risk,
            compatibility_risk,
            overall,
            risk_factors,
            mitigations,
        }
    }
}

/// Direction of the last few price points, oldest first
fn price_trend(history: &[f64]) -> PriceTrend {
    if history.len() < TREND_WINDOW {
        return PriceTrend::Stable;
    }
    let window = &history[history.len() - TREND_WINDOW..];
    let first = window[0];
    let last = window[TREND_WINDOW - 1];
    if first <= 0.0 {
        return PriceTrend::Stable;
    }
    let change = (last - first) / first;
    if change > TREND_THRESHOLD {
        PriceTrend::Rising
    } else if change < -TREND_THRESHOLD {
        PriceTrend::Falling
    } else {
        PriceTrend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(id: &str) -> GrayMarketAnalysis {
        let catalog = Catalog::builtin();
        let analyzer = GrayMarketAnalyzer::new(&catalog);
        analyzer.analyze(catalog.component(id).unwrap())
    }

    #[test]
    fn test_gray_price_uses_category_discount() {
        let analysis = analyze("cpu-i7-12700k");
        assert_eq!(analysis.pricing.discount_percent, 15.0);
        assert!((analysis.pricing.gray_price - 409.0 * 0.85).abs() < 1e-9);
        assert!((analysis.pricing.savings - 409.0 * 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_stock_lowers_discount() {
        // memory 20%, less 5 for scarcity
        let analysis = analyze("mem-ddr4-8-2666-sodimm");
        assert_eq!(analysis.pricing.discount_percent, 15.0);
    }

    #[test]
    fn test_discount_is_clamped() {
        let catalog = Catalog::builtin();
        let analyzer = GrayMarketAnalyzer::new(&catalog);
        let mut gpu = catalog.component("gpu-rx-7900xtx").unwrap().clone();
        gpu.availability = AvailabilityStatus::OutOfStock;
        // graphics 10% less 5 clamps back to 10
        assert_eq!(analyzer.analyze_pricing(&gpu).discount_percent, 10.0);
    }

    #[test]
    fn test_price_trend() {
        assert_eq!(price_trend(&[100.0, 101.0]), PriceTrend::Stable);
        assert_eq!(price_trend(&[50.0, 100.0, 103.0, 110.0]), PriceTrend::Rising);
        assert_eq!(price_trend(&[100.0, 96.0, 90.0]), PriceTrend::Falling);
        assert_eq!(price_trend(&[100.0, 104.0, 102.0]), PriceTrend::Stable);
        assert_eq!(analyze("gpu-rtx-4090").pricing.trend, PriceTrend::Rising);
        assert_eq!(analyze("gpu-rtx-3060").pricing.trend, PriceTrend::Falling);
    }

    #[test]
    fn test_delivery_estimate() {
        // graphics 7 days, limited 1.5, authorized distributor 1.0
        let analysis = analyze("gpu-rtx-4090");
        assert!((analysis.availability.estimated_days - 10.5).abs() < 1e-9);

        // memory 4 days, in stock 0.8, online marketplace 1.2
        let analysis = analyze("mem-ddr4-16-3200-generic");
        assert!((analysis.availability.estimated_days - 4.0 * 0.8 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_location_is_neutral() {
        let catalog = Catalog::builtin();
        let analyzer = GrayMarketAnalyzer::new(&catalog);
        let mut cpu = catalog.component("cpu-i7-12700k").unwrap().clone();
        cpu.market_location = "somewhere-else".to_string();
        assert_eq!(analyzer.predict_availability(&cpu).supply_chain_multiplier, 1.0);
    }

    #[test]
    fn test_risks_are_bounded_and_flagged() {
        let analysis = analyze("gpu-rtx-3060");
        let risks = &analysis.risks;
        // 0.3 * 1.8
        assert!((risks.quality_risk - 0.54).abs() < 1e-9);
        assert!(risks.risk_factors.iter().any(|f| f.contains("quality")));
        assert_eq!(risks.risk_factors.len(), risks.mitigations.len());
        for value in [risks.quality_risk, risks.warranty_risk, risks.compatibility_risk, risks.overall] {
            assert!((0.0..=1.0).contains(&value));
        }
        assert_eq!(analysis.risk_level, RiskLevel::from_overall(risks.overall));
    }

    #[test]
    fn test_unknown_authenticity_is_flagged() {
        let analysis = analyze("cpu-i7-12700k-unbranded");
        assert!(analysis
            .risks
            .risk_factors
            .iter()
            .any(|f| f.contains("Authenticity")));
        let analysis = analyze("cpu-i7-12700k");
        assert!(!analysis
            .risks
            .risk_factors
            .iter()
            .any(|f| f.contains("Authenticity")));
    }

    #[test]
    fn test_risk_level_bands() {
        assert_eq!(RiskLevel::from_overall(0.2), RiskLevel::Low);
        assert_eq!(RiskLevel::from_overall(0.35), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_overall(0.6), RiskLevel::High);
    }
}
