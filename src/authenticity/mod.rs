// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Authenticity assessment
//!
//! Scores how likely an inventory component is to be what it claims to be,
//! from its weight against a category model, thermal plausibility, sourcing
//! quality indicators and declared provenance. Scores are 0-100.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::QualityConfig;
use crate::model::{AuthenticityLevel, Category, Component, ComponentRef};
use crate::scoring::{ScoreEntry, ScoreScale, ScoringResult, WeightedScore};

const BASE_SCORE: f64 = 50.0;
const WEIGHT_POINTS: f64 = 30.0;
const THERMAL_POINTS: f64 = 25.0;
const QUALITY_POINTS: f64 = 25.0;
const LEVEL_POINTS: f64 = 20.0;

/// Market/retail ratio at or above which a price is considered consistent
const CONSISTENT_PRICE_RATIO: f64 = 0.85;

/// Confidence label for an authenticity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLabel {
    Verified,
    Likely,
    Uncertain,
    Suspect,
}

impl ConfidenceLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ConfidenceLabel::Verified
        } else if score >= 65.0 {
            ConfidenceLabel::Likely
        } else if score >= 40.0 {
            ConfidenceLabel::Uncertain
        } else {
            ConfidenceLabel::Suspect
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLabel::Verified => "verified",
            ConfidenceLabel::Likely => "likely",
            ConfidenceLabel::Uncertain => "uncertain",
            ConfidenceLabel::Suspect => "suspect",
        }
    }
}

impl std::fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightAnalysis {
    pub expected_grams: f64,
    pub measured_grams: f64,
    pub variance_percent: f64,
    pub tolerance_percent: f64,
    pub within_tolerance: bool,
}

/// Thermal plausibility metrics, each in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermalAnalysis {
    /// W/cm², 0 when power or footprint is unknown
    pub power_density: f64,
    pub heat_sync_quality: f64,
    pub thermal_conductivity: f64,
    pub cooling_efficiency: f64,
    pub material_quality: f64,
}

impl ThermalAnalysis {
    pub fn average(&self) -> f64 {
        (self.heat_sync_quality
            + self.thermal_conductivity
            + self.cooling_efficiency
            + self.material_quality)
            / 4.0
    }
}

/// Sourcing quality indicators, each in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityIndicators {
    pub build_quality: f64,
    pub price_consistency: f64,
    pub source_reliability: f64,
    pub overall: f64,
    pub breakdown: Vec<ScoreEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityAnalysis {
    pub component: ComponentRef,
    pub authenticity_level: AuthenticityLevel,
    /// 0 to 100
    pub score: f64,
    pub confidence: ConfidenceLabel,
    pub weight: WeightAnalysis,
    pub thermal: ThermalAnalysis,
    pub quality: QualityIndicators,
    pub breakdown: Vec<ScoreEntry>,
    pub recommendations: Vec<String>,
}

pub struct AuthenticityAssessor<'a> {
    catalog: &'a Catalog,
    weights: &'a QualityConfig,
}

impl<'a> AuthenticityAssessor<'a> {
    pub fn new(catalog: &'a Catalog, weights: &'a QualityConfig) -> Self {
        Self { catalog, weights }
    }

    /// Expected weight of a component from its category model
    pub fn expected_weight(&self, component: &Component) -> f64 {
        let spec = &component.specification;
        let model = &self.catalog.profile(spec.category).weight;
        let mut expected = model.base_grams;
        match spec.category {
            Category::Processor => {
                expected += spec.cores as f64 * model.grams_per_core
                    + spec.electrical.frequency / 1000.0 * model.grams_per_ghz;
            }
            Category::Memory => {
                expected += spec.capacity_gb * model.grams_per_gb;
            }
            Category::Graphics | Category::PowerSupply => {
                expected += spec.electrical.power * model.grams_per_watt;
            }
            _ => {}
        }
        expected
    }

    /// Compare a measured weight (the declared weight by default) against the model
    pub fn analyze_weight(&self, component: &Component, measured: Option<f64>) -> WeightAnalysis {
        let tolerance = self.catalog.profile(component.category()).weight.tolerance_percent;
        let expected = self.expected_weight(component);
        let measured = measured.unwrap_or(component.specification.physical.weight);

        let variance = if expected > 0.0 {
            (measured - expected) / expected * 100.0
        } else {
            0.0
        };
        let within_tolerance = measured > 0.0 && variance.abs() <= tolerance;

        WeightAnalysis {
            expected_grams: expected,
            measured_grams: measured,
            variance_percent: variance,
            tolerance_percent: tolerance,
            within_tolerance,
        }
    }

    /// Thermal metrics from the category profile and the component's power density
    pub fn assess_heat_sync(&self, component: &Component) -> ThermalAnalysis {
        let profile = &self.catalog.profile(component.category()).thermal;
        let power = component.specification.electrical.power;
        let area = component.specification.physical.dimensions.footprint_cm2();

        let density = if power > 0.0 && area > 0.0 { power / area } else { 0.0 };
        // Share of the category's density budget in use; unknown counts as half
        let load = if density > 0.0 && profile.max_power_density > 0.0 {
            ScoreScale::Unit.clamp(density / profile.max_power_density)
        } else {
            0.5
        };

        ThermalAnalysis {
            power_density: density,
            heat_sync_quality: ScoreScale::Unit.clamp(profile.heat_sync_base * (1.0 - 0.25 * load)),
            thermal_conductivity: ScoreScale::Unit.clamp(profile.conductivity * (1.0 - 0.1 * load)),
            cooling_efficiency: ScoreScale::Unit.clamp(1.0 - load),
            material_quality: ScoreScale::Unit.clamp(profile.material_quality),
        }
    }

    /// Build quality, price consistency and source reliability, weighted
    pub fn quality_indicators(&self, component: &Component) -> QualityIndicators {
        let build_quality = component.authenticity.build_quality();
        let price_consistency = price_consistency(component.pricing.retail, component.pricing.market);
        let source_reliability = self
            .catalog
            .location(&component.market_location)
            .source_reliability;

        let mut score = WeightedScore::new();
        score
            .add("build_quality", self.weights.build_quality_weight, build_quality)
            .add("price_consistency", self.weights.price_consistency_weight, price_consistency)
            .add("source_reliability", self.weights.source_reliability_weight, source_reliability);
        let result = score.finish(ScoreScale::Unit);

        QualityIndicators {
            build_quality,
            price_consistency,
            source_reliability,
            overall: result.score,
            breakdown: result.breakdown,
        }
    }

    /// Additive 0-100 score from the three sub-analyses and the provenance level
    pub fn authenticity_score(
        &self,
        level: AuthenticityLevel,
        weight: &WeightAnalysis,
        thermal: &ThermalAnalysis,
        quality: &QualityIndicators,
    ) -> ScoringResult {
        let weight_delta = if weight.within_tolerance {
            WEIGHT_POINTS
        } else {
            -(weight.variance_percent.abs() * 2.0).min(WEIGHT_POINTS)
        };

        ScoringResult::additive(
            BASE_SCORE,
            &[
                ("weight", WEIGHT_POINTS, weight_delta),
                ("thermal", THERMAL_POINTS, thermal.average() * THERMAL_POINTS),
                ("quality", QUALITY_POINTS, quality.overall * QUALITY_POINTS),
                ("authenticity_level", LEVEL_POINTS, level.score_adjustment()),
            ],
            ScoreScale::Percent,
        )
    }

    /// Full analysis of one component
    pub fn analyze(&self, component: &Component, measured_weight: Option<f64>) -> AuthenticityAnalysis {
        let weight = self.analyze_weight(component, measured_weight);
        let thermal = self.assess_heat_sync(component);
        let quality = self.quality_indicators(component);
        let result = self.authenticity_score(component.authenticity, &weight, &thermal, &quality);
        let recommendations = recommendations(component, &weight, &thermal, &quality);

        tracing::debug!(
            component = %component.id,
            score = result.score,
            within_tolerance = weight.within_tolerance,
            "assessed authenticity"
        );

        AuthenticityAnalysis {
            component: component.summary(),
            authenticity_level: component.authenticity,
            score: result.score,
            confidence: ConfidenceLabel::from_score(result.score),
            weight,
            thermal,
            quality,
            breakdown: result.breakdown,
            recommendations,
        }
    }

    /// Score only, on the 0-100 scale
    pub fn score(&self, component: &Component) -> f64 {
        let weight = self.analyze_weight(component, None);
        let thermal = self.assess_heat_sync(component);
        let quality = self.quality_indicators(component);
        self.authenticity_score(component.authenticity, &weight, &thermal, &quality)
            .score
    }
}

/// Market price relative to retail; far below retail is suspicious, unknown is neutral
fn price_consistency(retail: f64, market: f64) -> f64 {
    if retail <= 0.0 || market <= 0.0 {
        return 0.5;
    }
    let ratio = market / retail;
    if ratio >= CONSISTENT_PRICE_RATIO {
        1.0
    } else {
        ScoreScale::Unit.clamp(1.0 - (CONSISTENT_PRICE_RATIO - ratio) * 2.0)
    }
}

fn recommendations(
    component: &Component,
    weight: &WeightAnalysis,
    thermal: &ThermalAnalysis,
    quality: &QualityIndicators,
) -> Vec<String> {
    let mut out = Vec::new();

    if !weight.within_tolerance {
        if weight.measured_grams <= 0.0 {
            out.push("No weight on record; weigh the part before accepting it".to_string());
        } else {
            out.push(format!(
                "Weight deviates {:+.1}% from the expected {:.0} g (tolerance {:.0}%); inspect construction",
                weight.variance_percent, weight.expected_grams, weight.tolerance_percent
            ));
        }
    }
    if thermal.average() < 0.6 {
        out.push("Thermal characteristics are below category norms; check the heat spreader and materials".to_string());
    }
    if quality.price_consistency < 0.5 {
        out.push("Market price is far below retail; request proof of origin".to_string());
    }
    if quality.source_reliability < 0.6 {
        out.push("Source has low reliability; prefer an authorized distributor".to_string());
    }
    match component.authenticity {
        AuthenticityLevel::Unknown => {
            out.push("Provenance is unknown; request invoices or packaging photos".to_string())
        }
        AuthenticityLevel::FirstCopy | AuthenticityLevel::Generic => out.push(format!(
            "Listed as {}; confirm warranty terms with the seller",
            component.authenticity
        )),
        AuthenticityLevel::Oem => {}
    }

    if out.is_empty() {
        out.push("No anomalies detected".to_string());
    }
    out
}
