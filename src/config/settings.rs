// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for partscout
//!
//! Scoring weights and engine constants, loaded from
//! ~/.partscout/settings.json. Every section falls back to built-in defaults.

use serde::{Deserialize, Serialize};

mod io;
mod validation;

/// Main settings structure, stored in ~/.partscout/settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Inventory matching weights and thresholds
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Adapter compatibility weights
    #[serde(default)]
    pub adapters: AdapterConfig,

    /// Quality-indicator weights used by the authenticity assessor
    #[serde(default)]
    pub quality: QualityConfig,

    /// Workaround composition and safety constants
    #[serde(default)]
    pub workarounds: WorkaroundConfig,

    /// Price negotiation limits
    #[serde(default)]
    pub negotiation: NegotiationConfig,
}

/// Inventory matching configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default = "default_match_category_weight")]
    pub category_weight: f64,

    #[serde(default = "default_match_electrical_weight")]
    pub electrical_weight: f64,

    #[serde(default = "default_match_compatibility_weight")]
    pub compatibility_weight: f64,

    /// Relative tolerance for electrical filtering (0.10 = 10%)
    #[serde(default = "default_tolerance")]
    pub electrical_tolerance: f64,

    /// Minimum compatibility score for an alternative suggestion
    #[serde(default = "default_alternative_threshold")]
    pub alternative_threshold: f64,

    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            category_weight: default_match_category_weight(),
            electrical_weight: default_match_electrical_weight(),
            compatibility_weight: default_match_compatibility_weight(),
            electrical_tolerance: default_tolerance(),
            alternative_threshold: default_alternative_threshold(),
            max_alternatives: default_max_alternatives(),
        }
    }
}

/// Adapter compatibility weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(default = "default_adapter_category_weight")]
    pub category_weight: f64,

    #[serde(default = "default_adapter_voltage_weight")]
    pub voltage_weight: f64,

    #[serde(default = "default_adapter_power_weight")]
    pub power_weight: f64,

    #[serde(default = "default_adapter_interface_weight")]
    pub interface_weight: f64,

    /// Reliability multiplier when the power requirement is unknown
    #[serde(default = "default_uncertain_power_factor")]
    pub uncertain_power_factor: f64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            category_weight: default_adapter_category_weight(),
            voltage_weight: default_adapter_voltage_weight(),
            power_weight: default_adapter_power_weight(),
            interface_weight: default_adapter_interface_weight(),
            uncertain_power_factor: default_uncertain_power_factor(),
        }
    }
}

/// Quality-indicator weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityConfig {
    #[serde(default = "default_build_quality_weight")]
    pub build_quality_weight: f64,

    #[serde(default = "default_price_consistency_weight")]
    pub price_consistency_weight: f64,

    #[serde(default = "default_source_reliability_weight")]
    pub source_reliability_weight: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            build_quality_weight: default_build_quality_weight(),
            price_consistency_weight: default_price_consistency_weight(),
            source_reliability_weight: default_source_reliability_weight(),
        }
    }
}

/// Workaround composition and safety constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkaroundConfig {
    /// Fixed reliability loss of any multi-part assembly
    #[serde(default = "default_degradation")]
    pub degradation: f64,

    #[serde(default = "default_tools_cost")]
    pub tools_cost: f64,

    #[serde(default = "default_materials_cost")]
    pub materials_cost: f64,

    /// Amperes
    #[serde(default = "default_max_total_current")]
    pub max_total_current: f64,

    #[serde(default = "default_max_voltage_ratio")]
    pub max_voltage_ratio: f64,

    /// Heat each cooling component can remove
    #[serde(default = "default_watts_per_cooler")]
    pub watts_per_cooler: f64,

    /// Grams
    #[serde(default = "default_max_total_weight")]
    pub max_total_weight: f64,
}

impl Default for WorkaroundConfig {
    fn default() -> Self {
        Self {
            degradation: default_degradation(),
            tools_cost: default_tools_cost(),
            materials_cost: default_materials_cost(),
            max_total_current: default_max_total_current(),
            max_voltage_ratio: default_max_voltage_ratio(),
            watts_per_cooler: default_watts_per_cooler(),
            max_total_weight: default_max_total_weight(),
        }
    }
}

/// Price negotiation limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationConfig {
    /// Cap on the combined discount, in percent
    #[serde(default = "default_max_discount_percent")]
    pub max_discount_percent: f64,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            max_discount_percent: default_max_discount_percent(),
        }
    }
}

fn default_match_category_weight() -> f64 {
    0.25
}

fn default_match_electrical_weight() -> f64 {
    0.35
}

fn default_match_compatibility_weight() -> f64 {
    0.40
}

fn default_tolerance() -> f64 {
    0.10
}

fn default_alternative_threshold() -> f64 {
    0.5
}

fn default_max_alternatives() -> usize {
    5
}

fn default_adapter_category_weight() -> f64 {
    0.40
}

fn default_adapter_voltage_weight() -> f64 {
    0.30
}

fn default_adapter_power_weight() -> f64 {
    0.20
}

fn default_adapter_interface_weight() -> f64 {
    0.10
}

fn default_uncertain_power_factor() -> f64 {
    0.9
}

fn default_build_quality_weight() -> f64 {
    0.40
}

fn default_price_consistency_weight() -> f64 {
    0.35
}

fn default_source_reliability_weight() -> f64 {
    0.25
}

fn default_degradation() -> f64 {
    0.9
}

fn default_tools_cost() -> f64 {
    25.0
}

fn default_materials_cost() -> f64 {
    15.0
}

fn default_max_total_current() -> f64 {
    50.0
}

fn default_max_voltage_ratio() -> f64 {
    2.0
}

fn default_watts_per_cooler() -> f64 {
    100.0
}

fn default_max_total_weight() -> f64 {
    5000.0
}

fn default_max_discount_percent() -> f64 {
    50.0
}
