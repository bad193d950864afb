// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{Result, ScoutError};
use crate::scoring::weights_sum_to;

use super::Settings;

/// Reject negative and non-finite values.
fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScoutError::Config(format!(
            "{} must be a finite, non-negative number (got {})",
            name, value
        )))
    }
}

/// Reject zero as well.
fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScoutError::Config(format!(
            "{} must be a finite, positive number (got {})",
            name, value
        )))
    }
}

impl Settings {
    /// Check weight sums and value ranges.
    pub fn validate(&self) -> Result<()> {
        let m = &self.matching;
        non_negative("matching.category_weight", m.category_weight)?;
        non_negative("matching.electrical_weight", m.electrical_weight)?;
        non_negative("matching.compatibility_weight", m.compatibility_weight)?;
        if !weights_sum_to(&[m.category_weight, m.electrical_weight, m.compatibility_weight], 1.0) {
            return Err(ScoutError::Config(
                "matching weights must sum to 1.0".to_string(),
            ));
        }
        if !(m.electrical_tolerance > 0.0 && m.electrical_tolerance <= 1.0) {
            return Err(ScoutError::Config(
                "matching.electrical_tolerance must be in (0, 1]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&m.alternative_threshold) {
            return Err(ScoutError::Config(
                "matching.alternative_threshold must be in [0, 1]".to_string(),
            ));
        }

        let a = &self.adapters;
        non_negative("adapters.category_weight", a.category_weight)?;
        non_negative("adapters.voltage_weight", a.voltage_weight)?;
        non_negative("adapters.power_weight", a.power_weight)?;
        non_negative("adapters.interface_weight", a.interface_weight)?;
        if !weights_sum_to(
            &[a.category_weight, a.voltage_weight, a.power_weight, a.interface_weight],
            1.0,
        ) {
            return Err(ScoutError::Config(
                "adapter weights must sum to 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&a.uncertain_power_factor) {
            return Err(ScoutError::Config(
                "adapters.uncertain_power_factor must be in [0, 1]".to_string(),
            ));
        }

        let q = &self.quality;
        non_negative("quality.build_quality_weight", q.build_quality_weight)?;
        non_negative("quality.price_consistency_weight", q.price_consistency_weight)?;
        non_negative("quality.source_reliability_weight", q.source_reliability_weight)?;
        if !weights_sum_to(
            &[q.build_quality_weight, q.price_consistency_weight, q.source_reliability_weight],
            1.0,
        ) {
            return Err(ScoutError::Config(
                "quality weights must sum to 1.0".to_string(),
            ));
        }

        let w = &self.workarounds;
        if !(w.degradation > 0.0 && w.degradation <= 1.0) {
            return Err(ScoutError::Config(
                "workarounds.degradation must be in (0, 1]".to_string(),
            ));
        }
        non_negative("workarounds.tools_cost", w.tools_cost)?;
        non_negative("workarounds.materials_cost", w.materials_cost)?;
        positive("workarounds.max_total_current", w.max_total_current)?;
        positive("workarounds.watts_per_cooler", w.watts_per_cooler)?;
        positive("workarounds.max_total_weight", w.max_total_weight)?;
        if !(w.max_voltage_ratio.is_finite() && w.max_voltage_ratio >= 1.0) {
            return Err(ScoutError::Config(
                "workarounds.max_voltage_ratio must be at least 1.0".to_string(),
            ));
        }

        if !(0.0..=100.0).contains(&self.negotiation.max_discount_percent) {
            return Err(ScoutError::Config(
                "negotiation.max_discount_percent must be in [0, 100]".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_unbalanced_matching_weights_rejected() {
        let mut settings = Settings::default();
        settings.matching.category_weight = 0.5;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("matching weights"));
    }

    #[test]
    fn test_unbalanced_adapter_weights_rejected() {
        let mut settings = Settings::default();
        settings.adapters.interface_weight = 0.3;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_discount_cap_range() {
        let mut settings = Settings::default();
        settings.negotiation.max_discount_percent = 120.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_negative_weight_rejected_even_when_sum_is_one() {
        let mut settings = Settings::default();
        settings.quality.build_quality_weight = -0.10;
        settings.quality.price_consistency_weight = 0.85;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("quality.build_quality_weight"));
    }

    #[test]
    fn test_workaround_limits_must_be_positive() {
        let mut settings = Settings::default();
        settings.workarounds.watts_per_cooler = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.workarounds.tools_cost = -5.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.workarounds.max_voltage_ratio = f64::NAN;
        assert!(settings.validate().is_err());
    }
}
