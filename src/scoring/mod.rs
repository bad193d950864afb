// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Weighted scoring shared by every engine.
//!
//! ```text
//! score = Σ(weight × achieved) / Σ(weight of applicable criteria)
//! ```
//!
//! Criteria that do not apply to a request are left out of the denominator
//! instead of counting as zero. The result is clamped to the engine's scale.
//!
//! Scale convention: fractions live in `[0, 1]` (`ScoreScale::Unit`);
//! scores that are reported as percentages live in `[0, 100]`
//! (`ScoreScale::Percent`). `ScoreScale::to_unit` and `ScoreScale::from_unit`
//! are the only place the two are converted.

use serde::{Deserialize, Serialize};

/// Bound a score is reported on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreScale {
    /// 0.0 to 1.0
    Unit,
    /// 0.0 to 100.0
    Percent,
}

impl ScoreScale {
    pub fn max(&self) -> f64 {
        match self {
            ScoreScale::Unit => 1.0,
            ScoreScale::Percent => 100.0,
        }
    }

    /// Clamp a value into this scale. NaN maps to 0.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, self.max())
    }

    /// Convert a value on this scale to a unit fraction
    pub fn to_unit(&self, value: f64) -> f64 {
        ScoreScale::Unit.clamp(self.clamp(value) / self.max())
    }

    /// Convert a unit fraction to this scale
    pub fn from_unit(&self, fraction: f64) -> f64 {
        self.clamp(ScoreScale::Unit.clamp(fraction) * self.max())
    }
}

/// One labeled line of a score breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub label: String,
    pub weight: f64,
    /// Fraction of the weight achieved (signed for additive adjustments)
    pub achieved: f64,
    /// Points this entry moved the score, on the result's scale
    pub contribution: f64,
    pub applicable: bool,
}

/// A bounded score with its breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub score: f64,
    pub scale: ScoreScale,
    pub breakdown: Vec<ScoreEntry>,
}

impl ScoringResult {
    /// The score as a unit fraction
    pub fn unit_score(&self) -> f64 {
        self.scale.to_unit(self.score)
    }

    /// Look up a breakdown entry by label
    pub fn entry(&self, label: &str) -> Option<&ScoreEntry> {
        self.breakdown.iter().find(|e| e.label == label)
    }

    /// Build an additive score: `base + Σ adjustments`, clamped to the scale.
    ///
    /// Each adjustment is `(label, max_magnitude, delta)`.
    pub fn additive(base: f64, adjustments: &[(&str, f64, f64)], scale: ScoreScale) -> Self {
        let mut breakdown = vec![ScoreEntry {
            label: "base".to_string(),
            weight: base,
            achieved: 1.0,
            contribution: base,
            applicable: true,
        }];
        let mut total = base;

        for (label, magnitude, delta) in adjustments {
            total += delta;
            breakdown.push(ScoreEntry {
                label: (*label).to_string(),
                weight: *magnitude,
                achieved: if *magnitude > 0.0 { delta / magnitude } else { 0.0 },
                contribution: *delta,
                applicable: true,
            });
        }

        Self {
            score: scale.clamp(total),
            scale,
            breakdown,
        }
    }
}

#[derive(Debug, Clone)]
struct Criterion {
    label: String,
    weight: f64,
    achieved: f64,
    applicable: bool,
}

/// Accumulator for a normalized weighted score
#[derive(Debug, Clone, Default)]
pub struct WeightedScore {
    criteria: Vec<Criterion>,
}

impl WeightedScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an applicable criterion. `achieved` is clamped to `[0, 1]`.
    pub fn add(&mut self, label: impl Into<String>, weight: f64, achieved: f64) -> &mut Self {
        self.criteria.push(Criterion {
            label: label.into(),
            weight: weight.max(0.0),
            achieved: ScoreScale::Unit.clamp(achieved),
            applicable: true,
        });
        self
    }

    /// Record a criterion that does not apply; it is excluded from the denominator.
    pub fn skip(&mut self, label: impl Into<String>, weight: f64) -> &mut Self {
        self.criteria.push(Criterion {
            label: label.into(),
            weight: weight.max(0.0),
            achieved: 0.0,
            applicable: false,
        });
        self
    }

    /// Add a criterion only when `achieved` is `Some`, otherwise skip it.
    pub fn add_if(
        &mut self,
        label: impl Into<String>,
        weight: f64,
        achieved: Option<f64>,
    ) -> &mut Self {
        match achieved {
            Some(value) => self.add(label, weight, value),
            None => self.skip(label, weight),
        }
    }

    /// Sum of applicable weights
    pub fn applicable_weight(&self) -> f64 {
        self.criteria
            .iter()
            .filter(|c| c.applicable)
            .map(|c| c.weight)
            .sum()
    }

    /// Normalized score in `[0, 1]`; 0 when nothing applies.
    pub fn fraction(&self) -> f64 {
        let denominator = self.applicable_weight();
        if denominator <= 0.0 {
            return 0.0;
        }
        let numerator: f64 = self
            .criteria
            .iter()
            .filter(|c| c.applicable)
            .map(|c| c.weight * c.achieved)
            .sum();
        ScoreScale::Unit.clamp(numerator / denominator)
    }

    /// Finish on the given scale
    pub fn finish(&self, scale: ScoreScale) -> ScoringResult {
        let denominator = self.applicable_weight();
        let breakdown = self
            .criteria
            .iter()
            .map(|c| {
                let contribution = if c.applicable && denominator > 0.0 {
                    scale.from_unit(c.weight * c.achieved / denominator)
                } else {
                    0.0
                };
                ScoreEntry {
                    label: c.label.clone(),
                    weight: c.weight,
                    achieved: c.achieved,
                    contribution,
                    applicable: c.applicable,
                }
            })
            .collect();

        ScoringResult {
            score: scale.from_unit(self.fraction()),
            scale,
            breakdown,
        }
    }
}

/// Check that a set of weights sums to `total` within a small tolerance.
pub fn weights_sum_to(weights: &[f64], total: f64) -> bool {
    let sum: f64 = weights.iter().sum();
    (sum - total).abs() <= 1e-3
}

/// Relative error of `actual` against `expected`; 0 when both are zero.
pub fn relative_error(expected: f64, actual: f64) -> f64 {
    if expected == 0.0 {
        return if actual == 0.0 { 0.0 } else { 1.0 };
    }
    ((actual - expected) / expected).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_normalizes_over_applicable_weight() {
        let mut score = WeightedScore::new();
        score.add("a", 0.25, 1.0).add("b", 0.35, 0.5).skip("c", 0.40);

        // (0.25 + 0.175) / 0.60
        assert!((score.fraction() - 0.425 / 0.60).abs() < 1e-9);
    }

    #[test]
    fn test_skipped_criteria_are_not_zero_scored() {
        let mut with_skip = WeightedScore::new();
        with_skip.add("a", 0.5, 1.0).skip("b", 0.5);

        let mut with_zero = WeightedScore::new();
        with_zero.add("a", 0.5, 1.0).add("b", 0.5, 0.0);

        assert_eq!(with_skip.fraction(), 1.0);
        assert_eq!(with_zero.fraction(), 0.5);
    }

    #[test]
    fn test_empty_score_is_zero() {
        let score = WeightedScore::new();
        assert_eq!(score.fraction(), 0.0);

        let mut all_skipped = WeightedScore::new();
        all_skipped.skip("a", 1.0);
        assert_eq!(all_skipped.fraction(), 0.0);
    }

    #[test]
    fn test_achieved_is_clamped() {
        let mut score = WeightedScore::new();
        score.add("over", 1.0, 3.0);
        assert_eq!(score.fraction(), 1.0);

        let mut score = WeightedScore::new();
        score.add("under", 1.0, -2.0);
        assert_eq!(score.fraction(), 0.0);
    }

    #[test]
    fn test_finish_percent_contributions_sum_to_score() {
        let mut score = WeightedScore::new();
        score
            .add("category", 0.4, 1.0)
            .add("voltage", 0.3, 0.8)
            .add("power", 0.2, 0.5)
            .add("interface", 0.1, 1.0);

        let result = score.finish(ScoreScale::Percent);
        let sum: f64 = result.breakdown.iter().map(|e| e.contribution).sum();
        assert!((result.score - sum).abs() < 1e-9);
        assert!((result.score - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_if() {
        let mut score = WeightedScore::new();
        score.add_if("known", 1.0, Some(0.5)).add_if("unknown", 1.0, None);
        assert_eq!(score.fraction(), 0.5);

        let result = score.finish(ScoreScale::Unit);
        assert!(!result.entry("unknown").unwrap().applicable);
    }

    #[test]
    fn test_scale_conversion() {
        assert_eq!(ScoreScale::Percent.to_unit(85.0), 0.85);
        assert_eq!(ScoreScale::Percent.from_unit(0.5), 50.0);
        assert_eq!(ScoreScale::Percent.clamp(140.0), 100.0);
        assert_eq!(ScoreScale::Unit.clamp(-0.2), 0.0);
        assert_eq!(ScoreScale::Unit.clamp(f64::NAN), 0.0);
    }

    #[test]
    fn test_additive_score_clamps() {
        let result = ScoringResult::additive(
            50.0,
            &[("weight", 30.0, 30.0), ("level", 20.0, 20.0), ("extra", 25.0, 25.0)],
            ScoreScale::Percent,
        );
        assert_eq!(result.score, 100.0);
        assert_eq!(result.breakdown.len(), 4);
        assert_eq!(result.entry("level").unwrap().achieved, 1.0);

        let result = ScoringResult::additive(
            50.0,
            &[("weight", 30.0, -30.0), ("level", 20.0, -20.0), ("more", 30.0, -30.0)],
            ScoreScale::Percent,
        );
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_weights_sum_to() {
        assert!(weights_sum_to(&[0.25, 0.35, 0.40], 1.0));
        assert!(!weights_sum_to(&[0.5, 0.5, 0.5], 1.0));
        assert!(weights_sum_to(&[40.0, 30.0, 20.0, 10.0], 100.0));
    }

    #[test]
    fn test_relative_error() {
        assert!((relative_error(100.0, 110.0) - 0.1).abs() < 1e-9);
        assert!((relative_error(100.0, 90.0) - 0.1).abs() < 1e-9);
        assert_eq!(relative_error(0.0, 0.0), 0.0);
        assert_eq!(relative_error(0.0, 5.0), 1.0);
    }
}
