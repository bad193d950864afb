// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Per-category reference tables and sourcing tables

use serde::{Deserialize, Serialize};

use crate::model::Category;

/// Expected physical weight model for a category (grams)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightProfile {
    pub base_grams: f64,
    pub grams_per_core: f64,
    pub grams_per_ghz: f64,
    pub grams_per_gb: f64,
    pub grams_per_watt: f64,
    /// Allowed deviation from the expected weight, in percent
    pub tolerance_percent: f64,
}

/// Reference thermal characteristics for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermalProfile {
    pub heat_sync_base: f64,
    pub conductivity: f64,
    pub material_quality: f64,
    /// Highest expected power density, W/cm²
    pub max_power_density: f64,
}

/// Bulk discount threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityTier {
    pub min_quantity: u32,
    pub discount_percent: f64,
}

/// Gray-market risk multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub quality: f64,
    pub warranty: f64,
    pub compatibility: f64,
}

/// Everything the engines know about a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProfile {
    pub category: Category,
    pub weight: WeightProfile,
    pub thermal: ThermalProfile,
    /// Ascending by minimum quantity; the first tier starts at 1
    pub quantity_tiers: Vec<QuantityTier>,
    /// Market-condition adjustment in percent, may be negative
    pub market_adjustment_percent: f64,
    /// Typical gray-market discount against retail, in percent
    pub gray_discount_percent: f64,
    pub base_delivery_days: f64,
    pub risk: RiskFactors,
}

impl CategoryProfile {
    /// Highest tier whose minimum quantity is at or below `quantity`
    pub fn tier_for(&self, quantity: u32) -> Option<&QuantityTier> {
        self.quantity_tiers
            .iter()
            .filter(|t| t.min_quantity <= quantity)
            .max_by_key(|t| t.min_quantity)
    }

    /// Lowest tier above `quantity`
    pub fn next_tier(&self, quantity: u32) -> Option<&QuantityTier> {
        self.quantity_tiers
            .iter()
            .filter(|t| t.min_quantity > quantity)
            .min_by_key(|t| t.min_quantity)
    }
}

fn tiers(points: &[(u32, f64)]) -> Vec<QuantityTier> {
    points
        .iter()
        .map(|(min_quantity, discount_percent)| QuantityTier {
            min_quantity: *min_quantity,
            discount_percent: *discount_percent,
        })
        .collect()
}

fn weight(base: f64, tolerance: f64) -> WeightProfile {
    WeightProfile {
        base_grams: base,
        grams_per_core: 0.0,
        grams_per_ghz: 0.0,
        grams_per_gb: 0.0,
        grams_per_watt: 0.0,
        tolerance_percent: tolerance,
    }
}

fn thermal(heat_sync_base: f64, conductivity: f64, material_quality: f64, max_power_density: f64) -> ThermalProfile {
    ThermalProfile {
        heat_sync_base,
        conductivity,
        material_quality,
        max_power_density,
    }
}

fn risk(quality: f64, warranty: f64, compatibility: f64) -> RiskFactors {
    RiskFactors {
        quality,
        warranty,
        compatibility,
    }
}

/// Built-in profile for a category
pub fn builtin_profile(category: Category) -> CategoryProfile {
    match category {
        Category::Processor => CategoryProfile {
            category,
            weight: WeightProfile {
                grams_per_core: 1.5,
                grams_per_ghz: 4.0,
                ..weight(35.0, 10.0)
            },
            thermal: thermal(0.9, 0.85, 0.9, 60.0),
            quantity_tiers: tiers(&[(1, 0.0), (5, 5.0), (10, 10.0), (25, 20.0), (50, 30.0), (100, 35.0)]),
            market_adjustment_percent: 2.0,
            gray_discount_percent: 15.0,
            base_delivery_days: 5.0,
            risk: risk(1.2, 1.0, 1.3),
        },
        Category::Memory => CategoryProfile {
            category,
            weight: WeightProfile {
                grams_per_gb: 0.9,
                ..weight(25.0, 12.0)
            },
            thermal: thermal(0.8, 0.75, 0.85, 5.0),
            quantity_tiers: tiers(&[(1, 0.0), (10, 8.0), (25, 15.0), (50, 22.0), (100, 28.0)]),
            market_adjustment_percent: 3.0,
            gray_discount_percent: 20.0,
            base_delivery_days: 4.0,
            risk: risk(1.5, 1.0, 0.8),
        },
        Category::Graphics => CategoryProfile {
            category,
            weight: WeightProfile {
                grams_per_watt: 3.0,
                ..weight(700.0, 15.0)
            },
            thermal: thermal(0.85, 0.8, 0.85, 2.0),
            quantity_tiers: tiers(&[(1, 0.0), (3, 3.0), (10, 8.0), (25, 15.0), (50, 20.0)]),
            market_adjustment_percent: -3.0,
            gray_discount_percent: 10.0,
            base_delivery_days: 7.0,
            risk: risk(1.8, 1.1, 1.2),
        },
        Category::Storage => CategoryProfile {
            category,
            weight: weight(55.0, 15.0),
            thermal: thermal(0.8, 0.8, 0.8, 1.5),
            quantity_tiers: tiers(&[(1, 0.0), (10, 6.0), (50, 15.0), (100, 25.0)]),
            market_adjustment_percent: 4.0,
            gray_discount_percent: 18.0,
            base_delivery_days: 3.0,
            risk: risk(1.3, 1.0, 0.7),
        },
        Category::Motherboard => CategoryProfile {
            category,
            weight: weight(850.0, 15.0),
            thermal: thermal(0.75, 0.7, 0.8, 0.5),
            quantity_tiers: tiers(&[(1, 0.0), (5, 4.0), (20, 10.0), (50, 18.0)]),
            market_adjustment_percent: 1.0,
            gray_discount_percent: 12.0,
            base_delivery_days: 6.0,
            risk: risk(1.2, 1.0, 1.5),
        },
        Category::PowerSupply => CategoryProfile {
            category,
            weight: WeightProfile {
                grams_per_watt: 1.0,
                ..weight(1200.0, 20.0)
            },
            thermal: thermal(0.7, 0.7, 0.75, 0.6),
            quantity_tiers: tiers(&[(1, 0.0), (10, 7.0), (25, 12.0), (50, 20.0)]),
            market_adjustment_percent: 2.0,
            gray_discount_percent: 15.0,
            base_delivery_days: 5.0,
            risk: risk(1.4, 1.0, 0.6),
        },
        Category::Cooling => CategoryProfile {
            category,
            weight: weight(150.0, 25.0),
            thermal: thermal(0.95, 0.9, 0.85, 2.0),
            quantity_tiers: tiers(&[(1, 0.0), (10, 8.0), (50, 18.0)]),
            market_adjustment_percent: 5.0,
            gray_discount_percent: 25.0,
            base_delivery_days: 3.0,
            risk: risk(1.1, 0.9, 0.8),
        },
        Category::Networking => CategoryProfile {
            category,
            weight: weight(60.0, 15.0),
            thermal: thermal(0.8, 0.75, 0.8, 1.0),
            quantity_tiers: tiers(&[(1, 0.0), (10, 10.0), (50, 20.0), (100, 30.0)]),
            market_adjustment_percent: 3.0,
            gray_discount_percent: 20.0,
            base_delivery_days: 4.0,
            risk: risk(1.0, 1.0, 1.1),
        },
        Category::Peripherals => CategoryProfile {
            category,
            weight: weight(120.0, 20.0),
            thermal: thermal(0.7, 0.7, 0.7, 0.5),
            quantity_tiers: tiers(&[(1, 0.0), (20, 10.0), (100, 25.0)]),
            market_adjustment_percent: 5.0,
            gray_discount_percent: 25.0,
            base_delivery_days: 3.0,
            risk: risk(1.0, 0.9, 0.9),
        },
    }
}

/// Baseline gray-market risks before category factors
pub const BASE_QUALITY_RISK: f64 = 0.3;
pub const BASE_WARRANTY_RISK: f64 = 0.8;
pub const BASE_COMPATIBILITY_RISK: f64 = 0.2;

/// Seasonal price-adjustment percent, January first. All values are non-negative.
pub const SEASONAL_ADJUSTMENTS: [f64; 12] = [5.0, 3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 2.0, 0.0, 1.0, 0.0, 0.0];

/// Seasonal adjustment for a month (1-12); out-of-range months get none
pub fn seasonal_adjustment(month: u32) -> f64 {
    if (1..=12).contains(&month) {
        SEASONAL_ADJUSTMENTS[(month - 1) as usize]
    } else {
        0.0
    }
}

/// Negotiation profile of a known vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProfile {
    pub id: String,
    pub name: String,
    /// Extra discount the vendor usually concedes, in percent
    pub bonus_percent: f64,
}

pub fn builtin_vendors() -> Vec<VendorProfile> {
    [
        ("techsource-direct", "TechSource Direct", 5.0),
        ("global-parts-exchange", "Global Parts Exchange", 3.0),
        ("shenzhen-components", "Shenzhen Components Co.", 4.0),
        ("budget-bits", "Budget Bits", 2.0),
        ("certified-refurb", "Certified Refurb", 1.5),
    ]
    .iter()
    .map(|(id, name, bonus)| VendorProfile {
        id: (*id).to_string(),
        name: (*name).to_string(),
        bonus_percent: *bonus,
    })
    .collect()
}

/// Sourcing characteristics of a market location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketLocation {
    pub id: String,
    /// 0.0 to 1.0
    pub source_reliability: f64,
    /// Applied to delivery time estimates
    pub supply_chain_multiplier: f64,
}

impl MarketLocation {
    /// Profile used for locations that are not in the table
    pub fn unknown(id: &str) -> Self {
        Self {
            id: id.to_string(),
            source_reliability: 0.5,
            supply_chain_multiplier: 1.0,
        }
    }
}

pub fn builtin_locations() -> Vec<MarketLocation> {
    [
        ("authorized-distributor-us", 1.0, 1.0),
        ("taipei-guanghua", 0.75, 1.0),
        ("shenzhen-huaqiangbei", 0.6, 0.9),
        ("hong-kong-wholesale", 0.65, 1.1),
        ("refurbisher-eu", 0.7, 1.15),
        ("online-marketplace", 0.5, 1.2),
    ]
    .iter()
    .map(|(id, reliability, multiplier)| MarketLocation {
        id: (*id).to_string(),
        source_reliability: *reliability,
        supply_chain_multiplier: *multiplier,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_profile() {
        for category in Category::ALL {
            let profile = builtin_profile(category);
            assert_eq!(profile.category, category);
            assert!(profile.weight.base_grams > 0.0);
            assert!(profile.weight.tolerance_percent > 0.0);
            assert_eq!(profile.quantity_tiers[0].min_quantity, 1);
            assert_eq!(profile.quantity_tiers[0].discount_percent, 0.0);
        }
    }

    #[test]
    fn test_tiers_ascend() {
        for category in Category::ALL {
            let profile = builtin_profile(category);
            for pair in profile.quantity_tiers.windows(2) {
                assert!(pair[0].min_quantity < pair[1].min_quantity);
                assert!(pair[0].discount_percent < pair[1].discount_percent);
            }
        }
    }

    #[test]
    fn test_processor_tier_lookup() {
        let profile = builtin_profile(Category::Processor);
        assert_eq!(profile.tier_for(1).unwrap().discount_percent, 0.0);
        assert_eq!(profile.tier_for(10).unwrap().discount_percent, 10.0);
        assert_eq!(profile.tier_for(24).unwrap().discount_percent, 10.0);
        assert_eq!(profile.tier_for(500).unwrap().discount_percent, 35.0);
        assert!(profile.tier_for(0).is_none());
        assert_eq!(profile.next_tier(10).unwrap().min_quantity, 25);
        assert!(profile.next_tier(100).is_none());
    }

    #[test]
    fn test_seasonal_adjustments_non_negative() {
        assert!(SEASONAL_ADJUSTMENTS.iter().all(|v| *v >= 0.0));
        assert_eq!(seasonal_adjustment(1), 5.0);
        assert_eq!(seasonal_adjustment(12), 0.0);
        assert_eq!(seasonal_adjustment(13), 0.0);
        assert_eq!(seasonal_adjustment(0), 0.0);
    }

    #[test]
    fn test_location_tables() {
        let locations = builtin_locations();
        assert!(locations
            .iter()
            .all(|l| (0.0..=1.0).contains(&l.source_reliability)));
        assert_eq!(MarketLocation::unknown("mars").source_reliability, 0.5);
    }
}
