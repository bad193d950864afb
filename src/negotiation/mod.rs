// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Price negotiation
//!
//! A discount is the sum of four percentages: the quantity tier, the
//! category's market adjustment, the vendor's usual concession and a seasonal
//! adjustment. The sum is capped and the breakdown is always reported.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::catalog::profiles::seasonal_adjustment;
use crate::catalog::Catalog;
use crate::config::NegotiationConfig;
use crate::model::{Component, ComponentRef};

/// Current month in UTC, 1-12
pub fn current_month() -> u32 {
    chrono::Utc::now().month()
}

/// The four discount sources, each in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountBreakdown {
    pub quantity_tier: f64,
    pub market_adjustment: f64,
    pub vendor_bonus: f64,
    pub seasonal_adjustment: f64,
}

impl DiscountBreakdown {
    pub fn sum(&self) -> f64 {
        self.quantity_tier + self.market_adjustment + self.vendor_bonus + self.seasonal_adjustment
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextTier {
    pub min_quantity: u32,
    pub units_needed: u32,
    pub discount_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityPlan {
    pub budget: f64,
    /// 0 when the budget does not cover one unit
    pub quantity: u32,
    pub unit_price: f64,
    pub total_cost: f64,
    pub discount_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationResult {
    pub component: ComponentRef,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    pub month: u32,
    pub base_price: f64,
    pub breakdown: DiscountBreakdown,
    pub capped: bool,
    /// Total discount in percent, within `[0, cap]`
    pub discount_percentage: f64,
    /// Unit price after discount
    pub recommended_price: f64,
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<NextTier>,
    pub talking_points: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization: Option<QuantityPlan>,
}

pub struct PriceNegotiator<'a> {
    catalog: &'a Catalog,
    config: &'a NegotiationConfig,
}

impl<'a> PriceNegotiator<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a NegotiationConfig) -> Self {
        Self { catalog, config }
    }

    /// Discount for buying `quantity` units, optionally from a known vendor
    pub fn calculate_discount(
        &self,
        component: &Component,
        quantity: u32,
        vendor_id: Option<&str>,
        month: u32,
    ) -> NegotiationResult {
        let profile = self.catalog.profile(component.category());
        let base_price = component.pricing.base_price();
        let breakdown = self.breakdown(component, quantity, vendor_id, month);
        let uncapped = breakdown.sum();
        let discount_percentage = uncapped.clamp(0.0, self.config.max_discount_percent);
        let recommended_price = base_price * (1.0 - discount_percentage / 100.0);

        let next_tier = profile.next_tier(quantity).map(|tier| NextTier {
            min_quantity: tier.min_quantity,
            units_needed: tier.min_quantity - quantity,
            discount_percent: tier.discount_percent,
        });

        let mut result = NegotiationResult {
            component: component.summary(),
            quantity,
            vendor_id: vendor_id.map(str::to_string),
            month,
            base_price,
            breakdown,
            capped: uncapped > self.config.max_discount_percent,
            discount_percentage,
            recommended_price,
            total_price: recommended_price * quantity as f64,
            next_tier,
            talking_points: Vec::new(),
            optimization: None,
        };
        result.talking_points = self.talking_points(component, &result);

        tracing::debug!(
            component = %component.id,
            quantity,
            discount = discount_percentage,
            capped = result.capped,
            "calculated discount"
        );
        result
    }

    /// Largest quantity a budget buys across the tier boundaries; ties go to the lower unit price
    pub fn optimize_quantity(
        &self,
        component: &Component,
        budget: f64,
        vendor_id: Option<&str>,
        month: u32,
    ) -> QuantityPlan {
        let base_price = component.pricing.base_price();
        let empty = QuantityPlan {
            budget,
            quantity: 0,
            unit_price: base_price,
            total_cost: 0.0,
            discount_percentage: 0.0,
        };
        if base_price <= 0.0 || budget <= 0.0 {
            return empty;
        }

        let profile = self.catalog.profile(component.category());
        let mut boundaries: Vec<u32> = profile.quantity_tiers.iter().map(|t| t.min_quantity.max(1)).collect();
        if boundaries.is_empty() {
            boundaries.push(1);
        }

        let mut best = empty;
        for min_quantity in boundaries {
            let at_boundary = self.unit_price(component, min_quantity, vendor_id, month);
            if at_boundary <= 0.0 {
                continue;
            }
            let affordable = (budget / at_boundary).floor();
            if affordable < min_quantity as f64 {
                continue;
            }
            let quantity = affordable.min(u32::MAX as f64) as u32;
            // More units can only reach a deeper tier, so the price never rises
            let (discount, unit_price) = self.price_at(component, quantity, vendor_id, month);
            let better = quantity > best.quantity
                || (quantity == best.quantity && unit_price < best.unit_price);
            if better {
                best = QuantityPlan {
                    budget,
                    quantity,
                    unit_price,
                    total_cost: unit_price * quantity as f64,
                    discount_percentage: discount,
                };
            }
        }

        tracing::debug!(
            component = %component.id,
            budget,
            quantity = best.quantity,
            "optimized quantity"
        );
        best
    }

    fn breakdown(&self, component: &Component, quantity: u32, vendor_id: Option<&str>, month: u32) -> DiscountBreakdown {
        let profile = self.catalog.profile(component.category());
        let vendor_bonus = match vendor_id {
            Some(id) => match self.catalog.vendor(id) {
                Some(vendor) => vendor.bonus_percent,
                None => {
                    tracing::warn!(vendor = id, "unknown vendor, no bonus applied");
                    0.0
                }
            },
            None => 0.0,
        };
        DiscountBreakdown {
            quantity_tier: profile.tier_for(quantity).map_or(0.0, |t| t.discount_percent),
            market_adjustment: profile.market_adjustment_percent,
            vendor_bonus,
            seasonal_adjustment: seasonal_adjustment(month),
        }
    }

    fn price_at(&self, component: &Component, quantity: u32, vendor_id: Option<&str>, month: u32) -> (f64, f64) {
        let discount = self
            .breakdown(component, quantity, vendor_id, month)
            .sum()
            .clamp(0.0, self.config.max_discount_percent);
        (discount, component.pricing.base_price() * (1.0 - discount / 100.0))
    }

    fn unit_price(&self, component: &Component, quantity: u32, vendor_id: Option<&str>, month: u32) -> f64 {
        self.price_at(component, quantity, vendor_id, month).1
    }

    fn talking_points(&self, component: &Component, result: &NegotiationResult) -> Vec<String> {
        let category = component.category();
        let b = &result.breakdown;
        let mut points = Vec::new();

        if b.quantity_tier > 0.0 {
            points.push(format!(
                "Volume of {} units qualifies for the {:.0}% quantity tier",
                result.quantity, b.quantity_tier
            ));
        }
        if let Some(next) = &result.next_tier {
            points.push(format!(
                "{} more units reach the {}-unit tier at {:.0}% off",
                next.units_needed, next.min_quantity, next.discount_percent
            ));
        }
        if b.market_adjustment > 0.0 {
            points.push(format!(
                "Current {} market conditions support a further {:.0}% concession",
                category, b.market_adjustment
            ));
        } else if b.market_adjustment < 0.0 {
            points.push(format!(
                "Tight {} supply reduces leverage by {:.0}%",
                category,
                b.market_adjustment.abs()
            ));
        }
        if let Some(id) = result.vendor_id.as_deref() {
            match self.catalog.vendor(id) {
                Some(vendor) => points.push(format!(
                    "{} typically concedes an extra {:.1}%",
                    vendor.name, vendor.bonus_percent
                )),
                None => points.push(format!("No negotiation history with vendor '{}'", id)),
            }
        }
        if b.seasonal_adjustment > 0.0 {
            let month = u8::try_from(result.month)
                .ok()
                .and_then(|m| chrono::Month::try_from(m).ok())
                .map(|m| m.name().to_string())
                .unwrap_or_else(|| format!("month {}", result.month));
            points.push(format!(
                "Seasonal demand in {} is worth {:.0}%",
                month, b.seasonal_adjustment
            ));
        }
        if let Some(bulk) = component
            .pricing
            .bulk
            .iter()
            .filter(|p| p.min_quantity <= result.quantity)
            .max_by_key(|p| p.min_quantity)
        {
            points.push(format!(
                "Listed bulk price at {}+ units is ${:.2}",
                bulk.min_quantity, bulk.unit_price
            ));
        }
        if result.capped {
            points.push(format!(
                "Combined discount is capped at {:.0}%",
                self.config.max_discount_percent
            ));
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn with_negotiator<T>(f: impl FnOnce(&Catalog, &PriceNegotiator<'_>) -> T) -> T {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let negotiator = PriceNegotiator::new(&catalog, &settings.negotiation);
        f(&catalog, &negotiator)
    }

    #[test]
    fn test_wholesale_processor_order() {
        with_negotiator(|catalog, negotiator| {
            let cpu = catalog.component("cpu-i7-12700k").unwrap();
            // September has no seasonal adjustment
            let result = negotiator.calculate_discount(cpu, 50, None, 9);
            assert_eq!(result.breakdown.quantity_tier, 30.0);
            assert_eq!(result.breakdown.market_adjustment, 2.0);
            assert_eq!(result.breakdown.seasonal_adjustment, 0.0);
            assert!((result.discount_percentage - 32.0).abs() < 1e-9);
            assert_eq!(result.recommended_price, 409.0 * (1.0 - result.discount_percentage / 100.0));
            let next = result.next_tier.unwrap();
            assert_eq!(next.min_quantity, 100);
            assert_eq!(next.units_needed, 50);
        });
    }

    #[test]
    fn test_discount_is_capped() {
        with_negotiator(|catalog, negotiator| {
            let cpu = catalog.component("cpu-i7-12700k").unwrap();
            // 35 + 2 + 5 + 5
            let result = negotiator.calculate_discount(cpu, 100, Some("techsource-direct"), 1);
            assert!(!result.capped);
            assert!((result.discount_percentage - 47.0).abs() < 1e-9);

            let settings = Settings {
                negotiation: NegotiationConfig {
                    max_discount_percent: 40.0,
                },
                ..Settings::default()
            };
            let strict = PriceNegotiator::new(catalog, &settings.negotiation);
            let result = strict.calculate_discount(cpu, 100, Some("techsource-direct"), 1);
            assert!(result.capped);
            assert_eq!(result.discount_percentage, 40.0);
            assert!(result.talking_points.iter().any(|p| p.contains("capped at 40%")));
        });
    }

    #[test]
    fn test_negative_total_is_floored() {
        with_negotiator(|catalog, negotiator| {
            let gpu = catalog.component("gpu-rtx-4090").unwrap();
            let result = negotiator.calculate_discount(gpu, 1, None, 9);
            assert_eq!(result.breakdown.market_adjustment, -3.0);
            assert_eq!(result.discount_percentage, 0.0);
            assert_eq!(result.recommended_price, result.base_price);
        });
    }

    #[test]
    fn test_unknown_vendor_gets_no_bonus() {
        with_negotiator(|catalog, negotiator| {
            let ram = catalog.component("mem-ddr4-16-3200").unwrap();
            let result = negotiator.calculate_discount(ram, 10, Some("nobody"), 9);
            assert_eq!(result.breakdown.vendor_bonus, 0.0);
            assert!(result.talking_points.iter().any(|p| p.contains("nobody")));
            let known = negotiator.calculate_discount(ram, 10, Some(" Budget-Bits "), 9);
            assert_eq!(known.breakdown.vendor_bonus, 2.0);
        });
    }

    #[test]
    fn test_market_price_is_base_when_retail_unknown() {
        with_negotiator(|catalog, negotiator| {
            let tray = catalog.component("cpu-i7-12700k-tray").unwrap();
            let result = negotiator.calculate_discount(tray, 1, None, 9);
            assert_eq!(result.base_price, 329.0);
        });
    }

    #[test]
    fn test_optimize_quantity_reaches_deeper_tier() {
        with_negotiator(|catalog, negotiator| {
            let cpu = catalog.component("cpu-i7-12700k").unwrap();
            // 10 units at 12% off is 3599.20
            let plan = negotiator.optimize_quantity(cpu, 3600.0, None, 9);
            assert_eq!(plan.quantity, 10);
            assert!((plan.discount_percentage - 12.0).abs() < 1e-9);
            assert!(plan.total_cost <= plan.budget);
        });
    }

    #[test]
    fn test_optimize_quantity_small_budget() {
        with_negotiator(|catalog, negotiator| {
            let cpu = catalog.component("cpu-i7-12700k").unwrap();
            assert_eq!(negotiator.optimize_quantity(cpu, 100.0, None, 9).quantity, 0);
            let plan = negotiator.optimize_quantity(cpu, 500.0, None, 9);
            assert_eq!(plan.quantity, 1);
            assert!(plan.total_cost <= 500.0);
        });
    }

    #[test]
    fn test_seasonal_talking_point_names_month() {
        with_negotiator(|catalog, negotiator| {
            let cpu = catalog.component("cpu-i5-12600k").unwrap();
            let result = negotiator.calculate_discount(cpu, 1, None, 1);
            assert!(result.talking_points.iter().any(|p| p.contains("January")));
        });
    }
}
