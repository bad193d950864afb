// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Authenticity, gray-market and negotiation commands

use crate::api::{NegotiatePayload, PartScout};
use crate::authenticity::AuthenticityAnalysis;
use crate::cli::args::{AuthenticityArgs, ComponentArgs, NegotiateArgs, OutputFormat};
use crate::error::Result;
use crate::graymarket::GrayMarketAnalysis;
use crate::negotiation::NegotiationResult;

use super::print_json;

/// Execute the authenticity command
pub fn execute_authenticity(scout: &PartScout, args: &AuthenticityArgs, format: OutputFormat) -> Result<()> {
    let analysis = scout.authenticity(&args.component, args.weight)?;
    match format {
        OutputFormat::Json => print_json(&analysis),
        OutputFormat::Text => {
            print!("{}", render_authenticity(&analysis));
            Ok(())
        }
    }
}

/// Execute the gray-market command
pub fn execute_gray_market(scout: &PartScout, args: &ComponentArgs, format: OutputFormat) -> Result<()> {
    let analysis = scout.gray_market(&args.component)?;
    match format {
        OutputFormat::Json => print_json(&analysis),
        OutputFormat::Text => {
            print!("{}", render_gray_market(&analysis));
            Ok(())
        }
    }
}

/// Execute the negotiate command
pub fn execute_negotiate(scout: &PartScout, args: &NegotiateArgs, format: OutputFormat) -> Result<()> {
    let request = NegotiatePayload {
        component_id: args.component.clone(),
        quantity: args.quantity,
        vendor_id: args.vendor.clone(),
        budget: args.budget,
        month: args.month,
    };
    let result = scout.negotiate(&request)?;
    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            print!("{}", render_negotiation(&result));
            Ok(())
        }
    }
}

pub fn render_authenticity(analysis: &AuthenticityAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({})\n",
        analysis.component.name, analysis.component.id
    ));
    out.push_str(&format!(
        "Score: {:.1}/100 [{}], declared {}\n",
        analysis.score, analysis.confidence, analysis.authenticity_level
    ));

    let w = &analysis.weight;
    if w.measured_grams > 0.0 {
        out.push_str(&format!(
            "Weight: {:.1}g vs {:.1}g expected ({:+.1}%, tolerance {:.0}%)\n",
            w.measured_grams, w.expected_grams, w.variance_percent, w.tolerance_percent
        ));
    } else {
        out.push_str(&format!("Weight: {:.1}g expected, none declared\n", w.expected_grams));
    }
    out.push_str(&format!(
        "Thermal: {:.2} average ({:.2} W/cm²)\n",
        analysis.thermal.average(),
        analysis.thermal.power_density
    ));
    out.push_str(&format!(
        "Quality: {:.2} (build {:.2}, price {:.2}, source {:.2})\n",
        analysis.quality.overall,
        analysis.quality.build_quality,
        analysis.quality.price_consistency,
        analysis.quality.source_reliability
    ));
    for recommendation in &analysis.recommendations {
        out.push_str(&format!("  - {}\n", recommendation));
    }
    out
}

pub fn render_gray_market(analysis: &GrayMarketAnalysis) -> String {
    let p = &analysis.pricing;
    let a = &analysis.availability;
    let r = &analysis.risks;
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({}) via {}\n",
        analysis.component.name, analysis.component.id, analysis.market_location
    ));
    out.push_str(&format!(
        "Price: ${:.2} gray vs ${:.2} retail ({:.0}% off, trend {:?})\n",
        p.gray_price, p.retail_price, p.discount_percent, p.trend
    ));
    out.push_str(&format!(
        "Delivery: ~{:.1} days ({})\n",
        a.estimated_days, a.status
    ));
    out.push_str(&format!(
        "Risk: {:?} {:.2} (quality {:.2}, warranty {:.2}, compatibility {:.2})\n",
        analysis.risk_level, r.overall, r.quality_risk, r.warranty_risk, r.compatibility_risk
    ));
    for (factor, mitigation) in r.risk_factors.iter().zip(&r.mitigations) {
        out.push_str(&format!("  ! {}\n    -> {}\n", factor, mitigation));
    }
    out
}

pub fn render_negotiation(result: &NegotiationResult) -> String {
    let b = &result.breakdown;
    let mut out = String::new();
    out.push_str(&format!(
        "{} x{} at base ${:.2}\n",
        result.component.name, result.quantity, result.base_price
    ));
    out.push_str(&format!(
        "Discount: {:.1}%{} (tier {:.1}, market {:+.1}, vendor {:.1}, seasonal {:.1})\n",
        result.discount_percentage,
        if result.capped { " capped" } else { "" },
        b.quantity_tier,
        b.market_adjustment,
        b.vendor_bonus,
        b.seasonal_adjustment
    ));
    out.push_str(&format!(
        "Target: ${:.2}/unit, ${:.2} total\n",
        result.recommended_price, result.total_price
    ));
    if let Some(plan) = &result.optimization {
        out.push_str(&format!(
            "Budget ${:.2}: {} units at ${:.2} (${:.2})\n",
            plan.budget, plan.quantity, plan.unit_price, plan.total_cost
        ));
    }
    for point in &result.talking_points {
        out.push_str(&format!("  - {}\n", point));
    }
    out
}
