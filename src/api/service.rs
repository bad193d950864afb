// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Request dispatcher
//!
//! Owns the catalog and settings for the life of the process and maps each
//! operation onto the engine that serves it. Engines never fail; lookup and
//! payload problems surface here as `ScoutError`s.

use serde::Serialize;
use serde_json::Value;

use super::protocol::{
    decode, failure, success, AdaptersPayload, AuthenticityPayload, GrayMarketPayload,
    NegotiatePayload, Operation, Request, SearchPayload, WorkaroundsPayload,
};
use crate::adapters::{AdapterRecommendation, AdapterResolver};
use crate::authenticity::{AuthenticityAnalysis, AuthenticityAssessor};
use crate::catalog::{Catalog, WiringDiagram};
use crate::config::Settings;
use crate::error::{Result, ScoutError};
use crate::graymarket::{GrayMarketAnalysis, GrayMarketAnalyzer};
use crate::matcher::{InventoryMatcher, SearchResult};
use crate::model::{AvailabilityStatus, Component};
use crate::negotiation::{current_month, NegotiationResult, PriceNegotiator};
use crate::parser::{ParseResult, SpecificationParser};
use crate::workaround::{WorkaroundComposer, WorkaroundSolution};

pub struct PartScout {
    catalog: Catalog,
    settings: Settings,
}

impl PartScout {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        Self { catalog, settings }
    }

    /// Built-in catalog with default settings
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin(), Settings::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn component(&self, id: &str) -> Result<&Component> {
        self.catalog
            .component(id.trim())
            .ok_or_else(|| ScoutError::ComponentNotFound(id.to_string()))
    }

    pub fn parse(&self, query: &str) -> ParseResult {
        SpecificationParser::new(self.catalog.patterns()).parse(query)
    }

    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        InventoryMatcher::new(&self.catalog, &self.settings).search(query)
    }

    pub fn authenticity(&self, component_id: &str, measured_weight: Option<f64>) -> Result<AuthenticityAnalysis> {
        if let Some(grams) = measured_weight {
            if !grams.is_finite() || grams < 0.0 {
                return Err(ScoutError::InvalidInput(format!(
                    "measured weight must be a non-negative number of grams ({})",
                    grams
                )));
            }
        }
        let component = self.component(component_id)?;
        Ok(AuthenticityAssessor::new(&self.catalog, &self.settings.quality).analyze(component, measured_weight))
    }

    pub fn gray_market(&self, component_id: &str) -> Result<GrayMarketAnalysis> {
        let component = self.component(component_id)?;
        Ok(GrayMarketAnalyzer::new(&self.catalog).analyze(component))
    }

    pub fn negotiate(&self, request: &NegotiatePayload) -> Result<NegotiationResult> {
        if request.quantity == 0 {
            return Err(ScoutError::InvalidInput("quantity must be at least 1".to_string()));
        }
        let month = request.month.unwrap_or_else(current_month);
        if !(1..=12).contains(&month) {
            return Err(ScoutError::InvalidInput(format!("month must be 1-12 ({})", month)));
        }
        if let Some(budget) = request.budget {
            if !budget.is_finite() || budget <= 0.0 {
                return Err(ScoutError::InvalidInput(format!("budget must be positive ({})", budget)));
            }
        }

        let component = self.component(&request.component_id)?;
        let negotiator = PriceNegotiator::new(&self.catalog, &self.settings.negotiation);
        let vendor = request.vendor_id.as_deref();
        let mut result = negotiator.calculate_discount(component, request.quantity, vendor, month);
        result.optimization = request
            .budget
            .map(|budget| negotiator.optimize_quantity(component, budget, vendor, month));
        Ok(result)
    }

    pub fn adapters(&self, legacy_port: &str, modern_component: Option<&str>) -> Result<Vec<AdapterRecommendation>> {
        if legacy_port.trim().is_empty() {
            return Err(ScoutError::InvalidInput("legacy port is required".to_string()));
        }
        let component = modern_component.map(|id| self.component(id)).transpose()?;
        Ok(AdapterResolver::new(&self.catalog, &self.settings.adapters).identify_adapters(legacy_port, component))
    }

    pub fn wiring_diagram(&self, template_id: &str) -> WiringDiagram {
        AdapterResolver::new(&self.catalog, &self.settings.adapters).generate_wiring_diagram(template_id)
    }

    /// Workarounds for a target. Without an explicit list, every component
    /// that is neither out of stock nor discontinued is available.
    pub fn workarounds(&self, target_id: &str, available: Option<&[String]>) -> Result<Vec<WorkaroundSolution>> {
        let target = self.component(target_id)?;
        let pool: Vec<&Component> = match available {
            Some(ids) => ids
                .iter()
                .map(|id| self.component(id))
                .collect::<Result<_>>()?,
            None => self
                .catalog
                .inventory()
                .iter()
                .filter(|c| {
                    !matches!(
                        c.availability,
                        AvailabilityStatus::OutOfStock | AvailabilityStatus::Discontinued
                    )
                })
                .collect(),
        };
        Ok(WorkaroundComposer::new(&self.catalog, &self.settings.workarounds).find_alternatives(target, &pool))
    }

    /// Run one operation and return its result value
    pub fn dispatch(&self, operation: Operation, payload: Value) -> Result<Value> {
        tracing::debug!(operation = %operation, "dispatching request");
        match operation {
            Operation::Search => {
                let p: SearchPayload = decode(operation, payload)?;
                to_value(self.search(&p.query))
            }
            Operation::Authenticity => {
                let p: AuthenticityPayload = decode(operation, payload)?;
                to_value(self.authenticity(&p.component_id, p.measured_weight)?)
            }
            Operation::GrayMarket => {
                let p: GrayMarketPayload = decode(operation, payload)?;
                to_value(self.gray_market(&p.component_id)?)
            }
            Operation::Negotiate => {
                let p: NegotiatePayload = decode(operation, payload)?;
                to_value(self.negotiate(&p)?)
            }
            Operation::Adapters => {
                let p: AdaptersPayload = decode(operation, payload)?;
                to_value(self.adapters(&p.legacy_port, p.modern_component.as_deref())?)
            }
            Operation::Workarounds => {
                let p: WorkaroundsPayload = decode(operation, payload)?;
                to_value(self.workarounds(&p.target_component_id, p.available_components.as_deref())?)
            }
        }
    }

    /// Run an operation by name and wrap the outcome in a response envelope
    pub fn handle(&self, operation: &str, payload: Value) -> Value {
        let outcome = Operation::from_name(operation)
            .ok_or_else(|| ScoutError::UnknownOperation(operation.to_string()))
            .and_then(|op| self.dispatch(op, payload).map(|value| (op, value)));

        match outcome {
            Ok((op, value)) => success(op.result_key(), value),
            Err(e) => {
                if e.is_client_error() {
                    tracing::debug!(operation, "request rejected: {}", e);
                } else {
                    tracing::warn!(operation, "request failed: {}", e);
                }
                failure(&e)
            }
        }
    }

    pub fn handle_request(&self, request: Request) -> Value {
        self.handle(&request.operation, request.payload)
    }
}

impl Default for PartScout {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_component() {
        let scout = PartScout::builtin();
        let err = scout.gray_market("cpu-missing").unwrap_err();
        assert!(matches!(err, ScoutError::ComponentNotFound(_)));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let scout = PartScout::builtin();
        let request = NegotiatePayload {
            component_id: "cpu-i7-12700k".to_string(),
            quantity: 0,
            vendor_id: None,
            budget: None,
            month: Some(3),
        };
        assert!(matches!(scout.negotiate(&request), Err(ScoutError::InvalidInput(_))));
    }

    #[test]
    fn test_budget_adds_optimization() {
        let scout = PartScout::builtin();
        let request = NegotiatePayload {
            component_id: "cpu-i7-12700k".to_string(),
            quantity: 5,
            vendor_id: None,
            budget: Some(3600.0),
            month: Some(9),
        };
        let result = scout.negotiate(&request).unwrap();
        assert_eq!(result.optimization.unwrap().quantity, 10);
    }

    #[test]
    fn test_default_pool_skips_unavailable_parts() {
        let scout = PartScout::builtin();
        // the SO-DIMM is out of stock
        let solutions = scout.workarounds("mem-ddr5-32-6000", None).unwrap();
        assert!(solutions
            .iter()
            .flat_map(|s| s.components.iter())
            .all(|c| c.id != "mem-ddr4-8-2666-sodimm"));
    }

    #[test]
    fn test_handle_wraps_results() {
        let scout = PartScout::builtin();
        let response = scout.handle("adapters", json!({"legacyPort": "ps2"}));
        assert_eq!(response["success"], true);
        assert!(response["adapters"].is_array());

        let response = scout.handle("teleport", Value::Null);
        assert_eq!(response["success"], false);
        assert!(response["error"].as_str().unwrap().contains("teleport"));
    }
}
