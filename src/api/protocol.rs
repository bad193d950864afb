// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Request and response shapes
//!
//! Each request names an operation and carries a JSON payload. Responses are
//! `{"success": true, "<key>": ...}` or `{"success": false, "error": "..."}`.
//! Field names are camelCase on the wire.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Result, ScoutError};

/// Operations the request layer dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Search,
    Authenticity,
    GrayMarket,
    Negotiate,
    Adapters,
    Workarounds,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Search,
        Operation::Authenticity,
        Operation::GrayMarket,
        Operation::Negotiate,
        Operation::Adapters,
        Operation::Workarounds,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Search => "search",
            Operation::Authenticity => "authenticity",
            Operation::GrayMarket => "gray_market",
            Operation::Negotiate => "negotiate",
            Operation::Adapters => "adapters",
            Operation::Workarounds => "workarounds",
        }
    }

    /// Accepts snake_case, kebab-case and camelCase spellings
    pub fn from_name(name: &str) -> Option<Operation> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "search" => Some(Operation::Search),
            "authenticity" => Some(Operation::Authenticity),
            "graymarket" => Some(Operation::GrayMarket),
            "negotiate" => Some(Operation::Negotiate),
            "adapters" => Some(Operation::Adapters),
            "workarounds" => Some(Operation::Workarounds),
            _ => None,
        }
    }

    /// Key the result is stored under in a success envelope
    pub fn result_key(&self) -> &'static str {
        match self {
            Operation::Search => "results",
            Operation::Authenticity | Operation::GrayMarket => "analysis",
            Operation::Negotiate => "negotiation",
            Operation::Adapters => "adapters",
            Operation::Workarounds => "solutions",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the serve transport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub operation: String,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityPayload {
    pub component_id: String,
    /// Grams, when the part has been weighed
    #[serde(default)]
    pub measured_weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrayMarketPayload {
    pub component_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiatePayload {
    pub component_id: String,
    pub quantity: u32,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    /// 1-12; defaults to the current UTC month
    #[serde(default)]
    pub month: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptersPayload {
    pub legacy_port: String,
    /// Component id of the modern part
    #[serde(default)]
    pub modern_component: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkaroundsPayload {
    pub target_component_id: String,
    /// Component ids; the whole inventory when absent
    #[serde(default)]
    pub available_components: Option<Vec<String>>,
}

/// Decode a payload, reporting missing or mistyped fields as invalid input
pub fn decode<T: DeserializeOwned>(operation: Operation, payload: Value) -> Result<T> {
    let payload = if payload.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        payload
    };
    serde_json::from_value(payload)
        .map_err(|e| ScoutError::InvalidInput(format!("{} payload: {}", operation, e)))
}

/// Success envelope
pub fn success(key: &str, result: Value) -> Value {
    let mut envelope = serde_json::Map::new();
    envelope.insert("success".to_string(), Value::Bool(true));
    envelope.insert(key.to_string(), result);
    Value::Object(envelope)
}

/// Failure envelope
pub fn failure(error: &ScoutError) -> Value {
    json!({
        "success": false,
        "error": error.to_string(),
    })
}
