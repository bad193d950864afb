// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Component specification and inventory records
//!
//! Every field has a zero/empty default meaning "unknown"; nothing here is
//! optional on the wire.

use serde::{Deserialize, Serialize};

use super::kinds::{AuthenticityLevel, AvailabilityStatus, Category};

/// Part number reported when no pattern matched
pub const UNKNOWN_PART_NUMBER: &str = "UNKNOWN";

/// Electrical characteristics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElectricalSpec {
    /// Volts
    pub voltage: f64,
    /// Amperes
    pub current: f64,
    /// Megahertz
    pub frequency: f64,
    /// Watts
    pub power: f64,
}

impl ElectricalSpec {
    /// Whether any electrical field is known
    pub fn any_specified(&self) -> bool {
        self.voltage != 0.0 || self.current != 0.0 || self.frequency != 0.0 || self.power != 0.0
    }
}

/// Outer dimensions in millimetres
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Footprint area in square centimetres
    pub fn footprint_cm2(&self) -> f64 {
        (self.length / 10.0) * (self.width / 10.0)
    }
}

/// Physical characteristics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicalSpec {
    pub dimensions: Dimensions,
    /// Grams
    pub weight: f64,
    pub form_factor: String,
}

/// Mechanical and electrical compatibility descriptors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompatibilitySpec {
    pub socket: String,
    pub interface: String,
    pub pin_config: String,
}

impl CompatibilitySpec {
    pub fn has_socket_or_interface(&self) -> bool {
        !self.socket.is_empty() || !self.interface.is_empty()
    }
}

/// Structured description of a hardware part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentSpecification {
    pub category: Category,
    pub part_number: String,
    pub electrical: ElectricalSpec,
    pub physical: PhysicalSpec,
    pub compatibility: CompatibilitySpec,
    /// Core count (processors)
    pub cores: u32,
    /// Capacity in GB (memory, storage, graphics VRAM)
    pub capacity_gb: f64,
}

impl Default for ComponentSpecification {
    fn default() -> Self {
        Self {
            category: Category::DEFAULT,
            part_number: UNKNOWN_PART_NUMBER.to_string(),
            electrical: ElectricalSpec::default(),
            physical: PhysicalSpec::default(),
            compatibility: CompatibilitySpec::default(),
            cores: 0,
            capacity_gb: 0.0,
        }
    }
}

impl ComponentSpecification {
    /// Create an empty specification for a category
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    /// Whether the part number was resolved
    pub fn has_part_number(&self) -> bool {
        !self.part_number.is_empty() && self.part_number != UNKNOWN_PART_NUMBER
    }
}

/// A (minimum quantity, unit price) bulk price point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPrice {
    pub min_quantity: u32,
    pub unit_price: f64,
}

/// Pricing for an inventory component (USD)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pricing {
    pub retail: f64,
    pub market: f64,
    pub bulk: Vec<BulkPrice>,
}

impl Pricing {
    /// Price negotiation starts from: retail, or market when retail is unknown
    pub fn base_price(&self) -> f64 {
        if self.retail > 0.0 {
            self.retail
        } else {
            self.market.max(0.0)
        }
    }
}

/// An inventory item: a specification plus sourcing metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    pub specification: ComponentSpecification,
    pub authenticity: AuthenticityLevel,
    pub availability: AvailabilityStatus,
    pub pricing: Pricing,
    pub market_location: String,
    /// Historical market prices, oldest first
    #[serde(default)]
    pub price_history: Vec<f64>,
}

impl Component {
    pub fn category(&self) -> Category {
        self.specification.category
    }

    /// A compact reference for embedding in results
    pub fn summary(&self) -> ComponentRef {
        ComponentRef {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category(),
            part_number: self.specification.part_number.clone(),
        }
    }
}

/// Lightweight pointer to an inventory component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRef {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub part_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_specification_is_unknown() {
        let spec = ComponentSpecification::default();
        assert_eq!(spec.category, Category::Peripherals);
        assert_eq!(spec.part_number, UNKNOWN_PART_NUMBER);
        assert!(!spec.has_part_number());
        assert!(!spec.electrical.any_specified());
        assert!(!spec.compatibility.has_socket_or_interface());
    }

    #[test]
    fn test_any_specified() {
        let electrical = ElectricalSpec {
            power: 65.0,
            ..Default::default()
        };
        assert!(electrical.any_specified());
    }

    #[test]
    fn test_footprint_area() {
        let dims = Dimensions {
            length: 100.0,
            width: 50.0,
            height: 10.0,
        };
        assert!((dims.footprint_cm2() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_base_price_falls_back_to_market() {
        let pricing = Pricing {
            retail: 0.0,
            market: 120.0,
            bulk: vec![],
        };
        assert_eq!(pricing.base_price(), 120.0);

        let pricing = Pricing {
            retail: 150.0,
            market: 120.0,
            bulk: vec![],
        };
        assert_eq!(pricing.base_price(), 150.0);
    }

    #[test]
    fn test_specification_deserializes_with_missing_fields() {
        let spec: ComponentSpecification =
            serde_json::from_str(r#"{"category":"memory","compatibility":{"socket":"DDR4"}}"#)
                .unwrap();
        assert_eq!(spec.category, Category::Memory);
        assert_eq!(spec.compatibility.socket, "DDR4");
        assert_eq!(spec.part_number, UNKNOWN_PART_NUMBER);
        assert_eq!(spec.electrical.frequency, 0.0);
    }

    #[test]
    fn test_specification_serializes_camel_case() {
        let mut spec = ComponentSpecification::new(Category::Memory);
        spec.capacity_gb = 16.0;
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("partNumber"));
        assert!(json.contains("capacityGb"));
        assert!(!json.contains("part_number"));
    }
}
