// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Read-only reference data shared by every engine.
//!
//! A `Catalog` is built once per process and handed to engines by shared
//! reference. Nothing in it is mutated after construction.

pub mod adapters;
pub mod inventory;
pub mod patterns;
pub mod profiles;
pub mod workarounds;

use std::collections::HashMap;

pub use adapters::{
    AdapterTemplate, Complexity, CostRange, VoltageWindow, WireConnection, WiringDiagram,
};
pub use patterns::PatternLibrary;
pub use profiles::{
    CategoryProfile, MarketLocation, QuantityTier, RiskFactors, ThermalProfile, VendorProfile,
    WeightProfile,
};
pub use workarounds::{WorkaroundStep, WorkaroundTemplate};

use crate::model::{Category, Component, LegacyPort};

#[derive(Debug, Clone)]
pub struct Catalog {
    inventory: Vec<Component>,
    profiles: Vec<CategoryProfile>,
    adapter_templates: HashMap<LegacyPort, Vec<AdapterTemplate>>,
    wiring_diagrams: HashMap<String, WiringDiagram>,
    workaround_templates: HashMap<Category, Vec<WorkaroundTemplate>>,
    vendors: HashMap<String, VendorProfile>,
    locations: HashMap<String, MarketLocation>,
    patterns: PatternLibrary,
}

impl Catalog {
    /// Catalog with the built-in tables and seed inventory
    pub fn builtin() -> Self {
        Self::with_inventory(inventory::builtin_inventory())
    }

    /// Built-in tables with a caller-supplied inventory
    pub fn with_inventory(inventory: Vec<Component>) -> Self {
        Self {
            inventory,
            profiles: Category::ALL.iter().map(|c| profiles::builtin_profile(*c)).collect(),
            adapter_templates: adapters::builtin_adapter_templates(),
            wiring_diagrams: adapters::builtin_wiring_diagrams(),
            workaround_templates: workarounds::builtin_workaround_templates(),
            vendors: profiles::builtin_vendors()
                .into_iter()
                .map(|v| (v.id.clone(), v))
                .collect(),
            locations: profiles::builtin_locations()
                .into_iter()
                .map(|l| (l.id.clone(), l))
                .collect(),
            patterns: PatternLibrary::new(),
        }
    }

    pub fn inventory(&self) -> &[Component] {
        &self.inventory
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.inventory.iter().find(|c| c.id == id)
    }

    pub fn components_in(&self, category: Category) -> impl Iterator<Item = &Component> {
        self.inventory.iter().filter(move |c| c.category() == category)
    }

    pub fn profile(&self, category: Category) -> &CategoryProfile {
        &self.profiles[category.index()]
    }

    /// Adapter templates for a port; empty when none are registered
    pub fn adapter_templates(&self, port: LegacyPort) -> &[AdapterTemplate] {
        self.adapter_templates
            .get(&port)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn adapter_template(&self, id: &str) -> Option<&AdapterTemplate> {
        let id = adapters::normalize_template_id(id);
        self.adapter_templates
            .values()
            .flatten()
            .find(|t| t.id == id)
    }

    pub fn wiring_diagram(&self, id: &str) -> Option<&WiringDiagram> {
        self.wiring_diagrams.get(&adapters::normalize_template_id(id))
    }

    /// Workaround templates for a target category; empty when none are registered
    pub fn workaround_templates(&self, category: Category) -> &[WorkaroundTemplate] {
        self.workaround_templates
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn vendor(&self, id: &str) -> Option<&VendorProfile> {
        self.vendors.get(&id.trim().to_lowercase())
    }

    pub fn vendors(&self) -> impl Iterator<Item = &VendorProfile> {
        self.vendors.values()
    }

    /// Location profile; unknown locations get neutral defaults
    pub fn location(&self, id: &str) -> MarketLocation {
        self.locations
            .get(id)
            .cloned()
            .unwrap_or_else(|| MarketLocation::unknown(id))
    }

    pub fn patterns(&self) -> &PatternLibrary {
        &self.patterns
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup_matches_category() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            assert_eq!(catalog.profile(category).category, category);
        }
    }

    #[test]
    fn test_component_lookup() {
        let catalog = Catalog::builtin();
        assert!(catalog.component("cpu-i7-12700k").is_some());
        assert!(catalog.component("does-not-exist").is_none());
        assert!(catalog.components_in(Category::Memory).count() >= 2);
    }

    #[test]
    fn test_missing_keys_yield_empty_lists() {
        let catalog = Catalog::builtin();
        assert!(catalog.workaround_templates(Category::Peripherals).is_empty());
        assert!(!catalog.workaround_templates(Category::Graphics).is_empty());

        let empty = Catalog::with_inventory(Vec::new());
        assert!(empty.inventory().is_empty());
    }

    #[test]
    fn test_adapter_template_lookup_normalizes() {
        let catalog = Catalog::builtin();
        assert!(catalog.adapter_template("USB_SERIAL_FTDI").is_some());
        assert!(catalog.wiring_diagram("Molex SATA Power").is_some());
        assert!(catalog.wiring_diagram("pci-pcie-bridge").is_none());
    }

    #[test]
    fn test_vendor_and_location_lookup() {
        let catalog = Catalog::builtin();
        assert!(catalog.vendor("TechSource-Direct").is_some());
        assert!(catalog.vendor("nobody").is_none());
        assert_eq!(catalog.location("authorized-distributor-us").source_reliability, 1.0);
        assert_eq!(catalog.location("somewhere").supply_chain_multiplier, 1.0);
    }
}
