// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Legacy-port adapter resolution
//!
//! Finds adapter templates that bridge a legacy connector to a modern
//! component and bands them by a weighted compatibility percentage.

use serde::{Deserialize, Serialize};

use crate::catalog::{AdapterTemplate, Catalog, Complexity, CostRange, WiringDiagram};
use crate::catalog::adapters::generic_wiring_diagram;
use crate::config::AdapterConfig;
use crate::model::{CompatibilityBand, Component, LegacyPort};
use crate::scoring::{ScoreEntry, ScoreScale, WeightedScore};

/// Voltage score when the template declares no window
const UNBOUNDED_VOLTAGE_SCORE: f64 = 0.9;
/// Power score when the component's draw is unknown
const UNCERTAIN_POWER_SCORE: f64 = 0.5;
/// Largest voltage penalty, reached at the window edge
const VOLTAGE_EDGE_PENALTY: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterRecommendation {
    pub template_id: String,
    pub name: String,
    pub port: LegacyPort,
    pub target_interface: String,
    /// 0 to 100
    pub compatibility_percent: f64,
    pub band: CompatibilityBand,
    /// 0.0 to 1.0
    pub reliability: f64,
    pub power_uncertain: bool,
    pub cost: CostRange,
    pub complexity: Complexity,
    pub installation_notes: Vec<String>,
    pub breakdown: Vec<ScoreEntry>,
}

pub struct AdapterResolver<'a> {
    catalog: &'a Catalog,
    config: &'a AdapterConfig,
}

impl<'a> AdapterResolver<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a AdapterConfig) -> Self {
        Self { catalog, config }
    }

    /// Adapters for a legacy port, best band first. Unknown ports yield nothing.
    pub fn identify_adapters(
        &self,
        legacy_port: &str,
        component: Option<&Component>,
    ) -> Vec<AdapterRecommendation> {
        let Some(port) = LegacyPort::from_name(legacy_port) else {
            tracing::warn!(port = legacy_port, "unknown legacy port");
            return Vec::new();
        };

        let mut recommendations: Vec<AdapterRecommendation> = self
            .catalog
            .adapter_templates(port)
            .iter()
            .filter(|t| component.map_or(true, |c| applicable(t, c)))
            .map(|t| self.recommend(t, component))
            .collect();

        recommendations.sort_by(|a, b| {
            b.band
                .cmp(&a.band)
                .then(b.reliability.total_cmp(&a.reliability))
                .then(b.compatibility_percent.total_cmp(&a.compatibility_percent))
                .then_with(|| a.template_id.cmp(&b.template_id))
        });

        tracing::debug!(
            port = %port,
            component = component.map(|c| c.id.as_str()).unwrap_or("-"),
            adapters = recommendations.len(),
            "resolved adapters"
        );
        recommendations
    }

    fn recommend(&self, template: &AdapterTemplate, component: Option<&Component>) -> AdapterRecommendation {
        let mut score = WeightedScore::new();
        let power_uncertain = component.map_or(true, |c| c.specification.electrical.power <= 0.0);

        match component {
            Some(c) => {
                let electrical = &c.specification.electrical;
                score.add("category", self.config.category_weight, 1.0);
                score.add_if(
                    "voltage",
                    self.config.voltage_weight,
                    (electrical.voltage > 0.0).then(|| voltage_fit(template, electrical.voltage)),
                );
                let power = if power_uncertain {
                    UNCERTAIN_POWER_SCORE
                } else if electrical.power <= template.max_power_watts {
                    1.0
                } else {
                    template.max_power_watts / electrical.power
                };
                score.add("power", self.config.power_weight, power);
            }
            None => {
                score
                    .skip("category", self.config.category_weight)
                    .skip("voltage", self.config.voltage_weight)
                    .skip("power", self.config.power_weight);
            }
        }
        score.add(
            "interface",
            self.config.interface_weight,
            interface_fit(template, component),
        );

        let result = score.finish(ScoreScale::Percent);
        let multiplier = component.map_or(1.0, |c| c.authenticity.adapter_multiplier());
        let uncertainty = if power_uncertain {
            self.config.uncertain_power_factor
        } else {
            1.0
        };

        AdapterRecommendation {
            template_id: template.id.clone(),
            name: template.name.clone(),
            port: template.port,
            target_interface: template.target_interface.clone(),
            compatibility_percent: result.score,
            band: CompatibilityBand::from_percent(result.score),
            reliability: ScoreScale::Unit.clamp(template.base_reliability * multiplier * uncertainty),
            power_uncertain,
            cost: template.cost,
            complexity: template.complexity,
            installation_notes: template.installation_notes.clone(),
            breakdown: result.breakdown,
        }
    }

    /// Wiring diagram for a template id, or a generic one
    pub fn generate_wiring_diagram(&self, template_id: &str) -> WiringDiagram {
        match self.catalog.wiring_diagram(template_id) {
            Some(diagram) => diagram.clone(),
            None => {
                tracing::debug!(template = template_id, "no wiring diagram, using generic");
                generic_wiring_diagram(template_id)
            }
        }
    }
}

/// Category is accepted and the voltage, when known, sits in the window
fn applicable(template: &AdapterTemplate, component: &Component) -> bool {
    let voltage = component.specification.electrical.voltage;
    template.accepts(component.category())
        && (voltage <= 0.0
            || template
                .voltage_window
                .map_or(true, |window| window.contains(voltage)))
}

/// 1.0 at the window centre falling to 0.8 at its edges
fn voltage_fit(template: &AdapterTemplate, voltage: f64) -> f64 {
    match template.voltage_window {
        Some(window) if window.half_width() > 0.0 => {
            let offset = ((voltage - window.center()).abs() / window.half_width()).min(1.0);
            1.0 - VOLTAGE_EDGE_PENALTY * offset
        }
        Some(_) => 1.0,
        None => UNBOUNDED_VOLTAGE_SCORE,
    }
}

/// Signal fidelity, halved when the component declares a different interface
fn interface_fit(template: &AdapterTemplate, component: Option<&Component>) -> f64 {
    let declared = component
        .map(|c| c.specification.compatibility.interface.as_str())
        .unwrap_or("");
    if declared.is_empty() || declared.eq_ignore_ascii_case(&template.target_interface) {
        template.signal_fidelity
    } else {
        template.signal_fidelity / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn resolve(port: &str, component_id: Option<&str>) -> Vec<AdapterRecommendation> {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let resolver = AdapterResolver::new(&catalog, &settings.adapters);
        let component = component_id.and_then(|id| catalog.component(id));
        resolver.identify_adapters(port, component)
    }

    #[test]
    fn test_unknown_port_is_empty() {
        assert!(resolve("hdmi", None).is_empty());
    }

    #[test]
    fn test_serial_for_usb_peripheral() {
        let adapters = resolve("RS232", Some("per-ftdi-us232r"));
        let ids: Vec<&str> = adapters.iter().map(|a| a.template_id.as_str()).collect();
        // PCIe card only fits motherboards
        assert_eq!(ids, vec!["usb-serial-ftdi", "usb-serial-ch340"]);
        assert_eq!(adapters[0].band, CompatibilityBand::Perfect);
        assert!(!adapters[0].power_uncertain);
        assert!((adapters[0].reliability - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_voltage_window_filters_templates() {
        // 12V board is outside the CH340's 3.3-5V window
        let adapters = resolve("serial", Some("mb-z690-atx"));
        assert!(adapters.iter().all(|a| a.template_id != "usb-serial-ch340"));
        assert!(adapters.iter().all(|a| a.power_uncertain));
        assert!(!adapters.is_empty());
    }

    #[test]
    fn test_power_uncertainty_reduces_reliability() {
        let adapters = resolve("serial", Some("mb-z690-atx"));
        let ftdi = adapters.iter().find(|a| a.template_id == "usb-serial-ftdi").unwrap();
        assert!((ftdi.reliability - 0.95 * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_without_component_only_interface_applies() {
        let adapters = resolve("vga", None);
        assert_eq!(adapters.len(), 2);
        for adapter in &adapters {
            let applicable: Vec<&str> = adapter
                .breakdown
                .iter()
                .filter(|e| e.applicable)
                .map(|e| e.label.as_str())
                .collect();
            assert_eq!(applicable, vec!["interface"]);
            assert!(adapter.power_uncertain);
        }
        assert_eq!(adapters[0].template_id, "vga-displayport-active");
    }

    #[test]
    fn test_sorted_by_band_then_reliability() {
        for port in LegacyPort::ALL {
            let adapters = resolve(port.as_str(), None);
            for pair in adapters.windows(2) {
                assert!(pair[0].band >= pair[1].band);
                if pair[0].band == pair[1].band {
                    assert!(pair[0].reliability >= pair[1].reliability);
                }
            }
        }
    }

    #[test]
    fn test_overloaded_adapter_is_penalized() {
        let adapters = resolve("molex", Some("gpu-rtx-4090"));
        let pcie = adapters.iter().find(|a| a.template_id == "molex-pcie-6pin").unwrap();
        let power = pcie.breakdown.iter().find(|e| e.label == "power").unwrap();
        assert!((power.achieved - 54.0 / 450.0).abs() < 1e-9);
        assert!(pcie.compatibility_percent < 90.0);
    }

    #[test]
    fn test_wiring_diagram_fallback() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let resolver = AdapterResolver::new(&catalog, &settings.adapters);
        assert!(!resolver.generate_wiring_diagram("USB_SERIAL_FTDI").generic);
        let fallback = resolver.generate_wiring_diagram("floppy-gotek-emulator");
        assert!(fallback.generic);
        assert_eq!(fallback.template_id, "floppy-gotek-emulator");
    }
}
