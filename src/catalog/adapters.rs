// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Adapter templates and wiring diagrams

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Category, LegacyPort};

/// Inclusive voltage range an adapter tolerates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoltageWindow {
    pub min: f64,
    pub max: f64,
}

impl VoltageWindow {
    pub fn contains(&self, voltage: f64) -> bool {
        voltage >= self.min && voltage <= self.max
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn half_width(&self) -> f64 {
        (self.max - self.min) / 2.0
    }
}

/// Price range in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

/// How much work fitting an adapter takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterTemplate {
    pub id: String,
    pub name: String,
    pub port: LegacyPort,
    /// Modern-side interface the adapter presents
    pub target_interface: String,
    /// Categories of modern component the adapter can attach to
    pub categories: Vec<Category>,
    pub voltage_window: Option<VoltageWindow>,
    pub max_power_watts: f64,
    pub base_reliability: f64,
    /// 0.0 to 1.0
    pub signal_fidelity: f64,
    pub complexity: Complexity,
    pub cost: CostRange,
    pub installation_notes: Vec<String>,
}

impl AdapterTemplate {
    pub fn accepts(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// One wire or pin mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConnection {
    pub from: String,
    pub to: String,
    pub signal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiringDiagram {
    pub template_id: String,
    pub title: String,
    pub connections: Vec<WireConnection>,
    pub notes: Vec<String>,
    /// True when no template-specific diagram exists
    pub generic: bool,
}

/// Normalize a template id for lookup
pub fn normalize_template_id(id: &str) -> String {
    id.trim().to_lowercase().replace(['_', ' '], "-")
}

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    port: LegacyPort,
    target_interface: &str,
    categories: &[Category],
    voltage_window: Option<(f64, f64)>,
    max_power_watts: f64,
    base_reliability: f64,
    signal_fidelity: f64,
    complexity: Complexity,
    cost: (f64, f64),
    notes: &[&str],
) -> AdapterTemplate {
    AdapterTemplate {
        id: id.to_string(),
        name: name.to_string(),
        port,
        target_interface: target_interface.to_string(),
        categories: categories.to_vec(),
        voltage_window: voltage_window.map(|(min, max)| VoltageWindow { min, max }),
        max_power_watts,
        base_reliability,
        signal_fidelity,
        complexity,
        cost: CostRange {
            min: cost.0,
            max: cost.1,
        },
        installation_notes: notes.iter().map(|n| (*n).to_string()).collect(),
    }
}

/// Built-in adapter templates keyed by legacy port
pub fn builtin_adapter_templates() -> HashMap<LegacyPort, Vec<AdapterTemplate>> {
    use Category::*;
    use Complexity::*;
    use LegacyPort as P;

    let templates = vec![
        template(
            "usb-serial-ftdi",
            "FTDI USB to RS-232 adapter",
            P::Serial,
            "USB",
            &[Motherboard, Peripherals, Networking],
            Some((3.3, 12.0)),
            2.5,
            0.95,
            0.98,
            Low,
            (15.0, 35.0),
            &["Install the FTDI VCP driver before connecting", "Match baud rate and parity to the legacy device"],
        ),
        template(
            "usb-serial-ch340",
            "CH340 USB to serial adapter",
            P::Serial,
            "USB",
            &[Motherboard, Peripherals, Networking],
            Some((3.3, 5.0)),
            2.5,
            0.8,
            0.9,
            Low,
            (3.0, 10.0),
            &["CH340 drivers are not bundled with every OS", "TTL-level variants need a level shifter for true RS-232"],
        ),
        template(
            "pcie-serial-card",
            "PCIe RS-232 expansion card",
            P::Serial,
            "PCIe",
            &[Motherboard],
            Some((3.3, 12.0)),
            5.0,
            0.92,
            0.99,
            Medium,
            (25.0, 60.0),
            &["Requires a free PCIe x1 slot", "Assign a fixed COM number after installation"],
        ),
        template(
            "usb-parallel-ieee1284",
            "IEEE 1284 USB to parallel cable",
            P::Parallel,
            "USB",
            &[Motherboard, Peripherals],
            Some((3.3, 5.0)),
            2.5,
            0.75,
            0.8,
            Low,
            (10.0, 30.0),
            &["Only printer-class devices are supported", "Bit-banged devices need a PCIe card instead"],
        ),
        template(
            "pcie-parallel-card",
            "PCIe parallel port card",
            P::Parallel,
            "PCIe",
            &[Motherboard],
            Some((3.3, 12.0)),
            5.0,
            0.9,
            0.97,
            Medium,
            (30.0, 70.0),
            &["Requires a free PCIe x1 slot", "Set ECP/EPP mode in the card utility"],
        ),
        template(
            "usb-ps2-active",
            "Active PS/2 to USB converter",
            P::Ps2,
            "USB",
            &[Motherboard, Peripherals],
            Some((4.75, 5.25)),
            2.5,
            0.9,
            0.95,
            Low,
            (8.0, 20.0),
            &["Passive dongles only work with dual-protocol devices"],
        ),
        template(
            "ide-sata-bridge",
            "IDE to SATA bridge board",
            P::Ide,
            "SATA",
            &[Storage, Motherboard],
            Some((5.0, 12.0)),
            25.0,
            0.85,
            0.9,
            Medium,
            (10.0, 25.0),
            &["Set the drive jumper to master", "Power the drive from a Molex lead"],
        ),
        template(
            "ide-usb-enclosure",
            "IDE to USB enclosure",
            P::Ide,
            "USB",
            &[Storage, Motherboard, Peripherals],
            Some((5.0, 12.0)),
            25.0,
            0.8,
            0.85,
            Low,
            (15.0, 35.0),
            &["Use the enclosure's external power brick for 3.5-inch drives"],
        ),
        template(
            "vga-hdmi-active",
            "Active HDMI to VGA converter",
            P::Vga,
            "HDMI",
            &[Graphics, Motherboard, Peripherals],
            None,
            2.5,
            0.85,
            0.85,
            Low,
            (10.0, 25.0),
            &["Analog output is limited to 1920x1200", "Some converters need USB power"],
        ),
        template(
            "vga-displayport-active",
            "Active DisplayPort to VGA converter",
            P::Vga,
            "DisplayPort",
            &[Graphics, Motherboard],
            None,
            2.5,
            0.88,
            0.88,
            Low,
            (12.0, 30.0),
            &["DP++ ports still need an active converter for VGA"],
        ),
        template(
            "pci-pcie-bridge",
            "PCIe to PCI bridge riser",
            P::Pci,
            "PCIe",
            &[Motherboard, Networking, Graphics, Storage],
            Some((3.3, 12.0)),
            25.0,
            0.78,
            0.9,
            High,
            (25.0, 60.0),
            &["5V-only PCI cards need a bridge with a 5V rail", "Check case clearance for the riser"],
        ),
        template(
            "firewire-thunderbolt",
            "Thunderbolt to FireWire 800 adapter",
            P::Firewire,
            "Thunderbolt",
            &[Motherboard, Storage, Peripherals],
            None,
            8.0,
            0.9,
            0.95,
            Low,
            (29.0, 49.0),
            &["Bus power is limited; use powered FireWire devices"],
        ),
        template(
            "firewire-pcie-card",
            "PCIe FireWire 400/800 card",
            P::Firewire,
            "PCIe",
            &[Motherboard],
            Some((3.3, 12.0)),
            10.0,
            0.88,
            0.97,
            Medium,
            (25.0, 50.0),
            &["Prefer TI chipsets for audio interfaces", "Connect the Molex lead for bus power"],
        ),
        template(
            "molex-sata-power",
            "Molex to SATA power adapter",
            P::Molex,
            "SATA power",
            &[Storage, Cooling, PowerSupply],
            Some((5.0, 12.0)),
            54.0,
            0.7,
            1.0,
            Low,
            (2.0, 8.0),
            &["Use crimped, not molded, connectors", "The 3.3V SATA rail is not supplied"],
        ),
        template(
            "molex-pcie-6pin",
            "Dual Molex to PCIe 6-pin adapter",
            P::Molex,
            "PCIe 6-pin",
            &[Graphics, PowerSupply],
            Some((11.4, 12.6)),
            54.0,
            0.6,
            1.0,
            Medium,
            (3.0, 10.0),
            &["Feed each Molex from a separate cable", "Not suitable for cards above 150W"],
        ),
        template(
            "floppy-usb-drive",
            "External USB floppy drive",
            P::Floppy,
            "USB",
            &[Motherboard, Peripherals, Storage],
            Some((4.75, 5.25)),
            2.5,
            0.8,
            0.9,
            Low,
            (15.0, 30.0),
            &["Reads 1.44MB media only"],
        ),
        template(
            "floppy-gotek-emulator",
            "Gotek floppy emulator",
            P::Floppy,
            "USB",
            &[Motherboard, Storage],
            Some((4.75, 5.25)),
            2.5,
            0.85,
            0.95,
            High,
            (25.0, 45.0),
            &["Flash FlashFloppy firmware for broad image support", "Mount in a 3.5-inch bay"],
        ),
    ];

    let mut by_port: HashMap<LegacyPort, Vec<AdapterTemplate>> = HashMap::new();
    for template in templates {
        by_port.entry(template.port).or_default().push(template);
    }
    by_port
}

fn wire(from: &str, to: &str, signal: &str) -> WireConnection {
    WireConnection {
        from: from.to_string(),
        to: to.to_string(),
        signal: signal.to_string(),
    }
}

fn diagram(template_id: &str, title: &str, connections: Vec<WireConnection>, notes: &[&str]) -> WiringDiagram {
    WiringDiagram {
        template_id: template_id.to_string(),
        title: title.to_string(),
        connections,
        notes: notes.iter().map(|n| (*n).to_string()).collect(),
        generic: false,
    }
}

/// Built-in wiring diagrams keyed by normalized template id
pub fn builtin_wiring_diagrams() -> HashMap<String, WiringDiagram> {
    let diagrams = vec![
        diagram(
            "usb-serial-ftdi",
            "DB9 RS-232 to FTDI adapter",
            vec![
                wire("DB9 pin 2 (RXD)", "Adapter TXD", "data"),
                wire("DB9 pin 3 (TXD)", "Adapter RXD", "data"),
                wire("DB9 pin 5 (GND)", "Adapter GND", "ground"),
                wire("DB9 pin 7 (RTS)", "Adapter CTS", "flow control"),
                wire("DB9 pin 8 (CTS)", "Adapter RTS", "flow control"),
            ],
            &["Cross TX/RX when connecting DTE to DTE"],
        ),
        diagram(
            "usb-ps2-active",
            "PS/2 mini-DIN to USB converter",
            vec![
                wire("PS/2 pin 1 (DATA)", "Converter DATA in", "data"),
                wire("PS/2 pin 5 (CLK)", "Converter CLK in", "clock"),
                wire("PS/2 pin 4 (+5V)", "USB VBUS", "power"),
                wire("PS/2 pin 3 (GND)", "USB GND", "ground"),
            ],
            &["Do not hot-plug PS/2 devices on legacy controllers"],
        ),
        diagram(
            "ide-sata-bridge",
            "40-pin IDE to SATA bridge",
            vec![
                wire("IDE 40-pin header", "Bridge IDE socket", "parallel ATA"),
                wire("Bridge SATA port", "Motherboard SATA port", "serial ATA"),
                wire("Molex +5V/+12V", "Bridge power input", "power"),
            ],
            &["Pin 20 is the key position and carries no signal"],
        ),
        diagram(
            "molex-sata-power",
            "Molex to SATA power",
            vec![
                wire("Molex yellow (+12V)", "SATA pins 13-15", "power"),
                wire("Molex red (+5V)", "SATA pins 7-9", "power"),
                wire("Molex black (GND)", "SATA pins 4-6, 10-12", "ground"),
            ],
            &["SATA pins 1-3 (+3.3V) stay unconnected"],
        ),
        diagram(
            "vga-hdmi-active",
            "HDMI source to VGA display",
            vec![
                wire("HDMI TMDS pairs", "Converter DAC input", "digital video"),
                wire("Converter R/G/B", "VGA pins 1-3", "analog video"),
                wire("Converter HSYNC/VSYNC", "VGA pins 13-14", "sync"),
                wire("Converter GND", "VGA pins 5-8, 10", "ground"),
            ],
            &["EDID from the display is passed through on pins 12 and 15"],
        ),
    ];

    diagrams
        .into_iter()
        .map(|d| (normalize_template_id(&d.template_id), d))
        .collect()
}

/// Diagram returned when no template-specific one exists
pub fn generic_wiring_diagram(template_id: &str) -> WiringDiagram {
    WiringDiagram {
        template_id: template_id.to_string(),
        title: "Generic adapter wiring".to_string(),
        connections: vec![
            wire("Legacy port signals", "Adapter legacy side", "data"),
            wire("Adapter modern side", "Modern port", "data"),
            wire("Legacy ground", "Adapter ground", "ground"),
        ],
        notes: vec!["Consult the adapter documentation for the exact pinout".to_string()],
        generic: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_port_has_templates() {
        let templates = builtin_adapter_templates();
        for port in LegacyPort::ALL {
            assert!(
                templates.get(&port).map_or(false, |t| !t.is_empty()),
                "no templates for {}",
                port
            );
        }
    }

    #[test]
    fn test_windows_have_width() {
        for templates in builtin_adapter_templates().values() {
            for template in templates {
                if let Some(window) = template.voltage_window {
                    assert!(window.half_width() > 0.0, "{} has a zero-width window", template.id);
                }
                assert!((0.0..=1.0).contains(&template.signal_fidelity));
                assert!((0.0..=1.0).contains(&template.base_reliability));
            }
        }
    }

    #[test]
    fn test_voltage_window() {
        let window = VoltageWindow { min: 5.0, max: 12.0 };
        assert!(window.contains(5.0));
        assert!(window.contains(12.0));
        assert!(!window.contains(3.3));
        assert_eq!(window.center(), 8.5);
        assert_eq!(window.half_width(), 3.5);
    }

    #[test]
    fn test_diagram_ids_are_normalized() {
        assert_eq!(normalize_template_id(" USB_Serial FTDI "), "usb-serial-ftdi");
        let diagrams = builtin_wiring_diagrams();
        assert!(diagrams.contains_key("usb-serial-ftdi"));
        assert!(generic_wiring_diagram("x").generic);
    }
}
