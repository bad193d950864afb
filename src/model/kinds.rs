// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Closed classification enums

use serde::{Deserialize, Serialize};

/// Hardware component category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Processor,
    Memory,
    Graphics,
    Storage,
    Motherboard,
    PowerSupply,
    Cooling,
    Networking,
    /// Catch-all used when classification is inconclusive
    Peripherals,
}

impl Category {
    /// Every category, in table order
    pub const ALL: [Category; 9] = [
        Category::Processor,
        Category::Memory,
        Category::Graphics,
        Category::Storage,
        Category::Motherboard,
        Category::PowerSupply,
        Category::Cooling,
        Category::Networking,
        Category::Peripherals,
    ];

    /// The category assigned when the parser cannot decide
    pub const DEFAULT: Category = Category::Peripherals;

    /// Stable wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Processor => "processor",
            Category::Memory => "memory",
            Category::Graphics => "graphics",
            Category::Storage => "storage",
            Category::Motherboard => "motherboard",
            Category::PowerSupply => "power_supply",
            Category::Cooling => "cooling",
            Category::Networking => "networking",
            Category::Peripherals => "peripherals",
        }
    }

    /// Parse a category name, accepting a few common spellings
    pub fn from_name(name: &str) -> Option<Category> {
        let normalized = name.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "processor" | "cpu" => Some(Category::Processor),
            "memory" | "ram" => Some(Category::Memory),
            "graphics" | "gpu" => Some(Category::Graphics),
            "storage" | "ssd" | "hdd" => Some(Category::Storage),
            "motherboard" | "mainboard" => Some(Category::Motherboard),
            "power_supply" | "psu" => Some(Category::PowerSupply),
            "cooling" | "cooler" => Some(Category::Cooling),
            "networking" | "network" | "nic" => Some(Category::Networking),
            "peripherals" | "peripheral" => Some(Category::Peripherals),
            _ => None,
        }
    }

    /// Whether this is the fallback category
    pub fn is_default(&self) -> bool {
        *self == Category::DEFAULT
    }

    /// Position in `Category::ALL`, used to index per-category tables
    pub fn index(&self) -> usize {
        match self {
            Category::Processor => 0,
            Category::Memory => 1,
            Category::Graphics => 2,
            Category::Storage => 3,
            Category::Motherboard => 4,
            Category::PowerSupply => 5,
            Category::Cooling => 6,
            Category::Networking => 7,
            Category::Peripherals => 8,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Provenance of a physical part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticityLevel {
    /// Manufacturer-authentic part
    Oem,
    /// Replica with similar nominal specs but different construction
    FirstCopy,
    /// Unbranded equivalent
    Generic,
    Unknown,
}

impl AuthenticityLevel {
    /// Additive adjustment applied to the 0-100 authenticity score
    pub fn score_adjustment(&self) -> f64 {
        match self {
            AuthenticityLevel::Oem => 20.0,
            AuthenticityLevel::FirstCopy => 10.0,
            AuthenticityLevel::Generic => -10.0,
            AuthenticityLevel::Unknown => -20.0,
        }
    }

    /// Reliability multiplier used when bridging through an adapter
    pub fn adapter_multiplier(&self) -> f64 {
        match self {
            AuthenticityLevel::Oem => 1.0,
            AuthenticityLevel::FirstCopy => 0.9,
            AuthenticityLevel::Generic => 0.8,
            AuthenticityLevel::Unknown => 0.7,
        }
    }

    /// Reliability factor used when composing workaround assemblies
    pub fn workaround_factor(&self) -> f64 {
        match self {
            AuthenticityLevel::Oem => 1.0,
            AuthenticityLevel::FirstCopy | AuthenticityLevel::Generic | AuthenticityLevel::Unknown => 0.7,
        }
    }

    /// Expected build quality of a part with this provenance (0.0 to 1.0)
    pub fn build_quality(&self) -> f64 {
        match self {
            AuthenticityLevel::Oem => 0.95,
            AuthenticityLevel::FirstCopy => 0.7,
            AuthenticityLevel::Generic => 0.5,
            AuthenticityLevel::Unknown => 0.3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthenticityLevel::Oem => "oem",
            AuthenticityLevel::FirstCopy => "first_copy",
            AuthenticityLevel::Generic => "generic",
            AuthenticityLevel::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AuthenticityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Stock status of an inventory component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    InStock,
    Limited,
    OutOfStock,
    Discontinued,
    Unknown,
}

impl AvailabilityStatus {
    /// Ranking used as the last search tie-break (higher is better)
    pub fn rank(&self) -> u8 {
        match self {
            AvailabilityStatus::InStock => 4,
            AvailabilityStatus::Limited => 3,
            AvailabilityStatus::OutOfStock => 2,
            AvailabilityStatus::Discontinued => 1,
            AvailabilityStatus::Unknown => 0,
        }
    }

    /// Multiplier applied to a category's base delivery time
    pub fn delivery_multiplier(&self) -> f64 {
        match self {
            AvailabilityStatus::InStock => 0.8,
            AvailabilityStatus::Limited => 1.5,
            AvailabilityStatus::OutOfStock => 2.0,
            AvailabilityStatus::Discontinued => 3.0,
            AvailabilityStatus::Unknown => 1.2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::InStock => "in_stock",
            AvailabilityStatus::Limited => "limited",
            AvailabilityStatus::OutOfStock => "out_of_stock",
            AvailabilityStatus::Discontinued => "discontinued",
            AvailabilityStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Legacy connector an adapter bridges from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyPort {
    Serial,
    Parallel,
    Ps2,
    Ide,
    Vga,
    Pci,
    Firewire,
    Molex,
    Floppy,
}

impl LegacyPort {
    pub const ALL: [LegacyPort; 9] = [
        LegacyPort::Serial,
        LegacyPort::Parallel,
        LegacyPort::Ps2,
        LegacyPort::Ide,
        LegacyPort::Vga,
        LegacyPort::Pci,
        LegacyPort::Firewire,
        LegacyPort::Molex,
        LegacyPort::Floppy,
    ];

    /// Normalize a port name; accepts common connector aliases
    pub fn from_name(name: &str) -> Option<LegacyPort> {
        let normalized: String = name
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '/'))
            .collect();
        match normalized.as_str() {
            "serial" | "rs232" | "rs-232" | "db9" | "com" => Some(LegacyPort::Serial),
            "parallel" | "lpt" | "centronics" | "ieee1284" => Some(LegacyPort::Parallel),
            "ps2" | "ps-2" => Some(LegacyPort::Ps2),
            "ide" | "pata" | "ata" => Some(LegacyPort::Ide),
            "vga" | "d-sub" | "dsub" | "de15" => Some(LegacyPort::Vga),
            "pci" => Some(LegacyPort::Pci),
            "firewire" | "ieee1394" | "1394" => Some(LegacyPort::Firewire),
            "molex" | "4-pin" | "4pin" => Some(LegacyPort::Molex),
            "floppy" | "fdd" => Some(LegacyPort::Floppy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LegacyPort::Serial => "serial",
            LegacyPort::Parallel => "parallel",
            LegacyPort::Ps2 => "ps2",
            LegacyPort::Ide => "ide",
            LegacyPort::Vga => "vga",
            LegacyPort::Pci => "pci",
            LegacyPort::Firewire => "firewire",
            LegacyPort::Molex => "molex",
            LegacyPort::Floppy => "floppy",
        }
    }
}

impl std::fmt::Display for LegacyPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Ordinal adapter compatibility band, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityBand {
    Incompatible,
    Poor,
    Partial,
    Good,
    Perfect,
}

impl CompatibilityBand {
    /// Band for a compatibility percentage
    pub fn from_percent(percent: f64) -> CompatibilityBand {
        if percent >= 90.0 {
            CompatibilityBand::Perfect
        } else if percent >= 75.0 {
            CompatibilityBand::Good
        } else if percent >= 50.0 {
            CompatibilityBand::Partial
        } else if percent >= 25.0 {
            CompatibilityBand::Poor
        } else {
            CompatibilityBand::Incompatible
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityBand::Perfect => "perfect",
            CompatibilityBand::Good => "good",
            CompatibilityBand::Partial => "partial",
            CompatibilityBand::Poor => "poor",
            CompatibilityBand::Incompatible => "incompatible",
        }
    }
}

impl std::fmt::Display for CompatibilityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
