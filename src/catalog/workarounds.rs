// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Workaround templates

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::adapters::CostRange;
use crate::model::Category;

/// One assembly step. `{component_N}` placeholders are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkaroundStep {
    pub description: String,
    pub duration_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkaroundTemplate {
    pub id: String,
    pub name: String,
    /// Category of part this template substitutes for
    pub target: Category,
    pub description: String,
    /// Accepted categories in selection priority order; each must be represented
    pub accepts: Vec<Category>,
    pub minimum_components: usize,
    pub maximum_components: usize,
    pub reliability_factor: f64,
    pub complexity_factor: f64,
    pub cost: CostRange,
    pub steps: Vec<WorkaroundStep>,
    pub safety_notes: Vec<String>,
}

impl WorkaroundTemplate {
    /// Selection priority of a category, `None` if not accepted
    pub fn priority(&self, category: Category) -> Option<usize> {
        self.accepts.iter().position(|c| *c == category)
    }
}

struct Draft {
    id: &'static str,
    name: &'static str,
    target: Category,
    description: &'static str,
    accepts: &'static [Category],
    components: (usize, usize),
    reliability_factor: f64,
    complexity_factor: f64,
    cost: (f64, f64),
    steps: &'static [(&'static str, f64)],
    safety_notes: &'static [&'static str],
}

impl Draft {
    fn build(self) -> WorkaroundTemplate {
        WorkaroundTemplate {
            id: self.id.to_string(),
            name: self.name.to_string(),
            target: self.target,
            description: self.description.to_string(),
            accepts: self.accepts.to_vec(),
            minimum_components: self.components.0,
            maximum_components: self.components.1,
            reliability_factor: self.reliability_factor,
            complexity_factor: self.complexity_factor,
            cost: CostRange {
                min: self.cost.0,
                max: self.cost.1,
            },
            steps: self
                .steps
                .iter()
                .map(|(description, duration_minutes)| WorkaroundStep {
                    description: (*description).to_string(),
                    duration_minutes: *duration_minutes,
                })
                .collect(),
            safety_notes: self.safety_notes.iter().map(|n| (*n).to_string()).collect(),
        }
    }
}

/// Built-in workaround templates keyed by target category
pub fn builtin_workaround_templates() -> HashMap<Category, Vec<WorkaroundTemplate>> {
    use Category::*;

    let drafts = vec![
        Draft {
            id: "graphics-dual-gpu",
            name: "Dual lower-tier graphics cards",
            target: Graphics,
            description: "Split rendering or compute load across two available cards",
            accepts: &[Graphics],
            components: (2, 3),
            reliability_factor: 0.75,
            complexity_factor: 0.6,
            cost: (300.0, 2500.0),
            steps: &[
                ("Install {component_1} in the primary PCIe x16 slot", 20.0),
                ("Install {component_2} in the secondary PCIe slot", 20.0),
                ("Route supplementary power to {component_1} and {component_2}", 15.0),
                ("Configure multi-GPU workload distribution in the driver", 30.0),
            ],
            safety_notes: &["Confirm the supply covers both cards' peak draw"],
        },
        Draft {
            id: "graphics-external-power",
            name: "Graphics card with dedicated supply",
            target: Graphics,
            description: "Run a substitute card from its own power supply",
            accepts: &[Graphics, PowerSupply],
            components: (2, 2),
            reliability_factor: 0.8,
            complexity_factor: 0.5,
            cost: (200.0, 2000.0),
            steps: &[
                ("Mount {component_1} and bridge its PCIe power to {component_2}", 25.0),
                ("Sync {component_2} power-on with an add2psu relay", 15.0),
            ],
            safety_notes: &["Both supplies must share a common ground"],
        },
        Draft {
            id: "processor-platform-swap",
            name: "Alternative processor platform",
            target: Processor,
            description: "Swap to an in-stock processor with a matching board and cooler",
            accepts: &[Processor, Motherboard, Cooling],
            components: (3, 3),
            reliability_factor: 0.85,
            complexity_factor: 0.55,
            cost: (300.0, 900.0),
            steps: &[
                ("Seat {component_1} in the socket of {component_2}", 15.0),
                ("Apply thermal paste and mount {component_3}", 20.0),
                ("Update the firmware of {component_2} for {component_1}", 20.0),
            ],
            safety_notes: &["Verify the board firmware supports the processor before first boot"],
        },
        Draft {
            id: "memory-mixed-modules",
            name: "Mixed memory modules",
            target: Memory,
            description: "Combine smaller modules to reach the required capacity",
            accepts: &[Memory],
            components: (2, 4),
            reliability_factor: 0.8,
            complexity_factor: 0.3,
            cost: (40.0, 400.0),
            steps: &[
                ("Install {component_1} in slot A2", 5.0),
                ("Install {component_2} in slot B2", 5.0),
                ("Set memory timings to the slowest module's profile", 15.0),
            ],
            safety_notes: &["Mixed voltages run at the highest module voltage"],
        },
        Draft {
            id: "storage-striped-array",
            name: "Striped storage array",
            target: Storage,
            description: "Stripe smaller drives to match capacity and throughput",
            accepts: &[Storage],
            components: (2, 4),
            reliability_factor: 0.7,
            complexity_factor: 0.45,
            cost: (60.0, 600.0),
            steps: &[
                ("Connect {component_1} and {component_2}", 15.0),
                ("Create a RAID 0 volume across the drives", 20.0),
                ("Restore data from backup onto the array", 60.0),
            ],
            safety_notes: &["Any single drive failure loses the whole array"],
        },
        Draft {
            id: "psu-dual-supply",
            name: "Dual power supplies",
            target: PowerSupply,
            description: "Split the load across two smaller supplies",
            accepts: &[PowerSupply],
            components: (2, 2),
            reliability_factor: 0.65,
            complexity_factor: 0.7,
            cost: (80.0, 300.0),
            steps: &[
                ("Mount {component_1} as the primary supply", 20.0),
                ("Mount {component_2} and link it with an add2psu relay", 25.0),
                ("Move graphics power leads to {component_2}", 15.0),
            ],
            safety_notes: &["Never connect outputs of the two supplies together"],
        },
        Draft {
            id: "cooling-fan-array",
            name: "Fan array",
            target: Cooling,
            description: "Replace a single cooler with several case fans",
            accepts: &[Cooling],
            components: (2, 4),
            reliability_factor: 0.9,
            complexity_factor: 0.25,
            cost: (10.0, 150.0),
            steps: &[
                ("Mount {component_1} as intake", 10.0),
                ("Mount {component_2} as exhaust", 10.0),
                ("Set a PWM fan curve in firmware", 10.0),
            ],
            safety_notes: &["Keep total fan current within the header rating"],
        },
        Draft {
            id: "networking-usb-fallback",
            name: "USB network fallback",
            target: Networking,
            description: "Use a USB network adapter in place of an internal card",
            accepts: &[Networking],
            components: (1, 2),
            reliability_factor: 0.85,
            complexity_factor: 0.2,
            cost: (10.0, 60.0),
            steps: &[
                ("Connect {component_1} to a USB 3 port", 5.0),
                ("Install the driver and set a static address", 10.0),
            ],
            safety_notes: &["Avoid unpowered hubs for sustained transfers"],
        },
    ];

    let mut by_category: HashMap<Category, Vec<WorkaroundTemplate>> = HashMap::new();
    for draft in drafts {
        let template = draft.build();
        by_category.entry(template.target).or_default().push(template);
    }
    by_category
}
