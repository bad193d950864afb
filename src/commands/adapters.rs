// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Adapter and wiring commands

use crate::adapters::AdapterRecommendation;
use crate::api::PartScout;
use crate::catalog::WiringDiagram;
use crate::cli::args::{AdaptersArgs, OutputFormat, WiringArgs};
use crate::error::Result;

use super::print_json;

/// Execute the adapters command
pub fn execute(scout: &PartScout, args: &AdaptersArgs, format: OutputFormat) -> Result<()> {
    let adapters = scout.adapters(&args.port, args.component.as_deref())?;
    match format {
        OutputFormat::Json => print_json(&adapters),
        OutputFormat::Text => {
            print!("{}", render_adapters(&args.port, &adapters));
            Ok(())
        }
    }
}

/// Execute the wiring command
pub fn execute_wiring(scout: &PartScout, args: &WiringArgs, format: OutputFormat) -> Result<()> {
    let diagram = scout.wiring_diagram(&args.template);
    match format {
        OutputFormat::Json => print_json(&diagram),
        OutputFormat::Text => {
            print!("{}", render_wiring(&diagram));
            Ok(())
        }
    }
}

pub fn render_adapters(port: &str, adapters: &[AdapterRecommendation]) -> String {
    if adapters.is_empty() {
        return format!("No adapters known for '{}'.\n", port);
    }
    let mut out = String::new();
    for adapter in adapters {
        out.push_str(&format!(
            "{:<24} {:<12} {:>5.1}%  reliability {:.2}  ${:.0}-{:.0}\n",
            adapter.template_id,
            adapter.band,
            adapter.compatibility_percent,
            adapter.reliability,
            adapter.cost.min,
            adapter.cost.max
        ));
        out.push_str(&format!("  {} -> {}\n", adapter.name, adapter.target_interface));
        if adapter.power_uncertain {
            out.push_str("  power draw unknown, reliability reduced\n");
        }
    }
    out
}

pub fn render_wiring(diagram: &WiringDiagram) -> String {
    let mut out = format!("{}\n", diagram.title);
    for wire in &diagram.connections {
        out.push_str(&format!("  {:<20} -> {:<20} {}\n", wire.from, wire.to, wire.signal));
    }
    for note in &diagram.notes {
        out.push_str(&format!("  * {}\n", note));
    }
    out
}
