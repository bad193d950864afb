// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Workarounds command

use crate::api::PartScout;
use crate::cli::args::{OutputFormat, WorkaroundsArgs};
use crate::error::Result;
use crate::workaround::WorkaroundSolution;

use super::print_json;

/// Execute the workarounds command
pub fn execute(scout: &PartScout, args: &WorkaroundsArgs, format: OutputFormat) -> Result<()> {
    let solutions = scout.workarounds(&args.component, args.available.as_deref())?;
    match format {
        OutputFormat::Json => print_json(&solutions),
        OutputFormat::Text => {
            print!("{}", render_solutions(&args.component, &solutions));
            Ok(())
        }
    }
}

pub fn render_solutions(target: &str, solutions: &[WorkaroundSolution]) -> String {
    if solutions.is_empty() {
        return format!("No workarounds available for '{}'.\n", target);
    }
    let mut out = String::new();
    for (i, solution) in solutions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} [{}]{}\n",
            solution.name,
            solution.template_id,
            if solution.safety.safe { "" } else { " UNSAFE" }
        ));
        out.push_str(&format!(
            "  reliability {:.2}  complexity {:.2}  ${:.2}  ~{:.0} min\n",
            solution.reliability, solution.complexity, solution.total_cost, solution.estimated_minutes
        ));
        let parts: Vec<&str> = solution.components.iter().map(|c| c.id.as_str()).collect();
        out.push_str(&format!("  parts: {}\n", parts.join(", ")));
        for failure in solution.safety.failures() {
            out.push_str(&format!("  ! {}\n", failure));
        }
        for step in &solution.instructions {
            out.push_str(&format!("  {}. {}\n", step.order, step.description));
        }
    }
    out
}
