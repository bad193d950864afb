// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Inventory listing command

use crate::api::PartScout;
use crate::cli::args::{InventoryArgs, OutputFormat};
use crate::error::{Result, ScoutError};
use crate::model::{Category, Component};

use super::print_json;

/// Execute the inventory command
pub fn execute(scout: &PartScout, args: &InventoryArgs, format: OutputFormat) -> Result<()> {
    let components = select(scout, args.category.as_deref())?;
    match format {
        OutputFormat::Json => print_json(&components),
        OutputFormat::Text => {
            print!("{}", render_inventory(&components));
            Ok(())
        }
    }
}

/// Components, optionally limited to one category
pub fn select<'a>(scout: &'a PartScout, category: Option<&str>) -> Result<Vec<&'a Component>> {
    match category {
        Some(name) => {
            let category = Category::from_name(name)
                .ok_or_else(|| ScoutError::InvalidInput(format!("unknown category '{}'", name)))?;
            Ok(scout.catalog().components_in(category).collect())
        }
        None => Ok(scout.catalog().inventory().iter().collect()),
    }
}

pub fn render_inventory(components: &[&Component]) -> String {
    let mut out = String::new();
    for component in components {
        out.push_str(&format!(
            "{:<28} {:<13} {:<11} {:<13} ${:>8.2}  {}\n",
            component.id,
            component.category(),
            component.authenticity,
            component.availability,
            component.pricing.base_price(),
            component.name
        ));
    }
    out
}
