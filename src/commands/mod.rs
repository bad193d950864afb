// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each command calls the request API and renders its result as text or
//! pretty JSON on stdout.

pub mod adapters;
pub mod inventory;
pub mod search;
pub mod sourcing;
pub mod workarounds;

use serde::Serialize;

use crate::api::{serve_stdio, PartScout};
use crate::cli::{Commands, OutputFormat};
use crate::error::Result;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run one subcommand
pub fn run(scout: &PartScout, command: &Commands, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Search(args) => search::execute(scout, args, format),
        Commands::Parse(args) => search::execute_parse(scout, args, format),
        Commands::Authenticity(args) => sourcing::execute_authenticity(scout, args, format),
        Commands::GrayMarket(args) => sourcing::execute_gray_market(scout, args, format),
        Commands::Negotiate(args) => sourcing::execute_negotiate(scout, args, format),
        Commands::Adapters(args) => adapters::execute(scout, args, format),
        Commands::Wiring(args) => adapters::execute_wiring(scout, args, format),
        Commands::Workarounds(args) => workarounds::execute(scout, args, format),
        Commands::Inventory(args) => inventory::execute(scout, args, format),
        Commands::Serve => {
            serve_stdio(scout)?;
            Ok(())
        }
    }
}
