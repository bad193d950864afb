// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for partscout.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// partscout - hardware part search and sourcing analysis
#[derive(Parser, Debug)]
#[command(name = "partscout")]
#[command(version, about = "Hardware part search and sourcing analysis")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path (defaults to $PARTSCOUT_HOME/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the inventory with a free-text specification
    #[command(alias = "find")]
    Search(QueryArgs),

    /// Show how a free-text specification is parsed
    Parse(QueryArgs),

    /// Assess whether a component is genuine
    Authenticity(AuthenticityArgs),

    /// Estimate gray-market pricing, delivery and risk
    #[command(alias = "gray")]
    GrayMarket(ComponentArgs),

    /// Calculate a negotiated price
    Negotiate(NegotiateArgs),

    /// Find adapters for a legacy port
    Adapters(AdaptersArgs),

    /// Show the wiring diagram for an adapter template
    Wiring(WiringArgs),

    /// Compose multi-component workarounds for a part
    Workarounds(WorkaroundsArgs),

    /// List inventory components
    #[command(alias = "ls")]
    Inventory(InventoryArgs),

    /// Serve line-delimited JSON requests on stdin/stdout
    Serve,
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Search(_) => "search",
            Commands::Parse(_) => "parse",
            Commands::Authenticity(_) => "authenticity",
            Commands::GrayMarket(_) => "gray-market",
            Commands::Negotiate(_) => "negotiate",
            Commands::Adapters(_) => "adapters",
            Commands::Wiring(_) => "wiring",
            Commands::Workarounds(_) => "workarounds",
            Commands::Inventory(_) => "inventory",
            Commands::Serve => "serve",
        }
    }
}

/// A free-text specification query
#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    /// Query text, e.g. "Intel i7-12700K 3.6GHz LGA1700"
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

impl QueryArgs {
    pub fn text(&self) -> String {
        self.query.join(" ")
    }
}

/// A single component id
#[derive(clap::Args, Debug)]
pub struct ComponentArgs {
    /// Inventory component id
    pub component: String,
}

/// Arguments for the authenticity subcommand
#[derive(clap::Args, Debug)]
pub struct AuthenticityArgs {
    /// Inventory component id
    pub component: String,

    /// Measured weight in grams
    #[arg(short, long)]
    pub weight: Option<f64>,
}

/// Arguments for the negotiate subcommand
#[derive(clap::Args, Debug)]
pub struct NegotiateArgs {
    /// Inventory component id
    pub component: String,

    /// Number of units
    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,

    /// Vendor id for the vendor bonus
    #[arg(long)]
    pub vendor: Option<String>,

    /// Budget to optimize the quantity against
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// Month (1-12); defaults to the current month
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

/// Arguments for the adapters subcommand
#[derive(clap::Args, Debug)]
pub struct AdaptersArgs {
    /// Legacy port, e.g. serial, ps2, ide, vga
    pub port: String,

    /// Modern component id the adapter attaches to
    #[arg(short, long)]
    pub component: Option<String>,
}

/// Arguments for the wiring subcommand
#[derive(clap::Args, Debug)]
pub struct WiringArgs {
    /// Adapter template id
    pub template: String,
}

/// Arguments for the workarounds subcommand
#[derive(clap::Args, Debug)]
pub struct WorkaroundsArgs {
    /// Component id to replace
    pub component: String,

    /// Components to build from (defaults to everything in stock)
    #[arg(short, long, value_delimiter = ',')]
    pub available: Option<Vec<String>>,
}

/// Arguments for the inventory subcommand
#[derive(clap::Args, Debug)]
pub struct InventoryArgs {
    /// Only list this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Output format for responses
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
