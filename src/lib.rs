// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! PartScout - hardware component sourcing and compatibility analysis.
//!
//! This crate exposes the shared engine used by:
//! - the `partscout` CLI (`src/main.rs`)
//! - the line-delimited JSON request API (`partscout serve`)
//!
//! Architecture highlights:
//! - `parser`: free-text hardware queries into structured specifications
//! - `scoring`: the weighted score contract shared by every engine
//! - `catalog`: built-in inventory, pattern library and reference tables
//! - `matcher`, `authenticity`, `graymarket`, `negotiation`: sourcing engines
//! - `adapters`, `workaround`: legacy-port bridging and substitute builds
//! - `api`: operation dispatch and the response envelope

pub mod adapters;
pub mod api;
pub mod authenticity;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod graymarket;
pub mod matcher;
pub mod model;
pub mod negotiation;
pub mod parser;
pub mod scoring;
pub mod workaround;

pub use error::{Result, ScoutError};
