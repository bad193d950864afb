// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Request API
//!
//! Transport-agnostic dispatch of named operations with JSON payloads, plus
//! a line-delimited stdio transport.

pub mod protocol;
pub mod service;
pub mod transport;

pub use protocol::*;
pub use service::*;
pub use transport::*;
