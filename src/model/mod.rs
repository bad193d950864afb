// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Core data model: component specifications, inventory components and the
//! closed enums every engine maps over.

pub mod component;
pub mod kinds;

pub use component::*;
pub use kinds::*;
