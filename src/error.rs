// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for partscout
//!
//! Engines are total functions and never return errors. Only the request
//! layer, settings IO and the CLI produce these.

use thiserror::Error;

/// Main error type for partscout operations
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Request payload is missing fields or carries invalid values
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A component id that is not in the catalog
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// An operation name the request layer does not know
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoutError {
    /// Whether the error was caused by the caller's request rather than the host.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ScoutError::InvalidInput(_)
                | ScoutError::ComponentNotFound(_)
                | ScoutError::UnknownOperation(_)
                | ScoutError::Json(_)
        )
    }
}

/// Result type alias for partscout operations
pub type Result<T> = std::result::Result<T, ScoutError>;
