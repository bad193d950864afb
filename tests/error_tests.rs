// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use partscout::api::failure;
use partscout::ScoutError;

#[test]
fn test_error_display() {
    assert_eq!(
        ScoutError::InvalidInput("quantity must be at least 1".to_string()).to_string(),
        "Invalid input: quantity must be at least 1"
    );
    assert_eq!(
        ScoutError::ComponentNotFound("gpu-x".to_string()).to_string(),
        "Component not found: gpu-x"
    );
    assert_eq!(
        ScoutError::UnknownOperation("teleport".to_string()).to_string(),
        "Unknown operation: teleport"
    );
}

#[test]
fn test_client_errors() {
    assert!(ScoutError::InvalidInput(String::new()).is_client_error());
    assert!(ScoutError::ComponentNotFound(String::new()).is_client_error());
    assert!(ScoutError::UnknownOperation(String::new()).is_client_error());
    assert!(!ScoutError::Config(String::new()).is_client_error());

    let io = ScoutError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
    assert!(!io.is_client_error());
}

#[test]
fn test_json_error_conversion() {
    let err: ScoutError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert!(matches!(err, ScoutError::Json(_)));
    assert!(err.to_string().starts_with("JSON error"));
}

#[test]
fn test_context_chain_reaches_scout_error() {
    use anyhow::Context;

    let result: partscout::Result<()> = Err(ScoutError::ComponentNotFound("cpu-x".to_string()));
    let err = result.context("search command failed").unwrap_err();
    assert_eq!(err.to_string(), "search command failed");
    assert_eq!(format!("{:#}", err), "search command failed: Component not found: cpu-x");
    assert!(err.chain().any(|cause| cause.downcast_ref::<ScoutError>().is_some()));
}

#[test]
fn test_failure_envelope() {
    let envelope = failure(&ScoutError::ComponentNotFound("cpu-x".to_string()));
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "Component not found: cpu-x");
    assert_eq!(envelope.as_object().unwrap().len(), 2);
}
