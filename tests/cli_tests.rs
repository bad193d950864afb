// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use partscout::api::PartScout;
use partscout::cli::{Cli, Commands, OutputFormat};
use partscout::commands;

#[test]
fn test_parse_search_command() {
    let cli = Cli::try_parse_from(["partscout", "search", "DDR4", "16GB", "3200MHz"])
        .expect("Valid command parsing");
    if let Commands::Search(args) = cli.command {
        assert_eq!(args.text(), "DDR4 16GB 3200MHz");
    } else {
        panic!("Expected Search command");
    }
}

#[test]
fn test_parse_negotiate_with_budget() {
    let cli = Cli::try_parse_from([
        "partscout",
        "negotiate",
        "cpu-i7-12700k",
        "-q",
        "25",
        "--vendor",
        "techsource-direct",
        "--budget",
        "5000",
    ])
    .expect("Valid command parsing");
    if let Commands::Negotiate(args) = cli.command {
        assert_eq!(args.quantity, 25);
        assert_eq!(args.vendor.as_deref(), Some("techsource-direct"));
        assert_eq!(args.budget, Some(5000.0));
        assert_eq!(args.month, None);
    } else {
        panic!("Expected Negotiate command");
    }
}

#[test]
fn test_parse_json_format() {
    let cli = Cli::try_parse_from(["partscout", "--format", "json", "ls"]).expect("Valid command parsing");
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(matches!(cli.command, Commands::Inventory(_)));
}

#[test]
fn test_parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["partscout", "--format", "yaml", "ls"]).is_err());
}

#[test]
fn test_parse_serve() {
    let cli = Cli::try_parse_from(["partscout", "serve"]).expect("Valid command parsing");
    assert!(matches!(cli.command, Commands::Serve));
}

#[test]
fn test_run_text_commands() {
    let scout = PartScout::builtin();
    for argv in [
        vec!["partscout", "search", "i7-12700K"],
        vec!["partscout", "parse", "Intel", "i7-12700K", "3.6GHz"],
        vec!["partscout", "authenticity", "cpu-i7-12700k", "-w", "70"],
        vec!["partscout", "gray", "gpu-rtx-4090"],
        vec!["partscout", "negotiate", "mem-ddr4-16-3200", "-q", "10", "-m", "9"],
        vec!["partscout", "adapters", "serial"],
        vec!["partscout", "wiring", "usb-serial-ftdi"],
        vec!["partscout", "workarounds", "mem-ddr5-32-6000"],
        vec!["partscout", "inventory", "-c", "psu"],
    ] {
        let cli = Cli::try_parse_from(argv.clone()).expect("Valid command parsing");
        assert!(
            commands::run(&scout, &cli.command, cli.format).is_ok(),
            "command failed: {:?}",
            argv
        );
    }
}

#[test]
fn test_run_reports_unknown_component() {
    let scout = PartScout::builtin();
    let cli = Cli::try_parse_from(["partscout", "gray-market", "cpu-missing"]).expect("Valid command parsing");
    let err = commands::run(&scout, &cli.command, OutputFormat::Json).unwrap_err();
    assert!(err.to_string().contains("cpu-missing"));
}
