// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Search and parse commands

use crate::api::PartScout;
use crate::cli::args::{OutputFormat, QueryArgs};
use crate::error::Result;
use crate::matcher::{MatchKind, SearchResult};
use crate::parser::ParseResult;

use super::print_json;

/// Execute the search command
pub fn execute(scout: &PartScout, args: &QueryArgs, format: OutputFormat) -> Result<()> {
    let results = scout.search(&args.text());
    match format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Text => {
            print!("{}", render_results(&results));
            Ok(())
        }
    }
}

/// Execute the parse command
pub fn execute_parse(scout: &PartScout, args: &QueryArgs, format: OutputFormat) -> Result<()> {
    let parsed = scout.parse(&args.text());
    match format {
        OutputFormat::Json => print_json(&parsed),
        OutputFormat::Text => {
            print!("{}", render_parse(&parsed));
            Ok(())
        }
    }
}

pub fn render_results(results: &[SearchResult]) -> String {
    let mut out = String::new();
    for result in results {
        match result.kind {
            MatchKind::Clarification => {
                out.push_str("Query needs clarification:\n");
                for prompt in &result.clarification_prompts {
                    out.push_str(&format!("  ? {}\n", prompt));
                }
            }
            MatchKind::Placeholder => {
                out.push_str("No matching components.\n");
                if !result.alternatives.is_empty() {
                    out.push_str("Closest alternatives:\n");
                    for alt in &result.alternatives {
                        out.push_str(&format!(
                            "  {:<28} {:>5.1}%  {}\n",
                            alt.component.id,
                            alt.compatibility_score * 100.0,
                            alt.component.name
                        ));
                    }
                }
            }
            MatchKind::PartNumber | MatchKind::Specification => {
                if let Some(component) = &result.component {
                    out.push_str(&format!(
                        "{:<28} compat {:>5.1}%  quality {:>5.1}%  {:<12} {}\n",
                        component.id,
                        result.compatibility_score * 100.0,
                        result.quality_score * 100.0,
                        component.availability,
                        component.name
                    ));
                }
            }
        }
        for error in &result.validation_errors {
            out.push_str(&format!("  ! {}\n", error));
        }
    }
    out
}

pub fn render_parse(parsed: &ParseResult) -> String {
    let spec = &parsed.specification;
    let mut out = String::new();
    out.push_str(&format!("Query:       {}\n", parsed.normalized_query));
    out.push_str(&format!("Category:    {}\n", spec.category));
    out.push_str(&format!("Part number: {}\n", spec.part_number));
    out.push_str(&format!("Confidence:  {:.2}\n", parsed.confidence));

    let e = &spec.electrical;
    let electrical: Vec<String> = [
        (e.voltage, "V"),
        (e.current, "A"),
        (e.frequency, "MHz"),
        (e.power, "W"),
    ]
    .iter()
    .filter(|(value, _)| *value != 0.0)
    .map(|(value, unit)| format!("{}{}", value, unit))
    .collect();
    if !electrical.is_empty() {
        out.push_str(&format!("Electrical:  {}\n", electrical.join(" ")));
    }

    let c = &spec.compatibility;
    for (label, value) in [
        ("Socket", &c.socket),
        ("Interface", &c.interface),
        ("Pins", &c.pin_config),
        ("Form factor", &spec.physical.form_factor),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("{:<12} {}\n", format!("{}:", label), value));
        }
    }
    for ambiguity in &parsed.ambiguities {
        out.push_str(&format!("  ~ {}\n", ambiguity));
    }
    for prompt in &parsed.clarification_prompts {
        out.push_str(&format!("  ? {}\n", prompt));
    }
    for error in &parsed.validation_errors {
        out.push_str(&format!("  ! {}\n", error));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_parse_lists_fields() {
        let scout = PartScout::builtin();
        let text = render_parse(&scout.parse("Intel i7-12700K 3.6GHz LGA1700"));
        assert!(text.contains("Category:    processor"));
        assert!(text.contains("3600MHz"));
        assert!(text.contains("LGA1700"));
    }

    #[test]
    fn test_render_results_shows_matches() {
        let scout = PartScout::builtin();
        let text = render_results(&scout.search("DDR4 16GB 3200MHz DIMM"));
        assert!(text.contains("mem-ddr4-16-3200"));
    }

    #[test]
    fn test_render_clarification() {
        let scout = PartScout::builtin();
        let text = render_results(&scout.search(""));
        assert!(text.contains("clarification"));
    }
}
