// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Free-text hardware specification parsing
//!
//! Turns a query such as `"Intel i7-12700K 3.6GHz LGA1700"` into a
//! `ComponentSpecification` plus a confidence score, ambiguity flags and
//! validation errors. Parsing never fails: unmatched fields stay at their
//! zero/empty defaults.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::catalog::PatternLibrary;
use crate::model::{
    Category, CompatibilitySpec, ComponentSpecification, Dimensions, ElectricalSpec, PhysicalSpec,
    UNKNOWN_PART_NUMBER,
};

const BASE_CONFIDENCE: f64 = 0.5;
const PART_NUMBER_BONUS: f64 = 0.3;
const CATEGORY_BONUS: f64 = 0.2;
const ELECTRICAL_BONUS: f64 = 0.2;
const COMPATIBILITY_BONUS: f64 = 0.1;

/// Parser output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub specification: ComponentSpecification,
    /// 0.0 to 1.0
    pub confidence: f64,
    pub ambiguities: Vec<String>,
    pub validation_errors: Vec<String>,
    /// One question per ambiguity
    pub clarification_prompts: Vec<String>,
    pub normalized_query: String,
}

impl ParseResult {
    pub fn is_ambiguous(&self) -> bool {
        !self.ambiguities.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.validation_errors.is_empty()
    }
}

/// A signed number with its matched unit
struct Measurement {
    value: f64,
    unit: String,
}

pub struct SpecificationParser<'a> {
    patterns: &'a PatternLibrary,
}

impl<'a> SpecificationParser<'a> {
    pub fn new(patterns: &'a PatternLibrary) -> Self {
        Self { patterns }
    }

    /// Parse a free-text query
    pub fn parse(&self, query: &str) -> ParseResult {
        let normalized = query.split_whitespace().collect::<Vec<_>>().join(" ");
        let lower = normalized.to_lowercase();

        let specification = ComponentSpecification {
            category: self.identify_category(&lower),
            part_number: self.extract_part_number(&normalized),
            electrical: self.extract_electrical(&lower),
            physical: self.extract_physical(&lower),
            compatibility: self.extract_compatibility(&lower),
            cores: self.extract_cores(&lower),
            capacity_gb: self.extract_capacity(&lower),
        };

        let confidence = confidence(&specification);
        let ambiguities = ambiguities(&specification);
        let validation_errors = validate(&specification);
        let clarification_prompts = ambiguities
            .iter()
            .map(|a| clarification_prompt(a, &specification))
            .collect();

        tracing::debug!(
            query = %normalized,
            category = %specification.category,
            part_number = %specification.part_number,
            confidence,
            "parsed specification"
        );

        ParseResult {
            specification,
            confidence,
            ambiguities,
            validation_errors,
            clarification_prompts,
            normalized_query: normalized,
        }
    }

    /// Category with the most pattern hits; ties and no hits give the default
    pub fn identify_category(&self, lower: &str) -> Category {
        let counts: Vec<(Category, usize)> = Category::ALL
            .iter()
            .map(|c| (*c, self.patterns.category_match_count(*c, lower)))
            .collect();

        let best = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
        if best == 0 {
            return Category::DEFAULT;
        }

        let mut leaders = counts.iter().filter(|(_, n)| *n == best);
        match (leaders.next(), leaders.next()) {
            (Some((category, _)), None) => *category,
            _ => Category::DEFAULT,
        }
    }

    /// First part-number pattern that yields a non-reserved token
    pub fn extract_part_number(&self, normalized: &str) -> String {
        for pattern in self.patterns.part_number_patterns() {
            for caps in pattern.captures_iter(normalized) {
                let Some(m) = caps.get(1) else { continue };
                let candidate = m.as_str().trim_end_matches(['.', '-', '/']);
                if candidate.len() < 2 || self.patterns.is_reserved_token(candidate) {
                    continue;
                }
                return candidate.to_string();
            }
        }
        UNKNOWN_PART_NUMBER.to_string()
    }

    fn extract_electrical(&self, lower: &str) -> ElectricalSpec {
        let frequency = measure(&self.patterns.frequency, lower)
            .map(|m| {
                if m.unit == "ghz" {
                    round3(m.value * 1000.0)
                } else {
                    m.value
                }
            })
            .unwrap_or(0.0);

        ElectricalSpec {
            voltage: measure(&self.patterns.voltage, lower).map_or(0.0, |m| m.value),
            current: measure(&self.patterns.current, lower).map_or(0.0, |m| m.value),
            frequency,
            power: measure(&self.patterns.power, lower).map_or(0.0, |m| m.value),
        }
    }

    fn extract_physical(&self, lower: &str) -> PhysicalSpec {
        let dimensions = self
            .patterns
            .dimensions
            .captures(lower)
            .map(|caps| {
                let field = |i: usize| {
                    caps.get(i)
                        .and_then(|m| m.as_str().parse::<f64>().ok())
                        .unwrap_or(0.0)
                };
                Dimensions {
                    length: field(1),
                    width: field(2),
                    height: field(3),
                }
            })
            .unwrap_or_default();

        // "wifi 5g" and "lte modem 4g" are network generations
        let wireless = self.patterns.wireless_context.is_match(lower);
        let weight = self
            .patterns
            .weight
            .captures_iter(lower)
            .filter_map(|caps| measurement(&caps))
            .find(|m| !(wireless && m.unit == "g" && is_network_generation(m.value)))
            .map(|m| if m.unit == "kg" { round3(m.value * 1000.0) } else { m.value })
            .unwrap_or(0.0);

        let form_factor = self
            .patterns
            .form_factor
            .captures(lower)
            .map(|caps| canonical_form_factor(&caps[1]))
            .unwrap_or_default();

        PhysicalSpec {
            dimensions,
            weight,
            form_factor,
        }
    }

    fn extract_compatibility(&self, lower: &str) -> CompatibilitySpec {
        let socket = self
            .patterns
            .socket
            .captures(lower)
            .map(|caps| caps[1].replace(' ', "").to_uppercase())
            .unwrap_or_default();

        let interface = self
            .patterns
            .match_interface(lower)
            .map(str::to_string)
            .unwrap_or_default();

        let pin_config = self
            .patterns
            .pin_config
            .captures(lower)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();

        CompatibilitySpec {
            socket,
            interface,
            pin_config,
        }
    }

    fn extract_cores(&self, lower: &str) -> u32 {
        self.patterns
            .cores
            .captures(lower)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(0)
    }

    fn extract_capacity(&self, lower: &str) -> f64 {
        let to_gb = |value: f64, unit: &str| if unit == "tb" { value * 1000.0 } else { value };

        if let Some(caps) = self.patterns.kit_capacity.captures(lower) {
            let modules: f64 = caps[1].parse().unwrap_or(1.0);
            let size: f64 = caps[2].parse().unwrap_or(0.0);
            return to_gb(modules * size, &caps[3]);
        }
        measure(&self.patterns.capacity, lower)
            .map(|m| to_gb(m.value, &m.unit))
            .unwrap_or(0.0)
    }
}

/// First match of a unit pattern, with a whitespace-separated minus applied
fn measure(pattern: &Regex, text: &str) -> Option<Measurement> {
    measurement(&pattern.captures(text)?)
}

fn measurement(caps: &Captures) -> Option<Measurement> {
    let magnitude: f64 = caps.get(2)?.as_str().parse().ok()?;
    let value = if caps.get(1).is_some() { -magnitude } else { magnitude };
    let unit = caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default();
    Some(Measurement { value, unit })
}

fn is_network_generation(value: f64) -> bool {
    (2.0..=6.0).contains(&value) && value.fract() == 0.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn canonical_form_factor(raw: &str) -> String {
    match raw {
        "sodimm" | "so-dimm" => "SO-DIMM".to_string(),
        "matx" | "micro-atx" => "MICRO-ATX".to_string(),
        other => other.to_uppercase(),
    }
}

/// Confidence from which fields were resolved, capped at 1.0
pub fn confidence(spec: &ComponentSpecification) -> f64 {
    let mut score = BASE_CONFIDENCE;
    if spec.has_part_number() {
        score += PART_NUMBER_BONUS;
    }
    if !spec.category.is_default() {
        score += CATEGORY_BONUS;
    }
    if spec.electrical.any_specified() {
        score += ELECTRICAL_BONUS;
    }
    if spec.compatibility.has_socket_or_interface() {
        score += COMPATIBILITY_BONUS;
    }
    score.clamp(0.0, 1.0)
}

pub const AMBIGUOUS_CATEGORY: &str = "category could not be determined and no part number was found";
pub const AMBIGUOUS_ELECTRICAL: &str = "no electrical characteristics were found";

fn ambiguities(spec: &ComponentSpecification) -> Vec<String> {
    let mut found = Vec::new();
    if spec.category.is_default() && !spec.has_part_number() {
        found.push(AMBIGUOUS_CATEGORY.to_string());
    }
    if !spec.electrical.any_specified() {
        found.push(AMBIGUOUS_ELECTRICAL.to_string());
    }
    found
}

fn clarification_prompt(ambiguity: &str, spec: &ComponentSpecification) -> String {
    if ambiguity == AMBIGUOUS_CATEGORY {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!(
            "What kind of component is this ({})? A part number also helps.",
            names.join(", ")
        )
    } else if ambiguity == AMBIGUOUS_ELECTRICAL {
        let hint = match spec.category {
            Category::Processor => "clock speed (e.g. 3.6GHz) or TDP",
            Category::Memory => "speed (e.g. 3200MHz) or voltage",
            Category::Graphics | Category::PowerSupply => "power draw in watts",
            _ => "voltage, frequency or power",
        };
        format!("Which electrical ratings apply? Please add the {}.", hint)
    } else {
        format!("Please clarify: {}", ambiguity)
    }
}

/// Field and category validation; an empty list means valid
pub fn validate(spec: &ComponentSpecification) -> Vec<String> {
    let mut errors = Vec::new();

    let numeric = [
        ("voltage", spec.electrical.voltage),
        ("current", spec.electrical.current),
        ("frequency", spec.electrical.frequency),
        ("power", spec.electrical.power),
        ("weight", spec.physical.weight),
        ("length", spec.physical.dimensions.length),
        ("width", spec.physical.dimensions.width),
        ("height", spec.physical.dimensions.height),
        ("capacity", spec.capacity_gb),
    ];
    for (field, value) in numeric {
        if value < 0.0 {
            errors.push(format!("{} cannot be negative ({})", field, value));
        }
    }

    match spec.category {
        Category::Processor if spec.electrical.frequency == 0.0 => {
            errors.push("processor requires a nonzero frequency".to_string());
        }
        Category::Memory if spec.compatibility.socket.is_empty() => {
            errors.push("memory requires a socket type (e.g. DDR4)".to_string());
        }
        Category::Graphics if spec.electrical.power == 0.0 => {
            errors.push("graphics card should declare its power draw".to_string());
        }
        _ => {}
    }

    errors
}
