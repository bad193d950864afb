// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Multi-component workarounds for parts that cannot be sourced
//!
//! Each workaround template names the categories it can assemble from. The
//! composer fills a template from the available inventory, scores the result
//! and attaches a safety report plus step-by-step instructions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, WorkaroundTemplate};
use crate::config::WorkaroundConfig;
use crate::model::{AuthenticityLevel, Category, Component, ComponentRef};
use crate::scoring::ScoreScale;

const PREPARATION_MINUTES: f64 = 15.0;
const TESTING_MINUTES: f64 = 30.0;
const INSTALLATION_MINUTES: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionPhase {
    Preparation,
    Assembly,
    Testing,
    Installation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionStep {
    /// 1-based
    pub order: usize,
    pub phase: InstructionPhase,
    pub description: String,
    pub duration_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyCheck {
    pub passed: bool,
    pub detail: String,
}

impl SafetyCheck {
    fn new(passed: bool, detail: String) -> Self {
        Self { passed, detail }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyReport {
    pub safe: bool,
    pub electrical: SafetyCheck,
    pub thermal: SafetyCheck,
    pub mechanical: SafetyCheck,
    pub compatibility: SafetyCheck,
}

impl SafetyReport {
    /// Details of the checks that failed
    pub fn failures(&self) -> Vec<&str> {
        [&self.electrical, &self.thermal, &self.mechanical, &self.compatibility]
            .into_iter()
            .filter(|c| !c.passed)
            .map(|c| c.detail.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkaroundSolution {
    pub template_id: String,
    pub name: String,
    pub description: String,
    pub target: ComponentRef,
    pub components: Vec<ComponentRef>,
    /// 0.0 to 1.0
    pub reliability: f64,
    /// 0.0 to 1.0
    pub complexity: f64,
    pub total_cost: f64,
    pub estimated_minutes: f64,
    pub safety: SafetyReport,
    pub instructions: Vec<InstructionStep>,
    pub safety_notes: Vec<String>,
}

pub struct WorkaroundComposer<'a> {
    catalog: &'a Catalog,
    config: &'a WorkaroundConfig,
}

impl<'a> WorkaroundComposer<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a WorkaroundConfig) -> Self {
        Self { catalog, config }
    }

    /// Workarounds for `target` assembled from `available`, best first
    pub fn find_alternatives(&self, target: &Component, available: &[&Component]) -> Vec<WorkaroundSolution> {
        let templates = self.catalog.workaround_templates(target.category());
        if templates.is_empty() {
            tracing::debug!(component = %target.id, category = %target.category(), "no workaround templates");
            return Vec::new();
        }

        let mut solutions: Vec<WorkaroundSolution> = templates
            .iter()
            .filter_map(|template| {
                let selected = select_components(template, target, available)?;
                Some(self.compose(template, target, &selected))
            })
            .collect();

        solutions.sort_by(|a, b| {
            b.reliability
                .total_cmp(&a.reliability)
                .then(a.complexity.total_cmp(&b.complexity))
                .then(a.total_cost.total_cmp(&b.total_cost))
        });

        tracing::debug!(
            component = %target.id,
            templates = templates.len(),
            solutions = solutions.len(),
            "composed workarounds"
        );
        solutions
    }

    fn compose(&self, template: &WorkaroundTemplate, target: &Component, selected: &[&Component]) -> WorkaroundSolution {
        let count = selected.len();
        let extra = count.saturating_sub(template.minimum_components) as f64;
        let distinct: HashSet<Category> = selected.iter().map(|c| c.category()).collect();

        let authenticity = selected
            .iter()
            .map(|c| c.authenticity.workaround_factor())
            .sum::<f64>()
            / count as f64;
        let reliability = ScoreScale::Unit.clamp(
            template.reliability_factor * authenticity * self.config.degradation,
        );
        let complexity = ScoreScale::Unit.clamp(
            template.complexity_factor
                + 0.1 * extra
                + 0.05 * distinct.len().saturating_sub(1) as f64,
        );
        let total_cost = selected.iter().map(|c| c.pricing.base_price()).sum::<f64>()
            + self.config.tools_cost
            + self.config.materials_cost;
        let step_minutes: f64 = template.steps.iter().map(|s| s.duration_minutes).sum();

        WorkaroundSolution {
            template_id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            target: target.summary(),
            components: selected.iter().map(|c| c.summary()).collect(),
            reliability,
            complexity,
            total_cost,
            estimated_minutes: step_minutes * (1.0 + 0.2 * extra),
            safety: self.validate_safety(selected),
            instructions: self.generate_instructions(template, selected),
            safety_notes: template.safety_notes.clone(),
        }
    }

    /// Electrical, thermal, mechanical and compatibility checks over a component set
    pub fn validate_safety(&self, components: &[&Component]) -> SafetyReport {
        let voltages: Vec<f64> = components
            .iter()
            .map(|c| c.specification.electrical.voltage)
            .filter(|v| *v > 0.0)
            .collect();
        let voltage_ratio = match (
            voltages.iter().copied().reduce(f64::max),
            voltages.iter().copied().reduce(f64::min),
        ) {
            (Some(max), Some(min)) => max / min,
            _ => 1.0,
        };
        let total_current: f64 = components.iter().map(|c| c.specification.electrical.current).sum();
        let electrical = SafetyCheck::new(
            voltage_ratio <= self.config.max_voltage_ratio && total_current <= self.config.max_total_current,
            format!(
                "voltage ratio {:.2} (max {:.2}), total current {:.1}A (max {:.1}A)",
                voltage_ratio, self.config.max_voltage_ratio, total_current, self.config.max_total_current
            ),
        );

        let total_power: f64 = components.iter().map(|c| c.specification.electrical.power).sum();
        let coolers = components
            .iter()
            .filter(|c| c.category() == Category::Cooling)
            .count();
        let capacity = coolers as f64 * self.config.watts_per_cooler;
        let thermal = SafetyCheck::new(
            total_power <= capacity,
            format!(
                "total power {:.1}W against {} cooling component(s) rated {:.0}W",
                total_power, coolers, capacity
            ),
        );

        let total_weight: f64 = components.iter().map(|c| c.specification.physical.weight).sum();
        let mechanical = SafetyCheck::new(
            total_weight < self.config.max_total_weight,
            format!(
                "total weight {:.0}g (limit {:.0}g)",
                total_weight, self.config.max_total_weight
            ),
        );

        let undeclared: Vec<&str> = components
            .iter()
            .filter(|c| c.specification.compatibility.interface.is_empty())
            .map(|c| c.id.as_str())
            .collect();
        let compatibility = SafetyCheck::new(
            undeclared.is_empty(),
            if undeclared.is_empty() {
                "every component declares an interface".to_string()
            } else {
                format!("no interface declared for {}", undeclared.join(", "))
            },
        );

        let safe = electrical.passed && thermal.passed && mechanical.passed && compatibility.passed;
        if !safe {
            tracing::debug!(components = components.len(), "workaround failed safety validation");
        }
        SafetyReport {
            safe,
            electrical,
            thermal,
            mechanical,
            compatibility,
        }
    }

    /// Preparation, the template's steps with component names filled in, testing and installation
    pub fn generate_instructions(&self, template: &WorkaroundTemplate, components: &[&Component]) -> Vec<InstructionStep> {
        let mut steps = Vec::with_capacity(template.steps.len() + 3);
        steps.push((
            InstructionPhase::Preparation,
            "Power down, disconnect mains and ground yourself before handling components".to_string(),
            PREPARATION_MINUTES,
        ));
        for step in &template.steps {
            steps.push((
                InstructionPhase::Assembly,
                fill_placeholders(&step.description, components),
                step.duration_minutes,
            ));
        }
        steps.push((
            InstructionPhase::Testing,
            "Bench test the assembly and monitor voltages and temperatures under load".to_string(),
            TESTING_MINUTES,
        ));
        steps.push((
            InstructionPhase::Installation,
            "Install the assembly in the target system and label the modified wiring".to_string(),
            INSTALLATION_MINUTES,
        ));

        steps
            .into_iter()
            .enumerate()
            .map(|(i, (phase, description, duration_minutes))| InstructionStep {
                order: i + 1,
                phase,
                description,
                duration_minutes,
            })
            .collect()
    }
}

/// Pick components for a template. Every accepted category must contribute
/// one part; remaining slots up to the maximum go by priority, OEM first,
/// then cheapest. `None` when the template cannot be filled.
fn select_components<'c>(
    template: &WorkaroundTemplate,
    target: &Component,
    available: &[&'c Component],
) -> Option<Vec<&'c Component>> {
    let rank = |c: &Component| {
        (
            template.priority(c.category()).unwrap_or(usize::MAX),
            c.authenticity != AuthenticityLevel::Oem,
        )
    };

    let mut candidates: Vec<&'c Component> = available
        .iter()
        .copied()
        .filter(|c| c.id != target.id && template.priority(c.category()).is_some())
        .collect();
    candidates.sort_by(|a, b| {
        rank(*a)
            .cmp(&rank(*b))
            .then(a.pricing.base_price().total_cmp(&b.pricing.base_price()))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut selected: Vec<&'c Component> = Vec::new();
    for category in &template.accepts {
        let first = candidates.iter().find(|c| c.category() == *category)?;
        selected.push(*first);
    }
    for candidate in &candidates {
        if selected.len() >= template.maximum_components {
            break;
        }
        if !selected.iter().any(|s| s.id == candidate.id) {
            selected.push(*candidate);
        }
    }
    selected.truncate(template.maximum_components);

    if selected.len() < template.minimum_components {
        return None;
    }
    selected.sort_by_key(|c| {
        candidates
            .iter()
            .position(|candidate| candidate.id == c.id)
            .unwrap_or(usize::MAX)
    });
    Some(selected)
}

/// Replace `{component_N}` (1-based) with component names
fn fill_placeholders(text: &str, components: &[&Component]) -> String {
    components
        .iter()
        .enumerate()
        .fold(text.to_string(), |acc, (i, c)| {
            acc.replace(&format!("{{component_{}}}", i + 1), &c.name)
        })
}
