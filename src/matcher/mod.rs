// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Inventory matching and ranking
//!
//! A query is parsed, inventory is filtered against the parsed
//! specification, and survivors are ranked by compatibility, then quality,
//! then availability. Ambiguous queries produce a clarification result and
//! empty searches produce a placeholder with alternatives.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::authenticity::AuthenticityAssessor;
use crate::catalog::Catalog;
use crate::config::{MatchingConfig, Settings};
use crate::model::{Component, ComponentRef, ComponentSpecification};
use crate::parser::{ParseResult, SpecificationParser};
use crate::scoring::{relative_error, ScoreEntry, ScoreScale, ScoringResult, WeightedScore};

/// How a result was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Part-number substring hit
    PartNumber,
    /// Passed the electrical and compatibility filters
    Specification,
    /// Nothing matched; see alternatives
    Placeholder,
    /// Query too ambiguous to search
    Clarification,
}

/// A near miss offered when nothing matched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub component: ComponentRef,
    pub compatibility_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub kind: MatchKind,
    pub component: Option<Component>,
    /// 0.0 to 1.0
    pub compatibility_score: f64,
    /// 0.0 to 1.0
    pub quality_score: f64,
    pub availability_rank: u8,
    pub breakdown: Vec<ScoreEntry>,
    pub clarification_prompts: Vec<String>,
    pub alternatives: Vec<Alternative>,
    pub validation_errors: Vec<String>,
}

impl SearchResult {
    fn empty(kind: MatchKind, parsed: &ParseResult) -> Self {
        Self {
            kind,
            component: None,
            compatibility_score: 0.0,
            quality_score: 0.0,
            availability_rank: 0,
            breakdown: Vec::new(),
            clarification_prompts: Vec::new(),
            alternatives: Vec::new(),
            validation_errors: parsed.validation_errors.clone(),
        }
    }

    /// Ranking order: compatibility, quality, availability, all descending
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .compatibility_score
            .total_cmp(&self.compatibility_score)
            .then(other.quality_score.total_cmp(&self.quality_score))
            .then(other.availability_rank.cmp(&self.availability_rank))
    }
}

pub struct InventoryMatcher<'a> {
    catalog: &'a Catalog,
    config: &'a MatchingConfig,
    assessor: AuthenticityAssessor<'a>,
}

impl<'a> InventoryMatcher<'a> {
    pub fn new(catalog: &'a Catalog, settings: &'a Settings) -> Self {
        Self {
            catalog,
            config: &settings.matching,
            assessor: AuthenticityAssessor::new(catalog, &settings.quality),
        }
    }

    /// Parse a query and search the inventory
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let parsed = SpecificationParser::new(self.catalog.patterns()).parse(query);
        self.search_parsed(&parsed)
    }

    /// Search with an already-parsed query
    pub fn search_parsed(&self, parsed: &ParseResult) -> Vec<SearchResult> {
        if parsed.is_ambiguous() {
            tracing::debug!(query = %parsed.normalized_query, "query is ambiguous");
            let mut result = SearchResult::empty(MatchKind::Clarification, parsed);
            result.clarification_prompts = parsed.clarification_prompts.clone();
            return vec![result];
        }

        let spec = &parsed.specification;
        let mut results: Vec<SearchResult> = self
            .catalog
            .inventory()
            .iter()
            .filter_map(|candidate| self.filter(spec, candidate).map(|kind| (kind, candidate)))
            .map(|(kind, candidate)| self.score_candidate(kind, spec, candidate, parsed))
            .collect();

        tracing::debug!(
            query = %parsed.normalized_query,
            category = %spec.category,
            matches = results.len(),
            "searched inventory"
        );

        if results.is_empty() {
            let mut placeholder = SearchResult::empty(MatchKind::Placeholder, parsed);
            placeholder.alternatives = self.alternatives(spec);
            return vec![placeholder];
        }

        results.sort_by(SearchResult::rank_cmp);
        results
    }

    /// Filter predicate; `None` rejects the candidate
    pub fn filter(&self, spec: &ComponentSpecification, candidate: &Component) -> Option<MatchKind> {
        let other = &candidate.specification;
        if other.category != spec.category {
            return None;
        }

        if spec.has_part_number() && other.has_part_number() {
            let wanted = spec.part_number.to_lowercase();
            let have = other.part_number.to_lowercase();
            // One-way: "XRM1000" must not match a catalog "RM1"
            if have.contains(&wanted) {
                return Some(MatchKind::PartNumber);
            }
        }

        let tolerance = self.config.electrical_tolerance;
        let electrical = [
            (spec.electrical.voltage, other.electrical.voltage),
            (spec.electrical.current, other.electrical.current),
            (spec.electrical.frequency, other.electrical.frequency),
            (spec.electrical.power, other.electrical.power),
        ];
        for (wanted, have) in electrical {
            if wanted != 0.0 && relative_error(wanted, have) > tolerance {
                return None;
            }
        }

        let compatibility = [
            (&spec.compatibility.socket, &other.compatibility.socket),
            (&spec.compatibility.interface, &other.compatibility.interface),
            (&spec.compatibility.pin_config, &other.compatibility.pin_config),
        ];
        for (wanted, have) in compatibility {
            if !wanted.is_empty() && !wanted.eq_ignore_ascii_case(have) {
                return None;
            }
        }

        Some(MatchKind::Specification)
    }

    /// Weighted compatibility of a candidate with the query (0-1)
    pub fn compatibility_score(&self, spec: &ComponentSpecification, candidate: &Component) -> ScoringResult {
        let other = &candidate.specification;
        let mut score = WeightedScore::new();

        score.add(
            "category",
            self.config.category_weight,
            if other.category == spec.category { 1.0 } else { 0.0 },
        );

        let electrical: Vec<(&str, f64, f64)> = [
            ("voltage", spec.electrical.voltage, other.electrical.voltage),
            ("frequency", spec.electrical.frequency, other.electrical.frequency),
            ("power", spec.electrical.power, other.electrical.power),
        ]
        .into_iter()
        .filter(|(_, wanted, _)| *wanted != 0.0)
        .collect();
        if electrical.is_empty() {
            score.skip("electrical", self.config.electrical_weight);
        } else {
            let share = self.config.electrical_weight / electrical.len() as f64;
            for (label, wanted, have) in electrical {
                let achieved = 1.0 - relative_error(wanted, have).min(1.0);
                score.add(format!("electrical.{}", label), share, achieved);
            }
        }

        let compatibility: Vec<(&str, &String, &String)> = [
            ("socket", &spec.compatibility.socket, &other.compatibility.socket),
            ("interface", &spec.compatibility.interface, &other.compatibility.interface),
        ]
        .into_iter()
        .filter(|(_, wanted, _)| !wanted.is_empty())
        .collect();
        if compatibility.is_empty() {
            score.skip("compatibility", self.config.compatibility_weight);
        } else {
            let share = self.config.compatibility_weight / compatibility.len() as f64;
            for (label, wanted, have) in compatibility {
                let achieved = if wanted.eq_ignore_ascii_case(have) { 1.0 } else { 0.0 };
                score.add(format!("compatibility.{}", label), share, achieved);
            }
        }

        score.finish(ScoreScale::Unit)
    }

    fn score_candidate(
        &self,
        kind: MatchKind,
        spec: &ComponentSpecification,
        candidate: &Component,
        parsed: &ParseResult,
    ) -> SearchResult {
        let compatibility = self.compatibility_score(spec, candidate);
        let quality = ScoreScale::Percent.to_unit(self.assessor.score(candidate));

        SearchResult {
            kind,
            component: Some(candidate.clone()),
            compatibility_score: compatibility.score,
            quality_score: quality,
            availability_rank: candidate.availability.rank(),
            breakdown: compatibility.breakdown,
            clarification_prompts: Vec::new(),
            alternatives: Vec::new(),
            validation_errors: parsed.validation_errors.clone(),
        }
    }

    /// Same-category candidates above the alternative threshold, best first
    pub fn alternatives(&self, spec: &ComponentSpecification) -> Vec<Alternative> {
        let mut alternatives: Vec<Alternative> = self
            .catalog
            .components_in(spec.category)
            .map(|candidate| Alternative {
                component: candidate.summary(),
                compatibility_score: self.compatibility_score(spec, candidate).score,
            })
            .filter(|a| a.compatibility_score >= self.config.alternative_threshold)
            .collect();

        alternatives.sort_by(|a, b| b.compatibility_score.total_cmp(&a.compatibility_score));
        alternatives.truncate(self.config.max_alternatives);
        alternatives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn search(query: &str) -> Vec<SearchResult> {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        InventoryMatcher::new(&catalog, &settings).search(query)
    }

    #[test]
    fn test_part_number_search_ranks_oem_first() {
        let results = search("Intel i7-12700K 3.6GHz LGA1700");
        assert!(results.len() >= 3);
        let first = results[0].component.as_ref().unwrap();
        assert_eq!(first.id, "cpu-i7-12700k");
        assert_eq!(results[0].kind, MatchKind::PartNumber);
        assert_eq!(results[0].compatibility_score, 1.0);
        assert!(results
            .iter()
            .all(|r| r.component.as_ref().unwrap().category() == Category::Processor));
    }

    #[test]
    fn test_results_are_sorted() {
        let results = search("Intel i7-12700K 3.6GHz LGA1700");
        for pair in results.windows(2) {
            assert_ne!(pair[0].rank_cmp(&pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn test_specification_match_within_tolerance() {
        let results = search("DDR4 3200MHz memory");
        let ids: Vec<&str> = results
            .iter()
            .map(|r| r.component.as_ref().unwrap().id.as_str())
            .collect();
        assert!(ids.contains(&"mem-ddr4-16-3200"));
        assert!(ids.contains(&"mem-ddr4-16-3200-generic"));
        assert!(!ids.contains(&"mem-ddr5-32-6000"));
        assert!(results.iter().all(|r| r.kind == MatchKind::Specification));
    }

    #[test]
    fn test_ambiguous_query_asks_for_clarification() {
        let results = search("something for my computer");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, MatchKind::Clarification);
        assert!(results[0].component.is_none());
        assert!(!results[0].clarification_prompts.is_empty());
    }

    #[test]
    fn test_no_match_returns_placeholder_with_alternatives() {
        // 3.6-3.7GHz LGA1700 parts are outside 10% of 4.8GHz
        let results = search("processor 4.8GHz LGA1700");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, MatchKind::Placeholder);
        assert!(results[0].component.is_none());
        let alternatives = &results[0].alternatives;
        assert!(!alternatives.is_empty());
        assert!(alternatives.len() <= 5);
        assert!(alternatives.iter().all(|a| a.compatibility_score >= 0.5));
        for pair in alternatives.windows(2) {
            assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
        }
    }

    #[test]
    fn test_unspecified_criteria_are_skipped() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let matcher = InventoryMatcher::new(&catalog, &settings);
        let spec = ComponentSpecification::new(Category::Processor);
        let cpu = catalog.component("cpu-ryzen7-5800x").unwrap();
        let result = matcher.compatibility_score(&spec, cpu);
        assert_eq!(result.score, 1.0);
        assert!(!result.entry("electrical").unwrap().applicable);
        assert!(!result.entry("compatibility").unwrap().applicable);
    }

    #[test]
    fn test_part_number_containment_is_one_way() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let matcher = InventoryMatcher::new(&catalog, &settings);
        let fan = catalog.component("cool-laminar-rm1").unwrap();

        let mut spec = ComponentSpecification::new(Category::Cooling);
        spec.part_number = "XRM1000".to_string();
        assert_ne!(matcher.filter(&spec, fan), Some(MatchKind::PartNumber));

        spec.part_number = "rm1".to_string();
        assert_eq!(matcher.filter(&spec, fan), Some(MatchKind::PartNumber));

        let cpu = catalog.component("cpu-i7-12700k").unwrap();
        let mut spec = ComponentSpecification::new(Category::Processor);
        spec.part_number = "12700K".to_string();
        assert_eq!(matcher.filter(&spec, cpu), Some(MatchKind::PartNumber));
    }
}
