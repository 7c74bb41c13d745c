//! Rule validation and indexing.
//!
//! The catalogue is the static side of the engine: it owns the authored rules,
//! rejects malformed entries up front, and pre-groups rule ids so that a query
//! only ever touches rules of its own arity.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `Catalogue::rules` and doubles as the rule's
//!   priority: lower ids were authored earlier and win ties.
//! - Every id list (`by_arity[n]`, `by_family[f]`) is sorted ascending, so
//!   iterating a group visits rules in authoring order.
//! - `rules[id].conditions.len() == rules[id].arity` for every id.
//! - `by_arity` uses the arity itself as index; slot 0 is always empty.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Condition, Rule, RuleFamily};

/// Rule identifier (index into the catalogue, equal to its priority).
pub type RuleId = usize;

const FAMILY_COUNT: usize = RuleFamily::all().bits().count_ones() as usize;

/// A catalogue entry that cannot be used safely.
///
/// These are authoring defects: the built-in catalogue aborts on first use if
/// it hits one, and queries never observe them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// The declared arity disagrees with the number of conditions.
    #[error("rule '{rule}' declares arity {declared} but has {actual} conditions")]
    ArityMismatch { rule: &'static str, declared: usize, actual: usize },

    /// A rule with no positions could never be selected.
    #[error("rule '{rule}' has arity zero")]
    EmptyRule { rule: &'static str },

    /// A condition whose anchor is empty would accept far more than intended.
    #[error("rule '{rule}' has an empty anchor at position {position}")]
    EmptyHead { rule: &'static str, position: usize },

    /// Rules are looked up and reported by name.
    #[error("rule name '{rule}' is used more than once")]
    DuplicateName { rule: &'static str },

    /// Each rule belongs to exactly one family.
    #[error("rule '{rule}' must belong to exactly one family, got {family:?}")]
    InvalidFamily { rule: &'static str, family: RuleFamily },
}

/// The validated, indexed, immutable rule set.
#[derive(Debug)]
pub struct Catalogue {
    rules: Vec<Rule>,
    by_arity: Vec<Vec<RuleId>>,
    by_family: [Vec<RuleId>; FAMILY_COUNT],
}

impl Catalogue {
    /// Validate `rules` and index them. Authoring order becomes priority order.
    pub fn new(rules: Vec<Rule>) -> Result<Self, CatalogueError> {
        let mut names = HashSet::new();
        for rule in &rules {
            validate(rule)?;
            if !names.insert(rule.name) {
                return Err(CatalogueError::DuplicateName { rule: rule.name });
            }
        }

        let max_arity = rules.iter().map(|r| r.arity).max().unwrap_or(0);
        let mut by_arity: Vec<Vec<RuleId>> = vec![Vec::new(); max_arity + 1];
        let mut by_family: [Vec<RuleId>; FAMILY_COUNT] = Default::default();

        for (id, rule) in rules.iter().enumerate() {
            by_arity[rule.arity].push(id);
            by_family[family_slot(rule.family)].push(id);
        }

        log::debug!(
            "catalogue: {} rules, arities {:?}",
            rules.len(),
            by_arity
                .iter()
                .enumerate()
                .filter(|(_, ids)| !ids.is_empty())
                .map(|(n, ids)| (n, ids.len()))
                .collect::<Vec<_>>()
        );

        Ok(Catalogue { rules, by_arity, by_family })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id)
    }

    pub fn rule_by_name(&self, name: &str) -> Option<(RuleId, &Rule)> {
        self.rules.iter().enumerate().find(|(_, r)| r.name == name)
    }

    /// Longest chunk any rule accepts.
    pub fn max_arity(&self) -> usize {
        self.by_arity.len().saturating_sub(1)
    }

    /// Arities that have at least one rule, ascending.
    pub fn arities(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_arity.iter().enumerate().filter(|(_, ids)| !ids.is_empty()).map(|(n, _)| n)
    }

    /// Ids of the rules with exactly `arity` positions, in priority order.
    ///
    /// Empty for arities nobody authored, including zero.
    pub fn rules_with_arity(&self, arity: usize) -> &[RuleId] {
        self.by_arity.get(arity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids of the rules in any of `families`, in priority order.
    pub fn rules_in_families(&self, families: RuleFamily) -> Vec<RuleId> {
        let mut ids: Vec<RuleId> = families
            .iter()
            .filter_map(|family| self.by_family.get(family_slot(family)))
            .flat_map(|ids| ids.iter().copied())
            .collect();
        ids.sort_unstable();
        ids
    }
}

fn family_slot(family: RuleFamily) -> usize {
    family.bits().trailing_zeros() as usize
}

fn validate(rule: &Rule) -> Result<(), CatalogueError> {
    if rule.arity == 0 {
        return Err(CatalogueError::EmptyRule { rule: rule.name });
    }
    if rule.conditions.len() != rule.arity {
        return Err(CatalogueError::ArityMismatch {
            rule: rule.name,
            declared: rule.arity,
            actual: rule.conditions.len(),
        });
    }
    if rule.family.bits().count_ones() != 1 {
        return Err(CatalogueError::InvalidFamily { rule: rule.name, family: rule.family });
    }
    if let Some(position) = rule.conditions.iter().position(has_empty_head) {
        return Err(CatalogueError::EmptyHead { rule: rule.name, position });
    }
    Ok(())
}

fn has_empty_head(condition: &Condition) -> bool {
    match *condition {
        Condition::Prefix { head, .. } | Condition::Infix { head, .. } => head.is_empty(),
        Condition::OneOf { lemmas, .. } => lemmas.is_empty() || lemmas.iter().any(|l| l.is_empty()),
        Condition::AnyLemma { category, .. } => category.is_empty(),
        Condition::Marker(name) | Condition::Feature(name) => name.is_empty(),
        Condition::Either(options) => options.is_empty() || options.iter().any(has_empty_head),
    }
}
