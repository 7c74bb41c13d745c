//! First-match rule resolution.
//!
//! ```text
//! chunk (n positions)
//!   │
//!   ├─ catalogue.rules_with_arity(n) ── empty ──▶ NONE/NONE
//!   │
//!   └─ for id in group (ascending = authoring order)
//!        ├─ family filtered out? ── skip
//!        ├─ rule.matches(chunk)? ── yes ──▶ rule.label
//!        └─ no ── next
//!                        exhausted ──▶ NONE/NONE
//! ```
//!
//! There is no "most specific" or "longest" preference: overlapping rules are
//! resolved purely by position in the catalogue.

use super::catalogue::{Catalogue, RuleId};
use super::trace::{Attempt, MatchedRule, Resolution};
use crate::{Chunk, Rule, RuleFamily, TenseAspect};

/// Maps chunks to labels against a borrowed [`Catalogue`].
///
/// A resolver holds no mutable state; one instance can serve any number of
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalogue: &'a Catalogue,
    families: RuleFamily,
}

impl<'a> Resolver<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Resolver { catalogue, families: RuleFamily::all() }
    }

    /// Only consider rules from `families`. The relative order of the
    /// remaining rules is unchanged.
    pub fn with_families(mut self, families: RuleFamily) -> Self {
        self.families = families;
        self
    }

    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    /// Rules eligible for a chunk of `arity` positions, in priority order.
    fn candidates(&self, arity: usize) -> impl Iterator<Item = (RuleId, &'a Rule)> + 'a {
        let catalogue = self.catalogue;
        let families = self.families;
        catalogue
            .rules_with_arity(arity)
            .iter()
            .filter_map(move |&id| catalogue.rule(id).map(|rule| (id, rule)))
            .filter(move |(_, rule)| families.contains(rule.family))
    }

    /// Label of the first rule, in catalogue order, that matches `chunk`.
    pub fn resolve(&self, chunk: &Chunk<'_>) -> TenseAspect {
        for (id, rule) in self.candidates(chunk.len()) {
            if rule.matches(chunk) {
                log::debug!("[resolve] arity={} rule=#{} '{}' label={}", chunk.len(), id, rule.name, rule.label);
                return rule.label;
            }
            log::trace!("[resolve] rule=#{} '{}' rejected", id, rule.name);
        }

        log::debug!("[resolve] arity={} no rule matched", chunk.len());
        TenseAspect::NONE
    }

    /// Like [`resolve`](Self::resolve), but records each evaluated rule.
    pub fn resolve_traced(&self, chunk: &Chunk<'_>) -> Resolution {
        let mut resolution = Resolution::unmatched(chunk.len());

        for (id, rule) in self.candidates(chunk.len()) {
            let failed_at = rule.first_mismatch(chunk);
            resolution.attempts.push(Attempt { id, name: rule.name, failed_at });
            log::trace!("[resolve] rule=#{} '{}' failed_at={:?}", id, rule.name, failed_at);

            if failed_at.is_none() {
                resolution.label = rule.label;
                resolution.matched = Some(MatchedRule { id, name: rule.name });
                break;
            }
        }

        log::debug!("[resolve] arity={} label={} rule={:?}", chunk.len(), resolution.label, resolution.matched);
        resolution
    }
}
