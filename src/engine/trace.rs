//! Resolution traces.
//!
//! [`Resolver::resolve`](super::Resolver::resolve) only returns a label.
//! [`Resolver::resolve_traced`](super::Resolver::resolve_traced) additionally
//! records every rule it evaluated, which is what the verbose API and rule
//! debugging work from. Collecting the trace allocates, so the plain path
//! never does it.

use super::catalogue::RuleId;
use crate::TenseAspect;

/// Outcome of one resolution, with the rules that were tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Selected label; `NONE/NONE` when nothing matched.
    pub label: TenseAspect,
    /// Number of positions in the resolved chunk.
    pub arity: usize,
    /// The winning rule, if any.
    pub matched: Option<MatchedRule>,
    /// Every evaluated rule, in the order it was tried.
    pub attempts: Vec<Attempt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedRule {
    pub id: RuleId,
    pub name: &'static str,
}

/// A single rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub id: RuleId,
    pub name: &'static str,
    /// First position whose condition failed; `None` when the rule matched.
    pub failed_at: Option<usize>,
}

impl Attempt {
    pub fn matched(&self) -> bool {
        self.failed_at.is_none()
    }
}

impl Resolution {
    pub(crate) fn unmatched(arity: usize) -> Self {
        Resolution { label: TenseAspect::NONE, arity, matched: None, attempts: Vec::new() }
    }
}
