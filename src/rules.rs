//! The English tense/aspect catalogue.
//!
//! Families are concatenated in a fixed order and each family file lists its
//! rules in a fixed order. That order is the resolution priority: moving a rule
//! changes the answer for any chunk two rules both accept, so treat reordering
//! as a behavior change.
//!
//! Morphology follows the `lemma+category+features` layout of the upstream
//! analyzer, e.g. `teach+v+gerund+pres` or `boy+n+sing`.

#[path = "rules/active.rs"]
pub(crate) mod active;
#[path = "rules/do_support.rs"]
pub(crate) mod do_support;
#[path = "rules/infinitive.rs"]
pub(crate) mod infinitive;
#[path = "rules/modal.rs"]
pub(crate) mod modal;
#[path = "rules/passive.rs"]
pub(crate) mod passive;
#[path = "rules/predicative.rs"]
pub(crate) mod predicative;
#[path = "rules/simple.rs"]
pub(crate) mod simple;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

use crate::Rule;

/// Every built-in rule, in priority order.
pub(crate) fn get() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(active::get());
    rules.extend(passive::get());
    rules.extend(modal::get());
    rules.extend(do_support::get());
    rules.extend(infinitive::get());
    rules.extend(simple::get());
    rules.extend(predicative::adjective());
    rules.extend(predicative::noun());
    rules.extend(predicative::preposition());
    rules
}
