//! Matching and resolution engine.
//!
//! Inferring a label is a short pipeline:
//!
//! ```text
//! rules (all)  ──┐
//!               │  Catalogue::new                (catalogue.rs)
//!               └───────────────┬──────────────   - validate each entry
//!                               │                 - index ids by arity/family
//! chunk ── len() ───────────────┼─ rules_with_arity(n)
//!                               v
//!                     Resolver::resolve (resolver.rs)
//!                       - scan the group in priority order
//!                       - Rule::matches per candidate (matcher.rs)
//!                       - first full match wins
//!                               │
//!                               v
//!                          TenseAspect
//! ```
//!
//! ## Responsibilities by module
//!
//! - `matcher.rs`: the condition primitive (`Condition::matches`) and rule
//!   evaluation over a chunk of the same arity.
//! - `catalogue.rs`: validation and indexing of the authored rule list.
//! - `resolver.rs`: arity lookup plus the ordered first-match scan.
//! - `trace.rs`: the per-attempt record returned by
//!   [`Resolver::resolve_traced`].
//!
//! ## Determinism
//!
//! Rules of one arity routinely overlap (an active and a passive pattern can
//! both accept `be + participle`), so the scan order is part of the observable
//! behavior. The order is the authoring order of the rule list handed to
//! [`Catalogue::new`]; nothing in the engine re-sorts it.
//!
//! ## Debugging
//!
//! The resolver logs every attempt at `trace` level and the selected label at
//! `debug` level through the `log` facade.

#[path = "engine/catalogue.rs"]
mod catalogue;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/resolver.rs"]
mod resolver;
#[path = "engine/trace.rs"]
mod trace;

pub use catalogue::{Catalogue, CatalogueError, RuleId};
pub use resolver::Resolver;
pub use trace::{Attempt, MatchedRule, Resolution};
