//! Condition and rule matching.
//!
//! A condition is checked against each candidate analysis of a token; the
//! token satisfies it when any candidate does. Candidates are matched
//! independently per position: a chunk may satisfy position 0 through one
//! reading of a token and position 1 through an unrelated reading of another.
//!
//! All comparisons work on bytes and are ASCII case-insensitive. Feature
//! boundaries are the literal `+` separators of the analyzer output.

use crate::{Chunk, Condition, MorphologyToken, Rule};

impl Condition {
    /// Does any candidate analysis of `token` satisfy this condition?
    pub fn matches(&self, token: &MorphologyToken<'_>) -> bool {
        token.analyses().any(|analysis| self.matches_analysis(analysis))
    }

    /// Match a single tag-string.
    pub fn matches_analysis(&self, analysis: &str) -> bool {
        let s = analysis.as_bytes();
        match *self {
            Condition::Prefix { head, tail } => {
                let head = head.as_bytes();
                starts_with_ci(s, head) && contains_ci(&s[head.len()..], tail.as_bytes())
            }
            Condition::Infix { head, tail } => {
                let head = head.as_bytes();
                // The earliest occurrence leaves the longest suffix to search.
                find_ci(s, head).is_some_and(|at| contains_ci(&s[at + head.len()..], tail.as_bytes()))
            }
            Condition::OneOf { lemmas, tail } => lemmas.iter().any(|lemma| {
                let lemma = lemma.as_bytes();
                starts_with_ci(s, lemma)
                    && s.get(lemma.len()) == Some(&b'+')
                    && contains_ci(&s[lemma.len() + 1..], tail.as_bytes())
            }),
            Condition::AnyLemma { category, tail } => {
                // The lemma must be non-empty, so the category separator sits at index >= 1.
                find_feature(s, 1, category.as_bytes(), Boundary::Plus)
                    .is_some_and(|end| contains_ci(&s[end + 1..], tail.as_bytes()))
            }
            Condition::Marker(name) => find_feature(s, 0, name.as_bytes(), Boundary::Open).is_some(),
            Condition::Feature(name) => find_feature(s, 0, name.as_bytes(), Boundary::PlusOrEnd).is_some(),
            Condition::Either(options) => options.iter().any(|option| option.matches_analysis(analysis)),
        }
    }
}

impl Rule {
    /// Does every position of `chunk` satisfy the matching condition?
    ///
    /// The chunk must have exactly `self.arity` positions; the resolver only
    /// ever evaluates rules from the chunk's own arity group.
    pub fn matches(&self, chunk: &Chunk<'_>) -> bool {
        self.first_mismatch(chunk).is_none()
    }

    /// Index of the first position whose condition fails, left to right.
    pub(crate) fn first_mismatch(&self, chunk: &Chunk<'_>) -> Option<usize> {
        debug_assert_eq!(
            chunk.len(),
            self.arity,
            "rule '{}' evaluated against a chunk of the wrong arity",
            self.name
        );
        self.conditions.iter().zip(chunk.tokens()).position(|(condition, token)| !condition.matches(token))
    }
}

/// What must follow a `+name` feature for it to count.
#[derive(Debug, Clone, Copy)]
enum Boundary {
    /// Anything, including a longer feature name.
    Open,
    /// Another `+` separator.
    Plus,
    /// Another `+` separator or the end of the tag-string.
    PlusOrEnd,
}

/// Find the first `+name` whose `+` sits at or after `from`; returns the index
/// just past `name`.
fn find_feature(s: &[u8], from: usize, name: &[u8], boundary: Boundary) -> Option<usize> {
    (from..s.len()).filter(|&i| s[i] == b'+').find_map(|i| {
        let start = i + 1;
        let end = start + name.len();
        if !starts_with_ci(&s[start..], name) {
            return None;
        }
        let bounded = match boundary {
            Boundary::Open => true,
            Boundary::Plus => s.get(end) == Some(&b'+'),
            Boundary::PlusOrEnd => end == s.len() || s[end] == b'+',
        };
        bounded.then_some(end)
    })
}

fn starts_with_ci(s: &[u8], prefix: &[u8]) -> bool {
    s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn find_ci(s: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > s.len() {
        return None;
    }
    (0..=s.len() - needle.len()).find(|&i| s[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

fn contains_ci(s: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || find_ci(s, needle).is_some()
}
