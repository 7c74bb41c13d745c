extern crate self as morphtense;

use std::fmt;

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

pub use api::{
    ChunkedToken, InferenceDetails, Options, Token, catalogue, infer, infer_verbose_with, infer_with, resolve,
};
pub use engine::{Attempt, Catalogue, CatalogueError, MatchedRule, Resolution, Resolver, RuleId};

// --- Labels -----------------------------------------------------------------

/// Coarse temporal category of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tense {
    #[default]
    None,
    Present,
    Past,
    Future,
    Infinitive,
    /// Present participle with no auxiliary ("running").
    PresPart,
    /// Past participle with no auxiliary ("released").
    PastPart,
}

impl Tense {
    /// TimeML spelling of the tense value.
    pub fn as_str(self) -> &'static str {
        match self {
            Tense::None => "NONE",
            Tense::Present => "PRESENT",
            Tense::Past => "PAST",
            Tense::Future => "FUTURE",
            Tense::Infinitive => "INFINITIVE",
            Tense::PresPart => "PRESPART",
            Tense::PastPart => "PASTPART",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical viewpoint of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Aspect {
    #[default]
    None,
    Progressive,
    Perfective,
    PerfectiveProgressive,
}

impl Aspect {
    /// TimeML spelling of the aspect value.
    pub fn as_str(self) -> &'static str {
        match self {
            Aspect::None => "NONE",
            Aspect::Progressive => "PROGRESSIVE",
            Aspect::Perfective => "PERFECTIVE",
            Aspect::PerfectiveProgressive => "PERFECTIVE_PROGRESSIVE",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `(tense, aspect)` pair attached to a rule and returned by every query.
///
/// [`TenseAspect::NONE`] doubles as the "no information" answer: callers
/// cannot tell an unmatched chunk from a rule that explicitly produces
/// `NONE/NONE`, and should not try to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TenseAspect {
    pub tense: Tense,
    pub aspect: Aspect,
}

impl TenseAspect {
    pub const NONE: TenseAspect = TenseAspect { tense: Tense::None, aspect: Aspect::None };

    pub const fn new(tense: Tense, aspect: Aspect) -> Self {
        TenseAspect { tense, aspect }
    }

    pub fn is_none(&self) -> bool {
        *self == TenseAspect::NONE
    }
}

impl fmt::Display for TenseAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tense, self.aspect)
    }
}

// --- Rules ------------------------------------------------------------------

bitflags::bitflags! {
    /// Grammatical family a rule belongs to.
    ///
    /// Every rule carries exactly one family bit. [`Options::families`] uses
    /// the same type as a mask to restrict resolution to a subset of families.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RuleFamily: u16 {
        const ACTIVE      = 1 << 0;
        const PASSIVE     = 1 << 1;
        const MODAL       = 1 << 2;
        const DO_SUPPORT  = 1 << 3;
        const INFINITIVE  = 1 << 4;
        const SIMPLE      = 1 << 5;
        const PARTICIPLE  = 1 << 6;
        const ADJECTIVE   = 1 << 7;
        const NOUN        = 1 << 8;
        const PREPOSITION = 1 << 9;
    }
}

/// A single-position requirement over a token's morphology.
///
/// Each variant is checked against one candidate tag-string such as
/// `"teach+v+gerund+pres"`. Comparisons are ASCII case-insensitive. A `tail`
/// must occur somewhere after the part of the tag-string consumed by the head;
/// an empty `tail` always holds.
///
/// ```text
/// Prefix   { head: "be+",  tail: "+indic+pres" }  be+v+indic+pres+nil   ✓
/// Infix    { head: "have+", tail: "+infin+pres" } x+have+v+infin+pres   ✓
/// OneOf    { lemmas: [must, can, ..], tail: "" }  can+v+indic+pres      ✓
/// AnyLemma { category: "v", tail: "part+past" }   teach+v+part+past     ✓
/// Marker("adj")                                   blue+adjective        ✓
/// Feature("n")                                    boy+n+sing            ✓   be+nil  ✗
/// Either([be+ .. +gerund+pres, v .. part+past])    teach+v+part+past     ✓
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The tag-string starts with `head`.
    Prefix { head: &'static str, tail: &'static str },
    /// `head` occurs anywhere in the tag-string.
    Infix { head: &'static str, tail: &'static str },
    /// The tag-string starts with one of `lemmas`, immediately followed by `+`.
    OneOf { lemmas: &'static [&'static str], tail: &'static str },
    /// A non-empty lemma followed by the `+category+` feature.
    AnyLemma { category: &'static str, tail: &'static str },
    /// `+name` occurs anywhere, possibly as the prefix of a longer feature.
    Marker(&'static str),
    /// `+name` occurs as a whole feature, followed by `+` or the end.
    Feature(&'static str),
    /// At least one of the alternatives holds for the same tag-string.
    Either(&'static [Condition]),
}

/// An authored pattern: one [`Condition`] per chunk position plus the label it
/// produces.
///
/// `arity` is declared separately from `conditions` so that authoring mistakes
/// are caught when the [`Catalogue`] is built rather than at query time.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub family: RuleFamily,
    pub arity: usize,
    pub conditions: Vec<Condition>,
    pub label: TenseAspect,
}

// --- Chunks -----------------------------------------------------------------

/// One chunk position: the raw, whitespace-separated candidate analyses the
/// morphological analyzer produced for a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorphologyToken<'a> {
    raw: &'a str,
}

impl<'a> MorphologyToken<'a> {
    pub fn new(raw: &'a str) -> Self {
        MorphologyToken { raw }
    }

    /// Candidate tag-strings, in analyzer order.
    pub fn analyses(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.raw.split_whitespace()
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }
}

/// The morphology of a verb-phrase-like chunk, borrowed from the caller.
///
/// The chunk length selects which arity group of the catalogue is consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk<'a> {
    tokens: Vec<MorphologyToken<'a>>,
}

impl<'a> Chunk<'a> {
    /// Build a chunk from per-position morphology groups.
    pub fn new<S: AsRef<str>>(groups: &'a [S]) -> Self {
        groups.iter().map(AsRef::as_ref).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[MorphologyToken<'a>] {
        &self.tokens
    }
}

impl<'a> FromIterator<&'a str> for Chunk<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Chunk { tokens: iter.into_iter().map(MorphologyToken::new).collect() }
    }
}
