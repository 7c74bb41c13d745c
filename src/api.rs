use crate::engine::{Catalogue, Resolution, Resolver};
use crate::{Chunk, RuleFamily, TenseAspect};
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

static DEFAULT_CATALOGUE: Lazy<Catalogue> = Lazy::new(|| match Catalogue::new(crate::rules::get()) {
    Ok(catalogue) => catalogue,
    Err(err) => panic!("built-in tense/aspect catalogue is invalid: {err}"),
});

/// The built-in English catalogue, validated on first use.
pub fn catalogue() -> &'static Catalogue {
    &DEFAULT_CATALOGUE
}

/// Options that affect resolution.
#[derive(Debug, Clone)]
pub struct Options {
    /// Rule families the resolver may select from. Defaults to all of them.
    pub families: RuleFamily,
}

impl Default for Options {
    fn default() -> Self {
        Options { families: RuleFamily::all() }
    }
}

/// A token record coming from the chunking stage of a pipeline.
///
/// Only tokens that head a verb-phrase-like chunk carry chunk morphology: one
/// string per chunk position, each a whitespace-separated list of candidate
/// tag-strings.
pub trait ChunkedToken {
    fn chunk_morphology(&self) -> Option<&[String]>;
}

/// A minimal [`ChunkedToken`] for callers without their own token type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub chunk_morphology: Option<Vec<String>>,
}

impl Token {
    /// A token outside any recognized chunk.
    pub fn new(text: impl Into<String>) -> Self {
        Token { text: text.into(), chunk_morphology: None }
    }

    pub fn with_chunk<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chunk_morphology = Some(groups.into_iter().map(Into::into).collect());
        self
    }
}

impl ChunkedToken for Token {
    fn chunk_morphology(&self) -> Option<&[String]> {
        self.chunk_morphology.as_deref()
    }
}

/// Result from [`infer_verbose_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceDetails {
    pub label: TenseAspect,
    /// `None` when the token carried no chunk morphology.
    pub resolution: Option<Resolution>,
    pub elapsed: Duration,
}

/// Infer the tense and aspect of `token` with the built-in catalogue.
///
/// Tokens without chunk morphology, and chunks no rule accepts, yield
/// [`TenseAspect::NONE`].
///
/// # Example
/// ```
/// use morphtense::{Aspect, Tense, Token, infer};
///
/// let token = Token::new("taught").with_chunk(["have+V+indic+pres", "teach+V+part+past"]);
/// let label = infer(&token);
/// assert_eq!((label.tense, label.aspect), (Tense::Present, Aspect::Perfective));
/// ```
pub fn infer<T: ChunkedToken + ?Sized>(token: &T) -> TenseAspect {
    infer_with(token, catalogue(), &Options::default())
}

/// Infer against an explicit `catalogue` and `options`.
pub fn infer_with<T: ChunkedToken + ?Sized>(token: &T, catalogue: &Catalogue, options: &Options) -> TenseAspect {
    match token.chunk_morphology() {
        Some(groups) => Resolver::new(catalogue).with_families(options.families).resolve(&Chunk::new(groups)),
        None => {
            log::trace!("[infer] token has no chunk morphology");
            TenseAspect::NONE
        }
    }
}

/// Like [`infer_with`], but also returns the per-rule resolution trace and
/// the elapsed time.
pub fn infer_verbose_with<T: ChunkedToken + ?Sized>(
    token: &T,
    catalogue: &Catalogue,
    options: &Options,
) -> InferenceDetails {
    let start = Instant::now();
    let resolution = token
        .chunk_morphology()
        .map(|groups| Resolver::new(catalogue).with_families(options.families).resolve_traced(&Chunk::new(groups)));
    let label = resolution.as_ref().map_or(TenseAspect::NONE, |r| r.label);

    InferenceDetails { label, resolution, elapsed: start.elapsed() }
}

/// Resolve raw per-position morphology groups with the built-in catalogue.
pub fn resolve<S: AsRef<str>>(groups: &[S]) -> TenseAspect {
    Resolver::new(catalogue()).resolve(&Chunk::new(groups))
}
