//! Linguistic annotation: the provider seam and the built-in rule annotator.
//!
//! The extraction pipeline never parses text itself — it consumes tokens,
//! dependency labels, entity categories, and noun chunks from an
//! [`AnnotationProvider`] injected at model construction. This keeps the
//! expensive, process-wide annotation machinery behind a capability handle and
//! lets tests substitute synthetic annotations.
//!
//! [`RuleAnnotator`] is the built-in provider: a deterministic, lexicon-driven
//! English annotator good enough for simple declarative prose. Wire a real
//! statistical parser behind the trait for production-grade coverage.

pub mod doc;
pub mod rules;

pub use doc::{AnnotatedDoc, Dep, Pos, Sentence, SpanRange, Token};
pub use rules::RuleAnnotator;

use crate::error::AnnotateError;

/// A source of linguistic annotations over raw text.
///
/// Implementations are expected to be deterministic: annotating the same text
/// twice must yield the same document, since the extraction pipeline re-runs
/// annotation on isolated span texts during entity refinement.
pub trait AnnotationProvider {
    /// Annotate raw text: segment sentences, tag tokens with POS / dependency /
    /// entity labels, and record noun-chunk spans.
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc, AnnotateError>;

    /// Rewrite referring expressions to their resolved antecedents.
    ///
    /// The default implementation returns the text unchanged; providers
    /// without a coreference component need not override it.
    fn resolve_coreference(&self, text: &str) -> Result<String, AnnotateError> {
        Ok(text.to_owned())
    }
}
