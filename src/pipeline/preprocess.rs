//! Text normalization and the optional coreference stage.
//!
//! Line-oriented source text (scraped pages, reference dumps) arrives with
//! newline-delimited paragraphs and `[12]`-style citation markers. Both are
//! normalized away before annotation so sentence segmentation sees clean
//! running prose.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::annotate::{AnnotatedDoc, AnnotationProvider};
use crate::error::AnnotateError;

static RE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
static RE_CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").unwrap());

/// Normalize raw text: NFC, newline runs become sentence boundaries, and
/// bracketed numeric citation markers are blanked out.
pub fn normalize(raw: &str) -> String {
    let nfc: String = raw.nfc().collect();
    let no_newlines = RE_NEWLINES.replace_all(&nfc, ".");
    RE_CITATION.replace_all(&no_newlines, " ").into_owned()
}

/// Normalize and annotate a document, re-annotating the coreference-resolved
/// text when the pass is enabled.
///
/// Provider failures propagate unchanged — the pipeline has no recovery for a
/// broken annotation source.
pub fn preprocess<P: AnnotationProvider>(
    provider: &P,
    raw: &str,
    coreference: bool,
) -> Result<AnnotatedDoc, AnnotateError> {
    let cleaned = normalize(raw);
    let doc = provider.annotate(&cleaned)?;
    if !coreference {
        return Ok(doc);
    }
    let resolved = provider.resolve_coreference(&cleaned)?;
    tracing::debug!(chars = resolved.len(), "re-annotating coreference-resolved text");
    provider.annotate(&resolved)
}
