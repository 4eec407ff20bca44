//! Rich diagnostic error types for the factweave pipeline.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so users know exactly what went wrong and
//! how to fix it. Sentence-level extraction misses are *not* errors — a sentence
//! that fails the simple-sentence filter or has no reachable subject is silently
//! skipped.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for factweave.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum WeaveError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Annotate(#[from] AnnotateError),
}

// ---------------------------------------------------------------------------
// Model errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ModelError {
    #[error("no knowledge graph available: fit() has not been called")]
    #[diagnostic(
        code(factweave::model::empty_state),
        help(
            "The model holds no entity pairs because no document was fitted yet. \
             Call `fit(text)` at least once before requesting a view."
        )
    )]
    EmptyState,

    #[error("unsupported output format: \"{format}\"")]
    #[diagnostic(
        code(factweave::model::invalid_format),
        help("Supported knowledge-graph formats are \"list\" and \"table\".")
    )]
    InvalidFormat { format: String },

    #[error("loaded collection is empty: {path}")]
    #[diagnostic(
        code(factweave::model::empty_data),
        help(
            "The persisted blob decoded successfully but contains zero entity \
             pairs. Re-save after a fit that actually extracted triples."
        )
    )]
    EmptyData { path: String },

    #[error("I/O error for {path}: {source}")]
    #[diagnostic(
        code(factweave::model::io),
        help(
            "A filesystem operation failed. Check that the path exists, \
             has correct permissions, and that the disk is not full."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {message}")]
    #[diagnostic(
        code(factweave::model::serde),
        help(
            "Failed to encode or decode the entity-pair collection. A decode \
             failure usually means the blob was written by an incompatible \
             version — re-save it."
        )
    )]
    Serialization { message: String },
}

// ---------------------------------------------------------------------------
// Annotation-provider errors
// ---------------------------------------------------------------------------

/// Failures from an [`AnnotationProvider`](crate::annotate::AnnotationProvider).
///
/// The core does not translate or recover from these — they propagate to the
/// caller unchanged, since there is no meaningful recovery for a broken
/// annotation source.
#[derive(Debug, Error, Diagnostic)]
pub enum AnnotateError {
    #[error("annotation provider failed: {message}")]
    #[diagnostic(
        code(factweave::annotate::provider),
        help(
            "The external annotation provider returned an error. Check its own \
             logs; the extraction pipeline has no recovery path for this."
        )
    )]
    Provider { message: String },

    #[error("coreference resolution failed: {message}")]
    #[diagnostic(
        code(factweave::annotate::coreference),
        help(
            "The coreference pass could not rewrite the document. Disable it \
             with `coreference: false` if the provider does not support it."
        )
    )]
    Coreference { message: String },
}

/// Convenience alias for functions returning factweave results.
pub type WeaveResult<T> = std::result::Result<T, WeaveError>;
