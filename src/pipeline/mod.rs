//! The triple-extraction pipeline.
//!
//! Stages run strictly in document order, per sentence:
//!
//! ```text
//! raw text ──→ preprocess ──→ simplify ──→ is_simple? ──→ extract ──→ refine
//!                (normalize,    (merge        (one subj,    (SVO tree   (clean
//!                 coref pass)    spans)        one obj)      walk)       spans)
//! ```
//!
//! Everything here is synchronous and single-threaded; nothing suspends, and
//! a long document simply runs to completion.

pub mod extract;
pub mod filter;
pub mod preprocess;
pub mod refine;
pub mod simplify;

pub use extract::{candidates, extract, Candidate, UNKNOWN_RELATION};
pub use filter::is_simple;
pub use preprocess::{normalize, preprocess};
pub use refine::{Refiner, DEFAULT_CACHE_CAPACITY, NOUN_CHUNK_TYPE};
pub use simplify::{filter_spans, simplify};
