//! # factweave
//!
//! Extracts subject–relation–object triples from free text to build a
//! lightweight knowledge graph. Documents are segmented into sentences,
//! multi-word mentions are merged into atomic spans, sentences with exactly
//! one subject and one object are admitted, and a dependency-tree walk
//! recovers the connecting relation phrase.
//!
//! ## Architecture
//!
//! - **Annotation** (`annotate`): the provider seam plus a built-in
//!   lexicon-driven English annotator
//! - **Pipeline** (`pipeline`): preprocess → simplify → filter → extract →
//!   refine, strictly in document order
//! - **Model** (`model`): the `fit`/`knowledge_graph`/`save`/`load` facade
//! - **Export** (`export`): entity-pair list and table views
//!
//! ## Library usage
//!
//! ```no_run
//! use factweave::annotate::RuleAnnotator;
//! use factweave::model::{Model, ModelConfig};
//!
//! let mut model = Model::new(RuleAnnotator::new(), ModelConfig::default());
//! model.fit("Apple acquired Beats in 2014.").unwrap();
//! let view = model.knowledge_graph("table").unwrap();
//! println!("{view}");
//! ```

pub mod annotate;
pub mod error;
pub mod export;
pub mod model;
pub mod pipeline;

pub use error::{WeaveError, WeaveResult};
pub use export::{EntityPair, KnowledgeGraphView};
pub use model::{Model, ModelConfig};
