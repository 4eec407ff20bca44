//! Model facade: the public API for fitting documents and reading the graph.
//!
//! A [`Model`] owns its entity-pair collection and the injected annotation
//! provider. `fit` may be called repeatedly to accumulate pairs across
//! documents; views, save, and load operate on the accumulated collection.
//! `fit` takes `&mut self`, so the single-writer discipline the pipeline
//! assumes is enforced statically — callers wanting shared access wrap the
//! model in their own lock.

use std::path::Path;

use crate::annotate::AnnotationProvider;
use crate::error::{ModelError, WeaveResult};
use crate::export::{EntityPair, EntityPairTable, KnowledgeGraphView, ViewFormat};
use crate::pipeline;
use crate::pipeline::refine::Refiner;

/// Constructor configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelConfig {
    /// Run the coreference-resolution pass before extraction.
    pub coreference: bool,
}

/// The triple-extraction model.
///
/// Each instance owns an independent, freshly created pair collection — the
/// collection is never shared between instances.
#[derive(Debug)]
pub struct Model<P: AnnotationProvider> {
    provider: P,
    config: ModelConfig,
    pairs: Vec<EntityPair>,
    fitted: bool,
}

impl<P: AnnotationProvider> Model<P> {
    /// Create a model around an annotation-provider handle.
    pub fn new(provider: P, config: ModelConfig) -> Self {
        Self {
            provider,
            config,
            pairs: Vec::new(),
            fitted: false,
        }
    }

    /// Run the extraction pipeline over one document, accumulating pairs.
    ///
    /// Sentences failing the simple-sentence filter, or without a reachable
    /// subject, are skipped silently; only annotation-provider failures abort.
    pub fn fit(&mut self, document: &str) -> WeaveResult<()> {
        let doc = pipeline::preprocess(&self.provider, document, self.config.coreference)?;

        // The refinement memo lives for exactly one fit pass.
        let mut refiner = Refiner::new(&self.provider);
        let mut admitted = 0usize;
        let mut kept = 0usize;

        let sentence_count = doc.sentences.len();
        for (sent_idx, mut sent) in doc.sentences.into_iter().enumerate() {
            pipeline::simplify(&mut sent);
            if !pipeline::is_simple(&sent) {
                continue;
            }
            admitted += 1;
            for pair in pipeline::extract(&mut refiner, sent_idx, &sent)? {
                if pair.is_complete() {
                    kept += 1;
                    self.pairs.push(pair);
                }
            }
        }

        tracing::info!(
            sentences = sentence_count,
            admitted,
            kept,
            total = self.pairs.len(),
            "fit complete"
        );
        self.fitted = true;
        Ok(())
    }

    /// The accumulated pairs, in extraction order.
    pub fn pairs(&self) -> &[EntityPair] {
        &self.pairs
    }

    /// Whether at least one `fit` call has completed successfully.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// A read-only view of the accumulated collection.
    ///
    /// `format` is `"list"` or `"table"`; anything else is an
    /// [`ModelError::InvalidFormat`]. Requesting a view before a successful
    /// `fit` is an [`ModelError::EmptyState`].
    pub fn knowledge_graph(&self, format: &str) -> Result<KnowledgeGraphView, ModelError> {
        let format: ViewFormat = format.parse()?;
        if !self.fitted {
            return Err(ModelError::EmptyState);
        }
        Ok(match format {
            ViewFormat::List => KnowledgeGraphView::List(self.pairs.clone()),
            ViewFormat::Table => {
                KnowledgeGraphView::Table(EntityPairTable::new(self.pairs.clone()))
            }
        })
    }

    /// Persist the pair collection (and nothing else) as an opaque blob.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let blob = bincode::serialize(&self.pairs).map_err(|e| ModelError::Serialization {
            message: e.to_string(),
        })?;
        std::fs::write(path, blob).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), pairs = self.pairs.len(), "saved collection");
        Ok(())
    }

    /// Load a previously saved collection into a fresh model.
    ///
    /// Fails with [`ModelError::EmptyData`] when the blob holds zero pairs.
    pub fn load(
        path: impl AsRef<Path>,
        provider: P,
        config: ModelConfig,
    ) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let blob = std::fs::read(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let pairs: Vec<EntityPair> =
            bincode::deserialize(&blob).map_err(|e| ModelError::Serialization {
                message: e.to_string(),
            })?;
        if pairs.is_empty() {
            return Err(ModelError::EmptyData {
                path: path.display().to_string(),
            });
        }
        tracing::info!(path = %path.display(), pairs = pairs.len(), "loaded collection");
        Ok(Self {
            provider,
            config,
            pairs,
            fitted: true,
        })
    }
}
