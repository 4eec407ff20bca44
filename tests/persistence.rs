//! Persistence tests: the pair collection survives a save/load cycle.

use factweave::annotate::RuleAnnotator;
use factweave::error::ModelError;
use factweave::model::{Model, ModelConfig};

fn fitted_model() -> Model<RuleAnnotator> {
    let mut model = Model::new(RuleAnnotator::new(), ModelConfig::default());
    model
        .fit("Apple acquired Beats in 2014. Google launched Android.")
        .unwrap();
    model
}

#[test]
fn save_then_load_roundtrips_pairs() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("pairs.bin");

    let model = fitted_model();
    assert!(!model.pairs().is_empty());
    model.save(&path).unwrap();

    let loaded = Model::load(&path, RuleAnnotator::new(), ModelConfig::default()).unwrap();
    assert_eq!(loaded.pairs(), model.pairs(), "order and content must match");
    assert!(loaded.is_fitted());
}

#[test]
fn loaded_model_serves_views_without_fit() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("pairs.bin");
    fitted_model().save(&path).unwrap();

    let loaded = Model::load(&path, RuleAnnotator::new(), ModelConfig::default()).unwrap();
    let view = loaded.knowledge_graph("table").unwrap();
    assert_eq!(view.pairs().len(), loaded.pairs().len());
}

#[test]
fn loading_an_empty_collection_is_empty_data() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("empty.bin");

    // A fitted model that extracted nothing still saves a valid (empty) blob.
    let mut model = Model::new(RuleAnnotator::new(), ModelConfig::default());
    model.fit("barked loudly.").unwrap();
    model.save(&path).unwrap();

    let err = Model::load(&path, RuleAnnotator::new(), ModelConfig::default()).unwrap_err();
    assert!(matches!(err, ModelError::EmptyData { .. }));
}

#[test]
fn loading_a_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nope.bin");
    let err = Model::load(&path, RuleAnnotator::new(), ModelConfig::default()).unwrap_err();
    assert!(matches!(err, ModelError::Io { .. }));
}

#[test]
fn loaded_model_keeps_accumulating() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("pairs.bin");
    fitted_model().save(&path).unwrap();

    let mut loaded = Model::load(&path, RuleAnnotator::new(), ModelConfig::default()).unwrap();
    let before = loaded.pairs().len();
    loaded.fit("Mary founded Acme Corp.").unwrap();
    assert_eq!(loaded.pairs().len(), before + 1);
}
