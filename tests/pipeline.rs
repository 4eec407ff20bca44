//! End-to-end tests for the extraction pipeline.
//!
//! These exercise the full path from raw text through preprocessing,
//! simplification, filtering, extraction, and refinement to the accumulated
//! pair collection and its views.

use factweave::annotate::RuleAnnotator;
use factweave::error::ModelError;
use factweave::export::KnowledgeGraphView;
use factweave::model::{Model, ModelConfig};

fn fresh_model() -> Model<RuleAnnotator> {
    Model::new(RuleAnnotator::new(), ModelConfig::default())
}

#[test]
fn end_to_end_svo_scenario() {
    let mut model = fresh_model();
    model.fit("Apple acquired Beats in 2014.").unwrap();

    let view = model.knowledge_graph("list").unwrap();
    let pairs = view.pairs();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].subject, "Apple");
    assert_eq!(pairs[0].relation, "acquired");
    assert_eq!(pairs[0].object, "Beats");
}

#[test]
fn no_view_quintuple_has_empty_fields() {
    let mut model = fresh_model();
    model
        .fit(
            "Apple acquired Beats in 2014.\n\
             the big dog chased the small cat.\n\
             Mary founded Acme Corp.\n\
             barked loudly.",
        )
        .unwrap();

    let view = model.knowledge_graph("list").unwrap();
    for pair in view.pairs() {
        assert!(pair.is_complete(), "empty field in {pair}");
    }
}

#[test]
fn multiple_fits_accumulate_in_order() {
    let mut model = fresh_model();
    model.fit("Apple acquired Beats.").unwrap();
    model.fit("Google launched Android.").unwrap();

    let pairs = model.pairs();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].subject, "Apple");
    assert_eq!(pairs[1].subject, "Google");
}

#[test]
fn newline_and_citation_cleanup_feeds_extraction() {
    let mut model = fresh_model();
    model
        .fit("Apple acquired Beats[12]\n\nGoogle launched Android[3]")
        .unwrap();
    let subjects: Vec<&str> = model.pairs().iter().map(|p| p.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Apple", "Google"]);
}

#[test]
fn coreference_pass_recovers_pronoun_subjects() {
    let text = "Mary founded Acme Corp. She launched Teleport.";

    let mut without = fresh_model();
    without.fit(text).unwrap();
    assert!(
        !without.pairs().iter().any(|p| p.subject == "Mary" && p.object == "Teleport"),
        "pronoun subject should not resolve without the pass"
    );

    let mut with = Model::new(RuleAnnotator::new(), ModelConfig { coreference: true });
    with.fit(text).unwrap();
    assert!(
        with.pairs().iter().any(|p| p.subject == "Mary" && p.object == "Teleport"),
        "pairs: {:?}",
        with.pairs()
    );
}

#[test]
fn table_view_before_fit_is_empty_state() {
    let model = fresh_model();
    assert!(matches!(
        model.knowledge_graph("table"),
        Err(ModelError::EmptyState)
    ));
}

#[test]
fn unknown_format_is_invalid_format() {
    let mut model = fresh_model();
    model.fit("Apple acquired Beats.").unwrap();
    assert!(matches!(
        model.knowledge_graph("xml"),
        Err(ModelError::InvalidFormat { format }) if format == "xml"
    ));
}

#[test]
fn table_view_carries_same_rows_as_list() {
    let mut model = fresh_model();
    model.fit("Apple acquired Beats.").unwrap();

    let list = model.knowledge_graph("list").unwrap();
    let table = model.knowledge_graph("table").unwrap();
    assert_eq!(list.pairs(), table.pairs());
    assert!(matches!(table, KnowledgeGraphView::Table(_)));

    let rendered = table.to_string();
    assert!(rendered.contains("subject"));
    assert!(rendered.contains("Apple"));
}

#[test]
fn refit_on_same_text_is_deterministic() {
    let text = "Apple acquired Beats in 2014.";
    let mut a = fresh_model();
    let mut b = fresh_model();
    a.fit(text).unwrap();
    b.fit(text).unwrap();
    assert_eq!(a.pairs(), b.pairs());
}
