//! Subject–relation–object extraction over the dependency tree.
//!
//! For each object-role token `O` in a simplified sentence:
//!
//! 1. `S` is a left dependent of `head(O)` carrying a subject-role label;
//!    without one the sentence is an extraction miss, not an error.
//! 2. The relation is the root ancestor of `O`, extended by a single
//!    following adposition/particle token ("depends *on*", "give *up*").
//!    An object with no root ancestor yields the literal `"unknown"`.
//! 3. Both spans pass through the entity refiner before emission.

use crate::annotate::{AnnotationProvider, Dep, Pos, Sentence};
use crate::error::AnnotateError;
use crate::export::EntityPair;
use crate::pipeline::refine::Refiner;

/// Relation text reported when an object token has no root ancestor.
pub const UNKNOWN_RELATION: &str = "unknown";

/// A raw extraction candidate: sentence-local subject/object token indices
/// plus the inferred relation phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub subject: usize,
    pub object: usize,
    pub relation: String,
}

/// Lazily enumerate the sentence's extraction candidates.
///
/// Finite and restartable: the iterator walks token order, so re-running it
/// over the same sentence yields the same candidates.
pub fn candidates(sent: &Sentence) -> impl Iterator<Item = Candidate> + '_ {
    sent.tokens
        .iter()
        .filter(|t| t.dep.is_object())
        .filter_map(|obj| {
            let head = obj.head;
            let subject = sent
                .tokens
                .iter()
                .take(head)
                .find(|t| t.head == head && t.dep.is_subject())?;
            Some(Candidate {
                subject: subject.i,
                object: obj.i,
                relation: relation_phrase(sent, obj.i),
            })
        })
}

/// Infer the relation phrase for the object at `obj_idx`.
fn relation_phrase(sent: &Sentence, obj_idx: usize) -> String {
    let root = sent
        .ancestors(obj_idx)
        .into_iter()
        .find(|&i| sent.tokens[i].dep == Dep::Root);
    let Some(root) = root else {
        return UNKNOWN_RELATION.to_string();
    };

    let root_text = &sent.tokens[root].text;
    match sent.nbor(root, 1) {
        // Single-token lookahead, not recursive.
        Some(next) if matches!(next.pos, Pos::Adp | Pos::Part) => {
            format!("{root_text} {}", next.text)
        }
        _ => root_text.clone(),
    }
}

/// Extract refined entity pairs from one simplified sentence.
///
/// Each candidate's subject and object spans are passed through the refiner;
/// degenerate pairs (any empty field) are left for the aggregator to drop.
pub fn extract<P: AnnotationProvider>(
    refiner: &mut Refiner<'_, P>,
    sent_idx: usize,
    sent: &Sentence,
) -> Result<Vec<EntityPair>, AnnotateError> {
    let raw: Vec<Candidate> = candidates(sent).collect();
    let mut pairs = Vec::with_capacity(raw.len());
    for cand in raw {
        let (subject, subject_type) = refiner.refine(sent_idx, sent, cand.subject)?;
        let (object, object_type) = refiner.refine(sent_idx, sent, cand.object)?;
        tracing::debug!(
            subject = %subject,
            relation = %cand.relation,
            object = %object,
            "extracted triple"
        );
        pairs.push(EntityPair {
            subject,
            relation: cand.relation,
            object,
            subject_type,
            object_type,
        });
    }
    Ok(pairs)
}
