//! Sentence simplification: merge entity and noun-chunk spans into atomic units.
//!
//! Multi-word mentions ("the President of the United States") must traverse as
//! one node during extraction. The union of entity spans and noun chunks is
//! reduced to the longest non-overlapping spans, and each survivor is merged
//! into a single compound token carrying its span root's labels.

use crate::annotate::{Sentence, SpanRange};

/// Keep the longest non-overlapping spans.
///
/// Standard span-filtering discipline: sort by length descending (ties broken
/// by earlier start), then greedily accept a span only if it overlaps nothing
/// already accepted. The result is sorted by start.
pub fn filter_spans(mut spans: Vec<SpanRange>) -> Vec<SpanRange> {
    spans.sort_by(|a, b| b.len().cmp(&a.len()).then(a.start.cmp(&b.start)));
    let mut accepted: Vec<SpanRange> = Vec::new();
    for span in spans {
        if accepted.iter().all(|kept| !kept.overlaps(&span)) {
            accepted.push(span);
        }
    }
    accepted.sort_by_key(|s| s.start);
    accepted
}

/// Merge the sentence's recognized spans in place.
///
/// After simplification every surviving span is a single token, so running
/// the simplifier again performs no further merges.
pub fn simplify(sent: &mut Sentence) {
    let mut spans = sent.entities.clone();
    spans.extend(sent.noun_chunks.iter().copied());

    let accepted = filter_spans(spans);
    if accepted.iter().all(|sp| sp.len() == 1) {
        return;
    }

    let before = sent.tokens.len();
    sent.merge_spans(&accepted);
    // Stale inventories from rejected overlapping spans must not survive the
    // merge; keep only the accepted spans, now one token each.
    sent.entities = (0..sent.tokens.len())
        .filter(|&i| !sent.tokens[i].ent.is_empty())
        .map(|i| SpanRange::new(i, i + 1))
        .collect();
    sent.noun_chunks.retain(|sp| sp.len() == 1);
    sent.noun_chunks.dedup();

    tracing::trace!(
        before,
        after = sent.tokens.len(),
        "simplified sentence"
    );
}
