//! Simple-sentence admission filter.
//!
//! The extractor assumes a unique subject and a unique object. Sentences with
//! coordination, multiple clauses, or missing arguments are skipped rather
//! than guessed — correctness over coverage.

use crate::annotate::Sentence;

/// Admit only sentences with exactly one subject-role token and exactly one
/// object-role token.
pub fn is_simple(sent: &Sentence) -> bool {
    let subjects = sent.tokens.iter().filter(|t| t.dep.is_subject()).count();
    let objects = sent.tokens.iter().filter(|t| t.dep.is_object()).count();
    objects == 1 && subjects == 1
}
