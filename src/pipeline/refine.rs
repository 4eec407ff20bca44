//! Entity refinement: turn a raw subject/object span into a clean phrase and
//! type tag.
//!
//! Three cases, decided per span:
//!
//! 1. No entity category → generic noun phrase. The span text is re-annotated
//!    in isolation and rebuilt from its content words (unwanted word classes
//!    and stop-words dropped), tagged `NOUN_CHUNK`.
//! 2. Category in {NOMINAL, CARDINAL, ORDINAL} *and* single-word text → the
//!    span grows forward over sentence neighbors until the first verb or
//!    punctuation ("three" → "three cars"). Category unchanged.
//! 3. Anything else → text and category pass through unchanged.
//!
//! Results are memoized in a small LRU cache scoped to one fit pass, keyed
//! structurally on `(sentence index, token index)` so stale identities can
//! never leak across documents.

use std::collections::VecDeque;

use crate::annotate::{AnnotationProvider, Pos, Sentence};
use crate::error::AnnotateError;

/// Entity categories eligible for forward extension when single-word.
const EXTENDABLE: &[&str] = &["NOMINAL", "CARDINAL", "ORDINAL"];

/// Type tag assigned to refined generic noun phrases.
pub const NOUN_CHUNK_TYPE: &str = "NOUN_CHUNK";

/// Stop-words dropped from generic noun phrases alongside unwanted word
/// classes.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "is", "are", "was", "were", "be", "been",
    "this", "that", "these", "those", "it", "its", "he", "she", "they",
    "we", "you", "his", "her", "their", "my", "your", "our", "not", "no",
    "so", "if", "as", "such", "some", "any", "all", "own",
];

fn is_stopword(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOPWORDS.contains(&lower.as_str())
}

/// Bounded least-recently-used memo table.
///
/// Sized for the working set of one sentence's handful of entities, not for
/// cross-document reuse. Both `get` and `put` refresh recency.
#[derive(Debug)]
struct MemoCache {
    capacity: usize,
    entries: VecDeque<((usize, usize), (String, String))>,
}

impl MemoCache {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    fn get(&mut self, key: (usize, usize)) -> Option<(String, String)> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        let entry = self.entries.remove(pos)?;
        let value = entry.1.clone();
        self.entries.push_back(entry);
        Some(value)
    }

    fn put(&mut self, key: (usize, usize), value: (String, String)) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(pos);
        }
        self.entries.push_back((key, value));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Memoizing entity refiner. Construct one per fit pass.
pub struct Refiner<'p, P: AnnotationProvider> {
    provider: &'p P,
    cache: MemoCache,
}

/// Default memo capacity — one sentence's working set.
pub const DEFAULT_CACHE_CAPACITY: usize = 25;

impl<'p, P: AnnotationProvider> Refiner<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self::with_capacity(provider, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(provider: &'p P, capacity: usize) -> Self {
        Self {
            provider,
            cache: MemoCache::new(capacity),
        }
    }

    /// Number of memoized refinements currently held.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Refine the span at `tok_idx` of `sent` into `(text, type)`.
    ///
    /// `sent_idx` is the sentence's index within the current document and
    /// forms part of the memo key.
    pub fn refine(
        &mut self,
        sent_idx: usize,
        sent: &Sentence,
        tok_idx: usize,
    ) -> Result<(String, String), AnnotateError> {
        let key = (sent_idx, tok_idx);
        if let Some(hit) = self.cache.get(key) {
            return Ok(hit);
        }

        let tok = &sent.tokens[tok_idx];
        let result = if tok.ent.is_empty() {
            (self.rebuild_noun_phrase(&tok.text)?, NOUN_CHUNK_TYPE.to_string())
        } else {
            // A multi-word span is never extended, whatever its label.
            let extendable = EXTENDABLE.contains(&tok.ent.as_str())
                && !tok.text.contains(char::is_whitespace);
            if extendable {
                (extend_forward(sent, tok_idx), tok.ent.clone())
            } else {
                (tok.text.clone(), tok.ent.clone())
            }
        };

        tracing::trace!(
            span = %tok.text,
            refined = %result.0,
            kind = %result.1,
            "refined entity span"
        );
        self.cache.put(key, result.clone());
        Ok(result)
    }

    /// Re-annotate the span text in isolation and keep only content words.
    fn rebuild_noun_phrase(&self, text: &str) -> Result<String, AnnotateError> {
        let doc = self.provider.annotate(text)?;
        let kept: Vec<String> = doc
            .sentences
            .iter()
            .flat_map(|s| s.tokens.iter())
            .filter(|t| !t.pos.is_unwanted() && !is_stopword(&t.text))
            .map(|t| t.text.clone())
            .collect();
        Ok(kept.join(" "))
    }
}

/// Grow a single-word span forward, consuming neighbors until the first verb
/// or punctuation token.
fn extend_forward(sent: &Sentence, tok_idx: usize) -> String {
    let mut phrase = sent.tokens[tok_idx].text.clone();
    let mut offset = 1;
    while let Some(nb) = sent.nbor(tok_idx, offset) {
        if matches!(nb.pos, Pos::Verb | Pos::Punct) {
            break;
        }
        phrase.push(' ');
        phrase.push_str(&nb.text);
        offset += 1;
    }
    phrase.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{Dep, RuleAnnotator, Token};

    fn tok(text: &str, pos: Pos, ent: &str, i: usize) -> Token {
        Token {
            text: text.into(),
            pos,
            dep: Dep::Dep,
            ent: ent.into(),
            i,
            head: i,
        }
    }

    fn sentence(tokens: Vec<Token>) -> Sentence {
        Sentence {
            tokens,
            entities: vec![],
            noun_chunks: vec![],
        }
    }

    #[test]
    fn generic_phrase_drops_determiners_and_stopwords() {
        let provider = RuleAnnotator::new();
        let mut refiner = Refiner::new(&provider);
        let sent = sentence(vec![tok("the big company", Pos::Noun, "", 0)]);
        let (text, kind) = refiner.refine(0, &sent, 0).unwrap();
        assert_eq!(text, "big company");
        assert_eq!(kind, NOUN_CHUNK_TYPE);
    }

    #[test]
    fn single_word_cardinal_extends_to_verb() {
        let provider = RuleAnnotator::new();
        let mut refiner = Refiner::new(&provider);
        let sent = sentence(vec![
            tok("three", Pos::Num, "CARDINAL", 0),
            tok("red", Pos::Adj, "", 1),
            tok("cars", Pos::Noun, "", 2),
            tok("crashed", Pos::Verb, "", 3),
            tok(".", Pos::Punct, "", 4),
        ]);
        let (text, kind) = refiner.refine(0, &sent, 0).unwrap();
        assert_eq!(text, "three red cars");
        assert_eq!(kind, "CARDINAL");
    }

    #[test]
    fn extension_stops_at_punctuation() {
        let provider = RuleAnnotator::new();
        let mut refiner = Refiner::new(&provider);
        let sent = sentence(vec![
            tok("second", Pos::Adj, "ORDINAL", 0),
            tok("round", Pos::Noun, "", 1),
            tok(",", Pos::Punct, "", 2),
            tok("maybe", Pos::Adv, "", 3),
        ]);
        let (text, _) = refiner.refine(0, &sent, 0).unwrap();
        assert_eq!(text, "second round");
    }

    #[test]
    fn multi_word_cardinal_is_not_extended() {
        let provider = RuleAnnotator::new();
        let mut refiner = Refiner::new(&provider);
        let sent = sentence(vec![
            tok("twenty one", Pos::Num, "CARDINAL", 0),
            tok("cars", Pos::Noun, "", 1),
        ]);
        let (text, kind) = refiner.refine(0, &sent, 0).unwrap();
        assert_eq!(text, "twenty one");
        assert_eq!(kind, "CARDINAL");
    }

    #[test]
    fn named_entities_pass_through_unchanged() {
        let provider = RuleAnnotator::new();
        let mut refiner = Refiner::new(&provider);
        let sent = sentence(vec![tok("Apple", Pos::Propn, "ORG", 0)]);
        let (text, kind) = refiner.refine(0, &sent, 0).unwrap();
        assert_eq!(text, "Apple");
        assert_eq!(kind, "ORG");
    }

    #[test]
    fn refinement_is_deterministic_under_memoization() {
        let provider = RuleAnnotator::new();
        let mut refiner = Refiner::new(&provider);
        let sent = sentence(vec![tok("the old castle", Pos::Noun, "", 0)]);
        let first = refiner.refine(3, &sent, 0).unwrap();
        let second = refiner.refine(3, &sent, 0).unwrap();
        assert_eq!(first, second);
        assert_eq!(refiner.cached(), 1);
    }

    #[test]
    fn cache_evicts_least_recently_used() {
        let mut cache = MemoCache::new(2);
        cache.put((0, 0), ("a".into(), "T".into()));
        cache.put((0, 1), ("b".into(), "T".into()));
        // Touch (0,0) so (0,1) is the eviction victim.
        assert!(cache.get((0, 0)).is_some());
        cache.put((0, 2), ("c".into(), "T".into()));
        assert!(cache.get((0, 1)).is_none());
        assert!(cache.get((0, 0)).is_some());
        assert!(cache.get((0, 2)).is_some());
    }

    #[test]
    fn cache_update_replaces_value() {
        let mut cache = MemoCache::new(2);
        cache.put((1, 1), ("old".into(), "T".into()));
        cache.put((1, 1), ("new".into(), "T".into()));
        assert_eq!(cache.get((1, 1)).unwrap().0, "new");
        assert_eq!(cache.len(), 1);
    }
}
