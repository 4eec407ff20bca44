//! Annotated-document data model: tokens, sentences, spans.
//!
//! A [`Sentence`] owns a flat arena of [`Token`]s whose `head` indices encode a
//! dependency tree. Navigation (`nbor`, `ancestors`) and span retokenization
//! (`merge_spans`) operate on sentence-local indices, so merging a multi-word
//! span rewrites every head reference in one pass.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pos {
    Noun,
    /// Proper noun.
    Propn,
    Pron,
    Verb,
    Adj,
    Adv,
    /// Adposition (preposition/postposition).
    Adp,
    /// Verb particle ("give *up*").
    Part,
    Det,
    Num,
    Cconj,
    Sconj,
    Punct,
    Sym,
    Intj,
    /// Unclassified / other.
    X,
}

impl Pos {
    /// Categories stripped from generic noun phrases during refinement.
    pub fn is_unwanted(self) -> bool {
        matches!(
            self,
            Pos::Pron | Pos::Part | Pos::Det | Pos::Sconj | Pos::Punct | Pos::Sym | Pos::X
        )
    }
}

/// Fine-grained dependency label relating a token to its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dep {
    /// Nominal subject.
    Nsubj,
    /// Passive nominal subject.
    NsubjPass,
    /// Clausal subject.
    Csubj,
    /// Direct object.
    Dobj,
    /// Dative (indirect) object.
    Dative,
    /// Attribute (predicate nominal).
    Attr,
    /// Object predicate.
    Oprd,
    /// Object of a preposition.
    Pobj,
    /// Prepositional modifier.
    Prep,
    Det,
    Amod,
    Advmod,
    Compound,
    Conj,
    Cc,
    Punct,
    /// Sentence root (head points at the token itself).
    Root,
    /// Unclassified dependent.
    Dep,
}

impl Dep {
    /// Nominal-subject variants counted by the simple-sentence filter.
    pub fn is_subject(self) -> bool {
        matches!(self, Dep::Nsubj | Dep::NsubjPass | Dep::Csubj)
    }

    /// Direct-object variants counted by the simple-sentence filter.
    pub fn is_object(self) -> bool {
        matches!(self, Dep::Dobj | Dep::Dative | Dep::Attr | Dep::Oprd)
    }
}

/// A contiguous token range `[start, end)` within one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRange {
    pub start: usize,
    pub end: usize,
}

impl SpanRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "span must be non-empty");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether two ranges share at least one token.
    pub fn overlaps(&self, other: &SpanRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Atomic unit after span merging: a single word or a merged multi-word span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text. Merged spans join their words with single spaces.
    pub text: String,
    /// Coarse part-of-speech category.
    pub pos: Pos,
    /// Dependency label relating this token to `head`.
    pub dep: Dep,
    /// Named-entity category ("PERSON", "ORG", "CARDINAL", ...), empty if none.
    pub ent: String,
    /// Position within the sentence.
    pub i: usize,
    /// Sentence-local index of the syntactic head. Roots point at themselves.
    pub head: usize,
}

/// An ordered sequence of tokens with entity and noun-chunk span inventories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    /// Named-entity spans recognized by the provider.
    pub entities: Vec<SpanRange>,
    /// Base noun-phrase spans recognized by the provider.
    pub noun_chunks: Vec<SpanRange>,
}

impl Sentence {
    /// The neighbor `offset` positions away from token `i`, if any.
    pub fn nbor(&self, i: usize, offset: isize) -> Option<&Token> {
        let target = i.checked_add_signed(offset)?;
        self.tokens.get(target)
    }

    /// Indices of token `i`'s ancestors, nearest head first, excluding `i`.
    ///
    /// Stops at the root (a token that is its own head). The step count is
    /// capped at the sentence length so a malformed head cycle cannot loop.
    pub fn ancestors(&self, i: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut cur = i;
        for _ in 0..self.tokens.len() {
            let head = self.tokens[cur].head;
            if head == cur {
                break;
            }
            chain.push(head);
            cur = head;
        }
        chain
    }

    /// Surface text of the sentence (space-joined tokens).
    pub fn text(&self) -> String {
        let words: Vec<&str> = self.tokens.iter().map(|t| t.text.as_str()).collect();
        words.join(" ")
    }

    /// Merge each span into one compound token, in place.
    ///
    /// `spans` must be sorted by start and non-overlapping. The merged token
    /// takes the joined surface text and inherits the POS tag, dependency
    /// label, and entity category of the span's syntactic root (the token
    /// whose head lies outside the span). All head references and the
    /// entity/noun-chunk inventories are remapped to the new indices.
    ///
    /// Returns the old-index → new-index table.
    pub fn merge_spans(&mut self, spans: &[SpanRange]) -> Vec<usize> {
        let n = self.tokens.len();
        let mut new_of = vec![0usize; n];
        let mut new_tokens: Vec<Token> = Vec::new();

        let mut next_span = 0;
        let mut old = 0;
        while old < n {
            let at_span = spans
                .get(next_span)
                .filter(|sp| sp.start == old)
                .copied();
            match at_span {
                Some(sp) if sp.len() > 1 => {
                    next_span += 1;
                    let new_idx = new_tokens.len();
                    for k in sp.start..sp.end {
                        new_of[k] = new_idx;
                    }
                    // The span's syntactic root: its head lies outside the
                    // span. Shallow parses can produce several; the rightmost
                    // is the phrase head in English noun phrases.
                    let root_old = (sp.start..sp.end)
                        .rev()
                        .find(|&k| {
                            let h = self.tokens[k].head;
                            h == k || h < sp.start || h >= sp.end
                        })
                        .unwrap_or(sp.start);
                    let words: Vec<&str> = self.tokens[sp.start..sp.end]
                        .iter()
                        .map(|t| t.text.as_str())
                        .collect();
                    let root = &self.tokens[root_old];
                    new_tokens.push(Token {
                        text: words.join(" "),
                        pos: root.pos,
                        dep: root.dep,
                        ent: root.ent.clone(),
                        i: new_idx,
                        // Old index for now; remapped below once the table is complete.
                        head: root.head,
                    });
                    old = sp.end;
                }
                _ => {
                    if at_span.is_some() {
                        // Length-1 span: nothing to merge.
                        next_span += 1;
                    }
                    let new_idx = new_tokens.len();
                    new_of[old] = new_idx;
                    let mut tok = self.tokens[old].clone();
                    tok.i = new_idx;
                    new_tokens.push(tok);
                    old += 1;
                }
            }
        }

        for tok in &mut new_tokens {
            tok.head = new_of[tok.head];
        }

        self.entities = remap_ranges(&self.entities, &new_of);
        self.noun_chunks = remap_ranges(&self.noun_chunks, &new_of);
        self.tokens = new_tokens;
        new_of
    }
}

fn remap_ranges(ranges: &[SpanRange], new_of: &[usize]) -> Vec<SpanRange> {
    ranges
        .iter()
        .filter(|r| !r.is_empty() && r.end <= new_of.len())
        .map(|r| SpanRange::new(new_of[r.start], new_of[r.end - 1] + 1))
        .collect()
}

/// A fully annotated document: sentences in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDoc {
    pub sentences: Vec<Sentence>,
}

impl AnnotatedDoc {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, pos: Pos, dep: Dep, i: usize, head: usize) -> Token {
        Token {
            text: text.into(),
            pos,
            dep,
            ent: String::new(),
            i,
            head,
        }
    }

    /// "the big dog barked" with "the big dog" as a noun chunk.
    fn chunk_sentence() -> Sentence {
        Sentence {
            tokens: vec![
                tok("the", Pos::Det, Dep::Det, 0, 2),
                tok("big", Pos::Adj, Dep::Amod, 1, 2),
                tok("dog", Pos::Noun, Dep::Nsubj, 2, 3),
                tok("barked", Pos::Verb, Dep::Root, 3, 3),
            ],
            entities: vec![],
            noun_chunks: vec![SpanRange::new(0, 3)],
        }
    }

    #[test]
    fn span_overlap_is_symmetric() {
        let a = SpanRange::new(0, 3);
        let b = SpanRange::new(2, 5);
        let c = SpanRange::new(3, 5);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn merge_inherits_root_pos_and_dep() {
        let mut sent = chunk_sentence();
        sent.merge_spans(&[SpanRange::new(0, 3)]);

        assert_eq!(sent.tokens.len(), 2);
        let merged = &sent.tokens[0];
        assert_eq!(merged.text, "the big dog");
        assert_eq!(merged.pos, Pos::Noun);
        assert_eq!(merged.dep, Dep::Nsubj);
        assert_eq!(merged.head, 1);
        assert_eq!(sent.tokens[1].text, "barked");
        assert_eq!(sent.tokens[1].head, 1, "root still points at itself");
    }

    #[test]
    fn merge_remaps_span_inventories() {
        let mut sent = chunk_sentence();
        sent.merge_spans(&[SpanRange::new(0, 3)]);
        assert_eq!(sent.noun_chunks, vec![SpanRange::new(0, 1)]);
    }

    #[test]
    fn length_one_spans_change_nothing() {
        let mut sent = chunk_sentence();
        let before = sent.tokens.clone();
        sent.merge_spans(&[SpanRange::new(2, 3)]);
        assert_eq!(sent.tokens, before);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let sent = chunk_sentence();
        assert_eq!(sent.ancestors(0), vec![2, 3]);
        assert_eq!(sent.ancestors(3), Vec::<usize>::new());
    }

    #[test]
    fn ancestors_tolerate_head_cycles() {
        let mut sent = chunk_sentence();
        // Manufacture a 2-cycle that never reaches a self-headed root.
        sent.tokens[2].head = 3;
        sent.tokens[3].head = 2;
        let chain = sent.ancestors(0);
        assert!(chain.len() <= sent.tokens.len());
    }

    #[test]
    fn nbor_respects_bounds() {
        let sent = chunk_sentence();
        assert_eq!(sent.nbor(0, 1).unwrap().text, "big");
        assert_eq!(sent.nbor(3, -1).unwrap().text, "dog");
        assert!(sent.nbor(3, 1).is_none());
        assert!(sent.nbor(0, -1).is_none());
    }
}
