//! Built-in heuristic English annotation provider.
//!
//! A deterministic, lexicon-driven annotator: whitespace tokenization with
//! punctuation splitting, word-class tables for POS tagging, a single-pass
//! SVO dependency analysis, gazetteer NER, base noun-phrase chunking, and a
//! naive most-recent-antecedent coreference rewrite.
//!
//! This is intentionally shallow — enough for simple declarative prose and for
//! exercising the extraction pipeline end to end. Anything statistical lives
//! behind the [`AnnotationProvider`] trait instead.

use crate::annotate::doc::{AnnotatedDoc, Dep, Pos, Sentence, SpanRange, Token};
use crate::annotate::AnnotationProvider;
use crate::error::AnnotateError;

// ---------------------------------------------------------------------------
// Word-class tables
// ---------------------------------------------------------------------------

const PUNCT_CHARS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '"', '\'', '[', ']',
];

const SENTENCE_ENDERS: &[&str] = &[".", "!", "?"];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "some", "any", "each",
    "every", "no",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "his", "its", "their", "my", "your", "our", "who", "whom", "which",
];

/// Pronouns rewritten by the coreference pass (subject/object forms only —
/// possessives are left alone).
const COREF_PRONOUNS: &[&str] = &["he", "she", "it", "they", "him", "her", "them"];

const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have",
    "had", "do", "does", "did", "will", "would", "can", "could", "shall",
    "should", "may", "might", "must",
];

/// Verb particles checked before adpositions ("give *up*", "shut *down*").
const PARTICLES: &[&str] = &["up", "down", "off", "away", "back", "out"];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "of", "to", "with", "by", "from", "for", "about",
    "into", "over", "under", "between", "after", "before", "during",
    "against", "through", "without", "via", "near", "across",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "since", "while", "whereas", "unless",
    "until", "whether", "if", "as",
];

/// High-frequency adjectives the word-ending heuristics cannot recognize.
const COMMON_ADJECTIVES: &[&str] = &[
    "big", "small", "large", "little", "old", "new", "young", "good", "bad",
    "great", "high", "low", "long", "short", "red", "blue", "green", "black",
    "white", "early", "late", "major", "minor", "public", "private", "full",
    "empty", "strong", "weak", "rich", "poor", "fast", "slow",
];

/// High-frequency content verbs that word-ending heuristics miss.
const COMMON_VERBS: &[&str] = &[
    "acquired", "acquires", "acquire", "bought", "buys", "buy", "sold",
    "sells", "sell", "founded", "founds", "found", "launched", "launches",
    "launch", "announced", "announces", "announce", "released", "releases",
    "release", "owns", "own", "owned", "runs", "run", "ran", "built",
    "builds", "build", "wrote", "writes", "write", "said", "says", "say",
    "gave", "gives", "give", "took", "takes", "take", "made", "makes",
    "make", "won", "wins", "win", "leads", "led", "lead", "joined", "joins",
    "join", "left", "leaves", "leave", "hired", "hires", "hire", "employs",
    "employ", "produces", "produce", "develops", "develop", "created",
    "creates", "create", "depends", "depend", "contains", "contain",
    "includes", "include",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    "nine", "ten", "eleven", "twelve", "twenty", "thirty", "forty", "fifty",
    "hundred", "thousand", "million", "billion",
];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh",
    "eighth", "ninth", "tenth",
];

// ---------------------------------------------------------------------------
// Gazetteers for entity classification
// ---------------------------------------------------------------------------

const ORG_SUFFIXES: &[&str] = &[
    "inc", "corp", "corporation", "ltd", "llc", "co", "company", "group",
    "university", "institute", "foundation", "labs", "systems",
];

const GPE_NAMES: &[&str] = &[
    "america", "states", "usa", "france", "germany", "japan", "china",
    "india", "england", "london", "paris", "berlin", "tokyo", "york",
    "california", "texas", "europe", "africa", "asia",
];

const FIRST_NAMES: &[&str] = &[
    "john", "mary", "james", "patricia", "robert", "jennifer", "michael",
    "linda", "william", "elizabeth", "david", "susan", "richard", "sarah",
    "thomas", "karen", "steve", "elon", "jeff", "tim", "satya", "mark",
    "bill", "larry", "sergey", "ada", "alan", "grace",
];

/// Deterministic lexicon-driven English annotator.
///
/// Stateless and cheap to construct; the same input text always produces the
/// same [`AnnotatedDoc`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAnnotator;

impl RuleAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl AnnotationProvider for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc, AnnotateError> {
        let sentences = split_sentences(word_tokens(text))
            .into_iter()
            .map(|words| annotate_sentence(&words))
            .filter(|sent| !sent.tokens.is_empty())
            .collect();
        Ok(AnnotatedDoc::new(sentences))
    }

    fn resolve_coreference(&self, text: &str) -> Result<String, AnnotateError> {
        let doc = self.annotate(text)?;
        let mut words: Vec<String> = Vec::new();
        // Personal pronouns resolve to the last PERSON mention; it/they/them
        // resolve to the last entity of any category.
        let mut last_person: Option<String> = None;
        let mut last_entity: Option<String> = None;

        for sent in &doc.sentences {
            for (idx, tok) in sent.tokens.iter().enumerate() {
                if let Some(span) = sent.entities.iter().find(|sp| sp.start == idx) {
                    if matches!(tok.ent.as_str(), "PERSON" | "ORG" | "GPE") {
                        let mention: Vec<&str> = sent.tokens[span.start..span.end]
                            .iter()
                            .map(|t| t.text.as_str())
                            .collect();
                        let mention = mention.join(" ");
                        if tok.ent == "PERSON" {
                            last_person = Some(mention.clone());
                        }
                        last_entity = Some(mention);
                    }
                }
                let lower = tok.text.to_lowercase();
                if tok.pos == Pos::Pron && COREF_PRONOUNS.contains(&lower.as_str()) {
                    let antecedent = match lower.as_str() {
                        "he" | "she" | "him" | "her" => last_person.as_ref(),
                        _ => last_entity.as_ref(),
                    };
                    if let Some(ant) = antecedent {
                        words.push(ant.clone());
                        continue;
                    }
                }
                words.push(tok.text.clone());
            }
        }
        Ok(detokenize(&words))
    }
}

// ---------------------------------------------------------------------------
// Tokenization and sentence segmentation
// ---------------------------------------------------------------------------

fn is_punct_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| PUNCT_CHARS.contains(&c))
}

/// Whitespace tokenization with leading/trailing punctuation split off as
/// standalone tokens. Word-internal punctuation (hyphens, apostrophes in
/// contractions) is preserved.
fn word_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for raw in text.split_whitespace() {
        let mut core = raw;
        let mut leading = Vec::new();
        while let Some(c) = core.chars().next() {
            if PUNCT_CHARS.contains(&c) {
                leading.push(c.to_string());
                core = &core[c.len_utf8()..];
            } else {
                break;
            }
        }
        let mut trailing = Vec::new();
        while let Some(c) = core.chars().next_back() {
            if PUNCT_CHARS.contains(&c) {
                trailing.push(c.to_string());
                core = &core[..core.len() - c.len_utf8()];
            } else {
                break;
            }
        }
        tokens.extend(leading);
        if !core.is_empty() {
            tokens.push(core.to_string());
        }
        trailing.reverse();
        tokens.extend(trailing);
    }
    tokens
}

/// Group a flat token stream into sentences, each ending at `.`, `!`, or `?`.
fn split_sentences(tokens: Vec<String>) -> Vec<Vec<String>> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();
    for tok in tokens {
        let ends = SENTENCE_ENDERS.contains(&tok.as_str());
        current.push(tok);
        if ends {
            sentences.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

// ---------------------------------------------------------------------------
// POS tagging
// ---------------------------------------------------------------------------

fn is_cardinal(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}

fn is_ordinal(lower: &str) -> bool {
    if ORDINAL_WORDS.contains(&lower) {
        return true;
    }
    let digits: String = lower.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return false;
    }
    matches!(&lower[digits.len()..], "st" | "nd" | "rd" | "th")
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Tag a single word: `(pos, entity category)` where the category is empty
/// unless the word is numeric/ordinal (named-entity runs are labeled later).
fn tag_word(word: &str) -> (Pos, &'static str) {
    if is_punct_word(word) {
        return (Pos::Punct, "");
    }
    let lower = word.to_lowercase();
    let lower = lower.as_str();

    if is_cardinal(word) || NUMBER_WORDS.contains(&lower) {
        return (Pos::Num, "CARDINAL");
    }
    if is_ordinal(lower) {
        return (Pos::Adj, "ORDINAL");
    }
    if DETERMINERS.contains(&lower) {
        return (Pos::Det, "");
    }
    if PRONOUNS.contains(&lower) {
        return (Pos::Pron, "");
    }
    if AUXILIARIES.contains(&lower) {
        return (Pos::Verb, "");
    }
    if PARTICLES.contains(&lower) {
        return (Pos::Part, "");
    }
    if ADPOSITIONS.contains(&lower) {
        return (Pos::Adp, "");
    }
    if COORDINATORS.contains(&lower) {
        return (Pos::Cconj, "");
    }
    if SUBORDINATORS.contains(&lower) {
        return (Pos::Sconj, "");
    }
    if COMMON_ADJECTIVES.contains(&lower) {
        return (Pos::Adj, "");
    }
    if COMMON_VERBS.contains(&lower) {
        return (Pos::Verb, "");
    }
    if is_capitalized(word) {
        return (Pos::Propn, "");
    }
    if word.len() > 4 && (lower.ends_with("ed") || lower.ends_with("ing")) {
        return (Pos::Verb, "");
    }
    if word.len() > 3 && lower.ends_with("ly") {
        return (Pos::Adv, "");
    }
    (Pos::Noun, "")
}

// ---------------------------------------------------------------------------
// Sentence-level annotation
// ---------------------------------------------------------------------------

fn annotate_sentence(words: &[String]) -> Sentence {
    let mut tokens: Vec<Token> = words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let (pos, ent) = tag_word(w);
            Token {
                text: w.clone(),
                pos,
                dep: Dep::Dep,
                ent: ent.to_string(),
                i,
                head: i,
            }
        })
        .collect();

    let entities = label_entities(&mut tokens);
    assign_deps(&mut tokens);
    let noun_chunks = chunk_spans(&tokens);

    Sentence {
        tokens,
        entities,
        noun_chunks,
    }
}

/// Classify a run of proper nouns against the gazetteers.
fn classify_entity(words: &[&str]) -> &'static str {
    let lowers: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    if lowers.iter().any(|w| ORG_SUFFIXES.contains(&w.as_str())) {
        return "ORG";
    }
    if lowers.iter().any(|w| GPE_NAMES.contains(&w.as_str())) {
        return "GPE";
    }
    if FIRST_NAMES.contains(&lowers[0].as_str()) {
        return "PERSON";
    }
    if words.len() == 1 && words[0].chars().all(|c| c.is_uppercase()) {
        return "ORG";
    }
    "ORG"
}

/// Label proper-noun runs with entity categories and collect every
/// entity-bearing span (including single cardinal/ordinal tokens).
fn label_entities(tokens: &mut [Token]) -> Vec<SpanRange> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].pos == Pos::Propn {
            let start = i;
            while i < tokens.len() && tokens[i].pos == Pos::Propn {
                i += 1;
            }
            let words: Vec<&str> = tokens[start..i].iter().map(|t| t.text.as_str()).collect();
            let category = classify_entity(&words);
            for tok in &mut tokens[start..i] {
                tok.ent = category.to_string();
            }
            spans.push(SpanRange::new(start, i));
        } else {
            if !tokens[i].ent.is_empty() {
                spans.push(SpanRange::new(i, i + 1));
            }
            i += 1;
        }
    }
    spans
}

fn is_nounish(pos: Pos) -> bool {
    matches!(pos, Pos::Noun | Pos::Propn | Pos::Num | Pos::Pron)
}

/// Index of the head of the noun phrase containing token `i`: the last
/// noun/proper-noun of the contiguous run starting at `i`.
fn phrase_head(tokens: &[Token], i: usize) -> usize {
    let mut head = i;
    let mut j = i;
    while j < tokens.len()
        && matches!(tokens[j].pos, Pos::Noun | Pos::Propn | Pos::Num | Pos::Adj | Pos::Det)
    {
        if matches!(tokens[j].pos, Pos::Noun | Pos::Propn | Pos::Num) {
            head = j;
        }
        j += 1;
    }
    head
}

/// Single-pass SVO dependency analysis.
///
/// Picks the first verb as root, the rightmost nominal before it as subject,
/// and the first bare nominal after it as direct object; nominals governed by
/// a preceding adposition become prepositional objects instead.
fn assign_deps(tokens: &mut Vec<Token>) {
    if tokens.is_empty() {
        return;
    }
    let root = tokens
        .iter()
        .position(|t| t.pos == Pos::Verb)
        .or_else(|| tokens.iter().position(|t| is_nounish(t.pos)))
        .unwrap_or(0);
    tokens[root].dep = Dep::Root;
    tokens[root].head = root;

    // Defaults and modifiers.
    for i in 0..tokens.len() {
        if i == root {
            continue;
        }
        let (dep, head) = match tokens[i].pos {
            Pos::Punct => (Dep::Punct, root),
            Pos::Det => (Dep::Det, phrase_head(tokens, i)),
            Pos::Adj => (Dep::Amod, phrase_head(tokens, i)),
            Pos::Adv => (Dep::Advmod, root),
            Pos::Adp => (Dep::Prep, root),
            Pos::Cconj => (Dep::Cc, root),
            Pos::Propn if tokens.get(i + 1).is_some_and(|t| t.pos == Pos::Propn) => {
                (Dep::Compound, phrase_head(tokens, i))
            }
            _ => (Dep::Dep, root),
        };
        tokens[i].dep = dep;
        tokens[i].head = head;
    }

    // Subject: rightmost phrase head before the root.
    let subject = (0..root)
        .filter(|&i| is_nounish(tokens[i].pos) && tokens[i].dep != Dep::Compound)
        .next_back();
    if let Some(s) = subject {
        tokens[s].dep = Dep::Nsubj;
        tokens[s].head = root;
    }

    // Objects: first bare nominal after the root is the direct object;
    // nominals after an adposition attach to it as prepositional objects.
    let mut pending_prep: Option<usize> = None;
    let mut have_dobj = false;
    for i in root + 1..tokens.len() {
        match tokens[i].pos {
            Pos::Adp => pending_prep = Some(i),
            pos if is_nounish(pos) && tokens[i].dep != Dep::Compound => {
                if let Some(p) = pending_prep.take() {
                    tokens[i].dep = Dep::Pobj;
                    tokens[i].head = p;
                } else if !have_dobj {
                    tokens[i].dep = Dep::Dobj;
                    tokens[i].head = root;
                    have_dobj = true;
                } else {
                    tokens[i].dep = Dep::Conj;
                    tokens[i].head = root;
                }
            }
            _ => {}
        }
    }
}

/// Base noun-phrase spans: maximal `det/adj/num/noun` runs, trimmed to end at
/// their last nominal token.
fn chunk_spans(tokens: &[Token]) -> Vec<SpanRange> {
    let mut chunks = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if matches!(
            tokens[i].pos,
            Pos::Det | Pos::Adj | Pos::Num | Pos::Noun | Pos::Propn | Pos::Pron
        ) {
            let start = i;
            let mut last_nominal = None;
            while i < tokens.len()
                && matches!(
                    tokens[i].pos,
                    Pos::Det | Pos::Adj | Pos::Num | Pos::Noun | Pos::Propn | Pos::Pron
                )
            {
                if is_nounish(tokens[i].pos) {
                    last_nominal = Some(i);
                }
                i += 1;
            }
            if let Some(end) = last_nominal {
                chunks.push(SpanRange::new(start, end + 1));
            }
        } else {
            i += 1;
        }
    }
    chunks
}

/// Rejoin words into running text, attaching punctuation to the previous word.
fn detokenize(words: &[String]) -> String {
    let mut out = String::new();
    for w in words {
        if !out.is_empty() && !is_punct_word(w) {
            out.push(' ');
        }
        out.push_str(w);
    }
    out
}
