use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::taxonomy;
use crate::{Confidence, DetectedDistortion};

/// Uniform detector signature: lowercased text plus its tokens in, at most one finding out.
pub type Detector = fn(&str, &[String]) -> Option<DetectedDistortion>;

/// Evaluation order. Also the order findings appear in a `DetectionResult`.
pub const DETECTORS: [Detector; 11] = [
    detect_all_or_nothing,
    detect_overgeneralization,
    detect_labeling,
    detect_should_statements,
    detect_catastrophizing,
    detect_personalization,
    detect_emotional_reasoning,
    detect_magnification_minimization,
    detect_disqualifying_positive,
    detect_mental_filter,
    detect_jumping_to_conclusions,
];

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    either_or_window_tokens: usize,
    either_or_gap_words: usize,
    label_filler_max_words: usize,
}

static HP: Hyperparameters = Hyperparameters {
    either_or_window_tokens: 7,
    either_or_gap_words: 5,
    label_filler_max_words: 6,
};

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

const ABSOLUTE_TOKENS: &[&str] = &[
    "always",
    "never",
    "everything",
    "nothing",
    "everyone",
    "everybody",
    "nobody",
    "noone",
    "no",
];

const SWEEPING_TOKENS: &[&str] = &[
    "everyone",
    "everybody",
    "nobody",
    "everything",
    "nothing",
    "always",
    "never",
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they", "he", "she", "it"];

const BE_VERBS: &[&str] = &["am", "is", "are", "was", "were", "be", "being", "been"];

const CONTRACTED_SUBJECT_BE: &[&str] = &[
    "i'm", "you're", "we're", "they're", "he's", "she's", "it's",
];

const NEGATIVE_IDENTITY_LABELS: &[&str] = &[
    "failure",
    "loser",
    "idiot",
    "stupid",
    "worthless",
    "useless",
    "lazy",
    "incompetent",
    "bad",
    "terrible",
    "awful",
    "broken",
    "mess",
];

const SHOULD_TERMS: &[&str] = &[
    "should",
    "must",
    "ought",
    "oughta",
    "have to",
    "need to",
    "supposed to",
];

const CATASTROPHIZING_TERMS: &[&str] = &[
    "disaster",
    "catastrophe",
    "ruined",
    "ruin",
    "collapse",
    "fall apart",
    "falling apart",
    "worst case",
    "worst-case",
    "end of the world",
];

const MAGNIFICATION_TERMS: &[&str] = &[
    "totally",
    "completely",
    "utterly",
    "massive",
    "huge",
    "enormous",
    "disaster",
    "ruined",
    "worst",
    "nightmare",
];

const MINIMIZATION_TERMS: &[&str] = &[
    "just",
    "only",
    "no big deal",
    "not a big deal",
    "just a fluke",
    "just luck",
];

const DISQUALIFYING_POSITIVE_PHRASES: &[&str] = &[
    "just luck",
    "only luck",
    "doesn't count",
    "does not count",
    "anyone could do it",
    "anyone could have done it",
    "not a big deal",
    "no big deal",
    "just got lucky",
];

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

/// A fixed vocabulary matched against lowercased text from a word start, so
/// inflected forms ("disasters", "collapsed") count but "thought" does not
/// match "ought". Spaces inside a phrase match any run of whitespace.
struct PhraseSet {
    patterns: Vec<(&'static str, Regex)>,
}

impl PhraseSet {
    fn new(terms: &[&'static str]) -> Self {
        let patterns = terms
            .iter()
            .map(|term| {
                let body = regex::escape(term).replace(' ', r"\s+");
                (*term, Regex::new(&format!(r"\b{body}")).unwrap())
            })
            .collect();
        Self { patterns }
    }

    fn hits(&self, text: &str) -> BTreeSet<&'static str> {
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(term, _)| *term)
            .collect()
    }
}

static SHOULD_SET: Lazy<PhraseSet> = Lazy::new(|| PhraseSet::new(SHOULD_TERMS));
static CATASTROPHIZING_SET: Lazy<PhraseSet> = Lazy::new(|| PhraseSet::new(CATASTROPHIZING_TERMS));
static MAGNIFICATION_SET: Lazy<PhraseSet> = Lazy::new(|| PhraseSet::new(MAGNIFICATION_TERMS));
static MINIMIZATION_SET: Lazy<PhraseSet> = Lazy::new(|| PhraseSet::new(MINIMIZATION_TERMS));
static DISQUALIFYING_SET: Lazy<PhraseSet> =
    Lazy::new(|| PhraseSet::new(DISQUALIFYING_POSITIVE_PHRASES));

static EITHER_OR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\beither\b(?:\W+\w+){{0,{}}}\W+or\b",
        HP.either_or_gap_words
    ))
    .unwrap()
});

static ALL_OR_NOTHING_PHRASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\ball-or-nothing\b").unwrap());

static NO_ONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bno\s+one\b").unwrap());

static LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    let alt = |words: &[&str]| {
        words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|")
    };
    Regex::new(&format!(
        r"\b(?:(?:{subjects})\s+(?:{be})|(?:{contracted}))\s+(?:(?:a|an|the)\s+)?(?:[\w']+\s+){{0,{filler}}}({labels})\b",
        subjects = alt(SUBJECT_PRONOUNS),
        be = alt(BE_VERBS),
        contracted = alt(CONTRACTED_SUBJECT_BE),
        filler = HP.label_filler_max_words,
        labels = alt(NEGATIVE_IDENTITY_LABELS),
    ))
    .unwrap()
});

static PERSONALIZATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\bmy\s+fault\b").unwrap(),
        Regex::new(r"\bbecause\s+of\s+me\b").unwrap(),
        Regex::new(r"\bit's\s+on\s+me\b").unwrap(),
        Regex::new(r"\bi\s+caused\b").unwrap(),
        Regex::new(r"\bi\s+made\s+this\s+happen\b").unwrap(),
    ]
});

static EMOTIONAL_REASONING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\bi\s+feel\b(?:\s+like\b|\s+that\b)?").unwrap(),
        Regex::new(r"\bit\s+feels\b(?:\s+like\b|\s+that\b)?").unwrap(),
    ]
});

static MENTAL_FILTER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\bonly\b.*\b(mistakes?|problems?|issues?|flaws?|faults?|failures?)\b").unwrap(),
        Regex::new(r"\bjust\b.*\b(negative|wrong|bad|awful|terrible)\b").unwrap(),
        Regex::new(r"\bfocus(ed)?\s+on\b.*\b(negative|mistakes|problems)\b").unwrap(),
    ]
});

static JUMPING_TO_CONCLUSIONS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\bthey\s+(must|will|probably)\b").unwrap(),
        Regex::new(r"\bhe\s+(must|will|probably)\b").unwrap(),
        Regex::new(r"\bshe\s+(must|will|probably)\b").unwrap(),
        Regex::new(r"\bi'm\s+sure\b").unwrap(),
        Regex::new(r"\bit\s+will\s+definitely\b").unwrap(),
        Regex::new(r"\bit's\s+bound\s+to\b").unwrap(),
        Regex::new(r"\bi\s+bet\b").unwrap(),
        Regex::new(r"\bgoing\s+to\s+fail\b").unwrap(),
    ]
});

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn finding(name: &'static str, explanation: String, confidence: Confidence) -> DetectedDistortion {
    assert!(
        taxonomy::is_known(name),
        "detector reported a distortion missing from the taxonomy: {name:?}"
    );
    DetectedDistortion {
        name,
        explanation,
        confidence,
    }
}

fn vocabulary_hits(tokens: &[String], vocabulary: &[&'static str]) -> BTreeSet<&'static str> {
    tokens
        .iter()
        .filter_map(|t| vocabulary.iter().find(|v| **v == t.as_str()).copied())
        .collect()
}

fn join_terms(terms: &BTreeSet<&str>) -> String {
    terms.iter().copied().collect::<Vec<_>>().join(", ")
}

fn first_match<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str())
}

fn binary_signal(text: &str, tokens: &[String]) -> Option<&'static str> {
    if EITHER_OR_RE.is_match(text) {
        return Some("binary framing pattern 'either ... or'");
    }
    if ALL_OR_NOTHING_PHRASE_RE.is_match(text) {
        return Some("explicit phrase 'all-or-nothing'");
    }
    if tokens
        .windows(3)
        .any(|w| w[0] == "all" && w[1] == "or" && w[2] == "nothing")
    {
        return Some("binary framing 'all or nothing'");
    }
    for (idx, token) in tokens.iter().enumerate() {
        if token != "either" {
            continue;
        }
        let window_end = std::cmp::min(tokens.len(), idx + HP.either_or_window_tokens);
        if tokens[idx + 1..window_end].iter().any(|t| t == "or") {
            return Some("binary framing within short window");
        }
    }
    None
}

fn absolutist_terms(text: &str, tokens: &[String]) -> BTreeSet<&'static str> {
    let mut terms = vocabulary_hits(tokens, ABSOLUTE_TOKENS);
    if NO_ONE_RE.is_match(text) {
        terms.insert("no one");
    }
    terms
}

// ---------------------------------------------------------------------------
// Detectors
// ---------------------------------------------------------------------------

pub fn detect_all_or_nothing(text: &str, tokens: &[String]) -> Option<DetectedDistortion> {
    let binary = binary_signal(text, tokens);
    let absolutes = absolutist_terms(text, tokens);

    let mut evidence: Vec<String> = Vec::new();
    if let Some(signal) = binary {
        evidence.push(signal.to_string());
    }
    if !absolutes.is_empty() {
        evidence.push(format!("absolutist terms: {}", join_terms(&absolutes)));
    }
    if evidence.is_empty() {
        return None;
    }

    let confidence = if binary.is_some() {
        Confidence::High
    } else {
        Confidence::Medium
    };
    Some(finding(
        taxonomy::ALL_OR_NOTHING,
        evidence.join("; "),
        confidence,
    ))
}

pub fn detect_overgeneralization(_text: &str, tokens: &[String]) -> Option<DetectedDistortion> {
    let terms = vocabulary_hits(tokens, SWEEPING_TOKENS);
    if terms.is_empty() {
        return None;
    }
    Some(finding(
        taxonomy::OVERGENERALIZATION,
        format!("sweeping terms: {}", join_terms(&terms)),
        Confidence::Medium,
    ))
}

pub fn detect_labeling(text: &str, _tokens: &[String]) -> Option<DetectedDistortion> {
    let caps = LABEL_RE.captures(text)?;
    let label = caps.get(1)?.as_str();
    Some(finding(
        taxonomy::LABELING,
        format!("identity label paired with be-verb: '{label}'"),
        Confidence::High,
    ))
}

pub fn detect_should_statements(text: &str, _tokens: &[String]) -> Option<DetectedDistortion> {
    let hits = SHOULD_SET.hits(text);
    if hits.is_empty() {
        return None;
    }
    let confidence = if hits.contains("must") || hits.contains("have to") {
        Confidence::High
    } else {
        Confidence::Medium
    };
    Some(finding(
        taxonomy::SHOULD_STATEMENTS,
        format!("rigid expectations via: {}", join_terms(&hits)),
        confidence,
    ))
}

pub fn detect_catastrophizing(text: &str, _tokens: &[String]) -> Option<DetectedDistortion> {
    let hits = CATASTROPHIZING_SET.hits(text);
    if hits.is_empty() {
        return None;
    }
    Some(finding(
        taxonomy::CATASTROPHIZING,
        format!("worst-case language: {}", join_terms(&hits)),
        Confidence::High,
    ))
}

pub fn detect_personalization(text: &str, _tokens: &[String]) -> Option<DetectedDistortion> {
    let phrase = first_match(&PERSONALIZATION_PATTERNS, text)?;
    Some(finding(
        taxonomy::PERSONALIZATION,
        format!("self-blame phrase: '{phrase}'"),
        Confidence::Medium,
    ))
}

pub fn detect_emotional_reasoning(text: &str, _tokens: &[String]) -> Option<DetectedDistortion> {
    let phrase = first_match(&EMOTIONAL_REASONING_PATTERNS, text)?;
    Some(finding(
        taxonomy::EMOTIONAL_REASONING,
        format!("feeling-as-fact phrasing: '{phrase}'"),
        Confidence::Medium,
    ))
}

pub fn detect_magnification_minimization(
    text: &str,
    _tokens: &[String],
) -> Option<DetectedDistortion> {
    let magnifiers = MAGNIFICATION_SET.hits(text);
    let minimizers = MINIMIZATION_SET.hits(text);
    if magnifiers.is_empty() && minimizers.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if !magnifiers.is_empty() {
        parts.push(format!("exaggerating terms: {}", join_terms(&magnifiers)));
    }
    if !minimizers.is_empty() {
        parts.push(format!("downplaying terms: {}", join_terms(&minimizers)));
    }
    let confidence = if magnifiers.contains("disaster") {
        Confidence::High
    } else {
        Confidence::Medium
    };
    Some(finding(
        taxonomy::MAGNIFICATION_MINIMIZATION,
        parts.join("; "),
        confidence,
    ))
}

pub fn detect_disqualifying_positive(text: &str, _tokens: &[String]) -> Option<DetectedDistortion> {
    let hits = DISQUALIFYING_SET.hits(text);
    if hits.is_empty() {
        return None;
    }
    Some(finding(
        taxonomy::DISQUALIFYING_POSITIVE,
        format!("dismissing positives: {}", join_terms(&hits)),
        Confidence::Medium,
    ))
}

pub fn detect_mental_filter(text: &str, _tokens: &[String]) -> Option<DetectedDistortion> {
    let phrase = first_match(&MENTAL_FILTER_PATTERNS, text)?;
    Some(finding(
        taxonomy::MENTAL_FILTER,
        format!("focus on negatives: '{phrase}'"),
        Confidence::Medium,
    ))
}

pub fn detect_jumping_to_conclusions(text: &str, _tokens: &[String]) -> Option<DetectedDistortion> {
    let phrase = first_match(&JUMPING_TO_CONCLUSIONS_PATTERNS, text)?;
    Some(finding(
        taxonomy::JUMPING_TO_CONCLUSIONS,
        format!("assumption language: '{phrase}'"),
        Confidence::Medium,
    ))
}
