//! Lightweight objectivity scorer.
//!
//! Separate from the taxonomy-based detector set: it produces one continuous
//! score plus a rationale instead of a list of named findings, and its binary
//! framing test is an unordered set check rather than a positional window.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::tokenizer::tokenize;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistortionType {
    #[serde(rename = "all-or-nothing")]
    AllOrNothing,
    #[serde(rename = "none")]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbTense {
    Past,
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VerbTypeCounts {
    pub be: usize,
    pub action: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub distortion: bool,
    pub distortion_type: DistortionType,
    pub objectivity_score: i32,
    pub subjectivity_score: i32,
    pub verb_tense: VerbTense,
    pub verb_type: VerbTypeCounts,
    pub confidence: f64,
    pub rationale: String,
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    score_start: i32,
    score_min: i32,
    score_max: i32,
    strong_absolute_penalty: i32,
    absolute_penalty: i32,
    past_tense_penalty: i32,
    present_tense_bonus: i32,
    be_verb_penalty: i32,
    action_verb_bonus: i32,
    amplifier_penalty: i32,
    confidence_base: f64,
    confidence_per_absolute: f64,
    confidence_binary: f64,
    confidence_per_amplifier: f64,
}

static HP: Hyperparameters = Hyperparameters {
    score_start: 100,
    score_min: 0,
    score_max: 100,
    strong_absolute_penalty: 40,
    absolute_penalty: 30,
    past_tense_penalty: 20,
    present_tense_bonus: 5,
    be_verb_penalty: 10,
    action_verb_bonus: 5,
    amplifier_penalty: 15,
    confidence_base: 0.5,
    confidence_per_absolute: 0.15,
    confidence_binary: 0.10,
    confidence_per_amplifier: 0.05,
};

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

const ABSOLUTE_KEYWORDS: &[&str] = &["always", "never", "everything", "nothing"];
const STRONG_ABSOLUTES: &[&str] = &["always", "never"];
const BINARY_MARKERS: &[&[&str]] = &[&["either", "or"], &["all", "or", "nothing"]];
const EMOTIONAL_AMPLIFIERS: &[&str] = &[
    "always",
    "never",
    "totally",
    "completely",
    "entirely",
    "absolutely",
];
const PAST_CUES: &[&str] = &["was", "were", "did", "had"];
const BE_VERBS: &[&str] = &["am", "is", "are", "was", "were", "be", "being", "been"];
const ACTION_VERBS: &[&str] = &[
    "do",
    "does",
    "did",
    "try",
    "tried",
    "make",
    "made",
    "take",
    "took",
    "fix",
    "fixed",
    "change",
    "changed",
    "improve",
    "improved",
    "learn",
    "learned",
    "learning",
    "practice",
    "practicing",
    "solve",
    "solved",
    "work",
    "worked",
    "build",
    "built",
    "create",
    "created",
];

const NO_SIGNALS_RATIONALE: &str = "No strong distortion signals found.";

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

fn matching<'t>(tokens: &'t [String], vocabulary: &[&str]) -> Vec<&'t str> {
    tokens
        .iter()
        .map(String::as_str)
        .filter(|t| vocabulary.contains(t))
        .collect()
}

fn has_binary_marker(tokens: &[String]) -> bool {
    let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    BINARY_MARKERS
        .iter()
        .any(|marker| marker.iter().all(|m| present.contains(m)))
}

fn verb_tense(tokens: &[String]) -> VerbTense {
    let past = tokens
        .iter()
        .any(|t| PAST_CUES.contains(&t.as_str()) || t.ends_with("ed"));
    if past {
        VerbTense::Past
    } else {
        VerbTense::Present
    }
}

fn verb_types(tokens: &[String]) -> VerbTypeCounts {
    VerbTypeCounts {
        be: matching(tokens, BE_VERBS).len(),
        action: matching(tokens, ACTION_VERBS).len(),
    }
}

fn sorted_distinct(words: &[&str]) -> String {
    let distinct: BTreeSet<&str> = words.iter().copied().collect();
    distinct.into_iter().collect::<Vec<_>>().join(", ")
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

fn objectivity_score(
    absolutes: &[&str],
    amplifiers: &[&str],
    tense: VerbTense,
    verbs: VerbTypeCounts,
) -> i32 {
    let mut score = HP.score_start;

    for word in absolutes {
        score -= if STRONG_ABSOLUTES.contains(word) {
            HP.strong_absolute_penalty
        } else {
            HP.absolute_penalty
        };
    }
    score += match tense {
        VerbTense::Past => -HP.past_tense_penalty,
        VerbTense::Present => HP.present_tense_bonus,
    };
    score -= HP.be_verb_penalty * verbs.be as i32;
    score += HP.action_verb_bonus * verbs.action as i32;

    let distinct_amplifiers: BTreeSet<&str> = amplifiers.iter().copied().collect();
    score -= HP.amplifier_penalty * distinct_amplifiers.len() as i32;

    score.clamp(HP.score_min, HP.score_max)
}

fn confidence(absolutes: usize, binary: bool, amplifiers: usize) -> f64 {
    let raw = HP.confidence_base
        + HP.confidence_per_absolute * absolutes as f64
        + if binary { HP.confidence_binary } else { 0.0 }
        + HP.confidence_per_amplifier * amplifiers as f64;
    (raw.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

fn rationale(
    absolutes: &[&str],
    binary: bool,
    amplifiers: &[&str],
    tense: VerbTense,
    verbs: VerbTypeCounts,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !absolutes.is_empty() {
        parts.push(format!("Absolutes found: {}", sorted_distinct(absolutes)));
    }
    if binary {
        parts.push("Binary framing terms present".to_string());
    }
    if !amplifiers.is_empty() {
        parts.push(format!("Amplifiers: {}", sorted_distinct(amplifiers)));
    }
    parts.push(
        match tense {
            VerbTense::Past => "Past tense reduces objectivity",
            VerbTense::Present => "Present tense boosts clarity",
        }
        .to_string(),
    );
    if verbs.be > 0 {
        parts.push(format!("{} be-verb(s) found", verbs.be));
    }
    if verbs.action > 0 {
        parts.push(format!("{} action verb(s) found", verbs.action));
    }

    if parts.is_empty() {
        NO_SIGNALS_RATIONALE.to_string()
    } else {
        parts.join("; ")
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score `text` for objectivity (0-100) and flag all-or-nothing framing.
///
/// Total over any input; an empty string scores as neutral present-tense text.
pub fn classify_basic(text: &str) -> ClassificationResult {
    let tokens = tokenize(text);
    let absolutes = matching(&tokens, ABSOLUTE_KEYWORDS);
    let amplifiers = matching(&tokens, EMOTIONAL_AMPLIFIERS);
    let binary = has_binary_marker(&tokens);
    let tense = verb_tense(&tokens);
    let verbs = verb_types(&tokens);

    let objectivity = objectivity_score(&absolutes, &amplifiers, tense, verbs);
    let distortion = !absolutes.is_empty() || binary;

    let result = ClassificationResult {
        distortion,
        distortion_type: if distortion {
            DistortionType::AllOrNothing
        } else {
            DistortionType::None
        },
        objectivity_score: objectivity,
        subjectivity_score: HP.score_max - objectivity,
        verb_tense: tense,
        verb_type: verbs,
        confidence: confidence(absolutes.len(), binary, amplifiers.len()),
        rationale: rationale(&absolutes, binary, &amplifiers, tense, verbs),
    };
    tracing::debug!(
        tokens = tokens.len(),
        objectivity = result.objectivity_score,
        distortion = result.distortion,
        "classified text"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        tokenize(text)
    }

    #[test]
    fn binary_marker_ignores_order() {
        assert!(has_binary_marker(&tokens("or maybe either")));
        assert!(has_binary_marker(&tokens("nothing or all")));
        assert!(!has_binary_marker(&tokens("all or some")));
    }

    #[test]
    fn ed_suffix_marks_past_tense() {
        assert_eq!(verb_tense(&tokens("I walked home")), VerbTense::Past);
        assert_eq!(verb_tense(&tokens("I had lunch")), VerbTense::Past);
        assert_eq!(verb_tense(&tokens("I walk home")), VerbTense::Present);
    }

    #[test]
    fn repeated_amplifier_is_penalized_once() {
        let once = objectivity_score(&[], &["totally"], VerbTense::Present, VerbTypeCounts::default());
        let twice = objectivity_score(
            &[],
            &["totally", "totally"],
            VerbTense::Present,
            VerbTypeCounts::default(),
        );
        assert_eq!(once, 90);
        assert_eq!(once, twice);
    }

    #[test]
    fn confidence_is_clamped_and_rounded() {
        assert_eq!(confidence(0, false, 0), 0.5);
        assert_eq!(confidence(1, true, 1), 0.8);
        assert_eq!(confidence(5, true, 5), 1.0);
    }

    #[test]
    fn rationale_lists_clauses_in_order() {
        let r = rationale(
            &["never", "always", "never"],
            true,
            &["never", "always", "never"],
            VerbTense::Past,
            VerbTypeCounts { be: 1, action: 2 },
        );
        assert_eq!(
            r,
            "Absolutes found: always, never; Binary framing terms present; \
             Amplifiers: always, never; Past tense reduces objectivity; \
             1 be-verb(s) found; 2 action verb(s) found"
        );
    }
}
