use std::collections::HashSet;

use serde::Serialize;

pub mod config;
pub mod detectors;
pub mod input;
pub mod scoring;
pub mod taxonomy;
pub mod tokenizer;

pub use config::{Config, ConfigError};
pub use input::{validate_input, InputError};
pub use scoring::{
    classify_basic, ClassificationResult, DistortionType, VerbTense, VerbTypeCounts,
};
pub use taxonomy::{DistortionDefinition, CBT_DISTORTIONS};
pub use tokenizer::tokenize;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Coarse strength of a finding. Not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedDistortion {
    /// Always one of the names in [`taxonomy::CBT_DISTORTIONS`].
    pub name: &'static str,
    pub explanation: String,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub has_cognitive_distortion: bool,
    pub distortions: Vec<DetectedDistortion>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run every detector over `text` and collect their findings.
///
/// Findings keep detector order and are unique by name. Total over any input,
/// including the empty string.
pub fn detect(text: &str) -> DetectionResult {
    let lowered = text.to_lowercase();
    let tokens = tokenize(&lowered);

    let mut seen: HashSet<&'static str> = HashSet::new();
    let mut distortions = Vec::new();
    for detector in detectors::DETECTORS {
        if let Some(found) = detector(&lowered, &tokens) {
            if seen.insert(found.name) {
                distortions.push(found);
            }
        }
    }

    tracing::debug!(
        tokens = tokens.len(),
        findings = distortions.len(),
        "ran distortion detectors"
    );

    DetectionResult {
        has_cognitive_distortion: !distortions.is_empty(),
        distortions,
    }
}
