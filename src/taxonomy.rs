use serde::Serialize;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Static catalog entry describing one CBT cognitive distortion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistortionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub cues: &'static [&'static str],
    pub example: &'static str,
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

pub const ALL_OR_NOTHING: &str = "All-or-Nothing Thinking";
pub const OVERGENERALIZATION: &str = "Overgeneralization";
pub const MENTAL_FILTER: &str = "Mental Filter";
pub const DISQUALIFYING_POSITIVE: &str = "Disqualifying the Positive";
pub const JUMPING_TO_CONCLUSIONS: &str = "Jumping to Conclusions";
pub const MAGNIFICATION_MINIMIZATION: &str = "Magnification/Minimization";
pub const EMOTIONAL_REASONING: &str = "Emotional Reasoning";
pub const SHOULD_STATEMENTS: &str = "Should Statements";
pub const LABELING: &str = "Labeling";
pub const PERSONALIZATION: &str = "Personalization";
pub const CATASTROPHIZING: &str = "Catastrophizing";

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

pub static CBT_DISTORTIONS: [DistortionDefinition; 11] = [
    DistortionDefinition {
        name: ALL_OR_NOTHING,
        description: "Viewing situations in absolute, black-or-white terms without nuance.",
        cues: &["always", "never", "either/or", "all or nothing", "perfect or failure"],
        example: "It is either perfect or a complete failure.",
    },
    DistortionDefinition {
        name: OVERGENERALIZATION,
        description: "Making sweeping conclusions from a single event.",
        cues: &["everyone", "no one", "nothing ever works", "everything", "never again"],
        example: "Everyone ignores me every time I speak.",
    },
    DistortionDefinition {
        name: MENTAL_FILTER,
        description: "Focusing only on the negative details while ignoring positives.",
        cues: &["only the mistakes", "just the problems", "ignore the good parts"],
        example: "I only noticed the mistakes in my presentation.",
    },
    DistortionDefinition {
        name: DISQUALIFYING_POSITIVE,
        description: "Rejecting or discounting positive experiences.",
        cues: &["just luck", "doesn't count", "anyone could do it"],
        example: "I did fine, but it was just luck and doesn't count.",
    },
    DistortionDefinition {
        name: JUMPING_TO_CONCLUSIONS,
        description: "Assuming outcomes or others' thoughts without evidence.",
        cues: &["they must think", "I know they'll", "it will definitely"],
        example: "They must think I'm incompetent.",
    },
    DistortionDefinition {
        name: MAGNIFICATION_MINIMIZATION,
        description: "Exaggerating negatives or downplaying positives.",
        cues: &["disaster", "ruined", "massive problem", "just a fluke", "not a big deal"],
        example: "This small mistake is a complete disaster.",
    },
    DistortionDefinition {
        name: EMOTIONAL_REASONING,
        description: "Assuming feelings reflect facts.",
        cues: &["I feel like", "it feels as if", "because I feel it, it is true"],
        example: "I feel like I'm a failure, so it must be true.",
    },
    DistortionDefinition {
        name: SHOULD_STATEMENTS,
        description: "Using rigid 'should', 'must', or 'ought' statements.",
        cues: &["should", "must", "ought", "have to", "supposed to"],
        example: "I should never make mistakes.",
    },
    DistortionDefinition {
        name: LABELING,
        description: "Assigning a global, negative label to oneself or others.",
        cues: &["I am a failure", "you're useless", "they're idiots"],
        example: "I am a total failure.",
    },
    DistortionDefinition {
        name: PERSONALIZATION,
        description: "Blaming oneself for events outside one's control.",
        cues: &["my fault", "because of me", "it's on me"],
        example: "The project's delay is entirely my fault.",
    },
    DistortionDefinition {
        name: CATASTROPHIZING,
        description: "Assuming the worst-case scenario will happen.",
        cues: &[
            "it will be a disaster",
            "everything will collapse",
            "this will ruin everything",
        ],
        example: "If I slip once, everything will fall apart.",
    },
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

pub fn lookup(name: &str) -> Option<&'static DistortionDefinition> {
    CBT_DISTORTIONS.iter().find(|d| d.name == name)
}

pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}
