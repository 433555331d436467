//! Built-in target archetypes used for gap analysis

use serde::Deserialize;
use serde::Serialize;

use crate::dimensions::PersonaProfile;
use crate::errors::PersonaError;
use crate::Result;

/// Named reference persona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub dimensions: PersonaProfile,
    pub color_hint: String, // display accent, carried through untouched
}

/// The fixed catalog, always in the same order
pub fn list_targets() -> Vec<TargetProfile> {
    vec![
        target(
            "elite",
            "The Professional Elite",
            "Disciplined, achievement-oriented, confident, and emotionally controlled.",
            "#9BB4C3",
            [0.6, 0.2, 0.4, 0.9, 0.9],
        ),
        target(
            "warm",
            "The Warm Connector",
            "Empathetic, relationship-focused, open, and highly supportive.",
            "#8FB6A5",
            [0.7, 0.6, 0.9, 0.5, 0.6],
        ),
        target(
            "observer",
            "The Calm Observer",
            "Reflective, low-profile, analytical, and emotionally steady.",
            "#D3D4CE",
            [0.2, 0.3, 0.5, 0.7, 0.6],
        ),
        target(
            "creative",
            "The Creative Spark",
            "Expressive, high energy, emotionally varying, and authentic.",
            "#E4CD8A",
            [0.6, 0.8, 0.6, 0.4, 0.7],
        ),
    ]
}

/// Look up a catalog entry by id (case-insensitive)
pub fn find_target(id: &str) -> Result<TargetProfile> {
    list_targets()
        .into_iter()
        .find(|target| target.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| PersonaError::UnknownTarget(id.to_string()))
}

/// `values` in axis order: extraversion, emotionality, warmth, conscientiousness, confidence
fn target(
    id: &str,
    name: &str,
    description: &str,
    color_hint: &str,
    values: [f32; 5],
) -> TargetProfile {
    let [extraversion, emotionality, warmth, conscientiousness, confidence] = values;

    TargetProfile {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        dimensions: PersonaProfile {
            extraversion,
            emotionality,
            warmth,
            conscientiousness,
            confidence,
        },
        color_hint: color_hint.to_string(),
    }
}
