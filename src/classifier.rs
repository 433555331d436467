//! Post classifier - rule-based scoring of a single post
//!
//! Turns one line of text into a sentiment score, an intensity level and a
//! category. Matching is case-insensitive substring matching against the
//! tables in [`crate::lexicon`]; there is no tokenisation.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::PersonaError;
use crate::lexicon::count_hits;
use crate::lexicon::CATEGORY_KEYWORDS;
use crate::lexicon::NEGATIVE_WORDS;
use crate::lexicon::POSITIVE_WORDS;

/// Sentiment contribution of one lexicon hit
pub const SENTIMENT_STEP: f32 = 0.3;

/// Intensity bounds
pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 5;

/// Post category, exactly one per post
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Daily,
    Rant,
    Reflection,
    Achievement,
    Relationship,
    Other,
}

impl PostCategory {
    /// All categories, classifier priority order first, `Other` last
    pub const ALL: [PostCategory; 6] = [
        PostCategory::Rant,
        PostCategory::Achievement,
        PostCategory::Relationship,
        PostCategory::Reflection,
        PostCategory::Daily,
        PostCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Daily => "daily",
            PostCategory::Rant => "rant",
            PostCategory::Reflection => "reflection",
            PostCategory::Achievement => "achievement",
            PostCategory::Relationship => "relationship",
            PostCategory::Other => "other",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PostCategory {
    type Err = PersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostCategory::ALL
            .iter()
            .find(|cat| cat.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| PersonaError::Custom(format!("Unknown post category: {s}")))
    }
}

/// Scores produced for one post
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostAnalysis {
    pub sentiment_score: f32, // -1.0 to 1.0
    pub intensity: u8,        // 1 to 5
    pub category: PostCategory,
}

/// Classify one post. Pure and total: any input yields a valid analysis.
pub fn classify(text: &str) -> PostAnalysis {
    let lower = text.to_lowercase();

    PostAnalysis {
        sentiment_score: sentiment_score(&lower),
        intensity: intensity(text),
        category: category(&lower),
    }
}

/// Each distinct lexicon hit moves the score by one step; result clamped to [-1, 1]
fn sentiment_score(lower: &str) -> f32 {
    let positive = count_hits(lower, POSITIVE_WORDS) as f32;
    let negative = count_hits(lower, NEGATIVE_WORDS) as f32;

    ((positive - negative) * SENTIMENT_STEP).clamp(-1.0, 1.0)
}

/// Length and exclamation marks raise intensity.
///
/// "!!" also contains "!", so a double exclamation adds two levels.
fn intensity(text: &str) -> u8 {
    let length = text.chars().count();
    let mut level = MIN_INTENSITY;

    if length > 50 {
        level += 1;
    }
    if length > 100 {
        level += 1;
    }
    if text.contains('!') {
        level += 1;
    }
    if text.contains("!!") {
        level += 1;
    }

    level.min(MAX_INTENSITY)
}

fn category(lower: &str) -> PostCategory {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map_or(PostCategory::Other, |(cat, _)| *cat)
}
