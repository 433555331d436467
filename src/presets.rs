//! Built-in sample post sets

use serde::Serialize;

use crate::batch::analyze_batch;
use crate::batch::ClassifiedPost;
use crate::errors::PersonaError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub lines: &'static [&'static str],
}

impl Preset {
    pub fn analyze(&self) -> Vec<ClassifiedPost> {
        analyze_batch(self.lines)
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        slug: "ranting-poet",
        title: "The Ranting Poet",
        description: "High emotion, creative chaos.",
        lines: &[
            "This world is too loud, yet silence screams.",
            "I hate how people chew with their mouths open, it drives me insane!",
            "But then the moon rises, and I feel this overwhelming peace.",
            "Why can't I just finish one painting without crying?",
            "Everyone thinks I'm dramatic, but I just feel everything at once.",
            "My coffee was cold. A tragedy.",
        ],
    },
    Preset {
        slug: "humble-achiever",
        title: "The Humble Achiever",
        description: "Quiet confidence, structured growth.",
        lines: &[
            "Completed the marathon today. Hard work pays off.",
            "Grateful for the team's support on the project.",
            "Need to refine my schedule for next week.",
            "Reading a book on stoicism, really insightful.",
            "Quiet evening with tea. Perfect.",
            "Promotion confirmed. I'm ready for the responsibility.",
        ],
    },
    Preset {
        slug: "anxious-observer",
        title: "The Anxious Observer",
        description: "Detail-oriented, hesitant, warm.",
        lines: &[
            "I think I said the wrong thing at dinner.",
            "Maybe they didn't mean it that way?",
            "The light hitting the leaves was nice.",
            "I hope mom is okay, haven't heard from her.",
            "Sort of feeling better, but still worried about the deadline.",
            "Just want everyone to be happy.",
        ],
    },
];

pub fn find_preset(slug: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.slug.eq_ignore_ascii_case(slug.trim()))
        .ok_or_else(|| PersonaError::UnknownPreset(slug.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::PostCategory;

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("humble-achiever").unwrap().lines.len(), 6);
        assert!(matches!(
            find_preset("nope"),
            Err(PersonaError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_humble_achiever_categories() {
        let posts = find_preset("humble-achiever").unwrap().analyze();

        assert_eq!(posts.len(), 6);
        assert_eq!(posts[0].category, PostCategory::Achievement); // completed
        assert_eq!(posts[5].category, PostCategory::Achievement); // promotion
    }
}
