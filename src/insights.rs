//! Rule-based language insights over a post batch and its profile

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::batch::ClassifiedPost;
use crate::classifier::PostCategory;
use crate::dimensions::PersonaProfile;
use crate::dimensions::PostStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    FrustrationDominant,
    AchievementFocus,
    InternalNarrative,
    EmotionalVolatility,
    HesitantLanguage,
    Equilibrium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Generate insights in a fixed rule order. No posts, no insights.
pub fn generate_insights(posts: &[ClassifiedPost], profile: &PersonaProfile) -> Vec<Insight> {
    if posts.is_empty() {
        return Vec::new();
    }

    let stats = PostStats::from_posts(posts);
    let rants = stats.count_of(PostCategory::Rant);
    let achievements = stats.count_of(PostCategory::Achievement);
    let relationships = stats.count_of(PostCategory::Relationship);

    let mut insights = Vec::new();

    if rants > achievements * 2 && rants > 3 {
        let percent = (rants as f32 / stats.post_count as f32 * 100.0).round();
        insights.push(Insight::new(
            InsightKind::FrustrationDominant,
            format!("Frustration expression ({percent:.0}%) dominates celebration."),
        ));
    }
    if achievements > rants * 3 {
        insights.push(Insight::new(
            InsightKind::AchievementFocus,
            "Strong achievement focus suggests high drive but potential emotional suppression.",
        ));
    }
    if relationships < 2 {
        insights.push(Insight::new(
            InsightKind::InternalNarrative,
            "Internal narrative detected; limited social connection in current memory stream.",
        ));
    }
    if profile.emotionality > 0.8 {
        insights.push(Insight::new(
            InsightKind::EmotionalVolatility,
            "High emotional volatility indicates passionate but potentially unstable states.",
        ));
    }
    if profile.confidence < 0.4 {
        insights.push(Insight::new(
            InsightKind::HesitantLanguage,
            "Hesitant language patterns (\"maybe\", \"sort of\") are undermining perceived authority.",
        ));
    }

    if insights.is_empty() {
        insights.push(Insight::new(
            InsightKind::Equilibrium,
            "Psychological equilibrium detected across all dimensions.",
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::analyze_batch;
    use crate::dimensions::aggregate;

    fn kinds(insights: &[Insight]) -> Vec<InsightKind> {
        insights.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_no_posts_no_insights() {
        assert!(generate_insights(&[], &PersonaProfile::neutral()).is_empty());
    }

    #[test]
    fn test_frustration_dominant() {
        let posts = analyze_batch(&["I hate this", "so annoying", "worst bus", "angry again"]);
        let insights = generate_insights(&posts, &PersonaProfile::neutral());

        assert_eq!(insights[0].kind, InsightKind::FrustrationDominant);
        assert_eq!(
            insights[0].message,
            "Frustration expression (100%) dominates celebration."
        );
    }

    #[test]
    fn test_achievement_focus_and_internal_narrative() {
        let posts = analyze_batch(&["won the race", "finished my thesis"]);
        let insights = generate_insights(&posts, &PersonaProfile::neutral());

        assert_eq!(
            kinds(&insights),
            vec![InsightKind::AchievementFocus, InsightKind::InternalNarrative]
        );
    }

    #[test]
    fn test_profile_driven_rules() {
        let posts = analyze_batch(&["my friend", "my mom"]);
        let profile = PersonaProfile {
            emotionality: 0.9,
            confidence: 0.2,
            ..PersonaProfile::neutral()
        };
        let insights = generate_insights(&posts, &profile);

        assert_eq!(
            kinds(&insights),
            vec![
                InsightKind::EmotionalVolatility,
                InsightKind::HesitantLanguage
            ]
        );
    }

    #[test]
    fn test_equilibrium_fallback() {
        let posts = analyze_batch(&["my friend visited", "dinner with family", "gym time"]);
        let insights = generate_insights(&posts, &aggregate(&posts));

        assert_eq!(kinds(&insights), vec![InsightKind::Equilibrium]);
    }
}
