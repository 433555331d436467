//! Persona dimensions - aggregation of classified posts into five axes
//!
//! Axes (all 0.0-1.0):
//! - Extraversion: relationship focus and expressive intensity
//! - Emotionality: sentiment volatility, boosted by high intensity
//! - Warmth: positive posts and relationship focus, reduced by rants
//! - Conscientiousness: share of achievement and reflection posts
//! - Confidence: achievement share, reduced by hedging and self-deprecation

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::batch::ClassifiedPost;
use crate::classifier::PostCategory;
use crate::lexicon::count_absolutes;
use crate::lexicon::count_hedging;
use crate::lexicon::count_self_deprecation;

/// Value of every axis for an empty post collection
pub const NEUTRAL_VALUE: f32 = 0.5;

/// Posts with a sentiment above this count as positive for warmth
const POSITIVE_SENTIMENT_THRESHOLD: f32 = 0.2;

/// Mean intensity above this adds an emotionality bonus
const HIGH_INTENSITY_THRESHOLD: f32 = 3.0;

/// One of the five persona axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Extraversion,
    Emotionality,
    Warmth,
    Conscientiousness,
    Confidence,
}

impl Axis {
    pub const ALL: [Axis; 5] = [
        Axis::Extraversion,
        Axis::Emotionality,
        Axis::Warmth,
        Axis::Conscientiousness,
        Axis::Confidence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Extraversion => "extraversion",
            Axis::Emotionality => "emotionality",
            Axis::Warmth => "warmth",
            Axis::Conscientiousness => "conscientiousness",
            Axis::Confidence => "confidence",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Aggregate personality snapshot, every axis in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonaProfile {
    pub extraversion: f32,
    pub emotionality: f32,
    pub warmth: f32,
    pub conscientiousness: f32,
    pub confidence: f32,
}

impl PersonaProfile {
    /// The neutral point (0.5 on every axis)
    pub const fn neutral() -> Self {
        Self::uniform(NEUTRAL_VALUE)
    }

    /// Same value on every axis
    pub const fn uniform(value: f32) -> Self {
        Self {
            extraversion: value,
            emotionality: value,
            warmth: value,
            conscientiousness: value,
            confidence: value,
        }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Extraversion => self.extraversion,
            Axis::Emotionality => self.emotionality,
            Axis::Warmth => self.warmth,
            Axis::Conscientiousness => self.conscientiousness,
            Axis::Confidence => self.confidence,
        }
    }

    /// `(axis, value)` pairs in [`Axis::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Axis, f32)> + '_ {
        Axis::ALL
            .into_iter()
            .map(move |axis| (axis, self.get(axis)))
    }
}

impl Default for PersonaProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Map a collection of posts to the five persona axes.
///
/// Pure function of the whole collection; recompute from scratch whenever
/// the posts change.
pub fn aggregate(posts: &[ClassifiedPost]) -> PersonaProfile {
    if posts.is_empty() {
        return PersonaProfile::neutral();
    }

    let count = posts.len() as f32;
    let ratio = |category: PostCategory| {
        posts.iter().filter(|p| p.category == category).count() as f32 / count
    };

    let relationship_ratio = ratio(PostCategory::Relationship);
    let rant_ratio = ratio(PostCategory::Rant);
    let achievement_ratio = ratio(PostCategory::Achievement);
    let reflection_ratio = ratio(PostCategory::Reflection);

    let avg_intensity = posts.iter().map(|p| f32::from(p.intensity)).sum::<f32>() / count;

    // Extraversion: relationship posts + expressive intensity
    let extraversion = relationship_ratio * 0.5 + (avg_intensity / 5.0) * 0.5;

    // Emotionality: population standard deviation of sentiment
    let avg_sentiment = posts.iter().map(|p| p.sentiment_score).sum::<f32>() / count;
    let variance = posts
        .iter()
        .map(|p| (p.sentiment_score - avg_sentiment).powi(2))
        .sum::<f32>()
        / count;
    let intensity_bonus = if avg_intensity > HIGH_INTENSITY_THRESHOLD {
        0.2
    } else {
        0.0
    };
    let emotionality = (variance.sqrt() * 2.0 + intensity_bonus).min(1.0);

    // Warmth: positive posts + relationship - rant
    let positive_ratio = posts
        .iter()
        .filter(|p| p.sentiment_score > POSITIVE_SENTIMENT_THRESHOLD)
        .count() as f32
        / count;
    let warmth = (positive_ratio * 0.7 + relationship_ratio * 0.3 - rant_ratio * 0.4).max(0.0);

    let conscientiousness = achievement_ratio + reflection_ratio;

    // Confidence: achievement - hedging - self-deprecation
    let hedging_per_post = posts
        .iter()
        .map(|p| count_hedging(&p.original_text))
        .sum::<usize>() as f32
        / count;
    let self_deprecation_per_post = posts
        .iter()
        .map(|p| count_self_deprecation(&p.original_text))
        .sum::<usize>() as f32
        / count;
    let confidence =
        0.5 + achievement_ratio * 0.3 - hedging_per_post * 0.1 - self_deprecation_per_post * 0.2;

    let profile = PersonaProfile {
        extraversion: clamp_unit(extraversion),
        emotionality: clamp_unit(emotionality),
        warmth: clamp_unit(warmth),
        conscientiousness: clamp_unit(conscientiousness),
        confidence: clamp_unit(confidence),
    };

    debug!(posts = posts.len(), ?profile, "Aggregated persona profile");

    profile
}

fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Summary statistics over a batch of posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostStats {
    pub post_count: usize,
    pub avg_sentiment: f32,
    pub avg_intensity: f32,
    pub category_counts: BTreeMap<PostCategory, usize>,
    pub dominant_category: PostCategory,
    pub hedging_hits: usize,
    pub absolute_hits: usize,
    pub self_deprecation_hits: usize,
}

impl PostStats {
    pub fn from_posts(posts: &[ClassifiedPost]) -> Self {
        let mut category_counts: BTreeMap<PostCategory, usize> = BTreeMap::new();
        for post in posts {
            *category_counts.entry(post.category).or_insert(0) += 1;
        }

        // Ties go to the category that comes first in classifier priority
        let dominant_category = PostCategory::ALL
            .iter()
            .filter_map(|cat| category_counts.get(cat).map(|n| (*cat, *n)))
            .fold(None, |best: Option<(PostCategory, usize)>, (cat, n)| match best {
                Some((_, best_n)) if best_n >= n => best,
                _ => Some((cat, n)),
            })
            .map_or(PostCategory::Other, |(cat, _)| cat);

        let (avg_sentiment, avg_intensity) = if posts.is_empty() {
            (0.0, 0.0)
        } else {
            let count = posts.len() as f32;
            (
                posts.iter().map(|p| p.sentiment_score).sum::<f32>() / count,
                posts.iter().map(|p| f32::from(p.intensity)).sum::<f32>() / count,
            )
        };

        Self {
            post_count: posts.len(),
            avg_sentiment,
            avg_intensity,
            category_counts,
            dominant_category,
            hedging_hits: posts.iter().map(|p| count_hedging(&p.original_text)).sum(),
            absolute_hits: posts.iter().map(|p| count_absolutes(&p.original_text)).sum(),
            self_deprecation_hits: posts
                .iter()
                .map(|p| count_self_deprecation(&p.original_text))
                .sum(),
        }
    }

    pub fn count_of(&self, category: PostCategory) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::analyze_batch;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn post(text: &str, sentiment: f32, intensity: u8, category: PostCategory) -> ClassifiedPost {
        ClassifiedPost {
            id: format!("test-{text}"),
            original_text: text.to_string(),
            sentiment_score: sentiment,
            intensity,
            category,
            sequence_index: 0,
        }
    }

    #[test]
    fn test_empty_is_neutral() {
        assert_eq!(aggregate(&[]), PersonaProfile::uniform(0.5));
    }

    #[test]
    fn test_single_neutral_post() {
        let profile = aggregate(&[post("xyz", 0.0, 1, PostCategory::Other)]);

        assert!(approx(profile.extraversion, 0.1));
        assert!(approx(profile.emotionality, 0.0));
        assert!(approx(profile.warmth, 0.0));
        assert!(approx(profile.conscientiousness, 0.0));
        assert!(approx(profile.confidence, 0.5));
    }

    #[test]
    fn test_relationship_drives_extraversion_and_warmth() {
        let profile = aggregate(&[
            post("xyz", 0.6, 5, PostCategory::Relationship),
            post("xyz", 0.6, 5, PostCategory::Relationship),
        ]);

        // 0.5 * 1.0 + 0.5 * (5 / 5)
        assert!(approx(profile.extraversion, 1.0));
        // 0.7 * 1.0 + 0.3 * 1.0 = 1.0
        assert!(approx(profile.warmth, 1.0));
        // no variance, but mean intensity above 3 adds 0.2
        assert!(approx(profile.emotionality, 0.2));
    }

    #[test]
    fn test_emotionality_uses_population_stddev() {
        let profile = aggregate(&[
            post("xyz", 0.3, 1, PostCategory::Other),
            post("xyz", -0.3, 1, PostCategory::Other),
        ]);

        // stddev over N is 0.3, doubled
        assert!(approx(profile.emotionality, 0.6));
    }

    #[test]
    fn test_emotionality_capped() {
        let profile = aggregate(&[
            post("xyz", 1.0, 5, PostCategory::Other),
            post("xyz", -1.0, 5, PostCategory::Other),
        ]);
        assert_eq!(profile.emotionality, 1.0);
    }

    #[test]
    fn test_warmth_floor_at_zero() {
        let profile = aggregate(&[post("xyz", -0.3, 1, PostCategory::Rant)]);
        assert_eq!(profile.warmth, 0.0);
    }

    #[test]
    fn test_conscientiousness_counts_achievement_and_reflection() {
        let profile = aggregate(&[
            post("xyz", 0.0, 1, PostCategory::Achievement),
            post("xyz", 0.0, 1, PostCategory::Reflection),
            post("xyz", 0.0, 1, PostCategory::Daily),
            post("xyz", 0.0, 1, PostCategory::Rant),
        ]);
        assert!(approx(profile.conscientiousness, 0.5));
    }

    #[test]
    fn test_confidence_penalties() {
        // 2 hedging hits (maybe, just) and 2 self-deprecation hits (stupid, fail)
        let profile = aggregate(&[post(
            "maybe I am just a stupid failure",
            -0.6,
            1,
            PostCategory::Rant,
        )]);

        // 0.5 - 0.1 * 2 - 0.2 * 2 clamps to zero
        assert_eq!(profile.confidence, 0.0);
    }

    #[test]
    fn test_confidence_achievement_bonus() {
        let profile = aggregate(&[post("xyz", 0.0, 1, PostCategory::Achievement)]);
        assert!(approx(profile.confidence, 0.8));
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let posts = analyze_batch(&["I love my family", "worst day ever!!", "finally graduated"]);
        assert_eq!(aggregate(&posts), aggregate(&posts));
    }

    #[test]
    fn test_profile_iter_order() {
        let profile = PersonaProfile {
            extraversion: 0.1,
            emotionality: 0.2,
            warmth: 0.3,
            conscientiousness: 0.4,
            confidence: 0.5,
        };
        let values: Vec<f32> = profile.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(profile.get(Axis::Warmth), 0.3);
    }

    #[test]
    fn test_post_stats() {
        let posts = vec![
            post("always tired", -0.3, 1, PostCategory::Rant),
            post("maybe later", 0.0, 3, PostCategory::Reflection),
            post("hate it", -0.3, 2, PostCategory::Rant),
        ];
        let stats = PostStats::from_posts(&posts);

        assert_eq!(stats.post_count, 3);
        assert_eq!(stats.count_of(PostCategory::Rant), 2);
        assert_eq!(stats.count_of(PostCategory::Daily), 0);
        assert_eq!(stats.dominant_category, PostCategory::Rant);
        assert!(approx(stats.avg_sentiment, -0.2));
        assert!(approx(stats.avg_intensity, 2.0));
        assert_eq!(stats.hedging_hits, 1);
        assert_eq!(stats.absolute_hits, 1);
    }

    #[test]
    fn test_post_stats_tie_uses_priority() {
        let posts = vec![
            post("a", 0.0, 1, PostCategory::Daily),
            post("b", 0.0, 1, PostCategory::Achievement),
        ];
        assert_eq!(
            PostStats::from_posts(&posts).dominant_category,
            PostCategory::Achievement
        );
    }

    #[test]
    fn test_post_stats_empty() {
        let stats = PostStats::from_posts(&[]);
        assert_eq!(stats.post_count, 0);
        assert_eq!(stats.dominant_category, PostCategory::Other);
        assert_eq!(stats.avg_intensity, 0.0);
    }
}
