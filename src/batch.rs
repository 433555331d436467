//! Batch analyzer - turns raw input lines into classified posts

use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::classifier::classify;
use crate::classifier::PostCategory;

/// Maximum number of posts kept from one batch
pub const MAX_POSTS: usize = 50;

/// One analyzed post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPost {
    pub id: String,
    pub original_text: String,
    pub sentiment_score: f32,
    pub intensity: u8,
    pub category: PostCategory,
    pub sequence_index: usize,
}

impl ClassifiedPost {
    /// Classify already-trimmed `text` as the post at `sequence_index`
    pub(crate) fn new(text: &str, sequence_index: usize, batch_millis: i64) -> Self {
        let analysis = classify(text);

        Self {
            id: format!("post-{sequence_index}-{batch_millis}"),
            original_text: text.to_string(),
            sentiment_score: analysis.sentiment_score,
            intensity: analysis.intensity,
            category: analysis.category,
            sequence_index,
        }
    }
}

/// Analyze a batch of raw lines.
///
/// Lines are trimmed and empty ones dropped. Anything past the first
/// [`MAX_POSTS`] remaining lines is silently discarded; truncation is a cost
/// bound, not an error, and callers are not told about it.
pub fn analyze_batch<S: AsRef<str>>(lines: &[S]) -> Vec<ClassifiedPost> {
    analyze_batch_with_limit(lines, MAX_POSTS)
}

/// Same as [`analyze_batch`] with a caller-chosen cap
pub fn analyze_batch_with_limit<S: AsRef<str>>(lines: &[S], limit: usize) -> Vec<ClassifiedPost> {
    let batch_millis = Utc::now().timestamp_millis();

    let valid: Vec<&str> = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .collect();

    if valid.len() > limit {
        debug!(
            kept = limit,
            dropped = valid.len() - limit,
            "Truncating post batch"
        );
    }

    valid
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, line)| ClassifiedPost::new(line, index, batch_millis))
        .collect()
}

/// Split a block of text on newlines and analyze it
pub fn analyze_text(text: &str) -> Vec<ClassifiedPost> {
    let lines: Vec<&str> = text.lines().collect();
    analyze_batch(&lines)
}
