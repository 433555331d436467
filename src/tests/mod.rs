
use crate::batch::ClassifiedPost;
use crate::classifier::PostCategory;

/// Test helper to build a post without going through the classifier
pub fn make_post(
    text: &str,
    sentiment: f32,
    intensity: u8,
    category: PostCategory,
) -> ClassifiedPost {
    ClassifiedPost {
        id: format!("fixture-{text}"),
        original_text: text.to_string(),
        sentiment_score: sentiment,
        intensity,
        category,
        sequence_index: 0,
    }
}
