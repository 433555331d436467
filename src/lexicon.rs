//! Static word lists used by the post classifier and the dimension aggregator
//!
//! Every list is matched as a case-insensitive substring of the post text,
//! so short entries like "won" or "hell" also fire inside longer words.
//! Entries in one list are counted at most once per post.

use crate::classifier::PostCategory;

/// Words that push the sentiment score up by 0.3 each
pub const POSITIVE_WORDS: &[&str] = &[
    "happy", "good", "great", "love", "excited", "proud", "achieved", "won", "success",
    "beautiful", "thanks", "grateful", "fun", "joy", "smile", "laugh",
];

/// Words that push the sentiment score down by 0.3 each
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad", "bad", "hate", "angry", "tired", "fail", "stupid", "annoying", "hurt", "cry", "worst",
    "boring", "stress", "anxious", "scared", "pain",
];

/// Uncertainty markers ("maybe", "probably")
pub const HEDGING_WORDS: &[&str] = &[
    "maybe", "i think", "sort of", "kind of", "guess", "probably", "might", "just",
];

/// Over-generalisation markers ("always", "never")
pub const ABSOLUTE_WORDS: &[&str] = &[
    "always", "never", "everyone", "nobody", "totally", "completely", "forever",
];

/// Negative self-reference markers ("stupid", "useless")
pub const SELF_DEPRECATION_WORDS: &[&str] = &[
    "stupid", "idiot", "fail", "useless", "mess", "trash", "dumb", "clown",
];

/// Category keyword table in priority order.
///
/// Keyword sets overlap in meaning, so the first category with any hit wins.
/// Reordering this table changes classification results. `Other` has no
/// keywords and is only ever the fallback.
pub const CATEGORY_KEYWORDS: &[(PostCategory, &[&str])] = &[
    (
        PostCategory::Rant,
        &[
            "hate", "annoying", "stupid", "worst", "tired of", "cant believe", "angry", "wtf",
            "hell",
        ],
    ),
    (
        PostCategory::Achievement,
        &[
            "won", "finished", "completed", "promotion", "graduated", "goal", "finally", "success",
        ],
    ),
    (
        PostCategory::Relationship,
        &[
            "friend", "mom", "dad", "boyfriend", "girlfriend", "partner", "husband", "wife",
            "family", "parents", "love", "miss", "we ", "us ",
        ],
    ),
    (
        PostCategory::Reflection,
        &[
            "think", "feel", "wonder", "maybe", "realize", "learned", "understand", "mind", "life",
        ],
    ),
    (
        PostCategory::Daily,
        &[
            "today", "morning", "coffee", "gym", "work", "lunch", "dinner", "slept", "traffic",
            "weather",
        ],
    ),
];

/// Count how many distinct entries of `words` occur in already-lowercased text
pub(crate) fn count_hits(lower_text: &str, words: &[&str]) -> usize {
    words.iter().filter(|word| lower_text.contains(*word)).count()
}

/// Number of distinct hedging entries present in `text`
pub fn count_hedging(text: &str) -> usize {
    count_hits(&text.to_lowercase(), HEDGING_WORDS)
}

/// Number of distinct absolute entries present in `text`
pub fn count_absolutes(text: &str) -> usize {
    count_hits(&text.to_lowercase(), ABSOLUTE_WORDS)
}

/// Number of distinct self-deprecation entries present in `text`
pub fn count_self_deprecation(text: &str) -> usize {
    count_hits(&text.to_lowercase(), SELF_DEPRECATION_WORDS)
}
