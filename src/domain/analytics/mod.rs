// Analytics domain module
// Time buckets and ranked rows produced by kudos card aggregation

pub mod period;

pub use period::Period;

use serde::{Deserialize, Serialize};

/// Recipient ranked by number of kudos cards received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RecipientCount {
    pub recipient_name: String,
    pub count: i64,
}

/// Team ranked by number of kudos cards attributed to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamCount {
    pub team_name: String,
    pub count: i64,
}

/// Kudos category ranked by use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Word ranked by how often it appears in kudos messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: i64,
}

/// Shortest word counted as a keyword
pub const MIN_KEYWORD_LENGTH: usize = 4;

/// Common words never reported as keywords
pub const STOP_WORDS: &[&str] = &[
    "about", "also", "been", "from", "have", "into", "just", "much", "really", "that", "their",
    "them", "they", "this", "very", "were", "what", "when", "will", "with", "your",
];

/// Splits a kudos message into countable keywords
///
/// Lower-cases the text, splits on anything that is not an ASCII letter or
/// digit and drops short words and stop words.
///
/// # Example
/// ```
/// use kudos_api::domain::analytics::extract_keywords;
///
/// assert_eq!(
///     extract_keywords("Thanks for the AMAZING demo, really!"),
///     vec!["thanks", "amazing", "demo"]
/// );
/// ```
pub fn extract_keywords(message: &str) -> Vec<String> {
    message
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| w.len() >= MIN_KEYWORD_LENGTH && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}
