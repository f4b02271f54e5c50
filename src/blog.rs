use serde::{Deserialize, Serialize};

/// One blog post summary. `author` is the grouping key for every
/// per-author statistic; it is compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub title: String,
    pub author: String,
    pub url: String,
    /// Missing in the input document means zero likes.
    #[serde(default)]
    pub likes: u64,
}
