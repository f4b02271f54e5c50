use serde::Serialize;

use crate::blog::Blog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogCount {
    pub author: String,
    pub blogs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikeTotal {
    pub author: String,
    pub likes: u64,
}

#[derive(Debug, Serialize)]
pub struct ListStats {
    pub blog_count: usize,
    pub author_count: usize,
    pub total_likes: u64,
    pub favourite: Option<Blog>,
    pub most_blogs: Option<AuthorBlogCount>,
    pub most_likes: AuthorLikeTotal,
    /// Per-author like totals in first-seen-author order.
    pub likes_by_author: Vec<AuthorLikeTotal>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub source: String,
    pub stats: ListStats,
}
