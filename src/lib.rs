pub mod aggregate;
pub mod args;
pub mod blog;
pub mod loader;
pub mod report;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use blog::Blog;
pub use report::{analyze_blog_list, print_analysis_results};
pub use stats::{AnalysisResult, AuthorBlogCount, AuthorLikeTotal, ListStats};
