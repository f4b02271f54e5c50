use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::blog::Blog;

pub fn parse_blog_list(content: &str) -> Result<Vec<Blog>> {
    let blogs: Vec<Blog> =
        serde_json::from_str(content).context("Failed to parse blog list JSON")?;
    Ok(blogs)
}

pub fn load_blog_list(path: &Path) -> Result<Vec<Blog>> {
    let start_time = Instant::now();
    info!(action = "start", component = "blog_loading", file_path = ?path, "Loading blog list");

    if !path.exists() {
        anyhow::bail!("Blog list file not found: {:?}", path);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read blog list from {:?}", path))?;
    let blogs = parse_blog_list(&content)
        .with_context(|| format!("Invalid blog list in {:?}", path))?;

    let load_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "blog_loading",
        blog_count = blogs.len(),
        duration_ms = load_time.as_millis(),
        "Blog list loaded"
    );
    Ok(blogs)
}
