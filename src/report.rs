use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::{aggregate, loader, stats::AnalysisResult, utils, Args};

pub fn analyze_blog_list(args: &Args) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", "Starting blog list analysis");

    let blogs = loader::load_blog_list(&args.file)?;
    let stats = aggregate::summarize(&blogs);

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "analysis",
        blog_count = stats.blog_count,
        author_count = stats.author_count,
        duration_ms = total_time.as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        source: args.file.display().to_string(),
        stats,
    })
}

pub fn print_analysis_results(result: &AnalysisResult, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    let stats = &result.stats;

    println!("\n--- Blog List Analysis ---");
    println!("Source: {}", result.source);
    println!(
        "Blogs analyzed: {}",
        utils::format_number(stats.blog_count as u64)
    );
    println!(
        "Distinct authors: {}",
        utils::format_number(stats.author_count as u64)
    );
    println!("Total likes: {}", utils::format_number(stats.total_likes));

    if let Some(favourite) = &stats.favourite {
        println!(
            "Favourite blog: \"{}\" by {} ({} likes)",
            favourite.title,
            favourite.author,
            utils::format_number(favourite.likes)
        );
    }

    if let Some(most_blogs) = &stats.most_blogs {
        println!(
            "Most blogs: {} ({} blogs)",
            most_blogs.author,
            utils::format_number(u64::from(most_blogs.blogs))
        );
    }

    if !stats.most_likes.author.is_empty() {
        println!(
            "Most likes: {} ({} likes)",
            stats.most_likes.author,
            utils::format_number(stats.most_likes.likes)
        );
    }

    // Sort authors by accumulated likes; the stable sort keeps
    // first-seen order among equal totals.
    let mut sorted_authors: Vec<_> = stats.likes_by_author.iter().collect();
    sorted_authors.sort_by(|a, b| b.likes.cmp(&a.likes));

    if let Some(top_count) = args.top {
        println!(
            "\nTop {} authors by likes:",
            std::cmp::min(top_count, sorted_authors.len())
        );
        for total in sorted_authors.iter().take(top_count) {
            println!("- {}: {} likes", total.author, utils::format_number(total.likes));
        }
    }

    if let Some(bottom_count) = args.bottom {
        let mut bottom_sorted = sorted_authors.clone();
        bottom_sorted.sort_by(|a, b| a.likes.cmp(&b.likes));

        println!(
            "\nBottom {} authors by likes:",
            std::cmp::min(bottom_count, bottom_sorted.len())
        );
        for total in bottom_sorted.iter().take(bottom_count) {
            println!("- {}: {} likes", total.author, utils::format_number(total.likes));
        }
    }

    Ok(())
}
