use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "blogstats",
    about = "Analyze a blog list to rank authors by posts and accumulated likes",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the blog list JSON file
    pub file: PathBuf,

    /// Number of top authors by likes to display
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Number of bottom authors by likes to display
    #[arg(long)]
    pub bottom: Option<usize>,

    /// Emit the analysis result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
