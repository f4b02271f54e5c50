use anyhow::Result;
use clap::Parser;
use tracing::error;

use blogstats::{analyze_blog_list, print_analysis_results, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match analyze_blog_list(&args) {
        Ok(result) => print_analysis_results(&result, &args),
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
