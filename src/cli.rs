use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Validate the recipe archive for schema compliance and common data issues
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ValidateCli {
    /// Fail on warnings as well as errors
    #[arg(long)]
    pub strict: bool,

    /// Recipe document to validate (default: <data-dir>/recipes_master.json)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Archive data directory; image_refs resolve against it
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Estimate approximate per-serving nutrition for archive recipes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct EstimateCli {
    /// Compute estimates without saving the document
    #[arg(long)]
    pub dry_run: bool,

    /// Recipe document to update (default: <data-dir>/recipes.json)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Archive data directory
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// CSV replacing the built-in nutrition table (item,per,cal,fat,protein,carbs)
    #[arg(long)]
    pub nutrition_table: Option<PathBuf>,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_flags() {
        let cli = ValidateCli::parse_from(["validate-recipes", "--strict", "-vv"]);
        assert!(cli.strict);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, None);
    }

    #[test]
    fn test_estimate_flags() {
        let cli = EstimateCli::parse_from([
            "estimate-nutrition",
            "--dry-run",
            "--file",
            "archive.json",
            "--nutrition-table",
            "table.csv",
        ]);
        assert!(cli.dry_run);
        assert_eq!(cli.file, Some(PathBuf::from("archive.json")));
        assert_eq!(cli.nutrition_table, Some(PathBuf::from("table.csv")));
    }
}
