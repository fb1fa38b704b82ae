use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

use recipe_archive::cli::{init_tracing, ValidateCli};
use recipe_archive::config::{ArchiveConfig, MASTER_DOCUMENT};
use recipe_archive::document::RecipeDocument;
use recipe_archive::validation::{DirectoryAssets, RecipeValidator, SanityChecker};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = ValidateCli::parse();
    init_tracing(cli.verbose);

    let config = ArchiveConfig::resolve(
        cli.data_dir.as_deref(),
        cli.file.as_deref(),
        MASTER_DOCUMENT,
    );
    println!("Validating: {}", config.document_path.display());

    let document = RecipeDocument::load(&config.document_path)
        .await
        .with_context(|| format!("Failed to load '{}'", config.document_path.display()))?;

    let assets = DirectoryAssets::new(&config.data_dir);
    let sanity = SanityChecker::builtin();
    let report = RecipeValidator::new(&assets, &sanity).validate_document(document.root());
    println!("{}", report);

    let passed = report.passed(cli.strict);
    info!(strict = cli.strict, passed, "Validation complete");
    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
