use anyhow::{Context, Result};
use clap::Parser;

use recipe_archive::cli::{init_tracing, EstimateCli};
use recipe_archive::config::{ArchiveConfig, PUBLISHED_DOCUMENT};
use recipe_archive::document::RecipeDocument;
use recipe_archive::nutrition::{NutritionEstimator, NutritionTable, UnitNormalizer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = EstimateCli::parse();
    init_tracing(cli.verbose);

    let config = ArchiveConfig::resolve(
        cli.data_dir.as_deref(),
        cli.file.as_deref(),
        PUBLISHED_DOCUMENT,
    );
    if cli.dry_run {
        println!("DRY RUN - no changes will be saved");
    }

    let table = match &cli.nutrition_table {
        Some(path) => NutritionTable::from_csv(path)
            .with_context(|| format!("Failed to load nutrition table '{}'", path.display()))?,
        None => NutritionTable::builtin(),
    };
    let units = UnitNormalizer::builtin();

    let mut document = RecipeDocument::load(&config.document_path)
        .await
        .with_context(|| format!("Failed to load '{}'", config.document_path.display()))?;

    let estimator = NutritionEstimator::new(&table, &units);
    let summary = estimator
        .estimate_document(&mut document)
        .with_context(|| format!("Cannot estimate '{}'", config.document_path.display()))?;

    println!("Updated with estimates: {}", summary.updated);
    println!("Marked insufficient: {}", summary.insufficient);
    println!(
        "Skipped: {} non-food, {} with complete nutrition, {} malformed entries",
        summary.skipped_non_food, summary.skipped_complete, summary.skipped_invalid
    );

    if !cli.dry_run {
        document
            .save(&config.document_path)
            .await
            .with_context(|| format!("Failed to save '{}'", config.document_path.display()))?;
        println!(
            "\nNutrition estimates saved to {}",
            config.document_path.display()
        );
    }
    Ok(())
}
