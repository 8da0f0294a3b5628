use anyhow::Result;

use crate::cli::resolve_project_dir;
use crate::materials::{load_database, reshape, MaterialKind, MAX_BATCH_ITEMS};

pub async fn run_preview(dir: Option<String>, verbose: bool) -> Result<()> {
    let project_dir = resolve_project_dir(dir)?;

    println!("Scanning project: {}\n", project_dir.display());

    let database = match load_database(&project_dir)? {
        Some(database) => database,
        None => {
            println!("No materials database found (db.json). Nothing to sync.");
            return Ok(());
        }
    };

    // Calculate stats
    let materials = database.materials();
    let block_count = materials
        .iter()
        .filter(|m| m.kind == MaterialKind::Block)
        .count();
    let scaffold_count = materials.len() - block_count;
    let batches = reshape(&materials);

    println!("Summary:");
    println!("  Blocks: {}", block_count);
    println!("  Scaffolds: {}", scaffold_count);
    println!(
        "  Upload batches: {} (up to {} items each)",
        batches.len(),
        MAX_BATCH_ITEMS
    );

    // Verbose mode: list every identifier batch by batch
    if verbose {
        for (index, batch) in batches.iter().enumerate() {
            println!("\nBatch {}:", index + 1);
            for name in &batch.blocks {
                println!("  block     {}", name);
            }
            for name in &batch.scaffolds {
                println!("  scaffold  {}", name);
            }
        }
    } else if !batches.is_empty() {
        println!("\n  Use --verbose to see every identifier");
    }

    Ok(())
}
