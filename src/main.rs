// SPDX-License-Identifier: MIT

//! filedex: recursive file inventory into a fresh SQLite database
//!
//! One linear pipeline: walk the tree, categorize by extension, persist the
//! inventory in a single transaction.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use filedex::classifier::categorize_files;
use filedex::db::Database;
use filedex::scanner::scan_tree;
use filedex::Result;

/// filedex CLI - index a directory tree into SQLite
#[derive(Parser, Debug)]
#[command(name = "filedex")]
#[command(version)]
#[command(about = "Recursive file inventory into a fresh SQLite database", long_about = None)]
struct Cli {
    /// Root directory to index
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Database file to recreate (any existing file is deleted first)
    #[arg(short, long, default_value = "file_index.db")]
    database: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    run_index(&cli.root, &cli.database)?;

    println!("File indexing complete.");
    Ok(())
}

/// Run one full traversal -> classification -> persistence pass.
///
/// Schema creation and commit errors propagate (fatal, non-zero exit);
/// inaccessible directories were already logged and skipped inside the
/// scanner and never abort the run.
fn run_index(root: &Path, database: &Path) -> Result<usize> {
    let started = Instant::now();

    let mut db = Database::create(database)?;
    info!("Database initialized: {:?}", database);

    let files = scan_tree(root);
    info!("Discovered {} files under {:?}", files.len(), root);

    let categorized = categorize_files(files);
    let inserted = db.insert_files(&categorized)?;

    for (category, count) in db.category_counts()? {
        info!("  {}: {}", category, count);
    }
    info!("Indexed {} files in {:.2?}", inserted, started.elapsed());

    Ok(inserted)
}
