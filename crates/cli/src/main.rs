//! FAQ knowledge base CLI
//!
//! Batch ingestion tool for the question-answering assistant's
//! knowledge base: load the store, merge a candidate batch, save.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use faqkb_core::{merge, KnowledgeEntry, MergeStatus};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// FAQ knowledge base ingestion utility
#[derive(Parser)]
#[command(name = "faqkb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Knowledge store path (defaults to ~/.faqkb/knowledge.json)
    #[arg(short, long)]
    kb: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty knowledge store
    Init,

    /// Merge a batch of candidate entries into the store
    Merge {
        /// Path to a JSON file containing the candidate batch
        batch: PathBuf,

        /// Report outcomes without saving the store
        #[arg(long)]
        dry_run: bool,
    },

    /// List entries in the store
    List {
        /// Maximum entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show store statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let kb_path = match cli.kb {
        Some(path) => path,
        None => {
            let mut path = dirs::home_dir().context("Could not find home directory")?;
            path.push(".faqkb");
            path.push("knowledge.json");
            path
        }
    };

    // Ensure the parent directory exists
    if let Some(parent) = kb_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!("Using knowledge store at: {}", kb_path.display());

    match cli.command {
        Commands::Init => cmd_init(kb_path),
        Commands::Merge { batch, dry_run } => cmd_merge(kb_path, batch, dry_run),
        Commands::List { limit } => cmd_list(kb_path, limit),
        Commands::Stats => cmd_stats(kb_path),
    }
}

fn cmd_init(kb_path: PathBuf) -> Result<()> {
    faqkb_store::init(&kb_path)?;
    println!("✓ Created empty knowledge store at {}", kb_path.display());
    Ok(())
}

fn cmd_merge(kb_path: PathBuf, batch_path: PathBuf, dry_run: bool) -> Result<()> {
    let existing = faqkb_store::load(&kb_path)?;
    println!("Starting with {} entries in knowledge base", existing.len());

    let candidates = read_batch(&batch_path)?;

    let report = merge(&existing, candidates)?;

    for outcome in &report.outcomes {
        match outcome.status {
            MergeStatus::Added => println!("✓ Added: {}", outcome.keyword),
            MergeStatus::Skipped => println!("⚠ Skipped (exists): {}", outcome.keyword),
        }
    }

    if dry_run {
        println!(
            "\nDry run: {} of {} candidates would be added (store not modified)",
            report.added(),
            report.outcomes.len()
        );
        return Ok(());
    }

    faqkb_store::save(&kb_path, &report.base)?;

    println!("\n✓ Done! Added {} new entries", report.added());
    println!("Total KB size: {} entries", report.base.len());
    Ok(())
}

fn read_batch(path: &Path) -> Result<Vec<KnowledgeEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse candidate batch from: {}", path.display()))
}

fn cmd_list(kb_path: PathBuf, limit: usize) -> Result<()> {
    let base = faqkb_store::load(&kb_path)?;

    if base.is_empty() {
        println!("No entries yet. Merge a batch with: faqkb merge <batch.json>");
        return Ok(());
    }

    println!("Entries (showing up to {}):\n", limit);

    for entry in base.iter().take(limit) {
        let category = if entry.category.is_empty() {
            "uncategorized"
        } else {
            &entry.category
        };
        let preview: String = entry.answer.chars().take(80).collect();

        println!("• {} [{}]", entry.keyword, category);
        println!(
            "  {}{}",
            preview.replace('\n', " "),
            if entry.answer.chars().count() > 80 { "..." } else { "" }
        );
        println!();
    }

    Ok(())
}

fn cmd_stats(kb_path: PathBuf) -> Result<()> {
    let base = faqkb_store::load(&kb_path)?;

    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in &base {
        let category = if entry.category.is_empty() {
            "uncategorized"
        } else {
            entry.category.as_str()
        };
        *by_category.entry(category).or_default() += 1;
    }

    println!("Knowledge store statistics:");
    println!("  • Entries: {}", base.len());
    for (category, count) in by_category {
        println!("  • {}: {}", category, count);
    }

    Ok(())
}
