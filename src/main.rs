mod batch;
mod checksum;
mod error;
mod header;
mod patch;
mod rewrite;
mod rules;
mod scan;
mod uleb128;
mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "dexpatch", about = "In-place DEX string table patcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace one string in one DEX file
    Patch {
        /// Path to the DEX file to patch in place
        #[arg(long)]
        file: PathBuf,
        /// String to replace (must match a whole string table entry)
        #[arg(long)]
        old: String,
        /// Replacement; must not be longer than the original
        #[arg(long)]
        new: String,
    },
    /// Apply a rules file to every .dex file under a directory
    Batch {
        /// Root directory to scan for .dex files
        #[arg(long)]
        root: PathBuf,
        /// JSON rules file: [{"old": ..., "new": ...}, ...]
        #[arg(long, short)]
        rules: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Patch { file, old, new } => {
            println!("Patching {}", file.display());
            println!("  Old: {old:?}");
            println!("  New: {new:?}");

            let count = patch::patch_file(&file, &old, &new)?;

            if count > 0 {
                println!("\nReplaced {count} occurrence(s); header checksum and signature updated.");
            } else {
                println!("\nNo occurrences found; file left untouched.");
            }
        }
        Commands::Batch { root, rules } => {
            println!("Batch patching...");
            println!("  Root: {}", root.display());
            println!("  Rules: {}", rules.display());

            let rules = rules::load_rules(&rules)?;

            let start = Instant::now();
            let summary = batch::patch_tree(&root, &rules)?;
            let elapsed = start.elapsed();

            println!("\nBatch complete!");
            println!("  Files scanned: {}", summary.files_scanned);
            println!("  Files patched: {}", summary.files_patched);
            println!("  Replacements: {}", summary.replacements);
            println!("  Time elapsed: {:.3}s", elapsed.as_secs_f64());
        }
    }

    Ok(())
}
