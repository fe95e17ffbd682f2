use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::patch;
use crate::rules::Rule;
use crate::util;

pub struct BatchSummary {
    pub files_scanned: usize,
    pub files_patched: usize,
    pub replacements: usize,
}

/// Collect every `.dex` file under `root`.
fn collect_dex_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry
            .with_context(|| format!("Failed to read directory entry in {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_dex = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("dex"));
        if is_dex {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Apply every rule to one file, writing it back at most once.
///
/// Rules are applied in order against the same in-memory buffer; the file is
/// only rewritten when at least one rule matched somewhere.
fn patch_one(path: &Path, rules: &[Rule]) -> Result<usize> {
    let mut buf = util::read_to_buffer(path)?;

    let mut total = 0;
    for rule in rules {
        total += patch::patch_buffer(&mut buf, rule.old.as_bytes(), rule.new.as_bytes())
            .with_context(|| format!("Refusing to patch {}", path.display()))?;
    }

    if total > 0 {
        std::fs::write(path, &buf)
            .with_context(|| format!("Failed to write patched file: {}", path.display()))?;
    }

    Ok(total)
}

/// Walk `root` for DEX files and apply the rule list to each one.
///
/// Files are independent, so they are patched in parallel; within one file
/// the transformation stays single-threaded over one exclusively-owned
/// buffer. Any fatal per-file error aborts the batch.
pub fn patch_tree(root: &Path, rules: &[Rule]) -> Result<BatchSummary> {
    let files = collect_dex_files(root)?;

    let counts: Vec<usize> = files
        .par_iter()
        .map(|path| patch_one(path, rules))
        .collect::<Result<Vec<_>>>()?;

    Ok(BatchSummary {
        files_scanned: files.len(),
        files_patched: counts.iter().filter(|&&c| c > 0).count(),
        replacements: counts.iter().sum(),
    })
}
