use anyhow::{Context, Result};
use memmap2::Mmap;
use std::path::Path;

/// Load a file into an exclusively-owned mutable buffer via a scoped
/// read-only mapping.
///
/// The mapping is dropped before this returns, so the caller is free to
/// write the patched buffer back to the same path. On Windows, writing to a
/// file with an open mapping is an error (os error 1224).
pub fn read_to_buffer(path: &Path) -> Result<Vec<u8>> {
    let mmap = mmap_file(path)?;
    Ok(mmap.to_vec())
}

/// Memory-map a file for read-only access.
///
/// # Safety
/// The mapping is read-only. Callers must not concurrently truncate or replace
/// the underlying file while the `Mmap` is live.
fn mmap_file(path: &Path) -> Result<Mmap> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    // SAFETY: We only read from this mapping; no concurrent modification of these files.
    unsafe { Mmap::map(&file).with_context(|| format!("Failed to memory-map file: {}", path.display())) }
}
