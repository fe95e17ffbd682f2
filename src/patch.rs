use anyhow::{Context, Result};
use std::path::Path;

use crate::error::PatchError;
use crate::header;
use crate::rewrite;
use crate::scan;
use crate::util;

/// Replace every validated string table occurrence of `old` in `buf` with
/// `new`, padded to the original length, then refresh the header integrity
/// fields. Returns the number of replacements.
///
/// When nothing matched the buffer is left byte-for-byte identical,
/// including the header fields. An oversize replacement refuses the whole
/// operation before any byte is written.
pub fn patch_buffer(buf: &mut [u8], old: &[u8], new: &[u8]) -> Result<usize, PatchError> {
    if buf.len() < header::PAYLOAD_OFFSET {
        return Err(PatchError::HeaderTruncated {
            len: buf.len(),
            expected: header::PAYLOAD_OFFSET,
        });
    }
    rewrite::check_fits(old.len(), new)?;

    let occurrences = scan::find_occurrences(buf, old);
    for occurrence in &occurrences {
        rewrite::write_replacement(buf, occurrence, new);
    }

    if !occurrences.is_empty() {
        header::update_integrity(buf);
    }

    Ok(occurrences.len())
}

/// Patch one DEX file on disk.
///
/// The whole file is transformed in memory and written back in a single
/// `fs::write`, and only when at least one replacement happened; a zero
/// count leaves the file untouched and is not an error.
pub fn patch_file(path: &Path, old: &str, new: &str) -> Result<usize> {
    let mut buf = util::read_to_buffer(path)?;

    let count = patch_buffer(&mut buf, old.as_bytes(), new.as_bytes())
        .with_context(|| format!("Refusing to patch {}", path.display()))?;

    if count > 0 {
        std::fs::write(path, &buf)
            .with_context(|| format!("Failed to write patched file: {}", path.display()))?;
    }

    Ok(count)
}
