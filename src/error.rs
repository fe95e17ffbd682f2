use thiserror::Error;

/// Fatal conditions that abort a whole-file patch with zero changes applied.
///
/// Per-candidate structural mismatches (bad terminator, missing or truncated
/// length prefix) are not represented here: the scanner recovers from them
/// locally and keeps going.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The replacement cannot fit inside the original entry. Growing an
    /// entry would require re-laying out every offset table in the
    /// container, which this tool does not do.
    #[error("replacement is {new_len} bytes but the original string is only {old_len}; the string table cannot grow in place")]
    ReplacementTooLong { old_len: usize, new_len: usize },

    /// The file is shorter than the fixed DEX header region, so there is no
    /// checksum or signature field to maintain.
    #[error("file is {len} bytes, smaller than the {expected}-byte DEX header")]
    HeaderTruncated { len: usize, expected: usize },
}
