use crate::uleb128;

/// Every string table entry ends with a single NUL byte.
pub const TERMINATOR: u8 = 0x00;

/// A validated string table entry containing the target text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Absolute offset of the first text byte.
    pub text_offset: usize,
    /// Byte length of the text.
    pub text_len: usize,
    /// Absolute offset of the ULEB128 length prefix.
    pub prefix_offset: usize,
    /// Encoded size of the prefix in bytes.
    pub prefix_len: usize,
}

/// Find all validated, non-overlapping occurrences of `pattern` in string
/// table entries, leftmost first.
///
/// A raw byte match only counts when it is the complete text of an entry:
/// the byte after it must be the NUL terminator, and a ULEB128 length prefix
/// decoding to the pattern's byte length must end exactly where the match
/// begins. Anything else (substring of a longer entry, stray coincidence in
/// instruction bytes) is skipped and scanning resumes one byte later.
///
/// Note: the prefix in a DEX string_data_item counts UTF-16 code units, but
/// the comparison here is against the pattern's byte length. The two agree
/// for ASCII-range text; entries containing multi-byte characters are never
/// matched. See `test_multibyte_entry_is_not_matched`.
pub fn find_occurrences(buf: &[u8], pattern: &[u8]) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    if pattern.is_empty() {
        return occurrences;
    }

    let mut cursor = 0;
    while let Some(pos) = find_from(buf, pattern, cursor) {
        match validate(buf, pos, pattern.len()) {
            Some(occurrence) => {
                occurrences.push(occurrence);
                // Skip past the terminator so the same entry cannot re-match
                cursor = pos + pattern.len() + 1;
            }
            None => cursor = pos + 1,
        }
    }

    occurrences
}

/// Next raw byte match of `pattern` at or after `from`.
fn find_from(buf: &[u8], pattern: &[u8], from: usize) -> Option<usize> {
    if from >= buf.len() || pattern.len() > buf.len() - from {
        return None;
    }
    buf[from..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|pos| from + pos)
}

/// Check that the raw match at `pos` is a whole string table entry.
fn validate(buf: &[u8], pos: usize, len: usize) -> Option<Occurrence> {
    if buf.get(pos + len) != Some(&TERMINATOR) {
        return None;
    }

    // The prefix can start at most MAX_BYTES before the text. Truncated or
    // mismatching decodes are just rejected candidates, not errors.
    for prefix_offset in pos.saturating_sub(uleb128::MAX_BYTES)..pos {
        if let Some((value, prefix_len)) = uleb128::decode(buf, prefix_offset) {
            if prefix_offset + prefix_len == pos && value as usize == len {
                return Some(Occurrence {
                    text_offset: pos,
                    text_len: len,
                    prefix_offset,
                    prefix_len,
                });
            }
        }
    }

    None
}
