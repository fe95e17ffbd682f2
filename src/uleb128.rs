/// Maximum encoded size of a ULEB128 value in a DEX file.
///
/// DEX stores 32-bit quantities, so a prefix never spans more than
/// ceil(32 / 7) = 5 bytes.
pub const MAX_BYTES: usize = 5;

/// Decode a ULEB128 value starting at `offset`.
///
/// Each byte contributes its low 7 bits at an increasing shift; the first
/// byte with a clear high bit terminates the encoding. Returns the decoded
/// value and the number of bytes consumed, or `None` if the encoding runs
/// past the end of the buffer or past the 5-byte limit.
pub fn decode(buf: &[u8], offset: usize) -> Option<(u32, usize)> {
    let mut value: u32 = 0;
    let mut shift = 0;
    let mut size = 0;

    loop {
        let byte = *buf.get(offset + size)?;
        value |= u32::from(byte & 0x7F) << shift;
        size += 1;
        if byte & 0x80 == 0 {
            break;
        }
        if size == MAX_BYTES {
            return None;
        }
        shift += 7;
    }

    Some((value, size))
}
