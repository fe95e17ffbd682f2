/// Adler-32 checksum as used by the DEX header.
///
/// Two running sums (a, b) modulo 65521 combined into a 32-bit digest.
const MOD_ADLER: u32 = 65521;

/// Reduce accumulated sums at this interval so the u64 accumulators cannot
/// overflow even on the largest chunk.
const CHUNK: usize = 256 * 1024;

pub struct Adler32 {
    a: u32,
    b: u32,
}

impl Adler32 {
    pub fn new() -> Self {
        Self { a: 1, b: 0 }
    }

    /// Fold `data` into the running checksum.
    pub fn update(&mut self, data: &[u8]) {
        // Accumulate in u64 and defer modular reduction to once per chunk
        // rather than reducing on every byte.
        let mut a = u64::from(self.a);
        let mut b = u64::from(self.b);
        for chunk in data.chunks(CHUNK) {
            for &byte in chunk {
                a += u64::from(byte);
                b += a;
            }
            a %= u64::from(MOD_ADLER);
            b %= u64::from(MOD_ADLER);
        }
        self.a = a as u32;
        self.b = b as u32;
    }

    pub fn digest(&self) -> u32 {
        (self.b << 16) | self.a
    }
}

/// One-shot Adler-32 of a byte slice.
pub fn adler32(data: &[u8]) -> u32 {
    let mut hasher = Adler32::new();
    hasher.update(data);
    hasher.digest()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(adler32(b""), 1);
    }

    #[test]
    fn test_known_vector() {
        // RFC 1950 reference value
        assert_eq!(adler32(b"Wikipedia"), 0x11E6_0398);
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let mut hasher = Adler32::new();
        hasher.update(&data[..10]);
        hasher.update(&data[10..]);
        assert_eq!(hasher.digest(), adler32(data));
    }

    #[test]
    fn test_different_data_different_digest() {
        assert_ne!(adler32(b"Hello"), adler32(b"World"));
    }

    #[test]
    fn test_large_input_no_overflow() {
        // Spans several reduction chunks
        let data = vec![0xFFu8; CHUNK * 3 + 17];
        let mut split = Adler32::new();
        split.update(&data[..CHUNK + 1]);
        split.update(&data[CHUNK + 1..]);
        assert_eq!(split.digest(), adler32(&data));
    }
}
