use sha1::{Digest, Sha1};

use crate::checksum;

/// Adler-32 checksum field: little-endian u32 at bytes 8..12, covering
/// everything from byte 12 to end of file.
pub const CHECKSUM_OFFSET: usize = 8;

/// SHA-1 content signature: 20 bytes at 12..32, covering everything from
/// byte 32 to end of file.
pub const SIGNATURE_OFFSET: usize = 12;
pub const SIGNATURE_LEN: usize = 20;

/// First byte after the fixed header fields; the string table lives at or
/// after this offset.
pub const PAYLOAD_OFFSET: usize = 32;

/// Rewrite the header integrity fields after the payload changed.
///
/// The signature must be written before the checksum is computed, because
/// the checksum's input range covers the signature bytes.
///
/// Callers guarantee `buf.len() >= PAYLOAD_OFFSET`.
pub fn update_integrity(buf: &mut [u8]) {
    let signature = Sha1::digest(&buf[PAYLOAD_OFFSET..]);
    buf[SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE_LEN].copy_from_slice(&signature);

    let sum = checksum::adler32(&buf[SIGNATURE_OFFSET..]);
    buf[CHECKSUM_OFFSET..SIGNATURE_OFFSET].copy_from_slice(&sum.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> Vec<u8> {
        let mut buf = vec![0u8; PAYLOAD_OFFSET];
        buf.extend_from_slice(b"payload bytes that the loader verifies");
        buf
    }

    #[test]
    fn test_signature_matches_fresh_digest() {
        let mut buf = sample_file();
        update_integrity(&mut buf);

        let expected = Sha1::digest(&buf[PAYLOAD_OFFSET..]);
        assert_eq!(&buf[SIGNATURE_OFFSET..PAYLOAD_OFFSET], expected.as_slice());
    }

    #[test]
    fn test_checksum_covers_updated_signature() {
        let mut buf = sample_file();
        update_integrity(&mut buf);

        let expected = checksum::adler32(&buf[SIGNATURE_OFFSET..]);
        assert_eq!(
            &buf[CHECKSUM_OFFSET..SIGNATURE_OFFSET],
            expected.to_le_bytes()
        );
    }

    #[test]
    fn test_payload_change_changes_both_fields() {
        let mut buf = sample_file();
        update_integrity(&mut buf);
        let sig_before = buf[SIGNATURE_OFFSET..PAYLOAD_OFFSET].to_vec();
        let sum_before = buf[CHECKSUM_OFFSET..SIGNATURE_OFFSET].to_vec();

        let last = buf.len() - 1;
        buf[last] ^= 0xFF;
        update_integrity(&mut buf);

        assert_ne!(buf[SIGNATURE_OFFSET..PAYLOAD_OFFSET], sig_before[..]);
        assert_ne!(buf[CHECKSUM_OFFSET..SIGNATURE_OFFSET], sum_before[..]);
    }

    #[test]
    fn test_bytes_before_checksum_untouched() {
        let mut buf = sample_file();
        buf[..CHECKSUM_OFFSET].copy_from_slice(b"dex\n035\0");
        update_integrity(&mut buf);
        assert_eq!(&buf[..CHECKSUM_OFFSET], b"dex\n035\0");
    }
}
