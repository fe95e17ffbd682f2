use crate::error::PatchError;
use crate::scan::Occurrence;

/// Shorter replacements are padded to the original length with this byte.
/// `/` is legal MUTF-8, harmless inside a URL, and distinct from the entry
/// terminator.
pub const FILLER: u8 = b'/';

/// Check that `new` can replace an entry of `old_len` bytes without
/// changing the entry's span.
///
/// The string table cannot grow in place: every later offset, type and
/// reference table in the container addresses entries by position, so an
/// oversize request refuses the whole operation before any byte changes.
pub fn check_fits(old_len: usize, new: &[u8]) -> Result<(), PatchError> {
    if new.len() > old_len {
        return Err(PatchError::ReplacementTooLong {
            old_len,
            new_len: new.len(),
        });
    }
    Ok(())
}

/// Overwrite the occurrence's text bytes with `new`, right-padded with
/// `FILLER` to the exact original length. The prefix, terminator and every
/// other byte in the buffer stay untouched.
///
/// Callers check `check_fits` first; this only writes.
pub fn write_replacement(buf: &mut [u8], occurrence: &Occurrence, new: &[u8]) {
    let start = occurrence.text_offset;
    let split = start + new.len();
    let end = start + occurrence.text_len;

    buf[start..split].copy_from_slice(new);
    buf[split..end].fill(FILLER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{self, TERMINATOR};

    fn entry(text: &[u8]) -> Vec<u8> {
        let mut buf = vec![text.len() as u8];
        buf.extend_from_slice(text);
        buf.push(TERMINATOR);
        buf
    }

    fn occurrence_in(buf: &[u8], text: &[u8]) -> Occurrence {
        scan::find_occurrences(buf, text)[0]
    }

    #[test]
    fn test_same_length_replacement() {
        let mut buf = entry(b"track.example.com");
        let occ = occurrence_in(&buf, b"track.example.com");
        write_replacement(&mut buf, &occ, b"blank.example.org");
        assert_eq!(&buf, &entry(b"blank.example.org"));
    }

    #[test]
    fn test_shorter_replacement_is_padded() {
        let mut buf = entry(b"track.example.com");
        let occ = occurrence_in(&buf, b"track.example.com");
        write_replacement(&mut buf, &occ, b"localhost");
        assert_eq!(&buf, &entry(b"localhost////////"));
    }

    #[test]
    fn test_prefix_and_terminator_untouched() {
        let mut buf = entry(b"track.example.com");
        let occ = occurrence_in(&buf, b"track.example.com");
        write_replacement(&mut buf, &occ, b"x");
        assert_eq!(buf[0], 17);
        assert_eq!(buf[18], TERMINATOR);
        assert_eq!(buf.len(), 19);
    }

    #[test]
    fn test_oversize_refused() {
        let err = check_fits(9, b"track.example.com").unwrap_err();
        assert!(matches!(
            err,
            crate::error::PatchError::ReplacementTooLong {
                old_len: 9,
                new_len: 17
            }
        ));
    }

    #[test]
    fn test_equal_length_accepted() {
        assert!(check_fits(9, b"localhost").is_ok());
    }

    #[test]
    fn test_filler_is_not_terminator() {
        assert_ne!(FILLER, TERMINATOR);
    }
}
