//! ISO-2022-JP エスケープシーケンス検出

pub const ESC: u8 = 0x1B;

/// Designations recognised after an `ESC`, in the order they are tested.
///
/// JIS X 0208-1990 is announced as `ESC & @` immediately followed by the
/// 1983 designation, hence the nested escape.
pub const JIS_DESIGNATIONS: [&[u8]; 7] = [
    b"$@",          // JIS X 0208-1978
    b"$B",          // JIS X 0208-1983
    b"(B",          // ASCII
    b"(J",          // JIS X 0201 Roman
    b"(I",          // JIS X 0201 katakana
    b"$(D",         // JIS X 0212-1990
    b"&@\x1B$B",    // JIS X 0208-1990
];

/// Returns the offset of the first `ESC` that starts a known JIS designation.
///
/// Positions are visited one byte at a time; only positions with at least two
/// bytes after the `ESC` are considered.
#[must_use]
pub fn find_jis_escape(bytes: &[u8]) -> Option<usize> {
    let len = bytes.len();
    (0..len.saturating_sub(2)).find(|&i| bytes[i] == ESC && starts_designation(&bytes[i + 1..]))
}

#[must_use]
pub fn has_jis_escape(bytes: &[u8]) -> bool {
    find_jis_escape(bytes).is_some()
}

fn starts_designation(rest: &[u8]) -> bool {
    JIS_DESIGNATIONS.iter().any(|seq| rest.starts_with(seq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_designation_is_found() {
        for seq in JIS_DESIGNATIONS {
            let mut buf = alloc::vec![b'a', ESC];
            buf.extend_from_slice(seq);
            buf.push(b'z');
            assert_eq!(find_jis_escape(&buf), Some(1), "{seq:?}");
        }
    }

    #[test]
    fn designation_at_the_very_end_is_found() {
        assert_eq!(find_jis_escape(b"abc\x1B$B"), Some(3));
        assert_eq!(find_jis_escape(b"\x1B(J"), Some(0));
        assert_eq!(find_jis_escape(b"\x1B$(D"), Some(0));
        assert_eq!(find_jis_escape(b"\x1B&@\x1B$B"), Some(0));
    }

    #[test]
    fn truncated_sequences_do_not_match() {
        assert_eq!(find_jis_escape(b"\x1B$"), None);
        assert_eq!(find_jis_escape(b"\x1B"), None);
        assert_eq!(find_jis_escape(b"\x1B&@\x1B$"), None);
        assert_eq!(find_jis_escape(b"\x1B$("), None);
    }

    #[test]
    fn unknown_designation_is_ignored() {
        assert_eq!(find_jis_escape(b"\x1B[0m"), None);
        assert_eq!(find_jis_escape(b"\x1B$A"), None);
    }

    #[test]
    fn first_escape_wins() {
        assert_eq!(find_jis_escape(b"\x1B[m \x1B(B \x1B$B"), Some(5));
    }
}
