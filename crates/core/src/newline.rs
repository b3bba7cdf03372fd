use alloc::borrow::Cow;
use alloc::string::String;

/// Rewrite every `\n` that is not already part of `\r\n` as `\r\n`.
///
/// A leading `\n` counts as bare. Lone `\r` is left alone. The input is
/// returned borrowed when no change is needed.
#[must_use]
pub fn normalize_crlf(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let bare = bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' && (i == 0 || bytes[i - 1] != b'\r'))
        .count();
    if bare == 0 {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + bare);
    let mut prev = None;
    for ch in text.chars() {
        if ch == '\n' && prev != Some('\r') {
            out.push('\r');
        }
        out.push(ch);
        prev = Some(ch);
    }
    Cow::Owned(out)
}
