use std::borrow::Cow;

use percent_encoding::percent_decode;

/// Decodes a querystring key or value, applying the following:
/// - Replaces `+` with a space
/// - Decodes percent-encoded characters, leaving malformed escapes as-is
/// - Converts the result to UTF-8, replacing invalid sequences with U+FFFD
pub fn decode(input: &str) -> Cow<'_, str> {
    if !input.bytes().any(|b| b == b'+' || b == b'%') {
        // nothing to decode
        return Cow::Borrowed(input);
    }

    let spaced: Cow<'_, [u8]> = if input.contains('+') {
        Cow::Owned(
            input
                .bytes()
                .map(|b| if b == b'+' { b' ' } else { b })
                .collect(),
        )
    } else {
        Cow::Borrowed(input.as_bytes())
    };

    Cow::Owned(percent_decode(&spaced).decode_utf8_lossy().into_owned())
}
