//! URI component percent-encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left untouched when encoding a URI component: the RFC 3986
/// unreserved marks plus `!`, `*`, `'`, `(` and `)`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single URI component.
///
/// Reserved characters such as `:`, `/`, `?`, `#`, `&`, `=` and `%` are
/// escaped as upper-case `%XX` sequences of their UTF-8 bytes, so the result
/// can be embedded as one query value. Encoding an already encoded string
/// escapes its `%` again; callers encode exactly once.
#[must_use]
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
