//! Escaping for Telegram's MarkdownV2 parse mode.

/// Characters prefixed with a backslash by [`escape_markdown_v2`].
///
/// `>` is not escaped so `/quote` output can open blockquote lines.
pub const MARKDOWN_V2_RESERVED: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '#', '+', '-', '=', '|', '.', '{', '}', '!',
];

/// Prefixes every reserved character with one backslash; everything else passes through in order.
/// Input is assumed unescaped: an existing backslash is itself escaped.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if MARKDOWN_V2_RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
