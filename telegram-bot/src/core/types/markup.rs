//! Markup dialect of an outgoing message.

use serde::{Deserialize, Serialize};

/// How the transport should parse outgoing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkupMode {
    /// No parsing; text shown verbatim.
    #[default]
    Plain,
    /// Telegram's legacy Markdown.
    Markdown,
    /// Telegram's strict MarkdownV2; reserved chars must be escaped.
    MarkdownV2,
}
