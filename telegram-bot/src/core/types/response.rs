//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the last text sent so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing further to report.
    Stop,
    /// Not for this handler; try next.
    Ignore,
    /// Stop the chain and attach the reply text.
    Reply(String),
}
