//! Framework-level handlers usable in any chain.

mod logging;

pub use logging::LoggingHandler;
