//! Base bot configuration: Telegram connectivity and logging. Application crates layer their own
//! settings on top (see `ontabot::OntabotConfig`).

mod base;


pub use base::{BaseConfig, DEFAULT_LOG_FILE};
