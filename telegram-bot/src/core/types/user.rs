//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// Sender identity. `id` is 0 when the transport did not report a sender (e.g. channel posts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}
