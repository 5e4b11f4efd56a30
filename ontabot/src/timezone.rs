//! Chat timezone preference and `/settimezone` argument resolution.

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};
use chrono_tz::Tz;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// A chat's timezone: a whole-hour UTC offset or a named IANA zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTimezone {
    Fixed(FixedOffset),
    Named(Tz),
}

impl Default for ChatTimezone {
    fn default() -> Self {
        ChatTimezone::Fixed(Utc.fix())
    }
}

impl ChatTimezone {
    /// Fixed offset of `hours` from UTC. `None` outside ±23.
    pub fn from_offset_hours(hours: i32) -> Option<Self> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(ChatTimezone::Fixed)
    }

    /// Local `hour * 60 + minute` at the instant `now`.
    pub fn minute_of_day(&self, now: DateTime<Utc>) -> u32 {
        let local = match self {
            ChatTimezone::Fixed(offset) => now.with_timezone(offset).time(),
            ChatTimezone::Named(tz) => now.with_timezone(tz).time(),
        };
        local.hour() * 60 + local.minute()
    }
}

/// `UTC+7` / `UTC-5` for offsets, the canonical zone name otherwise.
impl fmt::Display for ChatTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatTimezone::Fixed(offset) => write!(f, "UTC{:+}", offset.local_minus_utc() / 3600),
            ChatTimezone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Why a `/settimezone` argument was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimezoneError {
    #[error("missing timezone argument")]
    MissingArgument,

    #[error("invalid UTC offset: {0}")]
    InvalidOffset(String),

    #[error("unknown timezone: {0}")]
    UnknownZone(String),
}

/// Failure loading the alias table at startup.
#[derive(Debug, Error)]
pub enum AliasTableError {
    #[error("cannot read timezone aliases from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid timezone alias JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static map of user-typed aliases (`jakarta`, `wib`) to canonical zone names. Keys are lower-case.
#[derive(Debug, Clone, Default)]
pub struct TimezoneAliases {
    aliases: HashMap<String, String>,
}

impl TimezoneAliases {
    pub fn new(aliases: HashMap<String, String>) -> Self {
        let aliases = aliases
            .into_iter()
            .map(|(alias, zone)| (alias.to_lowercase(), zone))
            .collect();
        Self { aliases }
    }

    /// Parses a JSON object of `"alias": "Zone/Name"` pairs.
    pub fn from_json(json: &str) -> Result<Self, AliasTableError> {
        let map: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::new(map))
    }

    /// Reads the alias file. Aliases whose target is not a known zone are kept but logged.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AliasTableError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| AliasTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&json)?;
        for (alias, zone) in &table.aliases {
            if Tz::from_str_insensitive(zone).is_err() {
                warn!(alias = %alias, zone = %zone, "Timezone alias points to an unknown zone");
            }
        }
        info!(path = %path.display(), count = table.len(), "Loaded timezone aliases");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Canonical zone name for `alias` (case-insensitive).
    pub fn lookup(&self, alias: &str) -> Option<&str> {
        self.aliases.get(&alias.to_lowercase()).map(String::as_str)
    }

    /// Resolves a `/settimezone` argument.
    ///
    /// `+N` / `-N` is a whole-hour UTC offset. Anything else goes through the alias table, then is
    /// tried directly as a zone name; both lookups ignore case.
    pub fn resolve(&self, token: &str) -> Result<ChatTimezone, TimezoneError> {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            return Err(TimezoneError::MissingArgument);
        }

        if token.starts_with('+') || token.starts_with('-') {
            return token
                .parse::<i32>()
                .ok()
                .and_then(ChatTimezone::from_offset_hours)
                .ok_or(TimezoneError::InvalidOffset(token));
        }

        let zone = self.lookup(&token).unwrap_or(&token);
        Tz::from_str_insensitive(zone)
            .map(ChatTimezone::Named)
            .map_err(|_| TimezoneError::UnknownZone(token.clone()))
    }
}
