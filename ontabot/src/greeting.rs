//! Time-of-day greeting bands.

use chrono::{DateTime, Utc};

use crate::timezone::ChatTimezone;

/// Part of the day a greeting is written for, derived from local minute-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingBand {
    /// 02:31–10:30
    Morning,
    /// 10:31–15:00
    Afternoon,
    /// 15:01–18:30
    Evening,
    /// 18:31–22:29
    Night,
    /// 22:30–02:30
    Midnight,
}

impl GreetingBand {
    /// Maps `hour * 60 + minute` to a band. Bounds are inclusive on both ends.
    pub fn from_minute_of_day(minute: u32) -> Self {
        match minute {
            151..=630 => GreetingBand::Morning,
            631..=900 => GreetingBand::Afternoon,
            901..=1110 => GreetingBand::Evening,
            1111..=1349 => GreetingBand::Night,
            _ => GreetingBand::Midnight,
        }
    }

    /// Band for the chat's local time at `now`. Chats without a timezone use UTC.
    pub fn at(timezone: Option<&ChatTimezone>, now: DateTime<Utc>) -> Self {
        let minute = timezone
            .cloned()
            .unwrap_or_default()
            .minute_of_day(now);
        Self::from_minute_of_day(minute)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GreetingBand::Morning => "morning",
            GreetingBand::Afternoon => "afternoon",
            GreetingBand::Evening => "evening",
            GreetingBand::Night => "night",
            GreetingBand::Midnight => "midnight",
        }
    }

    /// Instruction sent to the model, e.g. `Give a friendly morning greeting`.
    pub fn prompt(&self) -> String {
        prompt::greeting_prompt(self.label())
    }
}
