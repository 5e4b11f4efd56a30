//! Fixed texts sent to users.

use crate::timezone::ChatTimezone;

pub const ONBOARDING: &str = "Welcome!\n\
To get started, please set your timezone using:\n\
/settimezone <offset_hours> or\n\
/settimezone <timezone_name>\n\n\
Example:\n\
/settimezone +7 or\n\
/settimezone Asia/Jakarta or\n\
/settimezone Jakarta";

pub const SETTIMEZONE_USAGE: &str = "Usage:\n\
/settimezone <offset_hours> or /settimezone <timezone_name>\n\n\
Example:\n\
/settimezone +7 or /settimezone Asia/Jakarta or /settimezone Jakarta";

pub const SET_TIMEZONE_FIRST: &str = "Please set your time first using /settimezone <offset_hours>";

/// Sent MarkdownV2-escaped.
pub const HELP_TEXT: &str = "You look like you need my help, let me help you. To use this bot, you can use several features with the commands provided.\n\n\
The following are the currently available commands:\n\
/start - Start a conversation and get a greeting\n\
/help - Displays available commands\n\
/quote - Get a random motivational quote\n\
/settimezone - Set your timezone, e.g. /settimezone +7\n";

pub fn timezone_confirmation(timezone: &ChatTimezone) -> String {
    format!("Timezone set to {}", timezone)
}

/// Apology sent in place of a model reply when the LLM call fails.
pub fn llm_fallback(support_contact: &str) -> String {
    format!(
        "Sorry, an error occurred. Please contact the developer for assistance.\nDev: {}",
        support_contact
    )
}
