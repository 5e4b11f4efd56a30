//! Bot commands and their parsing.

use teloxide::utils::command::{BotCommands, ParseError};

/// Commands Ontabot understands. Names are the lower-cased variant names (`/settimezone`).
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Ontabot commands:")]
pub enum OntaCommand {
    #[command(description = "start a conversation and get a greeting")]
    Start,
    #[command(description = "display available commands")]
    Help,
    #[command(description = "get a random motivational quote")]
    Quote,
    #[command(
        description = "set your timezone, e.g. +7, Asia/Jakarta or Jakarta",
        parse_with = first_argument
    )]
    SetTimezone(String),
}

/// Keeps only the first whitespace-separated argument; an absent argument becomes empty.
fn first_argument(input: String) -> Result<(String,), ParseError> {
    Ok((input.split_whitespace().next().unwrap_or_default().to_string(),))
}

/// Lower-cases the command name, leaving `@bot_username` and the arguments untouched.
fn lowercase_command_name(text: &str) -> String {
    let head_end = text.find(char::is_whitespace).unwrap_or(text.len());
    let name_end = text[..head_end].find('@').unwrap_or(head_end);
    format!("{}{}", text[..name_end].to_lowercase(), &text[name_end..])
}

/// Parses `/cmd[@bot_username] [args]`; the command name is matched case-insensitively. Unknown
/// commands and commands addressed to another bot give `None`. Argument-less commands ignore
/// trailing text (deep-link `/start <payload>`).
pub fn parse_command(text: &str, bot_username: &str) -> Option<OntaCommand> {
    let text = lowercase_command_name(text);
    if let Ok(command) = OntaCommand::parse(&text, bot_username) {
        return Some(command);
    }
    let head = text.split_whitespace().next()?;
    OntaCommand::parse(head, bot_username).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_commands() {
        assert_eq!(parse_command("/start", "ontabot"), Some(OntaCommand::Start));
        assert_eq!(parse_command("/help", "ontabot"), Some(OntaCommand::Help));
        assert_eq!(parse_command("/quote", "ontabot"), Some(OntaCommand::Quote));
    }

    #[test]
    fn settimezone_takes_first_argument() {
        assert_eq!(
            parse_command("/settimezone +7", "ontabot"),
            Some(OntaCommand::SetTimezone("+7".to_string()))
        );
        assert_eq!(
            parse_command("/settimezone Asia/Jakarta please", "ontabot"),
            Some(OntaCommand::SetTimezone("Asia/Jakarta".to_string()))
        );
    }

    #[test]
    fn settimezone_without_argument_is_empty() {
        assert_eq!(
            parse_command("/settimezone", "ontabot"),
            Some(OntaCommand::SetTimezone(String::new()))
        );
    }

    #[test]
    fn addressed_commands() {
        assert_eq!(parse_command("/start@ontabot", "ontabot"), Some(OntaCommand::Start));
        assert_eq!(parse_command("/start@otherbot", "ontabot"), None);
    }

    #[test]
    fn start_with_payload() {
        assert_eq!(parse_command("/start ref-123", "ontabot"), Some(OntaCommand::Start));
    }

    #[test]
    fn command_names_ignore_case() {
        assert_eq!(parse_command("/Start", "ontabot"), Some(OntaCommand::Start));
        assert_eq!(parse_command("/HELP@ontabot", "ontabot"), Some(OntaCommand::Help));
        assert_eq!(
            parse_command("/SetTimezone Asia/Jakarta", "ontabot"),
            Some(OntaCommand::SetTimezone("Asia/Jakarta".to_string()))
        );
    }

    #[test]
    fn lowercasing_keeps_addressee_and_arguments() {
        assert_eq!(lowercase_command_name("/QUOTE@OntaBot"), "/quote@OntaBot");
        assert_eq!(lowercase_command_name("/SetTimezone +7 Now"), "/settimezone +7 Now");
        assert_eq!(lowercase_command_name("/Start"), "/start");
    }

    #[test]
    fn unknown_command() {
        assert_eq!(parse_command("/weather", "ontabot"), None);
        assert_eq!(parse_command("/", "ontabot"), None);
    }

    #[test]
    fn command_menu_lists_all_commands() {
        let names: Vec<String> = OntaCommand::bot_commands()
            .into_iter()
            .map(|c| c.command)
            .collect();
        assert_eq!(names.len(), 4);
        for name in ["start", "help", "quote", "settimezone"] {
            assert!(names.iter().any(|n| n.trim_start_matches('/') == name), "{}", name);
        }
    }
}
