//! Command-line interface shared by bot binaries.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ontabot")]
#[command(about = "Ontabot Telegram AI assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TELEGRAM_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_token() {
        let cli = Cli::try_parse_from(["ontabot", "run", "--token", "123:abc"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert_eq!(token.as_deref(), Some("123:abc")),
        }
    }

    #[test]
    fn parses_run_without_token() {
        let cli = Cli::try_parse_from(["ontabot", "run"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert!(token.is_none()),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["ontabot"]).is_err());
    }
}
