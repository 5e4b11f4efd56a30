use anyhow::Result;
use clap::Parser;
use ontabot::{run_bot, OntabotConfig};
use telegram_bot::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = OntabotConfig::load(token)?;
            run_bot(config).await
        }
    }
}
