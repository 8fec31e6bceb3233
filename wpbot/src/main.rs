//! `wpbot` binary: `run` starts the bot, `generate` prints one draft.

use anyhow::Result;
use clap::Parser;
use wpbot::{generate_once, load_config, run_bot, Cli, Commands};
use wpbot_core::init_console_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Generate { topic, model } => {
            init_console_tracing()?;
            let draft = generate_once(&topic, model.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&draft)?);
            Ok(())
        }
    }
}
