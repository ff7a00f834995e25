use anyhow::Result;
use clap::Parser;

use chatbot_cli::cli::commands::{chat, config, serve};
use chatbot_cli::cli::{Args, Command};
use chatbot_cli::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Serve {
            completion,
            bind,
            stylesheet,
        } => {
            logging::init(args.log_level.as_deref(), "info");
            serve::run_serve(&completion, bind, stylesheet).await?;
        }
        Command::Chat { completion } => {
            logging::init(args.log_level.as_deref(), "warn");
            chat::run_chat(&completion).await?;
        }
        Command::Config => {
            logging::init(args.log_level.as_deref(), "warn");
            config::show_config()?;
        }
    }

    Ok(())
}
