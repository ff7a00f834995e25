use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chatbot")]
#[command(about = "AI chat bot for OpenAI-compatible endpoints, in the browser or the terminal")]
#[command(version)]
pub struct Args {
    /// Log filter (e.g. info, debug, chatbot_cli=trace); overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Completion settings shared by `serve` and `chat`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CompletionArgs {
    /// API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Sampling temperature (0.0-1.5)
    #[arg(short = 't', long)]
    pub temperature: Option<f32>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the chat page over HTTP
    Serve {
        #[command(flatten)]
        completion: CompletionArgs,

        /// Address to listen on (e.g. 127.0.0.1:8501)
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// External stylesheet loaded at startup
        #[arg(short = 's', long)]
        stylesheet: Option<PathBuf>,
    },
    /// Interactive chat in the terminal
    Chat {
        #[command(flatten)]
        completion: CompletionArgs,
    },
    /// Show the resolved configuration
    Config,
}
