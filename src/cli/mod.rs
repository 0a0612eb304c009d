//! CLI module for infraquery
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP query service
//! - `ask` - Answer a single question from the terminal
//! - `groups` - List the resource groups questions would search
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start server with default config
//! infraquery serve
//!
//! # One-off question
//! infraquery ask "Is vm-prod-01 running?"
//!
//! # Generate shell completions
//! infraquery completions bash > ~/.bash_completion.d/infraquery
//! ```

pub mod ask;
pub mod completions;
pub mod config;
pub mod groups;
pub mod output;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// infraquery - Natural-language questions about Azure infrastructure
#[derive(Parser, Debug)]
#[command(
    name = "infraquery",
    version,
    about = "Answer natural-language questions about Azure infrastructure"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP query service
    Serve(ServeArgs),
    /// Answer a single question
    Ask(AskArgs),
    /// List the resource groups in scope
    Groups(GroupsArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "infraquery.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "INFRAQUERY_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "INFRAQUERY_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "INFRAQUERY_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to answer
    pub question: String,

    /// Print the answer, source and analyzed intent as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "infraquery.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct GroupsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "infraquery.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "infraquery.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load the config file if present, then apply environment overrides.
///
/// Used by the one-shot commands; `serve` layers its own flags on top.
pub fn load_config(
    path: &std::path::Path,
) -> Result<crate::config::InfraQueryConfig, Box<dyn std::error::Error>> {
    let config = if path.exists() {
        crate::config::InfraQueryConfig::load(Some(path))?
    } else {
        crate::config::InfraQueryConfig::default()
    };
    Ok(config.with_env_overrides())
}
