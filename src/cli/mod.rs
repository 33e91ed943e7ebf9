//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod chat;
pub mod dashboard;
pub mod say;
pub mod settings;
pub mod sources;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cli::chat::run_chat;
use crate::cli::dashboard::{show_dashboard, DashboardSection};
use crate::cli::say::run_say;
use crate::cli::settings::{format_all, run_set, run_unset};
use crate::cli::sources::list_sources;
use crate::core::config::data::{path_display, Config, ResponderOverrides};
use crate::core::constants::ENDPOINT_ENV_VAR;
use crate::core::responder::{build_responder, ResponderKind};
use crate::core::session::ChatSession;
use crate::logging::init_tracing;
use crate::utils::logging::TranscriptLog;

#[derive(Parser)]
#[command(name = "insight-scout")]
#[command(about = "Chat with an insights assistant about your product analytics")]
#[command(
    long_about = "Insight Scout is a terminal assistant for product performance insights. \
It keeps a list of toggleable data sources, answers questions either through a \
configured webhook or with built-in simulated replies, and prints dashboard \
summaries of the bundled analytics data.\n\n\
Environment Variables:\n\
  INSIGHT_SCOUT_ENDPOINT   Webhook URL (overrides the config file)\n\
  RUST_LOG                 Diagnostic log filter (overrides log-level)\n\n\
Commands (inside chat):\n\
  /help             List commands\n\
  /sources          Show data sources\n\
  /toggle <id>      Enable or disable a data source\n\
  /dashboard [s]    Show a dashboard section\n\
  /clear            Clear the conversation\n\
  /quit             Leave"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Reply strategy: webhook or simulated
    #[arg(short = 'r', long, global = true, value_name = "RESPONDER")]
    pub responder: Option<ResponderKind>,

    /// Webhook URL that receives prompts
    #[arg(short = 'e', long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Append the conversation transcript to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Pick data sources first, then chat
    Onboard,
    /// Send a single prompt and print the reply
    Say {
        /// Prompt text (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// List the available data sources
    Sources,
    /// Print a dashboard section
    Dashboard {
        /// Section to print (defaults to overview)
        #[arg(value_enum)]
        section: Option<DashboardSection>,
    },
    /// Set configuration values, or print them when no value is given
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Option<Vec<String>>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let Args {
        command,
        responder,
        endpoint,
        log,
    } = Args::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ {err}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_level.as_deref());

    let overrides = ResponderOverrides {
        cli_kind: responder,
        cli_endpoint: endpoint,
        env_endpoint: std::env::var(ENDPOINT_ENV_VAR).ok(),
    };

    match command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let session = start_session(&config, overrides);
            run_chat(session, TranscriptLog::new(log)?, false).await
        }
        Commands::Onboard => {
            let session = start_session(&config, overrides);
            run_chat(session, TranscriptLog::new(log)?, true).await
        }
        Commands::Say { prompt } => {
            let session = start_session(&config, overrides);
            run_say(session, TranscriptLog::new(log)?, prompt).await
        }
        Commands::Sources => {
            list_sources();
            Ok(())
        }
        Commands::Dashboard { section } => {
            show_dashboard(section);
            Ok(())
        }
        Commands::Set { key, value } => {
            let value = value.unwrap_or_default();
            match key {
                Some(key) if !value.is_empty() => match run_set(&key, &value) {
                    Ok(message) => println!("{message}"),
                    Err(err) => {
                        err.print();
                        std::process::exit(err.exit_code());
                    }
                },
                _ => print_config(&config),
            }
            Ok(())
        }
        Commands::Unset { key } => {
            match run_unset(&key) {
                Ok(message) => println!("{message}"),
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
            Ok(())
        }
    }
}

/// Build the responder and the one session shared by every view.
///
/// A responder that cannot be built is reported with quick fixes and ends the process.
fn start_session(config: &Config, overrides: ResponderOverrides) -> ChatSession {
    let settings = config.resolve_responder(overrides);
    debug!(kind = %settings.kind, endpoint = ?settings.endpoint, "resolved responder");

    match build_responder(&settings) {
        Ok(responder) => ChatSession::new(responder),
        Err(err) => {
            eprintln!("❌ {err}");
            let fixes = err.quick_fixes();
            if !fixes.is_empty() {
                eprintln!();
                eprintln!("💡 Quick fixes:");
                for fix in fixes {
                    eprintln!("  • {fix}");
                }
            }
            std::process::exit(1);
        }
    }
}

fn print_config(config: &Config) {
    match Config::config_path() {
        Ok(path) => println!("Current configuration ({}):", path_display(path)),
        Err(_) => println!("Current configuration:"),
    }
    for line in format_all(config) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests;
