//! Insight Scout is a terminal assistant for product performance insights.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the shared chat session, the data source registry, the
//!   reply strategies (webhook or simulated), onboarding, and configuration.
//! - [`api`] parses webhook response bodies into typed replies.
//! - [`insights`] holds the bundled analytics dataset and the summary figures
//!   derived from it.
//! - [`commands`] implements slash-command parsing and execution used by the
//!   chat loop.
//! - [`cli`] parses arguments and runs the chat, `say`, `dashboard`, and
//!   settings subcommands.
//! - [`logging`] installs the diagnostic `tracing` subscriber; transcript files
//!   live in [`utils::logging`].
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod insights;
pub mod logging;
pub mod utils;
