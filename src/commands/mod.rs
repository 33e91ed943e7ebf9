mod registry;

pub use registry::{all_commands, find_command, CommandInvocation};

use tracing::warn;

use crate::cli::chat::ChatView;
use crate::cli::dashboard::{render_section, DashboardSection};
use crate::cli::sources::format_sources;

pub enum CommandResult {
    Continue,
    ProcessAsMessage(String),
    Quit,
}

pub fn process_input(view: &mut ChatView, input: &str) -> CommandResult {
    let trimmed = input.trim();

    if !trimmed.starts_with('/') {
        return CommandResult::ProcessAsMessage(input.to_string());
    }

    let mut parts = trimmed[1..].splitn(2, ' ');
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage(input.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    if let Some(command) = registry::find_command(command_name) {
        (command.handler)(view, CommandInvocation { args })
    } else {
        CommandResult::ProcessAsMessage(input.to_string())
    }
}

pub(super) fn handle_help(view: &mut ChatView, _invocation: CommandInvocation<'_>) -> CommandResult {
    let mut help = String::from("Commands:");
    for command in all_commands() {
        help.push_str(&format!("\n  {:<22} {}", command.usage, command.help));
    }
    help.push_str("\nAnything else is sent to Insight Scout.");
    view.notify(help);
    CommandResult::Continue
}

pub(super) fn handle_sources(
    view: &mut ChatView,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let lines = match view.onboarding() {
        Some(onboarding) => {
            let selection: Vec<_> = onboarding
                .available()
                .iter()
                .map(|source| {
                    let mut source = source.clone();
                    source.enabled = onboarding.is_selected(&source.id);
                    source
                })
                .collect();
            format_sources(&selection)
        }
        None => format_sources(&view.session().sources()),
    };
    view.notify(lines.join("\n"));
    CommandResult::Continue
}

pub(super) fn handle_toggle(view: &mut ChatView, invocation: CommandInvocation<'_>) -> CommandResult {
    let id = invocation.args;
    if id.is_empty() {
        view.notify("Usage: /toggle <id>. Run /sources to list ids.");
        return CommandResult::Continue;
    }

    let result = match view.onboarding_mut() {
        Some(onboarding) => onboarding.toggle(id),
        None => view.session().toggle_source(id),
    };
    match result {
        Ok(enabled) => {
            let state = if enabled { "enabled" } else { "disabled" };
            view.notify(format!("✅ {id} {state}"));
        }
        Err(err) => view.notify(format!("❌ {err}. Run /sources to list ids.")),
    }
    CommandResult::Continue
}

pub(super) fn handle_clear(view: &mut ChatView, _invocation: CommandInvocation<'_>) -> CommandResult {
    view.clear_transcript();
    view.notify("Transcript cleared");
    CommandResult::Continue
}

pub(super) fn handle_dashboard(
    view: &mut ChatView,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    let section = if invocation.args.is_empty() {
        DashboardSection::Overview
    } else {
        match invocation.args.parse::<DashboardSection>() {
            Ok(section) => section,
            Err(err) => {
                view.notify(format!("❌ {err}"));
                return CommandResult::Continue;
            }
        }
    };
    let rendered = render_section(view.dataset(), section);
    view.notify(rendered);
    CommandResult::Continue
}

pub(super) fn handle_log(view: &mut ChatView, _invocation: CommandInvocation<'_>) -> CommandResult {
    match view.logging_mut().toggle_logging() {
        Ok(message) => view.notify(message),
        Err(e) => {
            warn!("transcript log toggle failed: {e}");
            view.notify(format!("Log error: {e}"));
        }
    }
    CommandResult::Continue
}

pub(super) fn handle_start(view: &mut ChatView, _invocation: CommandInvocation<'_>) -> CommandResult {
    match view.onboarding().map(|onboarding| onboarding.selected_count()) {
        None => view.notify("Sources are already connected. Run /dashboard to view insights."),
        Some(0) => view.notify("Select at least one data source with /toggle <id> first."),
        Some(_) => {
            view.finish_onboarding();
            let overview = render_section(view.dataset(), DashboardSection::Overview);
            view.notify(overview);
        }
    }
    CommandResult::Continue
}

pub(super) fn handle_quit(_view: &mut ChatView, _invocation: CommandInvocation<'_>) -> CommandResult {
    CommandResult::Quit
}
