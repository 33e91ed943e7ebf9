use super::CommandResult;
use crate::cli::chat::ChatView;

pub type CommandHandler = fn(&mut ChatView, CommandInvocation<'_>) -> CommandResult;

pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
    pub handler: CommandHandler,
}

#[derive(Clone, Copy)]
pub struct CommandInvocation<'a> {
    pub args: &'a str,
}

pub fn all_commands() -> &'static [Command] {
    COMMANDS
}

pub fn find_command(name: &str) -> Option<&'static Command> {
    all_commands()
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "/help",
        help: "Show available commands.",
        handler: super::handle_help,
    },
    Command {
        name: "sources",
        usage: "/sources",
        help: "List data sources and whether each is enabled.",
        handler: super::handle_sources,
    },
    Command {
        name: "toggle",
        usage: "/toggle <id>",
        help: "Enable or disable a data source.",
        handler: super::handle_toggle,
    },
    Command {
        name: "clear",
        usage: "/clear",
        help: "Clear the conversation.",
        handler: super::handle_clear,
    },
    Command {
        name: "dashboard",
        usage: "/dashboard [section]",
        help: "Show the dashboard (overview, metrics, pain-points, trending, recommendations, themes).",
        handler: super::handle_dashboard,
    },
    Command {
        name: "log",
        usage: "/log",
        help: "Pause or resume the transcript log.",
        handler: super::handle_log,
    },
    Command {
        name: "start",
        usage: "/start",
        help: "Finish source selection and open the dashboard.",
        handler: super::handle_start,
    },
    Command {
        name: "quit",
        usage: "/quit",
        help: "Leave Insight Scout.",
        handler: super::handle_quit,
    },
    Command {
        name: "exit",
        usage: "/exit",
        help: "Same as /quit.",
        handler: super::handle_quit,
    },
];
