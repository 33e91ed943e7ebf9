//! Line-oriented chat loop over stdin/stdout.

use std::error::Error;
use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::cli::sources::format_sources;
use crate::commands::{process_input, CommandResult};
use crate::core::constants::THINKING_INDICATOR;
use crate::core::message::Message;
use crate::core::onboarding::Onboarding;
use crate::core::session::{ChatSession, SendRejected};
use crate::insights::Dataset;
use crate::utils::logging::TranscriptLog;

pub enum LineOutcome {
    Continue,
    Quit,
}

/// Terminal view over the shared session.
///
/// Notices (command output) are buffered until the next render; transcript
/// entries are rendered incrementally and mirrored to the transcript log.
pub struct ChatView {
    session: ChatSession,
    logging: TranscriptLog,
    onboarding: Option<Onboarding>,
    dataset: Dataset,
    rendered: usize,
    notices: Vec<String>,
}

impl ChatView {
    pub fn new(session: ChatSession, logging: TranscriptLog) -> Self {
        Self {
            session,
            logging,
            onboarding: None,
            dataset: Dataset::builtin(),
            rendered: 0,
            notices: Vec::new(),
        }
    }

    /// Starts in source selection, with the selection prompt in place of the greeting.
    pub fn with_onboarding(session: ChatSession, logging: TranscriptLog) -> Self {
        let mut view = Self::new(session, logging);
        let onboarding = Onboarding::new();
        onboarding.open(&view.session);
        view.notify(format_sources(onboarding.available()).join("\n"));
        view.notify("Use /toggle <id> to select, then press Enter to confirm or /start to begin.");
        view.onboarding = Some(onboarding);
        view
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn onboarding(&self) -> Option<&Onboarding> {
        self.onboarding.as_ref()
    }

    pub fn onboarding_mut(&mut self) -> Option<&mut Onboarding> {
        self.onboarding.as_mut()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn logging_mut(&mut self) -> &mut TranscriptLog {
        &mut self.logging
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notices.push(text.into());
    }

    pub fn clear_transcript(&mut self) {
        self.session.clear();
        self.rendered = 0;
        if let Err(e) = self.logging.log_marker("Transcript cleared") {
            warn!("failed to write transcript log: {e}");
        }
    }

    /// Commit the source selection into the session and leave onboarding.
    pub fn finish_onboarding(&mut self) {
        if let Some(onboarding) = self.onboarding.take() {
            onboarding.commit(&self.session);
            let enabled = self.session.enabled_source_names();
            debug!(sources = ?enabled, "onboarding committed");
            self.notify(format!("Connected: {}", enabled.join(", ")));
        }
    }

    /// Transcript entries appended since the last call, mirrored to the log.
    fn take_new_messages(&mut self) -> Vec<Message> {
        let messages = self.session.messages_since(self.rendered);
        self.rendered += messages.len();
        for message in &messages {
            if let Err(e) = self.logging.log_message(message) {
                warn!("failed to write transcript log: {e}");
            }
        }
        messages
    }

    /// Print new assistant messages, then buffered notices.
    ///
    /// User messages are only logged; the terminal already shows what was typed.
    pub fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for message in self.take_new_messages() {
            if message.is_assistant() {
                writeln!(out, "{}: {}", message.role.display_label(), message.content)?;
                writeln!(out)?;
            }
        }
        for notice in self.notices.drain(..) {
            writeln!(out, "{notice}")?;
            writeln!(out)?;
        }
        out.flush()
    }

    pub async fn handle_line<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> io::Result<LineOutcome> {
        match process_input(self, line) {
            CommandResult::Continue => {}
            CommandResult::Quit => {
                self.render(out)?;
                return Ok(LineOutcome::Quit);
            }
            CommandResult::ProcessAsMessage(text) => self.submit(&text, out).await?,
        }
        self.render(out)?;
        Ok(LineOutcome::Continue)
    }

    async fn submit<W: Write>(&mut self, text: &str, out: &mut W) -> io::Result<()> {
        match self.session.begin_send(text) {
            Ok(pending) => {
                self.render(out)?;
                writeln!(out, "⏳ {THINKING_INDICATOR}")?;
                out.flush()?;
                pending.complete().await;
            }
            Err(SendRejected::EmptyInput) => {
                let acknowledgement = self
                    .onboarding
                    .as_ref()
                    .filter(|onboarding| onboarding.selected_count() > 0)
                    .map(Onboarding::acknowledgement);
                if let Some(acknowledgement) = acknowledgement {
                    self.session.push_assistant(acknowledgement);
                }
            }
            Err(SendRejected::ReplyPending) => {
                self.notify(format!("⚠️  {}", SendRejected::ReplyPending));
            }
        }
        Ok(())
    }
}

pub async fn run_chat(
    session: ChatSession,
    logging: TranscriptLog,
    onboarding: bool,
) -> Result<(), Box<dyn Error>> {
    eprintln!(
        "🚀 Starting Insight Scout ({} responder)",
        session.responder_kind()
    );
    eprintln!("💡 Type /help for commands, /quit to leave");

    let mut view = if onboarding {
        ChatView::with_onboarding(session, logging)
    } else {
        ChatView::new(session, logging)
    };

    let mut stdout = io::stdout();
    view.render(&mut stdout)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if let LineOutcome::Quit = view.handle_line(&line, &mut stdout).await? {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::GREETING;
    use crate::core::responder::Reply;
    use crate::utils::test_utils::scripted_session;
    use std::fs;
    use tempfile::TempDir;

    fn view_with(replies: Vec<Reply>) -> ChatView {
        ChatView::new(scripted_session(replies), TranscriptLog::new(None).unwrap())
    }

    fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }

    #[tokio::test]
    async fn first_render_shows_the_greeting() {
        let mut view = view_with(vec![]);
        let mut out = Vec::new();
        view.render(&mut out).unwrap();
        assert_eq!(output(out), format!("Insight Scout: {GREETING}\n\n"));
    }

    #[tokio::test]
    async fn message_shows_thinking_then_reply() {
        let mut view = view_with(vec![Reply::Success("Checkout is the top issue.".into())]);
        let mut out = Vec::new();
        view.render(&mut out).unwrap();
        out.clear();

        view.handle_line("What hurts most?", &mut out).await.unwrap();
        let text = output(out);
        let thinking = text.find(THINKING_INDICATOR).unwrap();
        let reply = text.find("Insight Scout: Checkout is the top issue.").unwrap();
        assert!(thinking < reply);
        assert!(!text.contains("What hurts most?"));
        assert_eq!(view.session().message_count(), 3);
    }

    #[tokio::test]
    async fn blank_line_is_ignored() {
        let mut view = view_with(vec![]);
        let mut out = Vec::new();
        view.render(&mut out).unwrap();
        out.clear();

        view.handle_line("   ", &mut out).await.unwrap();
        assert!(out.is_empty());
        assert_eq!(view.session().message_count(), 1);
    }

    #[tokio::test]
    async fn quit_stops_the_loop() {
        let mut view = view_with(vec![]);
        let mut out = Vec::new();
        assert!(matches!(
            view.handle_line("/quit", &mut out).await.unwrap(),
            LineOutcome::Quit
        ));
    }

    #[tokio::test]
    async fn onboarding_acknowledges_then_starts() {
        let session = scripted_session(vec![]);
        let mut view = ChatView::with_onboarding(session.clone(), TranscriptLog::new(None).unwrap());
        let mut out = Vec::new();
        view.render(&mut out).unwrap();
        let intro = output(std::mem::take(&mut out));
        assert!(intro.starts_with("Insight Scout: Hi! I'm Insight Scout"));
        assert!(!intro.contains(GREETING));

        view.handle_line("/toggle csat", &mut out).await.unwrap();
        view.handle_line("", &mut out).await.unwrap();
        let text = output(std::mem::take(&mut out));
        assert!(text.contains("Insight Scout: Great! I've connected to 1 data source."));

        view.handle_line("/start", &mut out).await.unwrap();
        assert!(view.onboarding().is_none());
        assert_eq!(session.enabled_source_names(), vec!["CSAT".to_string()]);
        assert_eq!(session.message_count(), 2);
        assert!(session
            .last_message()
            .is_some_and(|message| message.content.starts_with("Great! I've connected")));
    }

    #[tokio::test]
    async fn onboarding_log_starts_with_the_selection_prompt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("onboard.log");
        let logging = TranscriptLog::new(Some(path.clone())).unwrap();
        let mut view = ChatView::with_onboarding(scripted_session(vec![]), logging);
        let mut out = Vec::new();
        view.render(&mut out).unwrap();
        view.handle_line("/toggle web", &mut out).await.unwrap();
        view.handle_line("", &mut out).await.unwrap();
        view.handle_line("/start", &mut out).await.unwrap();

        let log = fs::read_to_string(&path).unwrap();
        assert!(!log.contains(GREETING));
        let prompt = log.find("Hi! I'm Insight Scout, your AI assistant.").unwrap();
        let ack = log.find("Great! I've connected to 1 data source.").unwrap();
        assert!(prompt < ack);
    }

    #[tokio::test]
    async fn transcript_log_records_both_sides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chat.log");
        let logging = TranscriptLog::new(Some(path.clone())).unwrap();
        let mut view = ChatView::new(
            scripted_session(vec![Reply::Success("Two high severity issues.".into())]),
            logging,
        );
        let mut out = Vec::new();
        view.render(&mut out).unwrap();
        view.handle_line("Summarise pain points", &mut out)
            .await
            .unwrap();
        view.handle_line("/clear", &mut out).await.unwrap();

        let log = fs::read_to_string(&path).unwrap();
        let greeting = log.find(GREETING).unwrap();
        let user = log.find("You: Summarise pain points").unwrap();
        let reply = log.find("Two high severity issues.").unwrap();
        let cleared = log.find("## Transcript cleared").unwrap();
        assert!(greeting < user && user < reply && reply < cleared);
    }
}
