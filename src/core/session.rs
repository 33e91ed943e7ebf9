//! The shared chat session.
//!
//! One [`ChatSession`] is created at startup and handed to every view that
//! needs the transcript or the source list. Clones share the same state.
//!
//! Sending is split in two so callers can observe the in-flight state:
//! [`ChatSession::begin_send`] records the user message and raises the
//! thinking flag synchronously, and [`PendingReply::complete`] waits for the
//! responder and appends its answer. At most one reply can be pending; the
//! session rejects a second send itself instead of relying on the view to
//! disable its input.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::core::constants::GREETING;
use crate::core::data_source::{DataSource, DataSourceRegistry, UnknownSource};
use crate::core::message::Message;
use crate::core::responder::{ReplyRequest, Responder, ResponderKind};

/// Why a send did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejected {
    /// The text was empty after trimming. Views treat this as a silent no-op.
    EmptyInput,
    /// Another reply is still pending.
    ReplyPending,
}

impl fmt::Display for SendRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendRejected::EmptyInput => write!(f, "Nothing to send"),
            SendRejected::ReplyPending => {
                write!(f, "Still waiting for the previous reply")
            }
        }
    }
}

impl std::error::Error for SendRejected {}

struct SessionState {
    transcript: Vec<Message>,
    sources: DataSourceRegistry,
    thinking: bool,
    /// Bumped by `clear`; replies started under an older generation are dropped.
    generation: u64,
}

fn lock_state(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone)]
pub struct ChatSession {
    state: Arc<Mutex<SessionState>>,
    responder: Arc<dyn Responder>,
}

impl fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock_state(&self.state);
        f.debug_struct("ChatSession")
            .field("messages", &state.transcript.len())
            .field("sources", &state.sources.len())
            .field("thinking", &state.thinking)
            .field("responder", &self.responder.kind())
            .finish()
    }
}

impl ChatSession {
    /// New session over the seeded sources, opening with the greeting.
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self::with_sources(responder, DataSourceRegistry::seeded())
    }

    pub fn with_sources(responder: Arc<dyn Responder>, sources: DataSourceRegistry) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                transcript: vec![Message::assistant(GREETING)],
                sources,
                thinking: false,
                generation: 0,
            })),
            responder,
        }
    }

    pub fn responder_kind(&self) -> ResponderKind {
        self.responder.kind()
    }

    pub fn messages(&self) -> Vec<Message> {
        lock_state(&self.state).transcript.clone()
    }

    /// Messages at positions `start..`, for views that render incrementally.
    pub fn messages_since(&self, start: usize) -> Vec<Message> {
        let state = lock_state(&self.state);
        state
            .transcript
            .get(start..)
            .map(<[Message]>::to_vec)
            .unwrap_or_default()
    }

    pub fn message_count(&self) -> usize {
        lock_state(&self.state).transcript.len()
    }

    pub fn last_message(&self) -> Option<Message> {
        lock_state(&self.state).transcript.last().cloned()
    }

    pub fn is_thinking(&self) -> bool {
        lock_state(&self.state).thinking
    }

    pub fn sources(&self) -> Vec<DataSource> {
        lock_state(&self.state).sources.as_slice().to_vec()
    }

    pub fn enabled_source_names(&self) -> Vec<String> {
        lock_state(&self.state).sources.enabled_names()
    }

    pub fn toggle_source(&self, id: &str) -> Result<bool, UnknownSource> {
        lock_state(&self.state).sources.toggle(id)
    }

    pub fn replace_sources(&self, sources: Vec<DataSource>) {
        lock_state(&self.state).sources.replace_all(sources);
    }

    /// Empty the transcript. A reply still in flight is discarded when it lands.
    pub fn clear(&self) {
        let mut state = lock_state(&self.state);
        state.transcript.clear();
        state.generation += 1;
    }

    /// Replace the transcript with a single opening message.
    pub fn restart_with(&self, opening: Message) {
        let mut state = lock_state(&self.state);
        state.transcript = vec![opening];
        state.generation += 1;
    }

    /// Append an assistant message that did not come from the responder.
    pub fn push_assistant(&self, content: impl Into<String>) {
        lock_state(&self.state)
            .transcript
            .push(Message::assistant(content));
    }

    /// Record `text` as a user message and mark a reply as pending.
    pub fn begin_send(&self, text: &str) -> Result<PendingReply, SendRejected> {
        if text.trim().is_empty() {
            return Err(SendRejected::EmptyInput);
        }

        let mut state = lock_state(&self.state);
        if state.thinking {
            return Err(SendRejected::ReplyPending);
        }
        state.transcript.push(Message::user(text));
        state.thinking = true;
        let enabled_sources = state.sources.enabled_names();
        let generation = state.generation;
        drop(state);

        Ok(PendingReply {
            responder: Arc::clone(&self.responder),
            prompt: text.to_string(),
            enabled_sources,
            generation,
            guard: ThinkingGuard {
                state: Arc::clone(&self.state),
                armed: true,
            },
        })
    }

    /// Send `text` and wait for the assistant reply, which is also returned.
    pub async fn send_message(&self, text: &str) -> Result<Message, SendRejected> {
        let pending = self.begin_send(text)?;
        Ok(pending.complete().await)
    }
}

/// Clears the thinking flag if the reply never completes.
struct ThinkingGuard {
    state: Arc<Mutex<SessionState>>,
    armed: bool,
}

impl ThinkingGuard {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for ThinkingGuard {
    fn drop(&mut self) {
        if self.armed {
            lock_state(&self.state).thinking = false;
        }
    }
}

/// A user message that is waiting for its reply.
pub struct PendingReply {
    responder: Arc<dyn Responder>,
    prompt: String,
    enabled_sources: Vec<String>,
    generation: u64,
    guard: ThinkingGuard,
}

impl PendingReply {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Wait for the responder, append its reply and lower the thinking flag.
    pub async fn complete(mut self) -> Message {
        let reply = self
            .responder
            .respond(ReplyRequest {
                prompt: &self.prompt,
                enabled_sources: &self.enabled_sources,
            })
            .await;
        let message = Message::assistant(reply.into_content());

        let mut state = lock_state(&self.guard.state);
        if state.generation == self.generation {
            state.transcript.push(message.clone());
        } else {
            debug!("transcript was cleared while waiting; dropping reply");
        }
        state.thinking = false;
        drop(state);
        self.guard.disarm();

        message
    }
}
