use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::core::responder::{Reply, ReplyRequest, Responder, ResponderKind};
use crate::core::session::ChatSession;

/// Replays a fixed list of replies in order.
pub struct ScriptedResponder {
    replies: Mutex<VecDeque<Reply>>,
}

impl ScriptedResponder {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }
}

#[async_trait]
impl Responder for ScriptedResponder {
    fn kind(&self) -> ResponderKind {
        ResponderKind::Simulated
    }

    async fn respond(&self, _request: ReplyRequest<'_>) -> Reply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Reply::TransportError("no scripted reply left".into()))
    }
}

/// Holds every reply until a permit is added to its gate.
pub struct GatedResponder {
    gate: Arc<Semaphore>,
    reply: Reply,
    last_sources: Mutex<Vec<String>>,
}

impl GatedResponder {
    pub fn new(reply: Reply) -> (Arc<Self>, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let responder = Arc::new(Self {
            gate: Arc::clone(&gate),
            reply,
            last_sources: Mutex::new(Vec::new()),
        });
        (responder, gate)
    }

    pub fn last_sources(&self) -> Vec<String> {
        self.last_sources.lock().unwrap().clone()
    }
}

#[async_trait]
impl Responder for GatedResponder {
    fn kind(&self) -> ResponderKind {
        ResponderKind::Simulated
    }

    async fn respond(&self, request: ReplyRequest<'_>) -> Reply {
        *self.last_sources.lock().unwrap() = request.enabled_sources.to_vec();
        let permit = self.gate.acquire().await.expect("gate closed");
        permit.forget();
        self.reply.clone()
    }
}

pub fn scripted_session(replies: Vec<Reply>) -> ChatSession {
    ChatSession::new(Arc::new(ScriptedResponder::new(replies)))
}
