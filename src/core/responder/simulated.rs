use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{Reply, ReplyRequest, Responder, ResponderKind};

/// Answers locally after a fixed pause with one of a few canned insights.
#[derive(Debug, Clone)]
pub struct SimulatedResponder {
    delay: Duration,
}

impl SimulatedResponder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Every reply the simulator can give for the given enabled sources.
pub fn canned_replies(enabled_sources: &[String]) -> Vec<String> {
    vec![
        format!(
            "Based on {} active data sources, I've identified that your main challenge is checkout friction. The data shows 347 complaints about this issue.",
            enabled_sources.len()
        ),
        format!(
            "Looking at {}, your conversion rate is trending down by 3.2%. I recommend focusing on the checkout flow optimization.",
            enabled_sources.join(", ")
        ),
        "From the selected sources, I see strong evidence that search functionality needs improvement. 289 users have reported issues with search relevance.".to_string(),
        "The data suggests your Customer Satisfaction score is performing well at 92%, exceeding your target of 90%. However, Task Completion Rate needs attention.".to_string(),
    ]
}

fn random_index(len: usize) -> usize {
    let mut bytes = [0u8; 4];
    match getrandom::fill(&mut bytes) {
        Ok(()) => u32::from_le_bytes(bytes) as usize % len,
        Err(err) => {
            debug!(error = %err, "system randomness unavailable; using first canned reply");
            0
        }
    }
}

#[async_trait]
impl Responder for SimulatedResponder {
    fn kind(&self) -> ResponderKind {
        ResponderKind::Simulated
    }

    async fn respond(&self, request: ReplyRequest<'_>) -> Reply {
        tokio::time::sleep(self.delay).await;
        let mut replies = canned_replies(request.enabled_sources);
        let index = random_index(replies.len());
        debug!(index, "simulated reply selected");
        Reply::Success(replies.swap_remove(index))
    }
}
