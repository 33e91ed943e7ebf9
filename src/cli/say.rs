//! Non-interactive "say" command

use std::error::Error;

use tracing::warn;

use crate::core::session::{ChatSession, SendRejected};
use crate::utils::logging::TranscriptLog;

pub async fn run_say(
    session: ChatSession,
    logging: TranscriptLog,
    prompt: Vec<String>,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: insight-scout say <prompt>");
        std::process::exit(1);
    }

    let reply = match session.send_message(&prompt).await {
        Ok(reply) => reply,
        Err(SendRejected::EmptyInput) => return Ok(()),
        Err(err @ SendRejected::ReplyPending) => return Err(err.into()),
    };

    for message in session.messages_since(1) {
        if let Err(e) = logging.log_message(&message) {
            warn!("failed to write transcript log: {e}");
        }
    }

    println!("{}", reply.content);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::responder::Reply;
    use crate::utils::test_utils::scripted_session;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn logs_the_exchange_without_the_greeting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("say.log");
        let session = scripted_session(vec![Reply::Success("Conversion is flat.".into())]);

        run_say(
            session.clone(),
            TranscriptLog::new(Some(path.clone())).unwrap(),
            vec!["How".into(), "is".into(), "conversion?".into()],
        )
        .await
        .unwrap();

        assert_eq!(session.message_count(), 3);
        let log = fs::read_to_string(&path).unwrap();
        assert!(log.contains("You: How is conversion?\n\nConversion is flat.\n"));
        assert!(!log.contains("Hello! I'm Insight Scout"));
    }
}
