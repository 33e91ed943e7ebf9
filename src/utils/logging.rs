use crate::core::message::Message;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Plain-text transcript written alongside an interactive session.
pub struct TranscriptLog {
    file_path: Option<PathBuf>,
    is_active: bool,
}

impl TranscriptLog {
    /// Opens the log in append mode when a path is given; otherwise every write is a no-op.
    pub fn new(log_file: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut logging = TranscriptLog {
            file_path: None,
            is_active: false,
        };

        if let Some(path) = log_file {
            logging.set_log_file(path)?;
        }

        Ok(logging)
    }

    pub fn set_log_file(&mut self, path: PathBuf) -> Result<String, Box<dyn std::error::Error>> {
        // Test if we can create/write to the file
        test_file_access(&path)?;

        let message = format!("Logging enabled to: {}", path.display());
        self.file_path = Some(path);
        self.is_active = true;
        self.log_marker(&format!(
            "Transcript started {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ))?;

        Ok(message)
    }

    pub fn toggle_logging(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        match &self.file_path {
            Some(path) => {
                let path = path.display().to_string();
                if self.is_active {
                    self.log_marker("Logging paused")?;
                    self.is_active = false;
                    Ok(format!("Logging paused (file: {path})"))
                } else {
                    self.is_active = true;
                    Ok(format!("Logging resumed to: {path}"))
                }
            }
            None => Err("No log file specified. Start with --log <FILE> to enable logging.".into()),
        }
    }

    /// Appends a transcript entry. User entries carry a `You: ` prefix.
    pub fn log_message(&self, message: &Message) -> Result<(), Box<dyn std::error::Error>> {
        if message.is_user() {
            self.write_entry(&format!("{}: {}", message.role.display_label(), message.content))
        } else {
            self.write_entry(&message.content)
        }
    }

    /// Writes a `## `-prefixed marker line such as a clear notice.
    pub fn log_marker(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.write_entry(&format!("## {text}"))
    }

    fn write_entry(&self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        let Some(file_path) = self.file_path.as_ref().filter(|_| self.is_active) else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        let mut writer = BufWriter::new(file);

        for line in content.lines() {
            writeln!(writer, "{line}")?;
        }
        // Blank line between entries
        writeln!(writer)?;

        writer.flush()?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn get_status_string(&self) -> String {
        let file_name = |path: &Path| {
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        };
        match (&self.file_path, self.is_active) {
            (None, _) => "disabled".to_string(),
            (Some(path), true) => format!("active ({})", file_name(path)),
            (Some(path), false) => format!("paused ({})", file_name(path)),
        }
    }
}

fn test_file_access(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entries(path: &Path) -> Vec<String> {
        let content = fs::read_to_string(path).unwrap();
        content
            .split("\n\n")
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| entry.trim_end().to_string())
            .collect()
    }

    #[test]
    fn disabled_log_ignores_writes() {
        let log = TranscriptLog::new(None).unwrap();
        assert!(!log.is_active());
        assert_eq!(log.get_status_string(), "disabled");
        log.log_message(&Message::user("hello")).unwrap();
    }

    #[test]
    fn writes_prefixed_user_lines_and_blank_separators() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transcript.log");
        let log = TranscriptLog::new(Some(path.clone())).unwrap();

        log.log_message(&Message::user("How is checkout doing?"))
            .unwrap();
        log.log_message(&Message::assistant("Line one\nLine two"))
            .unwrap();
        log.log_marker("Transcript cleared").unwrap();

        let entries = entries(&path);
        assert!(entries[0].starts_with("## Transcript started "));
        assert_eq!(entries[1], "You: How is checkout doing?");
        assert_eq!(entries[2], "Line one\nLine two");
        assert_eq!(entries[3], "## Transcript cleared");
        assert_eq!(log.get_status_string(), "active (transcript.log)");
    }

    #[test]
    fn paused_log_skips_messages_until_resumed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transcript.log");
        let mut log = TranscriptLog::new(Some(path.clone())).unwrap();

        log.toggle_logging().unwrap();
        log.log_message(&Message::user("not recorded")).unwrap();
        assert_eq!(log.get_status_string(), "paused (transcript.log)");

        log.toggle_logging().unwrap();
        log.log_message(&Message::user("recorded")).unwrap();

        let entries = entries(&path);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1], "## Logging paused");
        assert_eq!(entries[2], "You: recorded");
    }

    #[test]
    fn toggle_without_file_is_an_error() {
        let mut log = TranscriptLog::new(None).unwrap();
        assert!(log.toggle_logging().is_err());
    }

    #[test]
    fn unwritable_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("transcript.log");
        assert!(TranscriptLog::new(Some(path)).is_err());
    }
}
