//! In-memory transcript of a command session.
//!
//! Every prompt, reply and message of the session is appended here so the
//! `log` command can save the whole conversation to a file. The buffer lives
//! as long as the session that owns it and is closed on exit.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::util::write_replacing;

/// Append-only text buffer with explicit save and close.
#[derive(Debug, Default)]
pub struct Transcript {
    buffer: String,
    closed: bool,
}

impl Transcript {
    /// Create an empty, open transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line. Lines appended after [`close`](Self::close) are dropped.
    pub fn append(&mut self, line: &str) {
        if self.closed {
            debug!("transcript closed, dropping line");
            return;
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Everything appended so far.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Write the buffer followed by `last_line` to `path`, replacing the
    /// file. Returns bytes written.
    ///
    /// `last_line` is written but not appended; the caller appends it once
    /// the save succeeded. The transcript stays open.
    pub fn save_to(&self, path: &Path, last_line: &str) -> Result<usize> {
        let mut text = String::with_capacity(self.buffer.len() + last_line.len() + 1);
        text.push_str(&self.buffer);
        text.push_str(last_line);
        text.push('\n');

        write_replacing(path, &text)?;
        debug!(path = %path.display(), bytes = text.len(), "transcript saved");
        Ok(text.len())
    }

    /// Close the transcript and release its buffer.
    pub fn close(&mut self) {
        self.closed = true;
        self.buffer = String::new();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_and_contents() {
        let mut transcript = Transcript::new();
        transcript.append("File name:");
        transcript.append("cards.txt");

        assert_eq!(transcript.contents(), "File name:\ncards.txt\n");
    }

    #[test]
    fn test_save_to_overwrites_and_stays_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.log");
        fs::write(&path, "previous run\n".repeat(10)).unwrap();

        let mut transcript = Transcript::new();
        transcript.append("Correct!");
        let bytes = transcript.save_to(&path, "Saved.").unwrap();

        assert_eq!(bytes, "Correct!\nSaved.\n".len());
        assert_eq!(fs::read_to_string(&path).unwrap(), "Correct!\nSaved.\n");
        assert_eq!(transcript.contents(), "Correct!\n");

        transcript.append("Bye bye!");
        assert!(!transcript.is_closed());
        assert_eq!(transcript.contents(), "Correct!\nBye bye!\n");
    }

    #[test]
    fn test_failed_save_leaves_buffer_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("session.log");

        let mut transcript = Transcript::new();
        transcript.append("log");
        assert!(transcript.save_to(&path, "Saved.").is_err());
        assert_eq!(transcript.contents(), "log\n");
    }

    #[test]
    fn test_close_drops_later_lines() {
        let mut transcript = Transcript::new();
        transcript.append("before");
        transcript.close();
        transcript.append("after");

        assert!(transcript.is_closed());
        assert_eq!(transcript.contents(), "");
    }
}
