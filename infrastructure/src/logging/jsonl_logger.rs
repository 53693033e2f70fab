//! JSONL file writer for round events.
//!
//! Each [`RoundEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use meme_quorum_application::{RoundEvent, RoundEventLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL round-event logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing file so
/// several sessions can share one log. Flushes on `Drop`.
pub struct JsonlRoundLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlRoundLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create event log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open event log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RoundEventLogger for JsonlRoundLogger {
    fn log(&self, event: RoundEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Merge payload with type + timestamp
        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // JSONL is append-only; flush each record so a crash loses at most one
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlRoundLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        let logger = JsonlRoundLogger::new(&path).unwrap();

        logger.log(RoundEvent::new(
            RoundEvent::VOTE_CAST,
            serde_json::json!({ "round": 1, "voter": 3, "target": 2 }),
        ));
        logger.log(RoundEvent::new(
            RoundEvent::ROUND_FINALIZED,
            serde_json::json!({ "round": 1, "outcome": "accepted" }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for value in &lines {
            assert!(value.get("type").is_some());
            assert!(value.get("timestamp").is_some());
        }

        assert_eq!(lines[0]["type"], "vote_cast");
        assert_eq!(lines[0]["voter"], 3);
        assert_eq!(lines[1]["type"], "round_finalized");
        assert_eq!(lines[1]["outcome"], "accepted");
    }

    #[test]
    fn test_jsonl_logger_handles_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.jsonl");
        let logger = JsonlRoundLogger::new(&path).unwrap();

        logger.log(RoundEvent::new("note", serde_json::json!("just a string")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_jsonl_logger_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("shared.jsonl");

        for round in 1..=2 {
            let logger = JsonlRoundLogger::new(&path).unwrap();
            logger.log(RoundEvent::new(
                RoundEvent::ROUND_FINALIZED,
                serde_json::json!({ "round": round }),
            ));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["round"], 2);
        assert_eq!(
            JsonlRoundLogger::new(&path).unwrap().path(),
            path.as_path()
        );
    }
}
