//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use serde_json::json;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                file_count,
                dry_run,
            } => json!({
                "event": "start",
                "command": "deploy",
                "file_count": file_count,
                "dry_run": dry_run,
            }),

            DeployEvent::FileStarted { index, path } => json!({
                "event": "item_start",
                "command": "deploy",
                "index": index,
                "path": path.display().to_string(),
            }),

            DeployEvent::Resolved {
                index,
                app_id,
                provisioned,
                envelopes,
            } => json!({
                "event": "item_resolved",
                "command": "deploy",
                "index": index,
                "app_id": app_id,
                "provisioned": provisioned,
                "envelopes": envelopes,
            }),

            DeployEvent::Compared {
                index,
                app_id,
                unchanged,
            } => json!({
                "event": "item_compared",
                "command": "deploy",
                "index": index,
                "app_id": app_id,
                "unchanged": unchanged,
            }),

            DeployEvent::ComparisonFailed {
                index,
                app_id,
                error,
            } => json!({
                "event": "item_compare_failed",
                "command": "deploy",
                "index": index,
                "app_id": app_id,
                "error": error,
            }),

            DeployEvent::Pushed { index, app_id } => json!({
                "event": "item_pushed",
                "command": "deploy",
                "index": index,
                "app_id": app_id,
            }),

            DeployEvent::DryRunSkipped { index, app_id } => json!({
                "event": "item_skipped",
                "command": "deploy",
                "index": index,
                "app_id": app_id,
                "reason": "dry_run",
            }),

            DeployEvent::FileFailed { index, path, error } => json!({
                "event": "item_error",
                "command": "deploy",
                "index": index,
                "path": path.display().to_string(),
                "error": error,
            }),

            DeployEvent::Completed {
                processed_count,
                failed_count,
                aborted,
            } => {
                let status = match (failed_count, aborted) {
                    (0, _) => "success",
                    (_, true) => "aborted",
                    (_, false) => "partial",
                };
                json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": status,
                    "processed": processed_count,
                    "errors": failed_count,
                })
            }
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Started {
            file_count: 3,
            dry_run: true,
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("\"event\":\"start\""));
        assert!(output.contains("\"file_count\":3"));
        assert!(output.contains("\"dry_run\":true"));
    }

    #[test]
    fn json_sink_writes_one_object_per_line() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::FileStarted {
            index: 0,
            path: PathBuf::from("svc/api.yml"),
        });
        sink.on_event(DeployEvent::Pushed {
            index: 0,
            app_id: "/api".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["path"], "svc/api.yml");
        assert_eq!(events[1]["event"], "item_pushed");
        assert_eq!(events[1]["app_id"], "/api");
    }

    #[test]
    fn json_sink_outputs_complete_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Completed {
            processed_count: 2,
            failed_count: 0,
            aborted: false,
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("\"event\":\"complete\""));
        assert!(output.contains("\"status\":\"success\""));
        assert!(output.contains("\"processed\":2"));
    }

    #[test]
    fn json_sink_outputs_aborted_and_partial() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Completed {
            processed_count: 1,
            failed_count: 1,
            aborted: true,
        });
        sink.on_event(DeployEvent::Completed {
            processed_count: 3,
            failed_count: 1,
            aborted: false,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["status"], "aborted");
        assert_eq!(events[1]["status"], "partial");
    }
}
