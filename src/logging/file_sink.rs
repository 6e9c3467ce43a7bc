use chrono::Utc;
use serde_json::json;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::error::{SupportError, SupportResult};
use crate::logging::{level::LogLevel, record::LogRecord, sink::LogSink};

/// Line layout used by [`FileSink`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SinkFormat {
    /// `[time][LEVEL] topic: file:line func(): message`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for SinkFormat {
    type Err = SupportError;

    fn from_str(s: &str) -> Result<Self, SupportError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(SinkFormat::Text),
            "json" => Ok(SinkFormat::Json),
            other => Err(SupportError::invalid(format!("unknown log format {other:?}"))),
        }
    }
}

/// Appends every enabled record to a file.
pub struct FileSink {
    level: LogLevel,
    format: SinkFormat,
    file: Mutex<File>,
}

impl FileSink {
    pub fn new(file: File, level: LogLevel, format: SinkFormat) -> Self {
        Self {
            level,
            format,
            file: Mutex::new(file),
        }
    }

    pub fn open(path: &Path, level: LogLevel, format: SinkFormat) -> SupportResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                SupportError::new(
                    format!("Failed to open log file {}: {}", path.display(), e),
                    -e.raw_os_error().unwrap_or(nix::libc::EIO),
                )
            })?;
        Ok(Self::new(file, level, format))
    }

    fn render(&self, record: &LogRecord) -> String {
        let now = Utc::now().to_rfc3339();
        match self.format {
            SinkFormat::Text => format!(
                "[{}][{:>5}] {}: {}:{} {}(): {}\n",
                now,
                record.level,
                record.target(),
                record.file,
                record.line,
                record.func,
                record.message
            ),
            SinkFormat::Json => {
                let mut line = json!({
                    "time": now,
                    "level": record.level.as_str(),
                    "topic": record.topic.as_ref().map(|t| t.name.as_str()),
                    "file": record.file,
                    "line": record.line,
                    "func": record.func,
                    "message": record.message,
                })
                .to_string();
                line.push('\n');
                line
            }
        }
    }

    pub fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

impl LogSink for FileSink {
    fn log(&self, record: &LogRecord) {
        if !record.is_enabled(self.level) {
            return;
        }

        let line = self.render(record);
        let mut file = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = file.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::record::LogTopic;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn record(level: LogLevel, topic: Option<LogTopic>, message: &str) -> LogRecord {
        LogRecord {
            level,
            topic,
            file: "alsa.c".into(),
            line: 301,
            func: "start".into(),
            message: message.into(),
        }
    }

    #[test]
    fn text_lines_carry_metadata() -> SupportResult<()> {
        let dir = tempdir()?;
        let path = dir.path().join("spa.log");
        let sink = FileSink::open(&path, LogLevel::Info, SinkFormat::Text)?;

        sink.log(&record(LogLevel::Info, Some(LogTopic::new("alsa")), "started"));
        sink.log(&record(LogLevel::Debug, None, "hidden"));
        sink.flush();

        let content = fs::read_to_string(&path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("][ INFO] alsa: alsa.c:301 start(): started"));
        Ok(())
    }

    #[test]
    fn json_lines_parse() -> SupportResult<()> {
        let dir = tempdir()?;
        let path = dir.path().join("spa.jsonl");
        let sink = FileSink::open(&path, LogLevel::Trace, SinkFormat::Json)?;

        sink.log(&record(LogLevel::Error, None, "xrun \"x\""));
        sink.flush();

        let content = fs::read_to_string(&path)?;
        let v: Value = serde_json::from_str(content.trim_end()).unwrap();
        assert_eq!(v["level"], "ERROR");
        assert_eq!(v["topic"], Value::Null);
        assert_eq!(v["file"], "alsa.c");
        assert_eq!(v["line"], 301);
        assert_eq!(v["func"], "start");
        assert_eq!(v["message"], "xrun \"x\"");
        assert!(v["time"].is_string());
        Ok(())
    }

    #[test]
    fn appends_to_existing_file() -> SupportResult<()> {
        let dir = tempdir()?;
        let path = dir.path().join("spa.log");
        fs::write(&path, "previous\n")?;

        let sink = FileSink::open(&path, LogLevel::Warn, SinkFormat::Text)?;
        sink.log(&record(LogLevel::Warn, None, "next"));
        sink.flush();

        let content = fs::read_to_string(&path)?;
        assert!(content.starts_with("previous\n"));
        assert!(content.trim_end().ends_with("next"));
        Ok(())
    }

    #[test]
    fn open_reports_missing_directory() -> SupportResult<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nope/spa.log");
        let err = match FileSink::open(&path, LogLevel::Warn, SinkFormat::Text) {
            Ok(_) => panic!("open should fail"),
            Err(e) => e,
        };
        assert!(err.msg.contains("Failed to open log file"));
        assert_eq!(err.code, -nix::libc::ENOENT);
        Ok(())
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("JSON".parse::<SinkFormat>().unwrap(), SinkFormat::Json);
        assert_eq!("text".parse::<SinkFormat>().unwrap(), SinkFormat::Text);
        assert!("xml".parse::<SinkFormat>().is_err());
    }
}
