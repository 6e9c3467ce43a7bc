use log::{Log, Record};

use crate::logging::{level::LogLevel, record::LogRecord, sink::LogSink};

/// Forwards records to whatever logger is installed behind the `log` facade.
///
/// The topic name becomes the target, `"spa"` when there is none.
pub struct FacadeSink {
    level: LogLevel,
    logger: &'static dyn Log,
}

impl FacadeSink {
    pub fn new(level: LogLevel) -> Self {
        Self::with_logger(level, log::logger())
    }

    pub fn with_logger(level: LogLevel, logger: &'static dyn Log) -> Self {
        Self { level, logger }
    }
}

impl LogSink for FacadeSink {
    fn log(&self, record: &LogRecord) {
        if !record.is_enabled(self.level) {
            return;
        }
        let Some(level) = record.level.to_log_level() else {
            return;
        };

        self.logger.log(
            &Record::builder()
                .args(format_args!("{}(): {}", record.func, record.message))
                .level(level)
                .target(record.target())
                .file(Some(record.file.as_str()))
                .line(Some(record.line))
                .build(),
        );
    }
}
