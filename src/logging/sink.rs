use crate::logging::record::LogRecord;

/// Receives every log call after the C shim has rendered it.
///
/// Called from whichever thread the host logs on; implementations must not
/// assume a single caller. Level filtering is left to the sink, see
/// [`LogRecord::is_enabled`].
pub trait LogSink: Send + Sync {
    fn log(&self, record: &LogRecord);
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn log(&self, record: &LogRecord) {
        (**self).log(record)
    }
}
