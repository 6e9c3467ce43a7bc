use std::ffi::{c_char, c_int, c_void};
use std::panic::{AssertUnwindSafe, catch_unwind};

use spa_support_abi::{spa_log_level, spa_log_topic};

use crate::logging::record::LogRecord;
use crate::logging::sink::LogSink;

/// The single point all four log entry points converge on once the message
/// has been rendered.
///
/// `object` is the `cb.data` of the dispatch record: a pointer to a
/// `&dyn LogSink` owned by [`crate::logging::interface::LogInterface`].
/// Null drops the record. A panicking sink is contained here.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spa_support_log_receive(
    object: *mut c_void,
    level: spa_log_level,
    topic: *const spa_log_topic,
    file: *const c_char,
    line: c_int,
    func: *const c_char,
    msg: *const c_char,
) {
    if object.is_null() {
        return;
    }
    let sink = unsafe { &*(object as *const &dyn LogSink) };
    let record = unsafe { LogRecord::from_raw(level, topic, file, line, func, msg) };

    if catch_unwind(AssertUnwindSafe(|| sink.log(&record))).is_err() {
        log::error!(
            "log sink panicked handling {}:{} {}",
            record.file,
            record.line,
            record.func
        );
    }
}
