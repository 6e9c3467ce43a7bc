use std::borrow::Cow;
use std::ffi::{CString, c_int};
use std::fmt;

use spa_support_abi::{
    SPA_VERSION_LOG_METHODS, SPA_VERSION_LOG_TOPIC, spa_log, spa_log_methods, spa_log_topic,
};

use crate::logging::interface::LogInterface;
use crate::logging::level::LogLevel;
use crate::logging::record::LogTopic;

/// Logs from Rust through any `spa_log` record, ours or the host's.
///
/// Messages are formatted in Rust and passed with a constant `"%s"` format,
/// so a `%` in the text is never interpreted by the C side.
#[derive(Clone, Copy)]
pub struct LogClient<'a> {
    log: &'a spa_log,
    methods: &'a spa_log_methods,
}

impl<'a> LogClient<'a> {
    /// Wraps a record received from a host.
    ///
    /// Returns `None` for a null record, a missing methods table, or a table
    /// older than [`SPA_VERSION_LOG_METHODS`].
    ///
    /// # Safety
    /// `log` must be null or point to a valid `spa_log` that outlives `'a`.
    pub unsafe fn from_raw(log: *const spa_log) -> Option<Self> {
        let log = unsafe { log.as_ref() }?;
        let methods = unsafe { (log.iface.cb.funcs as *const spa_log_methods).as_ref() }?;
        if methods.version < SPA_VERSION_LOG_METHODS {
            log::debug!(
                "log methods version {} too old, need {}",
                methods.version,
                SPA_VERSION_LOG_METHODS
            );
            return None;
        }
        Some(Self { log, methods })
    }

    /// Level the record was configured with.
    pub fn level(&self) -> LogLevel {
        LogLevel::from_raw(self.log.level)
    }

    /// Whether a call at `level` should be made at all. A topic with a
    /// custom level takes precedence over the record's level.
    pub fn level_enabled(&self, level: LogLevel, topic: Option<&LogTopic>) -> bool {
        let max = match topic {
            Some(t) => t.effective_level(self.level()),
            None => self.level(),
        };
        level != LogLevel::None && level <= max
    }

    /// Unconditionally forwards one message. See [`crate::spa_log!`] for the
    /// level-checked form.
    pub fn log(&self, level: LogLevel, file: &str, line: u32, func: &str, args: fmt::Arguments) {
        let (file, func, msg) = (c_text(file), c_text(func), c_text(&render(args)));
        unsafe {
            (self.methods.log)(
                self.log.iface.cb.data,
                level.as_raw(),
                file.as_ptr(),
                c_line(line),
                func.as_ptr(),
                c"%s".as_ptr(),
                msg.as_ptr(),
            )
        }
    }

    /// Unconditionally forwards one message on `topic`.
    pub fn logt(
        &self,
        level: LogLevel,
        topic: &LogTopic,
        file: &str,
        line: u32,
        func: &str,
        args: fmt::Arguments,
    ) {
        let name = c_text(&topic.name);
        let ctopic = spa_log_topic {
            version: SPA_VERSION_LOG_TOPIC,
            topic: name.as_ptr(),
            level: topic.level.as_raw(),
            has_custom_level: topic.has_custom_level,
        };
        let (file, func, msg) = (c_text(file), c_text(func), c_text(&render(args)));
        unsafe {
            (self.methods.logt)(
                self.log.iface.cb.data,
                level.as_raw(),
                &ctopic,
                file.as_ptr(),
                c_line(line),
                func.as_ptr(),
                c"%s".as_ptr(),
                msg.as_ptr(),
            )
        }
    }
}

impl<'a> From<&'a LogInterface<'_>> for LogClient<'a> {
    fn from(iface: &'a LogInterface<'_>) -> Self {
        Self {
            log: iface.record(),
            methods: iface.methods(),
        }
    }
}

fn render(args: fmt::Arguments) -> Cow<'static, str> {
    match args.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(args.to_string()),
    }
}

// C strings end at the first NUL; so does the text we pass.
fn c_text(s: &str) -> CString {
    let end = s.find('\0').unwrap_or(s.len());
    CString::new(&s[..end]).unwrap_or_default()
}

fn c_line(line: u32) -> c_int {
    c_int::try_from(line).unwrap_or(c_int::MAX)
}

/// Logs through a [`LogClient`] if `level` is enabled on its record.
///
/// ```ignore
/// spa_log!(client, LogLevel::Info, "rate {}", rate);
/// ```
#[macro_export]
macro_rules! spa_log {
    ($client:expr, $level:expr, $($arg:tt)+) => {{
        let client = &$client;
        let level = $level;
        if client.level_enabled(level, None) {
            client.log(level, file!(), line!(), module_path!(), format_args!($($arg)+));
        }
    }};
}

/// Topic-qualified [`spa_log!`].
#[macro_export]
macro_rules! spa_logt {
    ($client:expr, $level:expr, $topic:expr, $($arg:tt)+) => {{
        let client = &$client;
        let level = $level;
        let topic: &$crate::LogTopic = &$topic;
        if client.level_enabled(level, Some(topic)) {
            client.logt(level, topic, file!(), line!(), module_path!(), format_args!($($arg)+));
        }
    }};
}

/// Declares a lazily built static [`LogTopic`], optionally with its own level.
///
/// ```ignore
/// define_topic!(pub NODE, "pw.node");
/// define_topic!(LOOP, "spa.loop", LogLevel::Trace);
/// ```
#[macro_export]
macro_rules! define_topic {
    ($vis:vis $name:ident, $topic:literal) => {
        $vis static $name: ::std::sync::LazyLock<$crate::LogTopic> =
            ::std::sync::LazyLock::new(|| $crate::LogTopic::new($topic));
    };
    ($vis:vis $name:ident, $topic:literal, $level:expr) => {
        $vis static $name: ::std::sync::LazyLock<$crate::LogTopic> =
            ::std::sync::LazyLock::new(|| $crate::LogTopic::with_level($topic, $level));
    };
}

/// [`spa_log!`] at [`LogLevel::Error`](crate::LogLevel::Error). Pass
/// `topic: T,` after the client to log on a topic instead.
#[macro_export]
macro_rules! spa_error {
    ($client:expr, topic: $topic:expr, $($arg:tt)+) => {
        $crate::spa_logt!($client, $crate::LogLevel::Error, $topic, $($arg)+)
    };
    ($client:expr, $($arg:tt)+) => {
        $crate::spa_log!($client, $crate::LogLevel::Error, $($arg)+)
    };
}

/// [`spa_error!`] at `Warn`.
#[macro_export]
macro_rules! spa_warn {
    ($client:expr, topic: $topic:expr, $($arg:tt)+) => {
        $crate::spa_logt!($client, $crate::LogLevel::Warn, $topic, $($arg)+)
    };
    ($client:expr, $($arg:tt)+) => {
        $crate::spa_log!($client, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// [`spa_error!`] at `Info`.
#[macro_export]
macro_rules! spa_info {
    ($client:expr, topic: $topic:expr, $($arg:tt)+) => {
        $crate::spa_logt!($client, $crate::LogLevel::Info, $topic, $($arg)+)
    };
    ($client:expr, $($arg:tt)+) => {
        $crate::spa_log!($client, $crate::LogLevel::Info, $($arg)+)
    };
}

/// [`spa_error!`] at `Debug`.
#[macro_export]
macro_rules! spa_debug {
    ($client:expr, topic: $topic:expr, $($arg:tt)+) => {
        $crate::spa_logt!($client, $crate::LogLevel::Debug, $topic, $($arg)+)
    };
    ($client:expr, $($arg:tt)+) => {
        $crate::spa_log!($client, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// [`spa_error!`] at `Trace`.
#[macro_export]
macro_rules! spa_trace {
    ($client:expr, topic: $topic:expr, $($arg:tt)+) => {
        $crate::spa_logt!($client, $crate::LogLevel::Trace, $topic, $($arg)+)
    };
    ($client:expr, $($arg:tt)+) => {
        $crate::spa_log!($client, $crate::LogLevel::Trace, $($arg)+)
    };
}
