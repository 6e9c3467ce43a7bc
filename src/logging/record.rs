use std::ffi::{CStr, c_char, c_int};
use std::ptr;

use spa_support_abi::{SPA_VERSION_LOG_TOPIC, spa_log_level, spa_log_topic};

use crate::logging::level::LogLevel;

/// A named logging category with an optional level of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogTopic {
    pub version: u32,
    pub name: String,
    pub level: LogLevel,
    pub has_custom_level: bool,
}

impl LogTopic {
    /// A topic that inherits the receiver's level.
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            version: SPA_VERSION_LOG_TOPIC,
            name: name.into(),
            level: LogLevel::default(),
            has_custom_level: false,
        }
    }

    /// A topic with an explicit level override.
    pub fn with_level<N: Into<String>>(name: N, level: LogLevel) -> Self {
        Self {
            level,
            has_custom_level: true,
            ..Self::new(name)
        }
    }

    /// The level calls on this topic are filtered against.
    pub fn effective_level(&self, default: LogLevel) -> LogLevel {
        if self.has_custom_level {
            self.level
        } else {
            default
        }
    }

    /// Copies a topic descriptor handed over by C.
    ///
    /// # Safety
    /// `raw` must be null or point to a valid `spa_log_topic` whose `topic`
    /// is null or a NUL-terminated string.
    pub unsafe fn from_raw(raw: *const spa_log_topic) -> Option<Self> {
        if raw.is_null() {
            return None;
        }
        // A C `bool` may hold any byte, so never read it as a Rust `bool`.
        let has_custom_level =
            unsafe { ptr::addr_of!((*raw).has_custom_level).cast::<u8>().read() } != 0;
        unsafe {
            Some(Self {
                version: (*raw).version,
                name: lossy((*raw).topic),
                level: LogLevel::from_raw((*raw).level),
                has_custom_level,
            })
        }
    }
}

/// One log call after rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub topic: Option<LogTopic>,
    pub file: String,
    pub line: u32,
    pub func: String,
    pub message: String,
}

impl LogRecord {
    /// Whether this record passes `max`, honouring a topic's own level.
    pub fn is_enabled(&self, max: LogLevel) -> bool {
        let threshold = match &self.topic {
            Some(t) => t.effective_level(max),
            None => max,
        };
        self.level != LogLevel::None && self.level <= threshold
    }

    pub fn target(&self) -> &str {
        self.topic.as_ref().map(|t| t.name.as_str()).unwrap_or("spa")
    }

    /// Builds a record from the arguments of the C sink call.
    ///
    /// # Safety
    /// Every pointer must be null or valid for the duration of the call;
    /// strings must be NUL-terminated.
    pub(crate) unsafe fn from_raw(
        level: spa_log_level,
        topic: *const spa_log_topic,
        file: *const c_char,
        line: c_int,
        func: *const c_char,
        msg: *const c_char,
    ) -> Self {
        unsafe {
            Self {
                level: LogLevel::from_raw(level),
                topic: LogTopic::from_raw(topic),
                file: lossy(file),
                line: u32::try_from(line).unwrap_or(0),
                func: lossy(func),
                message: message_text(msg),
            }
        }
    }
}

unsafe fn lossy(p: *const c_char) -> String {
    if p.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned()
}

// Rendered text is cut at the buffer capacity, possibly mid-character. That
// partial tail is dropped; invalid bytes elsewhere still become U+FFFD.
unsafe fn message_text(p: *const c_char) -> String {
    if p.is_null() {
        return String::new();
    }
    let bytes = unsafe { CStr::from_ptr(p) }.to_bytes();
    let mut out = String::with_capacity(bytes.len());
    let mut chunks = bytes.utf8_chunks().peekable();
    while let Some(chunk) = chunks.next() {
        out.push_str(chunk.valid());
        let bad = chunk.invalid();
        if bad.is_empty() || (chunks.peek().is_none() && is_cut_short(bad)) {
            continue;
        }
        out.push(char::REPLACEMENT_CHARACTER);
    }
    out
}

fn is_cut_short(bytes: &[u8]) -> bool {
    matches!(std::str::from_utf8(bytes), Err(e) if e.error_len().is_none())
}
