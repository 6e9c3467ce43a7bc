use std::fmt;
use std::str::FromStr;

use log::LevelFilter;
use spa_support_abi::{
    SPA_LOG_LEVEL_DEBUG, SPA_LOG_LEVEL_ERROR, SPA_LOG_LEVEL_INFO, SPA_LOG_LEVEL_NONE,
    SPA_LOG_LEVEL_TRACE, SPA_LOG_LEVEL_WARN, spa_log_level,
};

use crate::error::SupportError;

/// Severity of a log call. Ordinals are fixed by the ABI.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum LogLevel {
    None = SPA_LOG_LEVEL_NONE,
    Error = SPA_LOG_LEVEL_ERROR,
    #[default]
    Warn = SPA_LOG_LEVEL_WARN,
    Info = SPA_LOG_LEVEL_INFO,
    Debug = SPA_LOG_LEVEL_DEBUG,
    Trace = SPA_LOG_LEVEL_TRACE,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::None,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Converts a level received from C. Values past `Trace` clamp to `Trace`.
    pub fn from_raw(raw: spa_log_level) -> Self {
        Self::try_from(raw).unwrap_or(LogLevel::Trace)
    }

    pub fn as_raw(self) -> spa_log_level {
        self as spa_log_level
    }

    /// The matching `log` crate level, or `None` for [`LogLevel::None`].
    pub fn to_log_level(self) -> Option<log::Level> {
        match self {
            LogLevel::None => None,
            LogLevel::Error => Some(log::Level::Error),
            LogLevel::Warn => Some(log::Level::Warn),
            LogLevel::Info => Some(log::Level::Info),
            LogLevel::Debug => Some(log::Level::Debug),
            LogLevel::Trace => Some(log::Level::Trace),
        }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        self.to_log_level()
            .map(|l| l.to_level_filter())
            .unwrap_or(LevelFilter::Off)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl TryFrom<u32> for LogLevel {
    type Error = SupportError;

    fn try_from(raw: u32) -> Result<Self, SupportError> {
        LogLevel::ALL
            .get(raw as usize)
            .copied()
            .ok_or_else(|| SupportError::invalid(format!("invalid log level {raw}")))
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Trace => LogLevel::Trace,
        }
    }
}

/// Accepts a digit (`"0"`..`"5"`), a level name, or the single letter form
/// `X E W I D T`.
impl FromStr for LogLevel {
    type Err = SupportError;

    fn from_str(s: &str) -> Result<Self, SupportError> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u32>() {
            return LogLevel::try_from(n);
        }
        let level = match s.to_ascii_lowercase().as_str() {
            "x" | "none" | "off" => LogLevel::None,
            "e" | "error" => LogLevel::Error,
            "w" | "warn" | "warning" => LogLevel::Warn,
            "i" | "info" => LogLevel::Info,
            "d" | "debug" => LogLevel::Debug,
            "t" | "trace" => LogLevel::Trace,
            _ => return Err(SupportError::invalid(format!("invalid log level {s:?}"))),
        };
        Ok(level)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_abi() {
        assert_eq!(LogLevel::None.as_raw(), 0);
        assert_eq!(LogLevel::Error.as_raw(), 1);
        assert_eq!(LogLevel::Warn.as_raw(), 2);
        assert_eq!(LogLevel::Info.as_raw(), 3);
        assert_eq!(LogLevel::Debug.as_raw(), 4);
        assert_eq!(LogLevel::Trace.as_raw(), 5);
        assert!(LogLevel::None < LogLevel::Error && LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn out_of_range_raw_clamps_to_trace() {
        assert_eq!(LogLevel::from_raw(3), LogLevel::Info);
        assert_eq!(LogLevel::from_raw(6), LogLevel::Trace);
        assert_eq!(LogLevel::from_raw(u32::MAX), LogLevel::Trace);
        assert!(LogLevel::try_from(6).is_err());
    }

    #[test]
    fn parses_digits_names_and_letters() {
        assert_eq!("4".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" trace ".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("X".parse::<LogLevel>().unwrap(), LogLevel::None);
        assert_eq!("e".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("9".parse::<LogLevel>().is_err());
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn maps_to_log_crate() {
        assert_eq!(LogLevel::None.to_log_level(), None);
        assert_eq!(LogLevel::None.to_level_filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
        assert_eq!(LogLevel::from(log::Level::Debug), LogLevel::Debug);
    }

    #[test]
    fn display_pads() {
        assert_eq!(format!("{:>5}", LogLevel::Info), " INFO");
    }
}
