use std::env;
use std::path::PathBuf;

use crate::error::{SupportError, SupportResult};
use crate::logging::facade_sink::FacadeSink;
use crate::logging::file_sink::{FileSink, SinkFormat};
use crate::logging::level::LogLevel;
use crate::logging::none_sink::NoneSink;
use crate::logging::sink::LogSink;

pub const SINK_ENV: &str = "SPA_SUPPORT_LOG_SINK";
pub const LEVEL_ENV: &str = "SPA_SUPPORT_LOG_LEVEL";
pub const FILE_ENV: &str = "SPA_SUPPORT_LOG_FILE";
pub const FORMAT_ENV: &str = "SPA_SUPPORT_LOG_FORMAT";

/// Abstraction over environment access (so tests can mock it).
pub trait Env {
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

pub struct RealEnv;
impl Env for RealEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

/// Which sink receives the rendered records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SinkKind {
    None,
    #[default]
    Facade,
    File(PathBuf),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub sink: SinkKind,
    pub level: LogLevel,
    pub format: SinkFormat,
}

impl LogConfig {
    pub fn from_env() -> SupportResult<Self> {
        Self::from_env_with(&RealEnv)
    }

    /// Reads the configuration from an injected `Env`. Unset variables keep
    /// their defaults; set but malformed ones are errors.
    pub fn from_env_with<E: Env>(e: &E) -> SupportResult<Self> {
        let level = match read(e, LEVEL_ENV)? {
            Some(s) => s.parse::<LogLevel>()?,
            None => LogLevel::default(),
        };

        let format = match read(e, FORMAT_ENV)? {
            Some(s) => s.parse::<SinkFormat>()?,
            None => SinkFormat::default(),
        };

        let sink = match read(e, SINK_ENV)?.as_deref().map(str::trim) {
            None | Some("facade") => SinkKind::Facade,
            Some("none") => SinkKind::None,
            Some("file") => {
                let path = read(e, FILE_ENV)?.ok_or_else(|| {
                    SupportError::invalid(format!("{SINK_ENV}=file requires {FILE_ENV}"))
                })?;
                SinkKind::File(PathBuf::from(path))
            }
            Some(other) => {
                return Err(SupportError::invalid(format!(
                    "unknown log sink {other:?} in {SINK_ENV}"
                )));
            }
        };

        Ok(Self {
            sink,
            level,
            format,
        })
    }

    pub fn build_sink(&self) -> SupportResult<Box<dyn LogSink>> {
        log::debug!("using {:?} log sink at level {}", self.sink, self.level);
        let sink: Box<dyn LogSink> = match &self.sink {
            SinkKind::None => Box::new(NoneSink),
            SinkKind::Facade => Box::new(FacadeSink::new(self.level)),
            SinkKind::File(path) => Box::new(FileSink::open(path, self.level, self.format)?),
        };
        Ok(sink)
    }
}

fn read<E: Env>(e: &E, key: &str) -> SupportResult<Option<String>> {
    match e.var(key) {
        Ok(s) if s.trim().is_empty() => Ok(None),
        Ok(s) => Ok(Some(s)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(_) => Err(SupportError::invalid(format!("unable to parse {}", key))),
    }
}
