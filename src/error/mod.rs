use nix::errno::Errno;
use std::fmt;

pub type SupportResult<T> = Result<T, SupportError>;

/// Error raised while configuring or building a log sink.
///
/// `code` follows the SPA convention of a negative errno.
#[derive(Debug)]
pub struct SupportError {
    pub msg: String,
    pub code: i32,
}

impl SupportError {
    pub fn new<M: Into<String>>(m: M, code: i32) -> Self {
        Self {
            msg: m.into(),
            code,
        }
    }

    pub fn invalid<M: Into<String>>(m: M) -> Self {
        Self::new(m, -(Errno::EINVAL as i32))
    }
}

impl fmt::Display for SupportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.msg, self.code)
    }
}

impl std::error::Error for SupportError {}

impl From<std::io::Error> for SupportError {
    fn from(err: std::io::Error) -> Self {
        let code = err.raw_os_error().unwrap_or(Errno::EIO as i32);
        SupportError::new(format!("IO error: {}", err), -code)
    }
}

impl From<Errno> for SupportError {
    fn from(err: Errno) -> Self {
        SupportError::new(err.desc(), -(err as i32))
    }
}
