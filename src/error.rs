use std::fmt;

use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that can interrupt a render pass.
#[derive(Debug)]
pub enum Error {
    /// The calendar backend failed to deliver events for a query window.
    Source(Box<dyn std::error::Error + Send + Sync>),
    /// Date arithmetic left the range of representable dates.
    DateOutOfRange(NaiveDate),
}

impl Error {
    /// Wrap a failure raised by an event source backend.
    pub fn from_source(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Source(err.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(err) => write!(f, "event source failed: {err}"),
            Self::DateOutOfRange(date) => {
                write!(f, "date arithmetic out of range near {date}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(err) => Some(err.as_ref()),
            Self::DateOutOfRange(_) => None,
        }
    }
}
