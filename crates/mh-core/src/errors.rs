//! Error types for myholidays.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  The
//! [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros are the
//! short-hand used to raise precondition and runtime failures.
//!
//! An empty lookup (no holiday on a given day, no search hit) is never an
//! error: those operations return an empty `Vec` or `None`.

use thiserror::Error;

/// The top-level error type used throughout myholidays.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A date string did not match the `"<MonAbbrev> <Day>"` pattern.
    #[error("cannot parse date '{input}': {reason}")]
    DateParse {
        /// The offending input, as received.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A calendar value (year, month, day) is out of range.
    #[error("date error: {0}")]
    Date(String),

    /// A catalog document or record is structurally invalid.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Reading a settings or catalog file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A settings or catalog document is not valid JSON for its schema.
    #[error("json error: {0}")]
    Json(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Build a [`Error::DateParse`] for `input`.
    pub fn date_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::DateParse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Return `true` if this error came from the date-string parser.
    pub fn is_date_parse(&self) -> bool {
        matches!(self, Error::DateParse { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

/// Shorthand `Result` type used throughout myholidays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mh_core::{ensure, errors::Error};
/// fn positive(x: i32) -> mh_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use mh_core::{fail, errors::Error};
/// fn always_err() -> mh_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
