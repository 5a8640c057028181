//! Errors raised at the crate's boundaries.
//!
//! The rules engine itself never fails: illegal taps are silently ignored and
//! out-of-range board coordinates are programming errors that panic. The
//! variants here cover the surfaces around it, where bad input is expected
//! and recoverable: parsing a typed tap, loading a config file, and the
//! terminal I/O of the interactive loop.
//!
//! Usage guidelines:
//! - Boundary functions return `Result<..., ChessErrors>` and propagate with `?`.
//! - Parse variants are suitable for showing back to the user before asking
//!   for another tap.
//! - Config and I/O variants end the current command.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug)]
pub enum ChessErrors {
    /// A tap did not contain exactly two integer coordinates.
    ///
    /// Payload: the raw input line.
    InvalidTapString(String),

    /// A tap parsed to integers outside `0..8`.
    ///
    /// Payload: (row, col) as typed.
    TapOutOfRange((i64, i64)),

    /// The config file exists but could not be read.
    ConfigRead { path: PathBuf, source: io::Error },

    /// The config file is not valid YAML for `Config`.
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Reading stdin or writing stdout failed.
    Io(io::Error),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidTapString(raw) => {
                write!(f, "expected '<row> <col>', got '{raw}'")
            }
            ChessErrors::TapOutOfRange((row, col)) => {
                write!(f, "square ({row}, {col}) is off the board; rows and columns run 0..=7")
            }
            ChessErrors::ConfigRead { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            ChessErrors::ConfigParse { path, source } => {
                write!(f, "failed to parse config {}: {source}", path.display())
            }
            ChessErrors::Io(err) => write!(f, "terminal i/o failed: {err}"),
        }
    }
}

impl Error for ChessErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChessErrors::ConfigRead { source, .. } => Some(source),
            ChessErrors::ConfigParse { source, .. } => Some(source),
            ChessErrors::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ChessErrors {
    fn from(err: io::Error) -> Self {
        ChessErrors::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use std::error::Error;
    use std::io;

    #[test]
    fn display_mentions_offending_input() {
        let err = ChessErrors::InvalidTapString("a b".to_owned());
        assert!(err.to_string().contains("'a b'"));

        let err = ChessErrors::TapOutOfRange((8, -1));
        assert!(err.to_string().contains("(8, -1)"));
    }

    #[test]
    fn io_errors_convert_and_keep_source() {
        let err: ChessErrors = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ChessErrors::Io(_)));
        assert!(err.source().is_some());
    }
}
