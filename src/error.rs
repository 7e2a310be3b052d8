use std::fmt;

/// Result alias used by the loading and persistence helpers.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the numeric core (files, CSV, JSON).
///
/// The regression functions themselves never return this type: degenerate
/// inputs surface as NaN or infinite values instead.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    /// A data row could not be turned into a `Sample`.
    Parse {
        /// 1-based row number in the source file.
        row: usize,
        message: String,
    },
    /// The source contained no data rows.
    EmptyDataset,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Json(e) => write!(f, "json error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Parse { row, message } => write!(f, "row {row}: {message}"),
            Error::EmptyDataset => write!(f, "dataset contains no data rows"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Parse { .. } | Error::EmptyDataset => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}
