use thiserror::Error;

use storefront_core::StoreError;

pub type ShellResult<T> = Result<T, ShellError>;

/// Failures surfaced by the console layer.
///
/// Everything except `Io` is reported to the user and the menu continues.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// User text that is not a number.
    #[error("invalid number for {field}: {reason}")]
    Parse { field: &'static str, reason: String },

    #[error("could not load seed catalog: {0}")]
    Seed(String),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    pub fn parse(field: &'static str, reason: impl ToString) -> Self {
        Self::Parse {
            field,
            reason: reason.to_string(),
        }
    }

    /// Whether the session can carry on after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShellError::Io(_))
    }
}
