use thiserror::Error;

/// Errors returned when a [`Config`](crate::Config) rejects its input.
///
/// Parsing with the default configuration never fails: every key, index and
/// value combination has a defined outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A field that is empty or has no `=` while strict parsing is enabled.
    #[error("bad query field: `{0}`")]
    BadField(String),

    /// The input has more separator-delimited fields than allowed.
    #[error("max number of fields exceeded: found {count}, limit is {max}")]
    TooManyFields { count: usize, max: usize },
}

impl Error {
    /// Generate error for a malformed field in strict mode.
    pub fn bad_field<T>(field: T) -> Self
    where
        T: Into<String>,
    {
        Error::BadField(field.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
