/// Application-level errors
///
/// Form-level failures (validation, media, submission) have their own
/// error types next to the code that raises them; this covers the rest.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("could not write settings: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
