// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Dictionary(DictionaryError),
}

/// Specific error types for dictionary loading issues.
/// Kept separate so callers can distinguish a missing locale file from a
/// malformed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// No embedded dictionary file exists for the requested locale.
    MissingResource(String),

    /// The dictionary file exists but is not valid JSON.
    Parse(String),

    /// The top-level JSON value is not an object.
    NotAnObject(String),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::MissingResource(locale) => {
                write!(f, "No dictionary found for locale: {}", locale)
            }
            DictionaryError::Parse(msg) => write!(f, "Invalid dictionary JSON: {}", msg),
            DictionaryError::NotAnObject(file) => {
                write!(f, "Dictionary {} is not a JSON object", file)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Dictionary(e) => write!(f, "Dictionary Error: {}", e),
        }
    }
}

impl From<DictionaryError> for Error {
    fn from(err: DictionaryError) -> Self {
        Error::Dictionary(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Dictionary(DictionaryError::Parse(err.to_string()))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
