// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Infrastructure failures. Form validation never produces one of these:
/// invalid submissions are silently ignored.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Avatar(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Avatar(e) => write!(f, "Avatar Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Avatar(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
