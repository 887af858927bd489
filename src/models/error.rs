use std::fmt;

#[derive(Debug)]
pub enum Error {
    InvalidWordCount(String),
    IoError(std::io::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidWordCount(msg) => write!(f, "Invalid Word Count: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::Other(msg.to_string())
    }
}
