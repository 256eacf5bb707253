//! Errors for operations on the listener

/// Library result
pub type Result<T> = std::result::Result<T, Error>;

/// Library error
#[derive(Debug)]
pub struct Error {
    repr: Repr,
}

#[derive(Debug)]
enum Repr {
    /// I/O error from the underlying socket
    Io(std::io::Error),
    /// Received payload is not valid UTF-8
    Utf8(std::string::FromUtf8Error),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.repr {
            Repr::Io(ref err) => write!(f, "{} (i/o error)", err),
            Repr::Utf8(ref err) => write!(f, "{} (payload decode error)", err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self {
            repr: Repr::Io(err),
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self {
            repr: Repr::Utf8(err),
        }
    }
}
