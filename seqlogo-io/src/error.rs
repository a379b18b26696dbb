use std::fmt::Display;
use std::fmt::Formatter;
use std::str::Utf8Error;
use std::sync::Arc;

/// An error raised while reading a matrix from a stream.
///
/// Parsing itself never fails: malformed lines are skipped and missing
/// values are zero-filled, so only the stream can go wrong.
#[derive(Clone, Debug)]
pub enum Error {
    Io(Arc<std::io::Error>),
    Decode(Utf8Error),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(Arc::new(error))
    }
}

impl From<Utf8Error> for Error {
    fn from(error: Utf8Error) -> Self {
        Error::Decode(error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => err.fmt(f),
            Error::Decode(err) => write!(f, "decoding error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Decode(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(err.to_string(), "boom");
        let bytes = vec![0xff, 0xfe];
        let err = Error::from(std::str::from_utf8(&bytes).unwrap_err());
        assert!(err.to_string().starts_with("decoding error"));
    }
}
