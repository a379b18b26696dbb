#![doc = include_str!("../README.md")]

extern crate seqlogo;

pub mod error;
pub mod jaspar16;
pub mod pwm;
pub mod record;

use std::io::BufRead;
use std::io::Read;

pub use self::error::Error;
pub use self::record::Record;

// --- Format ------------------------------------------------------------------

/// The text layout of a motif matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// One line per position: `index countA countC countG countT marker`.
    FrequencyTable,
    /// One bracketed line per nucleotide: `A [ v1 v2 ... vn ]`.
    BracketedRows,
}

impl Format {
    /// Get the format conventionally stored with the given file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pwm" | "txt" => Some(Format::FrequencyTable),
            "jaspar" | "pfm" => Some(Format::BracketedRows),
            _ => None,
        }
    }

    /// Guess the format of a text from its content.
    ///
    /// Any opening bracket selects [`Format::BracketedRows`].
    pub fn guess(text: &str) -> Self {
        match memchr::memchr(b'[', text.as_bytes()) {
            Some(_) => Format::BracketedRows,
            None => Format::FrequencyTable,
        }
    }
}

// --- Entry points ------------------------------------------------------------

/// Parse a motif matrix in the given format.
///
/// This never fails: lines that cannot be understood are skipped and
/// missing values are left to zero, possibly producing an empty matrix.
/// Values are read as decimal numbers, so both count and frequency
/// matrices are accepted.
///
/// # Example
/// ```
/// use seqlogo_io::Format;
///
/// let text = "A [ 1 0 ]\nC [ 0 2 ]\nG [ 0 0 ]\nT [ 3 0 ]\n";
/// let record = seqlogo_io::parse(text, Format::BracketedRows);
/// assert_eq!(&record.matrix().counts()[0], &[1.0, 0.0, 0.0, 3.0]);
/// ```
pub fn parse(text: &str, format: Format) -> Record {
    match format {
        Format::FrequencyTable => pwm::parse(text),
        Format::BracketedRows => jaspar16::parse(text),
    }
}

/// Read a motif matrix in the given format from a buffered reader.
///
/// The whole stream is consumed. Errors only come from reading or
/// decoding the stream, never from its content.
pub fn read<B: BufRead>(mut reader: B, format: Format) -> Result<Record, Error> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    let text = std::str::from_utf8(&buffer)?;
    Ok(parse(text, format))
}

/// Parse a single count, falling back to zero on invalid input.
///
/// Fractional values are kept so that frequency matrices survive parsing.
/// Negative, infinite or unreadable values are replaced by zero.
pub(crate) fn count(token: &str) -> f64 {
    match token.parse::<f64>() {
        Ok(x) if x.is_finite() && x >= 0.0 => x,
        _ => {
            log::warn!("invalid count {:?}, using 0", token);
            0.0
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count("287"), 287.0);
        assert_eq!(count("12.6"), 12.6);
        assert_eq!(count("0.01"), 0.01);
        assert_eq!(count("X"), 0.0);
        assert_eq!(count("-3"), 0.0);
        assert_eq!(count("NaN"), 0.0);
        assert_eq!(count("inf"), 0.0);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_extension("pwm"), Some(Format::FrequencyTable));
        assert_eq!(Format::from_extension("JASPAR"), Some(Format::BracketedRows));
        assert_eq!(Format::from_extension("meme"), None);
    }

    #[test]
    fn test_format_guess() {
        assert_eq!(Format::guess("0\t1\t2\t3\t4\tX\n"), Format::FrequencyTable);
        assert_eq!(Format::guess("A [ 1 2 ]\n"), Format::BracketedRows);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let bytes: &[u8] = &[b'A', b' ', 0xff, b'\n'];
        let result = read(std::io::Cursor::new(bytes), Format::BracketedRows);
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
