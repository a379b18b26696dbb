//! Parser implementation for matrices in frequency table format.
//!
//! The frequency table stores one line per motif position, with the
//! position index, the counts for the A, C, G and T letters, and a
//! trailing consensus marker, all separated by whitespace. Header and
//! footer lines are interleaved with the data:
//! ```text
//! DE	RUNX1	MA0002.2
//! 0	287	496	696	521	X
//! 1	234	485	467	814	X
//! 2	123	1072	149	656	X
//! XX
//! ```
//!
//! Only lines with exactly 6 fields are read as positions, everything
//! else is skipped without complaint. This also means a truncated data
//! line is silently dropped.

use seqlogo::pwm::CountMatrix;

use crate::record::Record;

mod parse;

/// Parse a matrix in frequency table format.
pub fn parse(text: &str) -> Record {
    let mut id = None;
    let mut description = None;
    let mut rows = Vec::new();
    let mut skipped = 0;

    for line in text.lines() {
        let fields = self::parse::fields(line);
        if let Some(row) = self::parse::position(&fields) {
            rows.push(row);
        } else if let Some((name, accession)) = self::parse::header(&fields) {
            if description.is_none() {
                description = Some(name.to_string());
                id = accession.map(String::from);
            }
        } else if !fields.is_empty() {
            log::trace!("skipping line {:?}", line);
            skipped += 1;
        }
    }

    log::debug!(
        "parsed {} positions from frequency table ({} lines skipped)",
        rows.len(),
        skipped
    );
    Record::new(id, description, CountMatrix::from_rows(rows))
}
