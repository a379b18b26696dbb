//! Parser implementation for matrices in bracketed JASPAR format.
//!
//! The [JASPAR database](https://jaspar.elixir.no/docs/) distributes its
//! count matrices with a header line giving the matrix accession and the
//! factor name, followed by one line per nucleotide storing the counts at
//! each position between brackets:
//! ```text
//! MA0002.2	RUNX1
//! A  [   287    234    123     57      0     87 ]
//! C  [   496    485   1072      0     75    127 ]
//! G  [   696    467    149      7   1872     70 ]
//! T  [   521    814    656   1936     53   1716 ]
//! ```
//!
//! The letter of each line selects the matrix column it fills, so the rows
//! may come in any order. The number of counts on the first row sets the
//! length of the motif.

use generic_array::GenericArray;
use seqlogo::abc::Alphabet;
use seqlogo::abc::Dna;
use seqlogo::abc::Symbol;
use seqlogo::dense::DenseMatrix;
use seqlogo::pwm::CountMatrix;

use crate::record::Record;

mod parse;

/// Parse a matrix in bracketed JASPAR format.
///
/// The first bracketed row starts a block of at most 4 rows, blank lines
/// aside. Columns without a row are left to zero, as are the trailing
/// positions of rows shorter than the first one.
pub fn parse(text: &str) -> Record {
    let lines = text.lines().collect::<Vec<_>>();
    let start = match lines.iter().position(|line| self::parse::row(line).is_ok()) {
        Some(start) => start,
        None => {
            log::debug!("no bracketed row found");
            let header = lines.iter().find_map(|line| self::parse::header(line));
            return record(header, DenseMatrix::new(0));
        }
    };

    let header = lines[..start]
        .iter()
        .rev()
        .find_map(|line| self::parse::header(line));

    let mut columns: GenericArray<Option<Vec<f64>>, <Dna as Alphabet>::K> = Default::default();
    let mut rows = None;
    for (symbol, counts) in lines[start..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .take(columns.len())
        .map_while(|line| self::parse::row(line).ok().map(|(_, row)| row))
    {
        rows.get_or_insert(counts.len());
        if columns[symbol.as_index()].replace(counts).is_some() {
            log::warn!("duplicate row for {}, keeping the last one", symbol.as_char());
        }
    }

    let mut matrix = DenseMatrix::<f64, <Dna as Alphabet>::K>::new(rows.unwrap_or(0));
    for (j, counts) in columns.iter().enumerate() {
        match counts {
            Some(counts) => {
                for (i, &x) in counts.iter().take(matrix.rows()).enumerate() {
                    matrix[i][j] = x;
                }
            }
            None => log::warn!("missing row for {}", Dna::symbols()[j].as_char()),
        }
    }

    log::debug!("parsed {} positions from bracketed rows", matrix.rows());
    record(header, matrix)
}

fn record(
    header: Option<(&str, Option<&str>)>,
    matrix: DenseMatrix<f64, <Dna as Alphabet>::K>,
) -> Record {
    let (id, description) = match header {
        Some((id, description)) => (Some(id.to_string()), description.map(String::from)),
        None => (None, None),
    };
    Record::new(id, description, CountMatrix::new(matrix))
}

#[cfg(test)]
mod test {

    #[test]
    fn test_parse() {
        let text = concat!(
            "MA0002.1\tRUNX1\n",
            "A [10 12  4  1  2  2  0  0  0  8 13 ]\n",
            "C [ 2  2  7  1  0  8  0  0  1  2  2 ]\n",
            "G [ 3  1  1  0 23  0 26 26  0  0  4 ]\n",
            "T [11 11 14 24  1 16  0  0 25 16  7 ]\n",
        );
        let record = super::parse(text);
        assert_eq!(record.id(), Some("MA0002.1"));
        assert_eq!(record.description(), Some("RUNX1"));
        assert_eq!(record.matrix().len(), 11);
        assert_eq!(&record.matrix().counts()[0], &[10.0, 2.0, 3.0, 11.0]);
        assert_eq!(&record.matrix().counts()[10], &[13.0, 2.0, 4.0, 7.0]);
    }

    #[test]
    fn test_parse_fasta_header() {
        let text = concat!(
            ">MA0001.3\tAGL3\n",
            "A  [     0      0     82 ]\n",
            "C  [    92     79      1 ]\n",
            "G  [     0      0      2 ]\n",
            "T  [     3     16     10 ]\n",
        );
        let record = super::parse(text);
        assert_eq!(record.id(), Some("MA0001.3"));
        assert_eq!(record.description(), Some("AGL3"));
        assert_eq!(&record.matrix().counts()[2], &[82.0, 1.0, 2.0, 10.0]);
    }

    #[test]
    fn test_parse_any_row_order() {
        let text = concat!(
            "T [ 4 0 ]\n",
            "G [ 3 0 ]\n",
            "C [ 2 0 ]\n",
            "A [ 1 9 ]\n",
        );
        let record = super::parse(text);
        assert_eq!(record.id(), None);
        assert_eq!(&record.matrix().counts()[0], &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(&record.matrix().counts()[1], &[9.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parse_missing_rows() {
        let text = concat!("A [ 1 2 3 ]\n", "C [ 4 5 ]\n", "footer\n", "G [ 7 8 9 ]\n");
        let record = super::parse(text);
        assert_eq!(record.matrix().len(), 3);
        assert_eq!(&record.matrix().counts()[0], &[1.0, 4.0, 0.0, 0.0]);
        assert_eq!(&record.matrix().counts()[2], &[3.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parse_duplicate_row() {
        let text = concat!("A [ 1 ]\n", "A [ 2 ]\n", "G [ 3 ]\n", "T [ 4 ]\n");
        let record = super::parse(text);
        assert_eq!(&record.matrix().counts()[0], &[2.0, 0.0, 3.0, 4.0]);
    }

    #[test]
    fn test_parse_no_rows() {
        let record = super::parse("MA0002.2 RUNX1\n");
        assert!(record.matrix().is_empty());
        assert_eq!(record.id(), Some("MA0002.2"));
    }

    #[test]
    fn test_parse_frequencies() {
        let text = concat!(
            "A [ 0.1 0.97 ]\n",
            "C [ 0.2 0.01 ]\n",
            "G [ 0.3 0.01 ]\n",
            "T [ 0.4 0.01 ]\n",
        );
        let record = super::parse(text);
        assert_eq!(&record.matrix().counts()[0], &[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(&record.matrix().counts()[1], &[0.97, 0.01, 0.01, 0.01]);
    }
}
