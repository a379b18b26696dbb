//! Motif records produced by the parsers.

use seqlogo::abc::Dna;
use seqlogo::pwm::CountMatrix;

/// A count matrix with the metadata found alongside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    id: Option<String>,
    description: Option<String>,
    matrix: CountMatrix<Dna>,
}

impl Record {
    /// Create a new record from its parts.
    pub fn new(id: Option<String>, description: Option<String>, matrix: CountMatrix<Dna>) -> Self {
        Self {
            id,
            description,
            matrix,
        }
    }

    /// Get the identifier of the record, usually a database accession.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Get the description of the record, usually the factor name.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the count matrix of the record.
    pub fn matrix(&self) -> &CountMatrix<Dna> {
        &self.matrix
    }

    /// Take the count matrix of the record.
    pub fn into_matrix(self) -> CountMatrix<Dna> {
        self.matrix
    }
}

impl AsRef<CountMatrix<Dna>> for Record {
    fn as_ref(&self) -> &CountMatrix<Dna> {
        &self.matrix
    }
}

impl From<Record> for CountMatrix<Dna> {
    fn from(value: Record) -> Self {
        value.matrix
    }
}
