//! Count matrices, the canonical representation of a motif.

use super::abc::Alphabet;
use super::abc::Dna;
use super::dense::DenseMatrix;

// --- CountMatrix -------------------------------------------------------------

/// A matrix storing symbol occurences at each position.
///
/// Rows are positions of the motif in 5' to 3' order, columns are the
/// symbols of the alphabet in their canonical order. Values are usually
/// integer counts, but frequency matrices with fractional values are
/// stored as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct CountMatrix<A: Alphabet = Dna> {
    /// The alphabet of the count matrix.
    alphabet: std::marker::PhantomData<A>,
    /// The actual counts for each position of the motif.
    data: DenseMatrix<f64, A::K>,
}

impl<A: Alphabet> CountMatrix<A> {
    /// Create a new count matrix from the given data.
    ///
    /// No check is performed on the row sums: motif databases routinely
    /// distribute matrices whose columns do not add up to the same total.
    pub fn new(data: DenseMatrix<f64, A::K>) -> Self {
        Self {
            alphabet: std::marker::PhantomData,
            data,
        }
    }

    /// Create a new count matrix from an iterable of positions.
    ///
    /// # Example
    /// ```
    /// # use seqlogo::{CountMatrix, Dna};
    /// let matrix = CountMatrix::<Dna>::from_rows([[3.0, 0.0, 1.0, 0.0], [0.0, 0.0, 0.0, 4.0]]);
    /// assert_eq!(matrix.len(), 2);
    /// assert_eq!(matrix.max_count(), 4.0);
    /// ```
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator,
        <I as IntoIterator>::Item: AsRef<[f64]>,
    {
        Self::new(DenseMatrix::from_rows(rows))
    }

    /// The number of positions of the motif.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.rows()
    }

    /// Check whether the matrix has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.rows() == 0
    }

    /// The raw counts from the count matrix.
    #[inline]
    pub fn counts(&self) -> &DenseMatrix<f64, A::K> {
        &self.data
    }

    /// The largest count observed for a single symbol anywhere in the matrix.
    ///
    /// Returns zero for an empty matrix. `NaN` values are ignored.
    pub fn max_count(&self) -> f64 {
        self.data
            .iter()
            .flat_map(|row| row.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Get a copy of the matrix with the positions in 3' to 5' order.
    ///
    /// Columns are left untouched, complementing symbols is the
    /// responsibility of whoever reads the reversed matrix.
    pub fn reversed(&self) -> Self {
        Self::new(self.data.reversed())
    }
}

impl<A: Alphabet> AsRef<DenseMatrix<f64, A::K>> for CountMatrix<A> {
    fn as_ref(&self) -> &DenseMatrix<f64, A::K> {
        &self.data
    }
}

impl<A: Alphabet> From<DenseMatrix<f64, A::K>> for CountMatrix<A> {
    fn from(data: DenseMatrix<f64, A::K>) -> Self {
        Self::new(data)
    }
}

impl<A: Alphabet> Default for CountMatrix<A> {
    fn default() -> Self {
        Self::new(DenseMatrix::new(0))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_max_count() {
        let matrix =
            CountMatrix::<Dna>::from_rows([[287.0, 496.0, 696.0, 521.0], [57.0, 0.0, 7.0, 1936.0]]);
        assert_eq!(matrix.max_count(), 1936.0);
    }

    #[test]
    fn test_max_count_frequencies() {
        let matrix = CountMatrix::<Dna>::from_rows([[0.1, 0.2, 0.3, 0.4], [0.97, 0.01, 0.01, 0.01]]);
        assert_eq!(matrix.max_count(), 0.97);
        assert_eq!(&matrix.counts()[0], &[0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_max_count_empty() {
        let matrix = CountMatrix::<Dna>::default();
        assert!(matrix.is_empty());
        assert_eq!(matrix.max_count(), 0.0);
    }

    #[test]
    fn test_reversed() {
        let matrix = CountMatrix::<Dna>::from_rows([[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]]);
        let rev = matrix.reversed();
        assert_eq!(&rev.counts()[0], &[5.0, 6.0, 7.0, 8.0]);
        assert_eq!(&rev.counts()[1], &[1.0, 2.0, 3.0, 4.0]);
    }
}
