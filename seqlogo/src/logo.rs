//! Sequence-logo layout of a count matrix.
//!
//! A sequence logo draws, for every position of a motif, a stack of
//! letters whose heights are proportional to the frequency of each
//! nucleotide, weighted by the information content of the position.
//! This module computes the abstract stacks: vertical intervals expressed
//! in count units, on a y-axis shared by all positions and spanning
//! `[0, max_count]`. The [`render`] module maps them onto a drawing area.

use typenum::marker_traits::Unsigned;

use super::abc::Alphabet;
use super::abc::ComplementableAlphabet;
use super::abc::Dna;
use super::pwm::CountMatrix;
use super::strand::Strand;
use super::window::Window;

pub mod render;

// --- Glyph -------------------------------------------------------------------

/// A single letter of a logo column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph<A: Alphabet = Dna> {
    start: f64,
    end: f64,
    index: usize,
    symbol: A::Symbol,
}

impl<A: Alphabet> Glyph<A> {
    /// The lower bound of the vertical interval occupied by the glyph.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The upper bound of the vertical interval occupied by the glyph.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The height of the glyph.
    #[inline]
    pub fn height(&self) -> f64 {
        self.end - self.start
    }

    /// The index of the matrix column this glyph was computed from.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The symbol to draw, already complemented on the negative strand.
    #[inline]
    pub fn symbol(&self) -> A::Symbol {
        self.symbol
    }
}

// --- Column ------------------------------------------------------------------

/// The stack of glyphs drawn for one position of the motif.
///
/// Glyphs are sorted by decreasing height, ties keeping the column order
/// of the matrix. Their intervals are contiguous and end at the maximum
/// count of the matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Column<A: Alphabet = Dna> {
    glyphs: Vec<Glyph<A>>,
}

impl<A: ComplementableAlphabet> Column<A> {
    /// Compute the column for the given counts.
    ///
    /// `max_count` is the largest count of the whole matrix, which sets
    /// the scale shared by all columns. Only symbols with a positive count
    /// get a glyph, so a position without any observation gives an empty
    /// column. Counts past the size of the alphabet are ignored.
    pub fn new(counts: &[f64], max_count: f64, strand: Strand) -> Self {
        if !(max_count.is_finite() && max_count > 0.0) {
            return Self { glyphs: Vec::new() };
        }

        let counts = &counts[..counts.len().min(A::K::USIZE)];
        let weight = A::max_entropy() - entropy(counts, max_count);
        let scale = max_count / A::max_entropy();

        // raw intervals, stacked in matrix order
        let mut raw = counts
            .iter()
            .zip(A::symbols())
            .enumerate()
            .filter(|&(_, (&c, _))| c > 0.0)
            .map(|(j, (&c, &symbol))| (j, symbol, weight * (c / max_count) * scale))
            .scan(0.0, |offset, (j, symbol, height)| {
                let start = *offset;
                *offset += height;
                Some((j, symbol, height, *offset - start))
            })
            .collect::<Vec<_>>();
        let total: f64 = raw.iter().map(|&(_, _, height, _)| height).sum();

        // tallest first, `sort_by` is stable so ties keep matrix order
        raw.sort_by(|a, b| b.3.total_cmp(&a.3));

        let glyphs = raw
            .into_iter()
            .scan(max_count - total, |offset, (j, symbol, _, diff)| {
                let start = *offset;
                *offset += diff;
                Some(Glyph {
                    start,
                    end: start + diff,
                    index: j,
                    symbol: strand.symbol::<A>(symbol),
                })
            })
            .collect();

        Self { glyphs }
    }
}

impl<A: Alphabet> Column<A> {
    /// The glyphs of the column, in stacking order.
    #[inline]
    pub fn glyphs(&self) -> &[Glyph<A>] {
        &self.glyphs
    }

    /// The number of glyphs in the column.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check whether the column has no glyph.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The combined height of the glyphs of the column.
    pub fn height(&self) -> f64 {
        self.glyphs.iter().map(Glyph::height).sum()
    }

    /// Iterate over the glyphs of the column.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Glyph<A>> {
        self.glyphs.iter()
    }
}

impl<'a, A: Alphabet> IntoIterator for &'a Column<A> {
    type Item = &'a Glyph<A>;
    type IntoIter = std::slice::Iter<'a, Glyph<A>>;
    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

/// Compute the entropy of a position, in bits.
///
/// Frequencies are taken relative to `max_count`, the largest count of the
/// whole matrix, rather than to the sum of the position, and zero counts
/// are skipped.
pub fn entropy(counts: &[f64], max_count: f64) -> f64 {
    if max_count.is_nan() || max_count <= 0.0 {
        return 0.0;
    }
    counts
        .iter()
        .filter(|&&c| c > 0.0)
        .map(|&c| {
            let p = c / max_count;
            -p * p.log2()
        })
        .sum()
}

// --- Logo --------------------------------------------------------------------

/// The layout of a complete sequence logo.
#[derive(Clone, Debug, PartialEq)]
pub struct Logo<A: Alphabet = Dna> {
    columns: Vec<Column<A>>,
    max_count: f64,
    strand: Strand,
    marker: Option<usize>,
}

impl<A: ComplementableAlphabet> Logo<A> {
    /// Lay out a count matrix on the given strand.
    ///
    /// On the negative strand the positions are drawn in reverse order and
    /// the symbols are complemented, so the logo reads as the reverse
    /// complement of the motif.
    ///
    /// # Example
    /// ```
    /// # use seqlogo::{CountMatrix, Dna, Logo, Nucleotide, Strand};
    /// let matrix = CountMatrix::<Dna>::from_rows([[8.0, 0.0, 0.0, 0.0], [0.0, 0.0, 2.0, 6.0]]);
    /// let logo = Logo::new(&matrix, Strand::Negative);
    /// assert_eq!(logo.max_count(), 8.0);
    /// assert_eq!(logo.columns()[1].glyphs()[0].symbol(), Nucleotide::T);
    /// ```
    pub fn new(matrix: &CountMatrix<A>, strand: Strand) -> Self {
        let max_count = matrix.max_count();
        let rows = matrix.counts().iter();
        let columns: Vec<Column<A>> = match strand {
            Strand::Positive => rows.map(|row| Column::new(row, max_count, strand)).collect(),
            Strand::Negative => rows
                .rev()
                .map(|row| Column::new(row, max_count, strand))
                .collect(),
        };
        log::debug!(
            "laid out {} logo columns on strand {} (max count: {})",
            columns.len(),
            strand,
            max_count
        );
        Self {
            columns,
            max_count,
            strand,
            marker: None,
        }
    }
}

impl<A: Alphabet> Logo<A> {
    /// Highlight the column showing `coordinate` in the given window.
    ///
    /// The marker is cleared when the coordinate is not part of the logo.
    pub fn with_marker(mut self, window: &Window, coordinate: u64) -> Self {
        self.marker = window.marker(coordinate, self.columns.len());
        if self.marker.is_none() {
            log::debug!(
                "coordinate {} is outside of window {}-{}",
                coordinate,
                window.first(),
                window.last()
            );
        }
        self
    }

    /// The columns of the logo, in drawing order.
    #[inline]
    pub fn columns(&self) -> &[Column<A>] {
        &self.columns
    }

    /// The number of columns of the logo.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the logo has no column.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The largest count of the matrix, i.e. the top of the y-axis.
    #[inline]
    pub fn max_count(&self) -> f64 {
        self.max_count
    }

    /// The strand the logo was laid out on.
    #[inline]
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// The index of the highlighted column, if any.
    #[inline]
    pub fn marker(&self) -> Option<usize> {
        self.marker
    }

    /// The domain of the information axis, in bits.
    #[inline]
    pub fn bits_domain(&self) -> (f64, f64) {
        (0.0, A::max_entropy())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::abc::Nucleotide;

    fn assert_close(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{} != {}", x, y);
    }

    #[test]
    fn test_entropy_zero_counts() {
        assert_eq!(entropy(&[0.0, 0.0, 0.0, 0.0], 10.0), 0.0);
        assert_eq!(entropy(&[0.0, 0.0, 0.0, 0.0], 0.0), 0.0);
    }

    #[test]
    fn test_entropy_relative_to_max_count() {
        // p = 0.5 for two symbols gives 1 bit
        assert_close(entropy(&[5.0, 5.0, 0.0, 0.0], 10.0), 1.0);
        // a fully conserved position has no entropy
        assert_close(entropy(&[0.0, 10.0, 0.0, 0.0], 10.0), 0.0);
    }

    #[test]
    fn test_column_conserved() {
        let column = Column::<Dna>::new(&[0.0, 0.0, 10.0, 0.0], 10.0, Strand::Positive);
        assert_eq!(column.len(), 1);
        let glyph = column.glyphs()[0];
        assert_eq!(glyph.index(), 2);
        assert_eq!(glyph.symbol(), Nucleotide::G);
        assert_close(glyph.start(), 0.0);
        assert_close(glyph.end(), 10.0);
    }

    #[test]
    fn test_column_sorted_and_anchored() {
        let counts = [0.0, 5.0, 5.0, 2.0];
        let column = Column::<Dna>::new(&counts, 10.0, Strand::Positive);
        let e = entropy(&counts, 10.0);
        let total: f64 = [5.0, 5.0, 2.0]
            .iter()
            .map(|c| (2.0 - e) * (c / 10.0) * 5.0)
            .sum();
        assert_eq!(column.len(), 3);
        let glyphs = column.glyphs();
        // C and G tie, C comes first in the matrix
        assert_eq!(glyphs[0].symbol(), Nucleotide::C);
        assert_eq!(glyphs[1].symbol(), Nucleotide::G);
        assert_eq!(glyphs[2].symbol(), Nucleotide::T);
        assert_close(glyphs[0].start(), 10.0 - total);
        assert_close(glyphs[2].end(), 10.0);
        assert_close(glyphs[0].end(), glyphs[1].start());
        assert_close(glyphs[1].end(), glyphs[2].start());
        assert_close(column.height(), total);
    }

    #[test]
    fn test_column_frequencies() {
        let column = Column::<Dna>::new(&[0.1, 0.2, 0.3, 0.4], 0.97, Strand::Positive);
        let symbols = column.iter().map(|g| g.symbol()).collect::<Vec<_>>();
        assert_eq!(
            symbols,
            vec![Nucleotide::T, Nucleotide::G, Nucleotide::C, Nucleotide::A]
        );
        assert_close(column.glyphs()[3].end(), 0.97);
    }

    #[test]
    fn test_column_high_entropy() {
        // p = 0.37 for every symbol gives H > 2, so the weight is negative
        let counts = [740.0, 740.0, 740.0, 740.0];
        assert!(entropy(&counts, 2000.0) > 2.0);
        let column = Column::<Dna>::new(&counts, 2000.0, Strand::Positive);
        assert_eq!(column.len(), 4);
        assert!(column.iter().all(|g| g.height() < 0.0));
        let glyphs = column.glyphs();
        for pair in glyphs.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        assert_close(glyphs[3].end(), 2000.0);
        assert_close(glyphs[0].start(), 2000.0 - column.height());
    }

    #[test]
    fn test_column_extra_counts_ignored() {
        let column = Column::<Dna>::new(&[1.0, 0.0, 0.0, 0.0, 5.0, 5.0], 5.0, Strand::Positive);
        assert_eq!(column.len(), 1);
        assert_eq!(column.glyphs()[0].symbol(), Nucleotide::A);
    }

    #[test]
    fn test_column_negative_strand_complements() {
        let column = Column::<Dna>::new(&[10.0, 0.0, 0.0, 3.0], 10.0, Strand::Negative);
        let symbols = column.iter().map(|g| g.symbol()).collect::<Vec<_>>();
        assert_eq!(symbols, vec![Nucleotide::T, Nucleotide::A]);
        assert_eq!(column.glyphs()[0].index(), 0);
    }

    #[test]
    fn test_column_degenerate() {
        let column = Column::<Dna>::new(&[0.0, 0.0, 0.0, 0.0], 10.0, Strand::Positive);
        assert!(column.is_empty());
        assert_eq!(column.height(), 0.0);
    }

    #[test]
    fn test_logo_empty() {
        let logo = Logo::new(&CountMatrix::<Dna>::default(), Strand::Positive);
        assert!(logo.is_empty());
        assert_eq!(logo.max_count(), 0.0);
    }

    #[test]
    fn test_logo_all_zero() {
        let matrix = CountMatrix::<Dna>::from_rows([[0.0; 4]; 2]);
        let logo = Logo::new(&matrix, Strand::Positive);
        assert_eq!(logo.len(), 2);
        assert!(logo.columns().iter().all(Column::is_empty));
    }

    #[test]
    fn test_logo_negative_reverses() {
        let matrix = CountMatrix::<Dna>::from_rows([
            [4.0, 0.0, 0.0, 0.0],
            [0.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        let logo = Logo::new(&matrix, Strand::Negative);
        assert!(logo.columns()[0].is_empty());
        assert_eq!(logo.columns()[1].glyphs()[0].symbol(), Nucleotide::G);
        assert_eq!(logo.columns()[2].glyphs()[0].symbol(), Nucleotide::T);
    }

    #[test]
    fn test_logo_marker() {
        let matrix = CountMatrix::<Dna>::from_rows([
            [4.0, 0.0, 0.0, 0.0],
            [0.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
        ]);
        let window = Window::new(1000, 1002);
        let logo = Logo::new(&matrix, Strand::Positive).with_marker(&window, 1001);
        assert_eq!(logo.marker(), Some(1));
        // columns of a reversed motif are already in genomic order
        let logo = Logo::new(&matrix, Strand::Negative).with_marker(&window, 1000);
        assert_eq!(logo.marker(), Some(0));
        let logo = logo.with_marker(&window, 1002);
        assert_eq!(logo.marker(), Some(2));
        let logo = logo.with_marker(&window, 2000);
        assert_eq!(logo.marker(), None);
        assert_eq!(logo.bits_domain(), (0.0, 2.0));
    }
}
