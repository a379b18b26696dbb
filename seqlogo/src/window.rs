//! Genomic window covered by a motif occurence.

/// The genomic coordinates spanned by a motif occurence.
///
/// Both coordinates are inclusive, so a motif of length `n` starting at
/// `first` ends at `first + n - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    first: u64,
    last: u64,
}

impl Window {
    /// Create a new window from its first and last coordinates.
    ///
    /// The coordinates are reordered if given backwards.
    pub fn new(first: u64, last: u64) -> Self {
        Self {
            first: first.min(last),
            last: first.max(last),
        }
    }

    /// The first coordinate of the window.
    #[inline]
    pub fn first(&self) -> u64 {
        self.first
    }

    /// The last coordinate of the window.
    #[inline]
    pub fn last(&self) -> u64 {
        self.last
    }

    /// The number of coordinates in the window.
    #[inline]
    pub fn len(&self) -> u64 {
        self.last - self.first + 1
    }

    /// Check whether the window contains the given coordinate.
    #[inline]
    pub fn contains(&self, coordinate: u64) -> bool {
        (self.first..=self.last).contains(&coordinate)
    }

    /// Get the column of a logo with `columns` positions that shows the
    /// given coordinate.
    ///
    /// The column is counted from the first coordinate whatever the strand:
    /// a logo drawn on the negative strand has its positions reversed,
    /// which already lays them out in ascending genomic order. Returns
    /// `None` if the coordinate falls outside the window or past the last
    /// column.
    ///
    /// # Example
    /// ```
    /// # use seqlogo::Window;
    /// let window = Window::new(100, 110);
    /// assert_eq!(window.marker(102, 11), Some(2));
    /// assert_eq!(window.marker(99, 11), None);
    /// ```
    pub fn marker(&self, coordinate: u64, columns: usize) -> Option<usize> {
        if !self.contains(coordinate) {
            return None;
        }
        usize::try_from(coordinate - self.first)
            .ok()
            .filter(|&i| i < columns)
    }
}
