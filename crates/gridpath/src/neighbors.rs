use gridpath_core::{Point, Range};

/// The in-bounds cells of a point's 8-connected neighbourhood, stored
/// inline so enumeration never allocates.
///
/// Order follows [`Point::neighbors_8`] with out-of-bounds cells skipped.
#[derive(Debug, Clone, Copy)]
pub struct Neighbors {
    cells: [Point; 8],
    len: usize,
}

impl Neighbors {
    /// Neighbours of `p` that lie inside `bounds`. `p` itself is never
    /// included; walkability is not considered.
    pub fn within(p: Point, bounds: Range) -> Self {
        let mut cells = [Point::ZERO; 8];
        let mut len = 0;
        for n in p.neighbors_8() {
            if bounds.contains(n) {
                cells[len] = n;
                len += 1;
            }
        }
        Self { cells, len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.cells[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.as_slice().iter()
    }
}

impl IntoIterator for Neighbors {
    type Item = Point;
    type IntoIter = std::iter::Take<std::array::IntoIter<Point, 8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter().take(self.len)
    }
}
