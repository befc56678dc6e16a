use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for lit-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub const fn is_in_bounds(coords: Coord2, bounds: Coord2) -> bool {
    coords.0 < bounds.0 && coords.1 < bounds.1
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let size = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

/// Left, right, above, below.
const DISPLACEMENTS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Orthogonal neighbors of a cell, skipping the ones that fall off the board.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(center: Coord2, bounds: Coord2) -> usize {
        NeighborIter::new(center, bounds).count()
    }

    #[test]
    fn corner_has_two_neighbors() {
        assert_eq!(neighbors((0, 0), (5, 5)), 2);
        assert_eq!(neighbors((4, 4), (5, 5)), 2);
    }

    #[test]
    fn edge_has_three_neighbors() {
        assert_eq!(neighbors((0, 2), (5, 5)), 3);
        assert_eq!(neighbors((2, 4), (5, 5)), 3);
    }

    #[test]
    fn interior_has_four_neighbors_in_order() {
        let mut iter = NeighborIter::new((2, 2), (5, 5));
        assert_eq!(iter.next(), Some((2, 1)));
        assert_eq!(iter.next(), Some((2, 3)));
        assert_eq!(iter.next(), Some((1, 2)));
        assert_eq!(iter.next(), Some((3, 2)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), (1, 1)), 0);
    }

    #[test]
    fn coordinate_at_axis_limit_does_not_wrap() {
        assert_eq!(neighbors((Coord::MAX, 0), (Coord::MAX, 1)), 1);
    }
}
