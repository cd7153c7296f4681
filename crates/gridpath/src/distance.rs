use gridpath_core::Point;

/// Cost of one orthogonal step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of one diagonal step, `10 * sqrt(2)` truncated.
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance for 8-connected movement.
///
/// Diagonal steps cost [`DIAGONAL_COST`] and straight steps
/// [`STRAIGHT_COST`]. Used both as the edge cost between adjacent cells and
/// as the A* heuristic; it never overestimates the true lattice distance.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let (dx, dy) = a.abs_delta(b);
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL_COST * lo + STRAIGHT_COST * (hi - lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octile_steps() {
        let o = Point::ZERO;
        assert_eq!(octile(o, o), 0);
        assert_eq!(octile(o, Point::new(1, 0)), 10);
        assert_eq!(octile(o, Point::new(0, -1)), 10);
        assert_eq!(octile(o, Point::new(1, 1)), 14);
        assert_eq!(octile(o, Point::new(9, 9)), 14 * 9);
        assert_eq!(octile(o, Point::new(5, 2)), 14 * 2 + 10 * 3);
        assert_eq!(octile(Point::new(5, 2), o), octile(o, Point::new(5, 2)));
    }

    #[test]
    fn octile_lies_between_king_and_taxicab_moves() {
        let a = Point::new(-3, 4);
        let b = Point::new(6, -1);
        let (dx, dy) = a.abs_delta(b);
        let oct = octile(a, b);
        assert!(oct >= STRAIGHT_COST * dx.max(dy));
        assert!(oct <= STRAIGHT_COST * (dx + dy));
    }
}
