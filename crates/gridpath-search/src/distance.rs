use gridpath_core::Pos;

/// Euclidean distance between two cells, scaled by 10 and truncated to
/// an integer.
///
/// This is both the movement cost and the heuristic base: an orthogonal
/// step costs 10, a diagonal step 14. The truncation is crude but is
/// applied identically to movement and estimate, keeping the heuristic
/// admissible in practice on grids of this size.
#[inline]
pub fn scaled_euclidean(a: Pos, b: Pos) -> i32 {
    let dr = (a.row - b.row) as f64;
    let dc = (a.col - b.col) as f64;
    ((dr * dr + dc * dc).sqrt() * 10.0) as i32
}

/// Chebyshev (L∞) distance between two cells.
///
/// On an obstacle-free grid this is the number of 8-directional steps
/// between the two cells.
#[inline]
pub fn chebyshev(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_and_diagonal_steps() {
        let o = Pos::ZERO;
        assert_eq!(scaled_euclidean(o, Pos::new(0, 1)), 10);
        assert_eq!(scaled_euclidean(o, Pos::new(1, 0)), 10);
        assert_eq!(scaled_euclidean(o, Pos::new(1, 1)), 14);
    }

    #[test]
    fn scaled_euclidean_truncates() {
        // sqrt(5) * 10 = 22.36... -> 22
        assert_eq!(scaled_euclidean(Pos::ZERO, Pos::new(2, 1)), 22);
        // sqrt(8) * 10 = 28.28... -> 28
        assert_eq!(scaled_euclidean(Pos::ZERO, Pos::new(2, 2)), 28);
        assert_eq!(scaled_euclidean(Pos::new(4, 4), Pos::new(4, 4)), 0);
    }

    #[test]
    fn chebyshev_max_axis() {
        assert_eq!(chebyshev(Pos::ZERO, Pos::new(2, 5)), 5);
        assert_eq!(chebyshev(Pos::new(3, 3), Pos::new(1, 2)), 2);
        assert_eq!(chebyshev(Pos::ZERO, Pos::ZERO), 0);
    }
}
