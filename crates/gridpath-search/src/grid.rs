//! The grid model: dimension, obstacle set, endpoints, and per-cell
//! search bookkeeping.

use gridpath_core::Pos;

use crate::error::ConfigError;

/// Sentinel for "no predecessor" in the arena.
pub(crate) const NO_PREDECESSOR: usize = usize::MAX;

/// Per-cell search bookkeeping, stored in a flat arena indexed by
/// `row * dimension + col`.
#[derive(Clone)]
pub(crate) struct Cell {
    /// Accumulated cost from the origin.
    pub(crate) g: i32,
    /// Heuristic estimate of the remaining cost, fixed at first discovery.
    pub(crate) h: i32,
    /// Total estimated cost, `g + h`. The frontier ordering key.
    pub(crate) f: i32,
    /// Arena index of the cell this one was best reached from.
    pub(crate) predecessor: usize,
    /// Discovery sequence number, used to break `f` ties in favour of the
    /// earliest-discovered cell.
    pub(crate) seq: u32,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            f: 0,
            predecessor: NO_PREDECESSOR,
            seq: 0,
            open: false,
            closed: false,
        }
    }
}

/// A square obstacle grid with designated origin and destination cells.
///
/// The grid owns all per-cell search state; a [`Solver`](crate::Solver)
/// mutates it through arena indices only. A solve borrows the grid
/// mutably for its whole duration, so concurrent searches over one grid
/// are ruled out by the borrow checker; callers wanting to share a grid
/// across threads must serialise access themselves.
///
/// Endpoints may be supplied up front through [`Grid::configure`] or
/// placed one at a time through [`Grid::set_origin`] and
/// [`Grid::set_destination`], mirroring interactive callers that place
/// origin, destination, and obstacles in successive steps.
pub struct Grid {
    dimension: i32,
    cells: Vec<Cell>,
    blocked: Vec<bool>,
    origin: Option<usize>,
    destination: Option<usize>,
}

impl Grid {
    /// Create an empty grid with no endpoints and no obstacles.
    pub fn new(dimension: i32) -> Result<Self, ConfigError> {
        if dimension <= 0 {
            return Err(ConfigError::ZeroDimension);
        }
        let len = (dimension as usize) * (dimension as usize);
        Ok(Self {
            dimension,
            cells: vec![Cell::default(); len],
            blocked: vec![false; len],
            origin: None,
            destination: None,
        })
    }

    /// Create a fully configured grid in one step.
    ///
    /// Fails if the dimension is not positive, if any position is out of
    /// bounds, if the endpoints coincide, or if an endpoint sits on an
    /// obstacle.
    pub fn configure(
        dimension: i32,
        origin: Pos,
        destination: Pos,
        obstacles: &[Pos],
    ) -> Result<Self, ConfigError> {
        let mut grid = Self::new(dimension)?;
        for &p in obstacles {
            let i = grid.index_checked(p)?;
            grid.blocked[i] = true;
        }
        grid.set_origin(origin)?;
        grid.set_destination(destination)?;
        Ok(grid)
    }

    /// The grid dimension N (the grid is N×N).
    #[inline]
    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    /// The origin cell, if placed.
    pub fn origin(&self) -> Option<Pos> {
        self.origin.map(|i| self.pos(i))
    }

    /// The destination cell, if placed.
    pub fn destination(&self) -> Option<Pos> {
        self.destination.map(|i| self.pos(i))
    }

    /// Whether `p` is an obstacle. Out-of-bounds positions are not.
    pub fn is_blocked(&self, p: Pos) -> bool {
        match self.idx(p) {
            Some(i) => self.blocked[i],
            None => false,
        }
    }

    /// Place (or move) the origin cell.
    pub fn set_origin(&mut self, p: Pos) -> Result<(), ConfigError> {
        let i = self.endpoint_checked(p, self.destination)?;
        self.origin = Some(i);
        Ok(())
    }

    /// Place (or move) the destination cell.
    pub fn set_destination(&mut self, p: Pos) -> Result<(), ConfigError> {
        let i = self.endpoint_checked(p, self.origin)?;
        self.destination = Some(i);
        Ok(())
    }

    /// Toggle the obstacle at `p`, returning the new blocked state.
    ///
    /// Endpoint cells cannot be turned into obstacles.
    pub fn toggle_obstacle(&mut self, p: Pos) -> Result<bool, ConfigError> {
        let i = self.index_checked(p)?;
        if self.origin == Some(i) || self.destination == Some(i) {
            return Err(ConfigError::OccupiedByEndpoint(p));
        }
        self.blocked[i] = !self.blocked[i];
        Ok(self.blocked[i])
    }

    /// Remove every obstacle, keeping endpoints and bookkeeping.
    pub fn clear_obstacles(&mut self) {
        self.blocked.fill(false);
    }

    /// Append the walkable Moore neighbours of `p` into `buf`, in
    /// row-major scan order of the surrounding 3×3 block.
    ///
    /// Out-of-bounds cells, obstacles, and cells already moved to the
    /// closed set are excluded. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        for n in p.moore() {
            let Some(ni) = self.idx(n) else {
                continue;
            };
            if self.blocked[ni] || self.cells[ni].closed {
                continue;
            }
            buf.push(n);
        }
    }

    /// Clear all per-cell search bookkeeping (`g`, `h`, `f`,
    /// predecessor, open/closed membership), leaving the dimension,
    /// obstacles, and endpoints untouched.
    ///
    /// Used between successive searches on the same layout.
    /// [`Solver::solve`](crate::Solver::solve) also clears bookkeeping
    /// itself after its preconditions pass, so repeated solves on one
    /// layout are deterministic either way.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    // -----------------------------------------------------------------------
    // Arena access for the solver
    // -----------------------------------------------------------------------

    /// Convert a position to a flat arena index. `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if !p.in_bounds(self.dimension) {
            return None;
        }
        Some((p.row as usize) * (self.dimension as usize) + p.col as usize)
    }

    /// Convert a flat arena index back to a position.
    #[inline]
    pub(crate) fn pos(&self, idx: usize) -> Pos {
        let dim = self.dimension as usize;
        Pos::new((idx / dim) as i32, (idx % dim) as i32)
    }

    #[inline]
    pub(crate) fn origin_idx(&self) -> Option<usize> {
        self.origin
    }

    #[inline]
    pub(crate) fn destination_idx(&self) -> Option<usize> {
        self.destination
    }

    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    // -----------------------------------------------------------------------
    // Validation helpers
    // -----------------------------------------------------------------------

    fn index_checked(&self, p: Pos) -> Result<usize, ConfigError> {
        self.idx(p)
            .ok_or(ConfigError::OutOfBounds(p, self.dimension))
    }

    fn endpoint_checked(&self, p: Pos, other: Option<usize>) -> Result<usize, ConfigError> {
        let i = self.index_checked(p)?;
        if other == Some(i) {
            return Err(ConfigError::CoincidentEndpoints(p));
        }
        if self.blocked[i] {
            return Err(ConfigError::BlockedEndpoint(p));
        }
        Ok(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_validates_bounds_and_overlap() {
        assert!(matches!(
            Grid::configure(0, Pos::ZERO, Pos::new(0, 1), &[]),
            Err(ConfigError::ZeroDimension)
        ));
        assert!(matches!(
            Grid::configure(5, Pos::new(5, 0), Pos::new(0, 1), &[]),
            Err(ConfigError::OutOfBounds(_, 5))
        ));
        assert!(matches!(
            Grid::configure(5, Pos::ZERO, Pos::ZERO, &[]),
            Err(ConfigError::CoincidentEndpoints(_))
        ));
        assert!(matches!(
            Grid::configure(5, Pos::ZERO, Pos::new(2, 2), &[Pos::new(2, 2)]),
            Err(ConfigError::BlockedEndpoint(_))
        ));
        assert!(matches!(
            Grid::configure(5, Pos::ZERO, Pos::new(2, 2), &[Pos::new(9, 9)]),
            Err(ConfigError::OutOfBounds(_, 5))
        ));
        assert!(Grid::configure(5, Pos::ZERO, Pos::new(2, 2), &[Pos::new(1, 1)]).is_ok());
    }

    #[test]
    fn incremental_placement() {
        let mut g = Grid::new(4).unwrap();
        assert_eq!(g.origin(), None);
        g.set_origin(Pos::ZERO).unwrap();
        assert_eq!(
            g.set_destination(Pos::ZERO),
            Err(ConfigError::CoincidentEndpoints(Pos::ZERO))
        );
        g.set_destination(Pos::new(3, 3)).unwrap();
        assert_eq!(g.origin(), Some(Pos::ZERO));
        assert_eq!(g.destination(), Some(Pos::new(3, 3)));
    }

    #[test]
    fn toggle_obstacle_flips_and_guards_endpoints() {
        let mut g = Grid::new(4).unwrap();
        g.set_origin(Pos::ZERO).unwrap();
        let p = Pos::new(1, 1);
        assert_eq!(g.toggle_obstacle(p), Ok(true));
        assert!(g.is_blocked(p));
        assert_eq!(g.toggle_obstacle(p), Ok(false));
        assert!(!g.is_blocked(p));
        assert_eq!(
            g.toggle_obstacle(Pos::ZERO),
            Err(ConfigError::OccupiedByEndpoint(Pos::ZERO))
        );
        // Placing an endpoint on an obstacle is rejected too.
        g.toggle_obstacle(p).unwrap();
        assert_eq!(g.set_destination(p), Err(ConfigError::BlockedEndpoint(p)));
    }

    #[test]
    fn neighbors_row_major_and_filtered() {
        let mut g = Grid::new(3).unwrap();
        let mut buf = Vec::new();

        g.neighbors(Pos::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(1, 0),
                Pos::new(1, 2),
                Pos::new(2, 0),
                Pos::new(2, 1),
                Pos::new(2, 2),
            ]
        );

        // Corner cell: only the in-bounds neighbours.
        buf.clear();
        g.neighbors(Pos::ZERO, &mut buf);
        assert_eq!(buf, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);

        // Obstacles and closed cells are excluded.
        g.toggle_obstacle(Pos::new(0, 1)).unwrap();
        let closed_idx = g.idx(Pos::new(1, 0)).unwrap();
        g.cells[closed_idx].closed = true;
        buf.clear();
        g.neighbors(Pos::ZERO, &mut buf);
        assert_eq!(buf, vec![Pos::new(1, 1)]);
    }

    #[test]
    fn reset_clears_bookkeeping_only() {
        let mut g = Grid::new(3).unwrap();
        g.set_origin(Pos::ZERO).unwrap();
        g.toggle_obstacle(Pos::new(2, 2)).unwrap();

        let i = g.idx(Pos::new(1, 1)).unwrap();
        g.cells[i].g = 42;
        g.cells[i].closed = true;
        g.cells[i].predecessor = 0;

        g.reset();
        assert_eq!(g.cells[i].g, 0);
        assert!(!g.cells[i].closed);
        assert_eq!(g.cells[i].predecessor, NO_PREDECESSOR);
        assert_eq!(g.origin(), Some(Pos::ZERO));
        assert!(g.is_blocked(Pos::new(2, 2)));

        g.clear_obstacles();
        assert!(!g.is_blocked(Pos::new(2, 2)));
    }

    #[test]
    fn idx_pos_round_trip() {
        let g = Grid::new(7).unwrap();
        for row in 0..7 {
            for col in 0..7 {
                let p = Pos::new(row, col);
                let i = g.idx(p).unwrap();
                assert_eq!(g.pos(i), p);
            }
        }
        assert_eq!(g.idx(Pos::new(7, 0)), None);
        assert_eq!(g.idx(Pos::new(0, -1)), None);
    }
}
