//! Best-first pathfinding on square grids with obstacles.
//!
//! This crate computes a shortest (or near-shortest) path between two
//! cells of an N×N grid using either Dijkstra's algorithm or an A*-style
//! heuristic search, and reports the path together with search
//! statistics:
//!
//! - [`Grid`] — the grid model: dimension, obstacle set, origin and
//!   destination cells, and per-cell search bookkeeping stored in a flat
//!   arena.
//! - [`Solver`] — the search engine. It owns the frontier heap and
//!   scratch buffers so repeated solves incur no allocations after
//!   warm-up, and can report each expansion step through a callback for
//!   progressive visualisation.
//!
//! Movement is 8-directional (Moore neighbourhood). Both the movement
//! cost and the heuristic use the same scaled-Euclidean metric
//! ([`scaled_euclidean`]): orthogonal steps cost 10, diagonal steps 14.
//!
//! ```
//! use gridpath_core::Pos;
//! use gridpath_search::{Grid, Mode, Outcome, Solver};
//!
//! let mut grid = Grid::configure(5, Pos::new(0, 0), Pos::new(0, 4), &[]).unwrap();
//! let mut solver = Solver::new();
//! match solver.solve(&mut grid, Mode::AStar).unwrap() {
//!     Outcome::PathFound { steps, .. } => assert_eq!(steps, 4),
//!     Outcome::NoPathExists { .. } => unreachable!(),
//! }
//! ```

mod distance;
mod error;
mod grid;
mod solver;

pub use distance::{chebyshev, scaled_euclidean};
pub use error::{ConfigError, SolveError};
pub use grid::Grid;
pub use solver::{Expansion, Mode, Outcome, Solver};
