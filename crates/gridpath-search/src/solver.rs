//! The best-first search engine.

use std::collections::BinaryHeap;

use gridpath_core::Pos;
use log::debug;

use crate::distance::scaled_euclidean;
use crate::error::SolveError;
use crate::grid::{Grid, NO_PREDECESSOR};

/// Algorithm selector for [`Solver::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Uniform-cost search: the heuristic term is ignored and the
    /// frontier is ordered by cost-so-far alone.
    Dijkstra,
    /// Best-first search ordered by cost-so-far plus the scaled-Euclidean
    /// estimate of the remaining distance.
    AStar,
}

impl Mode {
    /// Multiplier applied to the heuristic term: 0 for Dijkstra, 1 for A*.
    #[inline]
    pub fn heuristic_weight(self) -> i32 {
        match self {
            Mode::Dijkstra => 0,
            Mode::AStar => 1,
        }
    }
}

/// One expansion step: the cell just moved to the closed set, with its
/// cost bookkeeping at the moment of closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expansion {
    pub pos: Pos,
    pub g: i32,
    pub h: i32,
    pub f: i32,
}

/// Terminal result of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A path from origin to destination was found.
    PathFound {
        /// Positions from origin to destination, both inclusive.
        path: Vec<Pos>,
        /// `path.len() - 1`.
        steps: usize,
        /// Distinct cells that entered the open set, excluding the origin
        /// and destination themselves.
        nodes_expanded: usize,
    },
    /// The frontier was exhausted without reaching the destination.
    ///
    /// A legitimate outcome, not an error.
    NoPathExists { nodes_expanded: usize },
}

/// Frontier entry. Ordered by `f`, with the discovery sequence number as
/// tie-break so that equal-`f` cells expand in the order they entered the
/// open set.
#[derive(Clone, Copy, PartialEq, Eq)]
struct OpenRef {
    idx: usize,
    f: i32,
    seq: u32,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search engine over a [`Grid`].
///
/// Owns the frontier heap and the neighbour scratch buffer, so repeated
/// solves incur no allocations after warm-up. The search runs to
/// completion in one synchronous call; callers wanting live visualisation
/// observe it through [`Solver::solve_observed`].
pub struct Solver {
    open: BinaryHeap<OpenRef>,
    nbuf: Vec<Pos>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self {
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Search for a path from the grid's origin to its destination.
    ///
    /// Fails with [`SolveError::MissingEndpoints`] if either endpoint is
    /// unset, leaving the grid's bookkeeping untouched; the caller may
    /// finish configuring and retry. An unreachable destination is not an
    /// error — it is reported as [`Outcome::NoPathExists`].
    pub fn solve(&mut self, grid: &mut Grid, mode: Mode) -> Result<Outcome, SolveError> {
        self.solve_observed(grid, mode, |_| {})
    }

    /// Like [`Solver::solve`], invoking `on_expand` once per cell moved
    /// to the closed set, in expansion order.
    ///
    /// The engine never depends on anything the callback does; it exists
    /// purely so a caller can render progress.
    pub fn solve_observed(
        &mut self,
        grid: &mut Grid,
        mode: Mode,
        mut on_expand: impl FnMut(Expansion),
    ) -> Result<Outcome, SolveError> {
        let (Some(origin), Some(destination)) = (grid.origin_idx(), grid.destination_idx())
        else {
            return Err(SolveError::MissingEndpoints);
        };

        debug!("solve: mode={:?} dimension={}", mode, grid.dimension());

        grid.reset();
        self.open.clear();

        let dest_pos = grid.pos(destination);
        let weight = mode.heuristic_weight();
        let mut next_seq: u32 = 0;
        let mut nodes_expanded = 0usize;

        // Seed the frontier with the origin at g = h = f = 0.
        grid.cell_mut(origin).open = true;
        self.open.push(OpenRef {
            idx: origin,
            f: 0,
            seq: next_seq,
        });
        next_seq += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        // The destination test lags one pop behind, so the destination
        // cell is itself closed and expanded before the search recognises
        // it. Reference behaviour; keeps expansion counts reproducible.
        let mut current = origin;
        let found = loop {
            if current == destination {
                break true;
            }
            let Some(ci) = self.pop_open(grid) else {
                break false;
            };
            current = ci;

            let cur_pos = grid.pos(ci);
            let (cur_g, expansion) = {
                let c = grid.cell_mut(ci);
                c.open = false;
                c.closed = true;
                (
                    c.g,
                    Expansion {
                        pos: cur_pos,
                        g: c.g,
                        h: c.h,
                        f: c.f,
                    },
                )
            };
            on_expand(expansion);

            nbuf.clear();
            grid.neighbors(cur_pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                let step = scaled_euclidean(np, cur_pos);
                let c = grid.cell_mut(ni);
                if !c.open {
                    // First discovery. The heuristic is fixed here and
                    // never recomputed, even if g later improves.
                    c.predecessor = ci;
                    c.g = cur_g + step;
                    c.h = scaled_euclidean(np, dest_pos) * weight;
                    c.f = c.g + c.h;
                    c.seq = next_seq;
                    c.open = true;
                    let (f, seq) = (c.f, c.seq);
                    next_seq += 1;
                    if ni != destination {
                        nodes_expanded += 1;
                    }
                    self.open.push(OpenRef { idx: ni, f, seq });
                } else {
                    // Already on the frontier: keep the cheaper path.
                    let candidate = cur_g + step;
                    if candidate < c.g {
                        c.g = candidate;
                        c.f = candidate + c.h;
                        c.predecessor = ci;
                        let (f, seq) = (c.f, c.seq);
                        self.open.push(OpenRef { idx: ni, f, seq });
                    }
                }
            }
        };

        self.nbuf = nbuf;

        if !found {
            debug!("frontier exhausted: nodes_expanded={nodes_expanded}");
            return Ok(Outcome::NoPathExists { nodes_expanded });
        }

        // Retrace predecessor links from the destination to the origin.
        let mut path = Vec::new();
        let mut ci = destination;
        while ci != NO_PREDECESSOR {
            path.push(grid.pos(ci));
            ci = grid.cell(ci).predecessor;
        }
        path.reverse();
        let steps = path.len() - 1;
        debug!("path found: steps={steps} nodes_expanded={nodes_expanded}");
        Ok(Outcome::PathFound {
            path,
            steps,
            nodes_expanded,
        })
    }

    /// Pop the lowest-f frontier entry, skipping entries made stale by a
    /// cheaper rediscovery or an earlier closure.
    fn pop_open(&mut self, grid: &Grid) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            if !grid.cell(entry.idx).open {
                continue;
            }
            return Some(entry.idx);
        }
        None
    }
}
