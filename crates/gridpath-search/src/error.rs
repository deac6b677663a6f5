//! Error types for grid configuration and solving.

use gridpath_core::Pos;
use thiserror::Error;

/// A structural problem with the grid configuration.
///
/// Surfaced at configuration time; an invalid grid never reaches the
/// search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimension must be positive")]
    ZeroDimension,

    #[error("{0} lies outside the {1}x{1} grid")]
    OutOfBounds(Pos, i32),

    #[error("origin and destination coincide at {0}")]
    CoincidentEndpoints(Pos),

    #[error("{0} is blocked by an obstacle")]
    BlockedEndpoint(Pos),

    #[error("{0} is occupied by an endpoint")]
    OccupiedByEndpoint(Pos),
}

/// A problem detected when a solve is requested.
///
/// Recoverable: the caller may finish configuring the grid and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The search was started before both endpoints were set.
    #[error("origin and destination must be set before solving")]
    MissingEndpoints,
}
