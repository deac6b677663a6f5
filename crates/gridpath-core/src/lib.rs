//! **gridpath-core** — core geometry types for the gridpath crates.
//!
//! Provides the [`Pos`] cell position used by the grid model and search
//! engine in `gridpath-search`.

pub mod geom;

pub use geom::Pos;
