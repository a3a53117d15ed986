//! Core types for the patrol grid simulator.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! tiles, positions, facings and agent states the walk simulator operates
//! on, the [`Grid`] storage with its [`TileMap`] read interface, the
//! single-cell [`PatchedGrid`] overlay, and the text loader that produces a
//! [`Scenario`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geom;
pub mod grid;
pub mod outcome;
pub mod overlay;
pub mod parse;
pub mod tile;

pub use error::GridError;
pub use geom::{AgentState, Facing, Position};
pub use grid::{Grid, TileMap};
pub use outcome::Outcome;
pub use overlay::PatchedGrid;
pub use parse::Scenario;
pub use tile::Tile;
