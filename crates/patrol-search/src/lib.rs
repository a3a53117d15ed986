//! Obstruction search for the patrol simulator.
//!
//! For every cell the unobstructed walk visits (other than the start),
//! place a single wall there and check whether the agent ends up trapped.
//! Candidates are independent and are evaluated on a pool of scoped
//! worker threads; verdicts flow back over a channel to one collector.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod candidates;
pub mod config;
pub mod search;

pub use candidates::candidates;
pub use config::{GridStrategy, SearchConfig, SearchError};
pub use search::{count_loop_inducing_obstructions, ObstructionSearch, SearchReport};
