//! Test utilities and fixtures for patrol development.
//!
//! Provides the canonical reference maps used across crate tests, a
//! string-based scenario builder, and [`proptest`] strategies for
//! generating arbitrary scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{
    boxed_in, canonical, clockwise_loop, corridor, scenario, BOXED_IN, CANONICAL_EXAMPLE,
    CANONICAL_LOOPING_CANDIDATES, CANONICAL_VISITED, CLOCKWISE_LOOP,
};
pub use strategies::arb_scenario;
