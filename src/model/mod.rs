//! Driver and constructor ratings.
//!
//! Race results are folded into per-(driver, constructor) running totals.
//! Constructors average their drivers' totals after every race; drivers average
//! their per-constructor totals once the whole dataset has been read, and again
//! whenever a what-if simulation touches them.

pub mod aggregation;
pub mod constants;
pub mod data_processing;
pub mod export;
pub mod loader;
pub mod race_update;
pub mod rating_graph;
pub mod rating_utils;
pub mod structures;
pub mod what_if;
