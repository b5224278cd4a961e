pub mod constructor;
pub mod driver;
pub mod edge_kind;
pub mod race_result;
pub mod what_if_outcome;

/// Ratings are whole numbers: every aggregate is rounded up and every
/// contribution is the ceiling of a weighted sum.
pub type Elo = i64;
