use indexmap::IndexSet;
use serde::Serialize;

use super::{constructor::ConstructorId, Elo};

/// Position of a driver inside the [`RatingGraph`](crate::model::rating_graph::RatingGraph).
/// Drivers are never removed, so an id stays valid for the lifetime of its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DriverId(pub(crate) usize);

#[derive(Debug, Clone)]
pub struct Driver {
    pub name: String,
    /// Constructors this driver holds a contribution for. The values themselves
    /// live in the graph's contribution table, shared with the constructor side.
    pub constructors: IndexSet<ConstructorId>,
    /// Valid as of the last driver recompute; zero until then
    pub overall_rating: Elo
}

impl Driver {
    pub fn new(name: &str) -> Driver {
        Driver {
            name: name.to_owned(),
            constructors: IndexSet::new(),
            overall_rating: 0
        }
    }
}
