use indexmap::IndexSet;
use serde::Serialize;

use super::{driver::DriverId, Elo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ConstructorId(pub(crate) usize);

/// A team. Its rating is the ceiling of the mean of every driver contribution
/// recorded against it.
#[derive(Debug, Clone)]
pub struct Constructor {
    pub name: String,
    pub drivers: IndexSet<DriverId>,
    pub overall_rating: Elo
}

impl Constructor {
    pub fn new(name: &str) -> Constructor {
        Constructor {
            name: name.to_owned(),
            drivers: IndexSet::new(),
            overall_rating: 0
        }
    }
}
