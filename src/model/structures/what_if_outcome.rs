use serde::Serialize;

use super::Elo;

/// Result of placing a driver at a constructor, as shown in the simulation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfOutcome {
    pub driver: String,
    pub constructor: String,
    /// Driver rating before the simulation
    pub previous: Elo,
    pub hypothetical: Elo,
    /// Driver rating after the hypothetical contribution was merged in
    pub new: Elo
}

impl WhatIfOutcome {
    pub fn delta(&self) -> Elo {
        self.new - self.previous
    }
}
