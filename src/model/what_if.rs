use tracing::info;

use crate::model::{
    rating_graph::{GraphError, RatingGraph},
    rating_utils::what_if_contribution,
    structures::{edge_kind::EdgeKind, what_if_outcome::WhatIfOutcome}
};

impl RatingGraph {
    /// # What-if simulation
    ///
    /// Places an existing driver at an existing constructor and reports how the
    /// driver's rating moves.
    ///
    /// Steps:
    /// 1. Resolve both names. A miss returns an error before anything is touched.
    /// 2. The hypothetical contribution is the truncated midpoint of the driver's
    ///     and the constructor's current ratings.
    /// 3. That value replaces whatever the driver held for the constructor. A real
    ///     race total for the same pair is overwritten, not added to.
    /// 4. The edge is recorded as hypothetical unless the pair already had one.
    /// 5. Only the driver's rating is recomputed. The constructor keeps its
    ///     current rating until something else recomputes it.
    pub fn simulate(&mut self, driver_name: &str, constructor_name: &str) -> Result<WhatIfOutcome, GraphError> {
        let driver = self.driver_id(driver_name)?;
        let constructor = self.constructor_id(constructor_name)?;

        let previous = self.drivers[driver.0].overall_rating;
        let hypothetical = what_if_contribution(previous, self.constructors[constructor.0].overall_rating);

        *self.link(driver, constructor) = hypothetical;
        self.insert_edge(driver, constructor, EdgeKind::Hypothetical);

        let new = self.recompute_driver_rating(driver);

        info!(
            "What-if {} @ {}: {} -> {} (hypothetical {})",
            driver_name, constructor_name, previous, new, hypothetical
        );

        Ok(WhatIfOutcome {
            driver: driver_name.to_owned(),
            constructor: constructor_name.to_owned(),
            previous,
            hypothetical,
            new
        })
    }
}
