use tracing::{debug, info};

use crate::model::{
    rating_graph::RatingGraph,
    rating_utils::mean_ceiling,
    structures::{constructor::ConstructorId, driver::DriverId, Elo}
};

impl RatingGraph {
    /// Recomputes and stores the constructor's rating from its roster.
    ///
    /// Runs after every race applied to the constructor, so a constructor rating
    /// is always current while loading.
    pub fn recompute_constructor_rating(&mut self, id: ConstructorId) -> Elo {
        let contributions = &self.contributions;
        let constructor = &mut self.constructors[id.0];

        let rating = mean_ceiling(
            constructor
                .drivers
                .iter()
                .filter_map(|driver| contributions.get(&(*driver, id)).copied())
        );
        constructor.overall_rating = rating;

        rating
    }

    /// Recomputes and stores the driver's rating from its per-constructor sums.
    ///
    /// Unlike constructors this only runs when finalizing a load or after a
    /// simulation; in between, a driver's rating is stale.
    pub fn recompute_driver_rating(&mut self, id: DriverId) -> Elo {
        let contributions = &self.contributions;
        let driver = &mut self.drivers[id.0];

        let rating = mean_ceiling(
            driver
                .constructors
                .iter()
                .filter_map(|constructor| contributions.get(&(id, *constructor)).copied())
        );
        driver.overall_rating = rating;

        rating
    }

    /// One pass over every driver. Each driver only reads its own entries, so
    /// the order does not matter.
    pub fn finalize_driver_ratings(&mut self) {
        for index in 0..self.drivers.len() {
            let rating = self.recompute_driver_rating(DriverId(index));
            debug!("Final rating for {}: {}", self.drivers[index].name, rating);
        }

        info!("Finalized ratings for {} drivers", self.drivers.len());
    }
}

#[cfg(test)]
mod tests {
    use crate::model::rating_graph::RatingGraph;

    #[test]
    fn test_empty_aggregates_are_zero() {
        let mut graph = RatingGraph::new();
        let driver = graph.get_or_create_driver("Nico Hulkenberg");
        let constructor = graph.get_or_create_constructor("Haas");

        assert_eq!(graph.recompute_driver_rating(driver), 0);
        assert_eq!(graph.recompute_constructor_rating(constructor), 0);
    }

    #[test]
    fn test_constructor_rating_is_ceiling_of_mean() {
        let mut graph = RatingGraph::new();
        let constructor = graph.get_or_create_constructor("Red Bull");
        let vettel = graph.get_or_create_driver("Sebastian Vettel");
        let webber = graph.get_or_create_driver("Mark Webber");

        *graph.link(vettel, constructor) = 41;
        *graph.link(webber, constructor) = 30;

        assert_eq!(graph.recompute_constructor_rating(constructor), 36);
        assert_eq!(graph.constructor("Red Bull").unwrap().overall_rating, 36);
    }

    #[test]
    fn test_driver_rating_averages_constructor_sums() {
        let mut graph = RatingGraph::new();
        let driver = graph.get_or_create_driver("Daniel Ricciardo");
        let hrt = graph.get_or_create_constructor("HRT");
        let red_bull = graph.get_or_create_constructor("Red Bull");

        *graph.link(driver, hrt) = 1;
        *graph.link(driver, red_bull) = 250;

        assert_eq!(graph.recompute_driver_rating(driver), 126);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut graph = RatingGraph::new();
        let driver = graph.get_or_create_driver("Kimi Raikkonen");
        let constructor = graph.get_or_create_constructor("Lotus F1");
        *graph.link(driver, constructor) = 77;

        let first = graph.recompute_driver_rating(driver);
        let second = graph.recompute_driver_rating(driver);
        assert_eq!(first, second);

        let first = graph.recompute_constructor_rating(constructor);
        let second = graph.recompute_constructor_rating(constructor);
        assert_eq!(first, second);
    }

    #[test]
    fn test_finalize_covers_every_driver() {
        let mut graph = RatingGraph::new();
        let constructor = graph.get_or_create_constructor("Williams");
        let bottas = graph.get_or_create_driver("Valtteri Bottas");
        let massa = graph.get_or_create_driver("Felipe Massa");
        graph.get_or_create_driver("Reserve Driver");

        *graph.link(bottas, constructor) = 90;
        *graph.link(massa, constructor) = 60;

        graph.finalize_driver_ratings();

        assert_eq!(graph.driver("Valtteri Bottas").unwrap().overall_rating, 90);
        assert_eq!(graph.driver("Felipe Massa").unwrap().overall_rating, 60);
        assert_eq!(graph.driver("Reserve Driver").unwrap().overall_rating, 0);
    }
}
