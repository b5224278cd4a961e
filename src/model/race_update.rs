use tracing::trace;

use crate::model::{
    rating_graph::RatingGraph,
    rating_utils::race_contribution,
    structures::{constructor::ConstructorId, driver::DriverId, race_result::RaceInputs, Elo}
};

impl RatingGraph {
    /// Folds one race into the driver's running total for this constructor and
    /// refreshes the constructor rating.
    ///
    /// The per-constructor value is a sum across every race driven for that
    /// constructor, not an average. The driver's own rating is left untouched
    /// until [`RatingGraph::finalize_driver_ratings`].
    ///
    /// Returns the new running total.
    pub fn apply_result(&mut self, driver: DriverId, constructor: ConstructorId, inputs: &RaceInputs) -> Elo {
        let contribution = race_contribution(inputs);

        let total = self.link(driver, constructor);
        *total += contribution;
        let total = *total;

        trace!(
            "{} @ {}: +{} (total {})",
            self.drivers[driver.0].name,
            self.constructors[constructor.0].name,
            contribution,
            total
        );

        self.recompute_constructor_rating(constructor);

        total
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{rating_graph::RatingGraph, structures::race_result::RaceInputs};

    #[test]
    fn test_results_accumulate() {
        let mut graph = RatingGraph::new();
        let driver = graph.get_or_create_driver("A");
        let constructor = graph.get_or_create_constructor("T");

        assert_eq!(graph.apply_result(driver, constructor, &RaceInputs::new(25.0, 25.0, 1.0)), 23);
        assert_eq!(graph.apply_result(driver, constructor, &RaceInputs::new(18.0, 18.0, 0.0)), 40);

        assert_eq!(graph.driver_contribution("A", "T"), Some(40));
        assert_eq!(graph.constructor_contribution("T", "A"), Some(40));
        assert_eq!(graph.constructor("T").unwrap().overall_rating, 40);
    }

    #[test]
    fn test_both_views_stay_equal() {
        let mut graph = RatingGraph::new();
        let driver = graph.get_or_create_driver("Lando Norris");
        let constructor = graph.get_or_create_constructor("McLaren");

        let races = [
            RaceInputs::new(0.0, 0.0, 0.0),
            RaceInputs::new(1.0, 2.0, 0.5),
            RaceInputs::new(15.0, 12.0, 1.0),
            RaceInputs::new(0.0, 25.0, 0.0)
        ];

        for inputs in races.iter() {
            graph.apply_result(driver, constructor, inputs);
            assert_eq!(
                graph.driver_contribution("Lando Norris", "McLaren"),
                graph.constructor_contribution("McLaren", "Lando Norris")
            );
        }
    }

    #[test]
    fn test_constructor_rating_is_eager_and_driver_rating_is_not() {
        let mut graph = RatingGraph::new();
        let hamilton = graph.get_or_create_driver("Lewis Hamilton");
        let rosberg = graph.get_or_create_driver("Nico Rosberg");
        let mercedes = graph.get_or_create_constructor("Mercedes");

        graph.apply_result(hamilton, mercedes, &RaceInputs::new(25.0, 25.0, 1.0));
        graph.apply_result(rosberg, mercedes, &RaceInputs::new(18.0, 18.0, 0.0));

        // ceil((23 + 17) / 2)
        assert_eq!(graph.constructor("Mercedes").unwrap().overall_rating, 20);
        assert_eq!(graph.driver("Lewis Hamilton").unwrap().overall_rating, 0);

        graph.finalize_driver_ratings();
        assert_eq!(graph.driver("Lewis Hamilton").unwrap().overall_rating, 23);
        assert_eq!(graph.driver("Nico Rosberg").unwrap().overall_rating, 17);
    }

    #[test]
    fn test_separate_totals_per_constructor() {
        let mut graph = RatingGraph::new();
        let driver = graph.get_or_create_driver("Sergio Perez");
        let sauber = graph.get_or_create_constructor("Sauber");
        let mclaren = graph.get_or_create_constructor("McLaren");

        graph.apply_result(driver, sauber, &RaceInputs::new(10.0, 10.0, 1.0));
        graph.apply_result(driver, mclaren, &RaceInputs::new(4.0, 0.0, 0.0));

        assert_eq!(graph.driver_contribution("Sergio Perez", "Sauber"), Some(10));
        assert_eq!(graph.driver_contribution("Sergio Perez", "McLaren"), Some(3));
    }
}
