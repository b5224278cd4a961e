use crate::model::{
    constants::{FINISH_WEIGHT, QUALIFYING_WEIGHT, TEAMMATE_WEIGHT},
    structures::{race_result::RaceInputs, Elo}
};

/// `ceil(0.6 * finish + 0.3 * qualifying + 0.1 * teammate)`
pub fn race_contribution(inputs: &RaceInputs) -> Elo {
    let weighted = FINISH_WEIGHT * inputs.finish_points
        + QUALIFYING_WEIGHT * inputs.qualifying_points
        + TEAMMATE_WEIGHT * inputs.teammate_margin;

    weighted.ceil() as Elo
}

/// Ceiling of the arithmetic mean, or 0 when there is nothing to average.
pub fn mean_ceiling<I>(values: I) -> Elo
where
    I: IntoIterator<Item = Elo>
{
    let (sum, count) = values
        .into_iter()
        .fold((0i64, 0i64), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        return 0;
    }

    (sum as f64 / count as f64).ceil() as Elo
}

/// Midpoint of two already-aggregated ratings, truncated.
pub fn what_if_contribution(driver_rating: Elo, constructor_rating: Elo) -> Elo {
    (driver_rating + constructor_rating) / 2
}
