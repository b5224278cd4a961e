use crate::model::{
    data_processing::prepare_rows,
    structures::race_result::RaceResultRow
};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Finish points by finishing position, P1 first
const FINISH_POINTS: [f64; 10] = [25.0, 18.0, 15.0, 12.0, 10.0, 8.0, 6.0, 4.0, 2.0, 1.0];

/// A row with the rating inputs set directly and placeholder ids.
pub fn generate_row(
    racer_name: &str,
    constructor_name: &str,
    finish_points: f64,
    qual_points: i64,
    teammate_points: Option<f64>
) -> RaceResultRow {
    RaceResultRow {
        race_id: 1,
        year: 2010,
        driver_id: 1,
        constructor_id: 1,
        finish_points,
        grid: 0,
        position: None,
        racer_name: racer_name.to_string(),
        constructor_name: constructor_name.to_string(),
        qual_points,
        teammate_points
    }
}

/// A raw row as it looks before qualifying and teammate points are derived.
pub fn generate_race_row(
    race_id: i64,
    driver_id: i64,
    constructor_id: i64,
    racer_name: &str,
    constructor_name: &str,
    grid: i64,
    position: Option<f64>
) -> RaceResultRow {
    let finish_points = position
        .filter(|p| *p >= 1.0 && *p <= 10.0)
        .map(|p| FINISH_POINTS[p as usize - 1])
        .unwrap_or(0.0);

    RaceResultRow {
        race_id,
        year: 2010,
        driver_id,
        constructor_id,
        finish_points,
        grid,
        position,
        racer_name: racer_name.to_string(),
        constructor_name: constructor_name.to_string(),
        qual_points: 0,
        teammate_points: None
    }
}

/// Generates `n_races` races for `n_constructors` two-driver constructors with
/// shuffled grids and finishing orders. Seeded, so the output is reproducible.
///
/// Every tenth driver result is a retirement (no position).
pub fn generate_season(n_constructors: usize, n_races: usize) -> Vec<RaceResultRow> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let n_drivers = n_constructors * 2;
    let mut rows = Vec::with_capacity(n_drivers * n_races);

    for race in 0..n_races {
        let mut grid = (1..=n_drivers as i64).collect::<Vec<_>>();
        let mut finish = (1..=n_drivers as i64).collect::<Vec<_>>();
        grid.shuffle(&mut rng);
        finish.shuffle(&mut rng);

        for driver in 0..n_drivers {
            let constructor = driver / 2;
            let position = if rng.random_range(0..10) == 0 {
                None
            } else {
                Some(finish[driver] as f64)
            };

            rows.push(generate_race_row(
                race as i64,
                driver as i64,
                constructor as i64,
                &format!("Driver {}", driver),
                &format!("Constructor {}", constructor),
                grid[driver],
                position
            ));
        }
    }

    prepare_rows(&mut rows);
    rows
}

pub fn rows_to_csv(rows: &[RaceResultRow]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).unwrap();
    }

    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}
