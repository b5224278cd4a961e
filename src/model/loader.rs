use std::{fs::File, io, path::Path};

use thiserror::Error;
use tracing::{debug, info, info_span, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::{
    model::{
        constants::{TEAMMATE_BEAT, TEAMMATE_LOST, TEAMMATE_TIE},
        rating_graph::RatingGraph,
        structures::race_result::RaceResultRow
    },
    utils::progress_utils::progress_spinner_style
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open race results: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed race result row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {line} has an empty {field}")]
    EmptyName { line: u64, field: &'static str }
}

/// Loads every row of a pre-processed results CSV and finalizes driver ratings.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<RatingGraph, LoadError> {
    let path = path.as_ref();
    info!("Loading race results from {}", path.display());

    let file = File::open(path)?;
    load_reader(file)
}

/// Same as [`load_csv`] for any reader producing CSV with a header row.
pub fn load_reader<R: io::Read>(reader: R) -> Result<RatingGraph, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let rows = reader
        .deserialize::<RaceResultRow>()
        .map(|row| row.map_err(LoadError::from));

    load(rows)
}

/// Consumes the row stream in order, then computes every driver's rating once.
/// The first bad row aborts the load.
pub fn load<I>(rows: I) -> Result<RatingGraph, LoadError>
where
    I: IntoIterator<Item = Result<RaceResultRow, LoadError>>
{
    let span = info_span!("load");
    span.pb_set_style(&progress_spinner_style());
    span.pb_set_message("Processing race results");
    let _enter = span.enter();

    let mut graph = RatingGraph::new();
    let mut count: u64 = 0;

    for row in rows {
        count += 1;
        graph.ingest_row(&row?, count)?;
        span.pb_inc(1);
    }

    info!(
        "Processed {} rows: {} drivers, {} constructors, {} edges",
        count,
        graph.drivers.len(),
        graph.constructors.len(),
        graph.edges.len()
    );

    graph.finalize_driver_ratings();

    Ok(graph)
}

impl RatingGraph {
    /// Applies a single row. `line` is the 1-based row number, used in errors.
    pub fn ingest_row(&mut self, row: &RaceResultRow, line: u64) -> Result<(), LoadError> {
        if row.constructor_name.is_empty() {
            return Err(LoadError::EmptyName {
                line,
                field: "constructor_name"
            });
        }

        if row.racer_name.is_empty() {
            return Err(LoadError::EmptyName {
                line,
                field: "racer_name"
            });
        }

        if let Some(margin) = row.teammate_points {
            if ![TEAMMATE_LOST, TEAMMATE_TIE, TEAMMATE_BEAT].contains(&margin) {
                warn!(
                    "Row {}: unexpected teammate margin {} for {}",
                    line, margin, row.racer_name
                );
            }
        }

        let constructor = self.get_or_create_constructor(&row.constructor_name);
        let is_new_driver = self.driver(&row.racer_name).is_none();
        let driver = self.get_or_create_driver(&row.racer_name);

        if is_new_driver {
            // A new driver starts on the roster of the first constructor it raced for
            self.link(driver, constructor);
        }

        let total = self.apply_result(driver, constructor, &row.inputs());
        self.add_edge(driver, constructor);

        debug!(
            "Race {} ({}): {} @ {} -> {}",
            row.race_id, row.year, row.racer_name, row.constructor_name, total
        );

        Ok(())
    }
}
