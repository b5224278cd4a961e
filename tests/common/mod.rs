use std::{io::Write, sync::Once};

use f1_elo::{model::structures::race_result::RaceResultRow, utils::test_utils::rows_to_csv};
use tempfile::NamedTempFile;

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .try_init();
    });
}

/// Writes the rows to a temporary CSV that lives as long as the returned handle
pub fn write_results_csv(rows: &[RaceResultRow]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(rows_to_csv(rows).as_bytes())
        .expect("Failed to write race results");
    file.flush().expect("Failed to flush race results");

    file
}
