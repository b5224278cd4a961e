use itertools::Itertools;
use tracing::debug;

use crate::model::{
    constants::{QUALIFYING_POINTS, TEAMMATE_BEAT, TEAMMATE_LOST, TEAMMATE_TIE},
    structures::race_result::RaceResultRow
};

/// Points for a starting grid slot: P1 scores 25 down to 1 for P10, anything
/// else (including pit lane starts recorded as 0) scores nothing.
pub fn qualifying_points(grid: i64) -> i64 {
    match grid {
        1..=10 => QUALIFYING_POINTS[(grid - 1) as usize],
        _ => 0
    }
}

/// A driver's finishing position within one (race, constructor) pairing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeammateEntry {
    pub driver_id: i64,
    pub position: Option<f64>
}

/// Head-to-head margins for one race and one constructor.
///
/// Only a pairing of exactly two drivers is compared; anything else yields no
/// margins. The driver with the lower id is compared against the other: a
/// better position scores 1, an equal one 0.5. When either position is missing
/// neither comparison holds, so the lower id scores 0 and its teammate 1.
pub fn teammate_margins(entries: &[TeammateEntry]) -> Vec<(i64, f64)> {
    if entries.len() != 2 {
        return Vec::new();
    }

    let (a, b) = if entries[0].driver_id <= entries[1].driver_id {
        (entries[0], entries[1])
    } else {
        (entries[1], entries[0])
    };

    let a_margin = match (a.position, b.position) {
        (Some(pa), Some(pb)) if pa < pb => TEAMMATE_BEAT,
        (Some(pa), Some(pb)) if pa == pb => TEAMMATE_TIE,
        _ => TEAMMATE_LOST
    };

    vec![(a.driver_id, a_margin), (b.driver_id, TEAMMATE_BEAT - a_margin)]
}

/// Fills `qual_points` from the grid slot and `teammate_points` from the
/// teammate comparison for every row. Rows outside a two-driver pairing get no
/// teammate margin.
pub fn prepare_rows(rows: &mut [RaceResultRow]) {
    for row in rows.iter_mut() {
        row.qual_points = qualifying_points(row.grid);
        row.teammate_points = None;
    }

    let groups = rows
        .iter()
        .enumerate()
        .into_group_map_by(|(_, row)| (row.race_id, row.constructor_id));

    let mut assigned = Vec::new();
    for (_, members) in groups {
        let entries = members
            .iter()
            .map(|(_, row)| TeammateEntry {
                driver_id: row.driver_id,
                position: row.position
            })
            .collect_vec();

        for (driver_id, margin) in teammate_margins(&entries) {
            if let Some((index, _)) = members.iter().find(|(_, row)| row.driver_id == driver_id) {
                assigned.push((*index, margin));
            }
        }
    }

    debug!("Assigned teammate margins to {} of {} rows", assigned.len(), rows.len());

    for (index, margin) in assigned {
        rows[index].teammate_points = Some(margin);
    }
}
