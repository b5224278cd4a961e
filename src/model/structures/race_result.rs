use serde::{Deserialize, Serialize};

/// One pre-processed row: a single driver's result in a single race.
///
/// Only the names and the three point columns feed the rating. The numeric ids
/// are carried so rows can be grouped per race and constructor when deriving
/// teammate margins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResultRow {
    #[serde(rename = "raceId")]
    pub race_id: i64,
    pub year: i32,
    #[serde(rename = "driverId")]
    pub driver_id: i64,
    #[serde(rename = "constructorId")]
    pub constructor_id: i64,
    pub finish_points: f64,
    pub grid: i64,
    /// Empty for drivers that were not classified
    pub position: Option<f64>,
    pub racer_name: String,
    pub constructor_name: String,
    pub qual_points: i64,
    pub teammate_points: Option<f64>
}

impl RaceResultRow {
    pub fn inputs(&self) -> RaceInputs {
        RaceInputs {
            finish_points: self.finish_points,
            qualifying_points: self.qual_points as f64,
            teammate_margin: self.teammate_points.unwrap_or(0.0)
        }
    }
}

/// The three weighted inputs of a single race contribution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RaceInputs {
    pub finish_points: f64,
    pub qualifying_points: f64,
    /// 0, 0.5 or 1 for lost, tied or beat the teammate
    pub teammate_margin: f64
}

impl RaceInputs {
    pub fn new(finish_points: f64, qualifying_points: f64, teammate_margin: f64) -> RaceInputs {
        RaceInputs {
            finish_points,
            qualifying_points,
            teammate_margin
        }
    }
}
