// Race contribution weights
pub const FINISH_WEIGHT: f64 = 0.6;
pub const QUALIFYING_WEIGHT: f64 = 0.3;
pub const TEAMMATE_WEIGHT: f64 = 0.1;

/// Qualifying points indexed by grid slot, P1 first. Slots past P10 score nothing.
pub const QUALIFYING_POINTS: [i64; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

// Teammate comparison outcomes
pub const TEAMMATE_BEAT: f64 = 1.0;
pub const TEAMMATE_TIE: f64 = 0.5;
pub const TEAMMATE_LOST: f64 = 0.0;

pub const DEFAULT_DATA_PATH: &str = "preprocessing/final_data.csv";
