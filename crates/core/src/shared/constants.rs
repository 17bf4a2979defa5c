/// Number of points in the standard 68-point facial landmark layout.
pub const LANDMARK_COUNT: usize = 68;

/// Stand-in divisor for AUs whose baseline value is exactly zero.
pub const BASELINE_EPSILON: f64 = 1e-6;

/// Face widths at or below this are treated as degenerate geometry.
pub const MIN_FACE_WIDTH: f64 = 1e-9;

/// Upper bound of the stress scale.
pub const MAX_STRESS_SCORE: f64 = 10.0;

pub const SCORE_DECIMALS: u32 = 2;
pub const AU_VALUE_DECIMALS: u32 = 4;

pub const LANDMARK_FILE_EXTENSIONS: &[&str] = &["json"];
