use serde::{Serialize, Serializer};

/// Qualitative stress band for a 0-10 score.
///
/// Each threshold belongs to the lower band: 2.00 is `VeryLow`, 4.00 is `Low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StressLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl StressLevel {
    pub fn from_score(score: f64) -> Self {
        if score <= 2.0 {
            StressLevel::VeryLow
        } else if score <= 4.0 {
            StressLevel::Low
        } else if score <= 6.0 {
            StressLevel::Moderate
        } else if score <= 8.0 {
            StressLevel::High
        } else {
            StressLevel::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::VeryLow => "Very Low Stress — Calm or relaxed facial state",
            StressLevel::Low => "Low Stress — Slight muscle activation (mild focus or alertness)",
            StressLevel::Moderate => "Moderate Stress — Noticeable brow or lip tension detected",
            StressLevel::High => "High Stress — Strong facial tension across brow, eyes, and jaw",
            StressLevel::VeryHigh => {
                "Very High Stress — Intense emotional arousal, possible strain or fatigue"
            }
        }
    }
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for StressLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

pub fn interpret(score: f64) -> StressLevel {
    StressLevel::from_score(score)
}
