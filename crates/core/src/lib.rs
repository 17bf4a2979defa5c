//! Facial stress scoring from 68-point landmarks.
//!
//! Landmarks → action-unit ratios → baseline deviations → 0-10 score →
//! interpretation band. The engine is pure; landmark acquisition sits behind
//! [`landmarks::domain::landmark_provider::LandmarkProvider`].

pub mod landmarks {
    pub mod domain {
        pub mod face_landmarks;
        pub mod landmark_provider;
    }
    pub mod infrastructure;
}

pub mod scoring {
    pub mod domain {
        pub mod action_unit;
        pub mod au_metrics;
        pub mod interpretation;
        pub mod scoring_config;
        pub mod stress_scorer;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod analysis_error;
    pub mod analyze_face_use_case;
}

pub mod shared {
    pub mod constants;
    pub mod math;
    pub mod point;
}

#[cfg(test)]
pub(crate) mod test_support;
