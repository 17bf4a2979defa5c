pub mod json_landmark_provider;
