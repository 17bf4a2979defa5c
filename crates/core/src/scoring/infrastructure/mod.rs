pub mod scoring_config_file;
