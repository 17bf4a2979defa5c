use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use serde::Serialize;

use stress_score_core::landmarks::infrastructure::json_landmark_provider::JsonLandmarkProvider;
use stress_score_core::pipeline::analysis_error::AnalysisError;
use stress_score_core::pipeline::analyze_face_use_case::AnalyzeFaceUseCase;
use stress_score_core::scoring::domain::scoring_config::ScoringConfig;
use stress_score_core::scoring::domain::stress_scorer::{StressReport, StressScorer};
use stress_score_core::scoring::infrastructure::scoring_config_file;
use stress_score_core::shared::constants::LANDMARK_FILE_EXTENSIONS;

/// Facial stress scoring from 68-point landmark exports.
#[derive(Parser)]
#[command(name = "stress-score")]
struct Cli {
    /// JSON file with 68 (x, y) landmarks from a face landmark detector.
    input: Option<PathBuf>,

    /// JSON scoring config overriding the neutral baseline and/or weights.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as a JSON response instead of text.
    #[arg(long)]
    json: bool,

    /// Also print each action unit's relative deviation from baseline.
    #[arg(long)]
    show_deviations: bool,

    /// Print the effective scoring config as JSON and exit.
    #[arg(long)]
    dump_config: bool,
}

#[derive(Serialize)]
struct SuccessResponse<'a> {
    success: bool,
    #[serde(flatten)]
    report: &'a StressReport,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = match &cli.config {
        Some(path) => scoring_config_file::load(path)?,
        None => ScoringConfig::default(),
    };

    if cli.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        return Err("An input landmark file is required".into());
    };

    let mut use_case =
        AnalyzeFaceUseCase::new(Box::new(JsonLandmarkProvider::new()), StressScorer::new(config));

    match use_case.execute(input) {
        Ok(report) if cli.json => {
            let response = SuccessResponse {
                success: true,
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Ok(report) => print_report(input, &report, cli.show_deviations),
        Err(e) if cli.json => {
            print_error_json(&e)?;
            process::exit(1);
        }
        Err(e) => return Err(e.user_message().into()),
    }

    Ok(())
}

fn print_report(input: &Path, report: &StressReport, show_deviations: bool) {
    println!("Input:          {}", input.display());
    println!("Stress score:   {:.2} / 10", report.score);
    println!("Interpretation: {}", report.interpretation);
    println!();
    println!("Action units:");
    for (unit, value) in report.au_values.iter() {
        let deviation = report.deviations.get(&unit);
        match deviation {
            Some(d) if show_deviations => println!(
                "  {:8} {:>8.4}  deviation {:>7.3}  ({})",
                unit.key(),
                value,
                d,
                unit.description()
            ),
            _ => println!("  {:8} {:>8.4}  ({})", unit.key(), value, unit.description()),
        }
    }
}

fn print_error_json(e: &AnalysisError) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Analysis failed: {e}");
    let response = ErrorResponse {
        success: false,
        error: e.user_message(),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(config) = &cli.config {
        if !config.exists() {
            return Err(format!("Config file not found: {}", config.display()).into());
        }
    }
    if cli.dump_config {
        return Ok(());
    }
    let Some(input) = &cli.input else {
        return Err("An input landmark file is required unless --dump-config is used".into());
    };
    if !input.exists() {
        return Err(format!("Input file not found: {}", input.display()).into());
    }
    if !is_landmark_file(input) {
        log::warn!(
            "{} does not have a .json extension; reading it as JSON anyway",
            input.display()
        );
    }
    Ok(())
}

fn is_landmark_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| LANDMARK_FILE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
