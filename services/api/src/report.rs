use crate::infra::load_engine;
use chrono::{DateTime, Utc};
use clap::{ArgGroup, Args};
use dia_pilot::config::AppConfig;
use dia_pilot::diagnosis::{
    DiagnosisEngine, DiagnosisResponse, DiagnosisResult, HealthProfile, ProfileImporter,
};
use dia_pilot::error::AppError;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["profile", "csv"])))]
pub(crate) struct DiagnoseArgs {
    /// JSON file holding a single health profile
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// CSV export with one profile per row (optional `patient` column for labels)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Emit JSON instead of the console summary
    #[arg(long)]
    pub(crate) json: bool,
    /// JSON threshold table to use instead of APP_THRESHOLDS_PATH
    #[arg(long)]
    pub(crate) thresholds: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ThresholdsArgs {
    /// JSON threshold table to validate and print instead of the configured one
    #[arg(long)]
    pub(crate) thresholds: Option<PathBuf>,
}

/// One CSV row's outcome. Rejected rows keep their validation message.
#[derive(Debug, Serialize)]
pub(crate) struct BatchEntry {
    pub(crate) label: String,
    pub(crate) evaluated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) diagnosis: Option<DiagnosisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let DiagnoseArgs {
        profile,
        csv,
        json,
        thresholds,
    } = args;

    let config = AppConfig::load()?;
    let engine = load_engine(config.diagnosis, thresholds)?;

    if let Some(path) = profile {
        let profile = read_profile(&path)?;
        let response = DiagnosisResponse {
            evaluated_at: Utc::now(),
            diagnosis: engine.evaluate_checked(&profile)?,
        };

        if json {
            print_json(&response)?;
        } else {
            render_diagnosis(&path.display().to_string(), &response.diagnosis);
        }
    }

    if let Some(path) = csv {
        let entries = diagnose_batch(&engine, &path)?;
        if json {
            print_json(&entries)?;
        } else {
            render_batch(&entries);
        }
    }

    Ok(())
}

pub(crate) fn run_thresholds(args: ThresholdsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = load_engine(config.diagnosis, args.thresholds)?;
    print_json(engine.thresholds())
}

fn read_profile(path: &Path) -> Result<HealthProfile, AppError> {
    let reader = BufReader::new(File::open(path)?);
    let profile = serde_json::from_reader(reader).map_err(std::io::Error::from)?;
    Ok(profile)
}

pub(crate) fn diagnose_batch(
    engine: &DiagnosisEngine,
    path: &Path,
) -> Result<Vec<BatchEntry>, AppError> {
    let rows = ProfileImporter::from_path(path)?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let evaluated_at = Utc::now();
            match engine.evaluate_checked(&row.profile) {
                Ok(diagnosis) => BatchEntry {
                    label: row.label,
                    evaluated_at,
                    diagnosis: Some(diagnosis),
                    error: None,
                },
                Err(err) => BatchEntry {
                    label: row.label,
                    evaluated_at,
                    diagnosis: None,
                    error: Some(err.to_string()),
                },
            }
        })
        .collect())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

fn render_batch(entries: &[BatchEntry]) {
    println!("Evaluated {} profile(s)", entries.len());
    for entry in entries {
        match (&entry.diagnosis, &entry.error) {
            (Some(diagnosis), _) => render_diagnosis(&entry.label, diagnosis),
            (None, Some(err)) => println!("\n{}\n  Profile rejected: {}", entry.label, err),
            (None, None) => {}
        }
    }
}

pub(crate) fn render_diagnosis(label: &str, diagnosis: &DiagnosisResult) {
    println!("\n{label}");
    println!(
        "  Health score: {:.0}/100 ({} risk, {} risk points, {} positive)",
        diagnosis.overall_health_score,
        diagnosis.risk_level,
        diagnosis.risk_total,
        diagnosis.positive_total
    );

    print_section("Key concerns", &diagnosis.key_concerns);
    print_section("Positive factors", &diagnosis.positive_factors);
    print_section("Outlook", &diagnosis.predicted_complications);

    if diagnosis.recommendations.is_empty() {
        println!("  Recommendations: none");
    } else {
        println!("  Recommendations:");
        for recommendation in &diagnosis.recommendations {
            println!(
                "  - [{}] {}",
                recommendation.priority.label(),
                recommendation.message
            );
        }
    }

    print_section("Next steps", &diagnosis.action_items);
}

fn print_section(title: &str, lines: &[String]) {
    if lines.is_empty() {
        println!("  {title}: none");
        return;
    }

    println!("  {title}:");
    for line in lines {
        println!("  - {line}");
    }
}
