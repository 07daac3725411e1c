//! Batch import of health profiles from CSV exports, one profile per row.
//!
//! Headers use the profile's snake_case field names plus an optional `patient` label.
//! Empty cells are treated as absent measurements.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::profile::{DiabetesType, HealthProfile, SmokingStatus, StressLevel};

#[derive(Debug)]
pub enum ProfileImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ProfileImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileImportError::Io(err) => write!(f, "failed to read profile export: {}", err),
            ProfileImportError::Csv(err) => write!(f, "invalid profile CSV data: {}", err),
        }
    }
}

impl std::error::Error for ProfileImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileImportError::Io(err) => Some(err),
            ProfileImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ProfileImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ProfileImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// A profile paired with the label it should be reported under.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedProfile {
    pub label: String,
    pub profile: HealthProfile,
}

pub struct ProfileImporter;

impl ProfileImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedProfile>, ProfileImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedProfile>, ProfileImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut profiles = Vec::new();

        for (index, record) in csv_reader.deserialize::<ProfileRow>().enumerate() {
            let mut row = record?;
            let label = row
                .patient
                .take()
                .unwrap_or_else(|| format!("row {}", index + 1));

            profiles.push(ImportedProfile {
                label,
                profile: row.into(),
            });
        }

        Ok(profiles)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileRow {
    #[serde(deserialize_with = "empty_string_as_none")]
    patient: Option<String>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    blood_pressure_systolic: Option<u16>,
    blood_pressure_diastolic: Option<u16>,
    heart_rate: Option<u16>,
    hba1c: Option<f64>,
    cholesterol_total: Option<f64>,
    cholesterol_ldl: Option<f64>,
    cholesterol_hdl: Option<f64>,
    triglycerides: Option<f64>,
    exercise_hours_per_week: Option<f64>,
    sleep_hours_per_night: Option<f64>,
    stress_level: Option<StressLevel>,
    smoking_status: Option<SmokingStatus>,
    alcohol_drinks_per_week: Option<u16>,
    diabetes_type: Option<DiabetesType>,
    years_since_diagnosis: Option<u16>,
}

impl From<ProfileRow> for HealthProfile {
    fn from(row: ProfileRow) -> Self {
        HealthProfile {
            weight_kg: row.weight_kg,
            height_cm: row.height_cm,
            blood_pressure_systolic: row.blood_pressure_systolic,
            blood_pressure_diastolic: row.blood_pressure_diastolic,
            heart_rate: row.heart_rate,
            hba1c: row.hba1c,
            cholesterol_total: row.cholesterol_total,
            cholesterol_ldl: row.cholesterol_ldl,
            cholesterol_hdl: row.cholesterol_hdl,
            triglycerides: row.triglycerides,
            exercise_hours_per_week: row.exercise_hours_per_week,
            sleep_hours_per_night: row.sleep_hours_per_night,
            stress_level: row.stress_level,
            smoking_status: row.smoking_status,
            alcohol_drinks_per_week: row.alcohol_drinks_per_week,
            diabetes_type: row.diabetes_type,
            years_since_diagnosis: row.years_since_diagnosis,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
