use axum::response::Response;
use serde_json::Value;

use crate::diagnosis::profile::{HealthProfile, SmokingStatus, StressLevel};
use crate::diagnosis::thresholds::ThresholdTable;
use crate::diagnosis::{DiagnosisConfig, DiagnosisEngine, MissingLifestylePolicy};

/// Well-controlled patient: every assessor lands in its healthiest tier or a neutral one.
pub(super) fn well_controlled_profile() -> HealthProfile {
    HealthProfile {
        weight_kg: Some(70.0),
        height_cm: Some(170.0),
        blood_pressure_systolic: Some(120),
        blood_pressure_diastolic: Some(75),
        hba1c: Some(6.2),
        cholesterol_ldl: Some(90.0),
        cholesterol_hdl: Some(65.0),
        exercise_hours_per_week: Some(3.0),
        sleep_hours_per_night: Some(8.0),
        smoking_status: Some(SmokingStatus::Never),
        stress_level: Some(StressLevel::Low),
        ..HealthProfile::default()
    }
}

/// Critical glucose, active smoker and stage-2 pressure, nothing else recorded.
pub(super) fn uncontrolled_profile() -> HealthProfile {
    HealthProfile {
        hba1c: Some(9.5),
        smoking_status: Some(SmokingStatus::Current),
        blood_pressure_systolic: Some(165),
        blood_pressure_diastolic: Some(100),
        ..HealthProfile::default()
    }
}

pub(super) fn hba1c_only(value: f64) -> HealthProfile {
    HealthProfile {
        hba1c: Some(value),
        ..HealthProfile::default()
    }
}

pub(super) fn standard_table() -> ThresholdTable {
    ThresholdTable::standard()
}

pub(super) fn engine() -> DiagnosisEngine {
    DiagnosisEngine::standard()
}

pub(super) fn zero_default_engine() -> DiagnosisEngine {
    let config = DiagnosisConfig {
        missing_lifestyle: MissingLifestylePolicy::ZeroDefault,
        ..DiagnosisConfig::default()
    };
    DiagnosisEngine::new(ThresholdTable::standard(), &config)
}

pub(super) fn limited_engine(limit: usize) -> DiagnosisEngine {
    let config = DiagnosisConfig {
        recommendation_limit: limit,
        ..DiagnosisConfig::default()
    };
    DiagnosisEngine::new(ThresholdTable::standard(), &config)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
