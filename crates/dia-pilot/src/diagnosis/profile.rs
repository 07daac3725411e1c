use serde::{Deserialize, Serialize};

/// Snapshot of vitals, labs and lifestyle factors for one evaluation.
///
/// Every field is optional; assessors skip (or neutrally default) what is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub blood_pressure_systolic: Option<u16>,
    #[serde(default)]
    pub blood_pressure_diastolic: Option<u16>,
    #[serde(default)]
    pub heart_rate: Option<u16>,
    #[serde(default)]
    pub hba1c: Option<f64>,
    #[serde(default)]
    pub cholesterol_total: Option<f64>,
    #[serde(default)]
    pub cholesterol_ldl: Option<f64>,
    #[serde(default)]
    pub cholesterol_hdl: Option<f64>,
    #[serde(default)]
    pub triglycerides: Option<f64>,
    #[serde(default)]
    pub exercise_hours_per_week: Option<f64>,
    #[serde(default)]
    pub sleep_hours_per_night: Option<f64>,
    #[serde(default)]
    pub stress_level: Option<StressLevel>,
    #[serde(default)]
    pub smoking_status: Option<SmokingStatus>,
    #[serde(default)]
    pub alcohol_drinks_per_week: Option<u16>,
    #[serde(default)]
    pub diabetes_type: Option<DiabetesType>,
    #[serde(default)]
    pub years_since_diagnosis: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
}

/// Carried for the caller's records; no assessor reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiabetesType {
    #[serde(alias = "type_1")]
    Type1,
    #[serde(alias = "type_2")]
    Type2,
    Gestational,
    Prediabetes,
    Other,
}

impl HealthProfile {
    /// Body-mass index, when both weight and height are present.
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.weight_kg?;
        let height_m = self.height_cm? / 100.0;
        Some(weight / (height_m * height_m))
    }

    /// Reject values no clinician could have recorded.
    ///
    /// The engine itself never calls this; outer surfaces do before evaluating.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        positive("weight_kg", self.weight_kg)?;
        positive("height_cm", self.height_cm)?;

        for (field, value) in [
            ("blood_pressure_systolic", self.blood_pressure_systolic),
            ("blood_pressure_diastolic", self.blood_pressure_diastolic),
            ("heart_rate", self.heart_rate),
        ] {
            if value == Some(0) {
                return Err(ProfileValidationError::NonPositive { field });
            }
        }

        if let (Some(systolic), Some(diastolic)) =
            (self.blood_pressure_systolic, self.blood_pressure_diastolic)
        {
            if diastolic >= systolic {
                return Err(ProfileValidationError::InvertedBloodPressure {
                    systolic,
                    diastolic,
                });
            }
        }

        non_negative("hba1c", self.hba1c)?;
        non_negative("cholesterol_total", self.cholesterol_total)?;
        non_negative("cholesterol_ldl", self.cholesterol_ldl)?;
        non_negative("cholesterol_hdl", self.cholesterol_hdl)?;
        non_negative("triglycerides", self.triglycerides)?;
        non_negative("exercise_hours_per_week", self.exercise_hours_per_week)?;
        non_negative("sleep_hours_per_night", self.sleep_hours_per_night)?;

        if let Some(sleep) = self.sleep_hours_per_night {
            if sleep > 24.0 {
                return Err(ProfileValidationError::OutOfRange {
                    field: "sleep_hours_per_night",
                    value: sleep,
                });
            }
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: Option<f64>) -> Result<(), ProfileValidationError> {
    match value {
        Some(v) if !v.is_finite() => Err(ProfileValidationError::NotFinite { field }),
        Some(v) if v <= 0.0 => Err(ProfileValidationError::NonPositive { field }),
        _ => Ok(()),
    }
}

fn non_negative(field: &'static str, value: Option<f64>) -> Result<(), ProfileValidationError> {
    match value {
        Some(v) if !v.is_finite() => Err(ProfileValidationError::NotFinite { field }),
        Some(v) if v < 0.0 => Err(ProfileValidationError::OutOfRange { field, value: v }),
        _ => Ok(()),
    }
}

/// Out-of-domain profile input detected before evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("{field} value {value} is outside the accepted range")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("diastolic pressure {diastolic} must be below systolic pressure {systolic}")]
    InvertedBloodPressure { systolic: u16, diastolic: u16 },
}
