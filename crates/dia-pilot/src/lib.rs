//! Deterministic health-risk rule engine for diabetes management.
//!
//! [`diagnosis::DiagnosisEngine::evaluate`] turns a [`diagnosis::HealthProfile`] into a
//! scored [`diagnosis::DiagnosisResult`]. Everything around it (configuration, telemetry,
//! CSV import and a stateless HTTP router) lives alongside so the API service stays thin.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod telemetry;
