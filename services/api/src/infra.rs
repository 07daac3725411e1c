use dia_pilot::diagnosis::{DiagnosisConfig, DiagnosisEngine};
use dia_pilot::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the shared engine, preferring a `--thresholds` flag over the configured path.
pub(crate) fn load_engine(
    mut config: DiagnosisConfig,
    thresholds_override: Option<PathBuf>,
) -> Result<Arc<DiagnosisEngine>, AppError> {
    if thresholds_override.is_some() {
        config.thresholds_path = thresholds_override;
    }

    let engine = DiagnosisEngine::from_config(&config)?;
    match &config.thresholds_path {
        Some(path) => info!(path = %path.display(), "loaded threshold override"),
        None => info!("using standard threshold table"),
    }

    Ok(Arc::new(engine))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_override_wins_over_configured_path() {
        let config = DiagnosisConfig {
            thresholds_path: Some(PathBuf::from("/missing/configured.json")),
            ..DiagnosisConfig::default()
        };
        let fixture = PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../crates/dia-pilot/fixtures/strict-thresholds.json"
        ));

        let engine = load_engine(config, Some(fixture)).expect("override loads");

        assert_ne!(engine.thresholds(), DiagnosisEngine::standard().thresholds());
    }

    #[test]
    fn missing_threshold_file_fails_fast() {
        let config = DiagnosisConfig {
            thresholds_path: Some(PathBuf::from("/missing/configured.json")),
            ..DiagnosisConfig::default()
        };

        let error = load_engine(config, None).expect_err("missing file");

        assert!(matches!(error, AppError::Thresholds(_)));
    }
}
