use std::path::Path;
use traffic_volume_web::ModelArtifacts;

/// The artifacts shipped in ./artifacts must load and agree on shapes.
#[test]
fn test_shipped_artifacts_load() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("artifacts");
    let artifacts = ModelArtifacts::load(&dir).unwrap();

    assert_eq!(artifacts.model.coefficients.len(), 11);
    assert_eq!(artifacts.scaler.mean.len(), 11);
    assert_eq!(artifacts.scaler.scale.len(), 11);
    assert!(artifacts.holiday_encoder.contains("none"));
    assert!(artifacts.weather_encoder.contains("clear"));
}

#[test]
fn test_loading_missing_directory_fails_cleanly() {
    let err = ModelArtifacts::load(Path::new("/definitely/not/here")).unwrap_err();
    assert!(err.to_string().contains("Cannot read"));
}
