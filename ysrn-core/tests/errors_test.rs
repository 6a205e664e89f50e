use ysrn_core::errors::*;

#[test]
fn dimension_mismatch_carries_sizes() {
    let err = ValidationError::DimensionMismatch {
        role: "context c1".into(),
        expected: 384,
        actual: 512,
    };
    let msg = err.to_string();
    assert!(msg.contains("384"));
    assert!(msg.contains("512"));
    assert!(msg.contains("context c1"));
}

#[test]
fn signal_out_of_range_carries_signal() {
    let err = ValidationError::SignalOutOfRange { signal: 1.5 };
    assert!(err.to_string().contains("1.5"));
}

#[test]
fn validation_error_converts_to_ysrn_error() {
    let err: YsrnError = ValidationError::NonPositiveK.into();
    assert!(err.is_validation());
    assert_eq!(err.as_validation(), Some(&ValidationError::NonPositiveK));
    assert!(err.to_string().contains("positive"));
}

#[test]
fn port_error_names_the_port() {
    let err = YsrnError::port("encoder", "model unavailable");
    let msg = err.to_string();
    assert!(msg.contains("encoder"));
    assert!(msg.contains("model unavailable"));
    assert!(!err.is_validation());
}

#[test]
fn serde_error_converts() {
    let serde_err = serde_json::from_str::<i32>("nope").unwrap_err();
    let err: YsrnError = serde_err.into();
    assert!(matches!(err, YsrnError::SerializationError(_)));
}
