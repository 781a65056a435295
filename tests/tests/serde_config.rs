//! Configuration and descriptive types through the `serde` feature

use msgseal::prelude::*;
use msgseal_tests::fixtures::SESSION_MESSAGE;
use msgseal_tests::init_tracing;

#[test]
fn test_partial_config_keeps_defaults() {
    let config: SessionConfig = serde_json::from_str(r#"{"symmetric_mode":"gcm"}"#).unwrap();
    assert_eq!(config.symmetric_mode, ModeKind::Gcm);
    assert!(config.allow_self_agreement);

    let config: SessionConfig = serde_json::from_str(r#"{"allow_self_agreement":false}"#).unwrap();
    assert_eq!(config.symmetric_mode, ModeKind::Ecb);
    assert!(!config.allow_self_agreement);

    let config: SessionConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_mode_names_are_lowercase() {
    assert_eq!(serde_json::to_string(&ModeKind::Ecb).unwrap(), r#""ecb""#);
    assert_eq!(serde_json::to_string(&ModeKind::Gcm).unwrap(), r#""gcm""#);
    assert!(serde_json::from_str::<ModeKind>(r#""ECB""#).is_err());
    assert!(serde_json::from_str::<ModeKind>(r#""cbc""#).is_err());
}

#[test]
fn test_config_roundtrip() {
    let config = SessionConfig {
        symmetric_mode: ModeKind::Gcm,
        allow_self_agreement: false,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"symmetric_mode":"gcm","allow_self_agreement":false}"#);
    assert_eq!(serde_json::from_str::<SessionConfig>(&json).unwrap(), config);
}

#[test]
fn test_loaded_config_drives_session() {
    init_tracing();
    let config: SessionConfig = serde_json::from_str(r#"{"symmetric_mode":"gcm"}"#).unwrap();
    let mut session = Session::new(config);
    session.generate(Algorithm::Ecc, 256).unwrap();

    // GCM draws a fresh nonce, so the same message seals differently
    let first = session.encrypt(Algorithm::Ecc, SESSION_MESSAGE).unwrap();
    let second = session.encrypt(Algorithm::Ecc, SESSION_MESSAGE).unwrap();
    assert_ne!(first, second);
    assert_eq!(session.decrypt(Algorithm::Ecc, &first).unwrap(), SESSION_MESSAGE);
}

#[test]
fn test_strength_and_curve_roundtrip() {
    for (_, curve) in NamedCurve::TABLE {
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(serde_json::from_str::<NamedCurve>(&json).unwrap(), curve);

        let strength = Strength::Curve(curve);
        let json = serde_json::to_string(&strength).unwrap();
        assert_eq!(serde_json::from_str::<Strength>(&json).unwrap(), strength);
    }

    let strength = Strength::RsaModulus(2048);
    let json = serde_json::to_string(&strength).unwrap();
    assert_eq!(json, r#"{"RsaModulus":2048}"#);
    assert_eq!(serde_json::from_str::<Strength>(&json).unwrap(), strength);

    assert_eq!(serde_json::to_string(&Algorithm::Ecc).unwrap(), r#""ecc""#);
}
