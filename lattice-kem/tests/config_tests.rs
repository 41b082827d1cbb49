#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::needless_range_loop,
    clippy::explicit_iter_loop,
    clippy::print_stdout,
    clippy::useless_vec,
    clippy::needless_borrows_for_generic_args
)]
//! Configuration tests
//!
//! Builder, presets, validation and serde round trips.

use lattice_kem::{CoreConfig, CoreError, HashAlgorithm, LatticeKem};

#[test]
fn test_json_roundtrip() {
    let config = CoreConfig::for_production().with_hash_algorithm(HashAlgorithm::Shake128);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"shake128\""));
    let parsed: CoreConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_missing_fields_take_defaults() {
    let parsed: CoreConfig = serde_json::from_str(r#"{"max_xof_blocks": 8}"#).unwrap();
    assert_eq!(parsed.max_xof_blocks, 8);
    assert_eq!(parsed.hash_algorithm, HashAlgorithm::Shake256);
    assert_eq!(parsed.log_filter, CoreConfig::default().log_filter);
}

#[test]
fn test_unknown_algorithm_rejected() {
    let result: Result<CoreConfig, _> = serde_json::from_str(r#"{"hash_algorithm": "md5"}"#);
    assert!(result.is_err());
}

#[test]
fn test_deserialized_config_is_validated() {
    let parsed: CoreConfig = serde_json::from_str(r#"{"max_xof_blocks": 1}"#).unwrap();
    assert!(matches!(parsed.validate(), Err(CoreError::Configuration(_))));
    assert!(matches!(LatticeKem::new(parsed), Err(CoreError::Configuration(_))));
}

#[test]
fn test_presets() {
    let dev = CoreConfig::for_development();
    assert!(!dev.power_up_self_test);
    assert!(!dev.pairwise_consistency_check);
    assert_eq!(dev.log_filter, "lattice_kem=debug");

    let prod = CoreConfig::for_production();
    assert!(prod.power_up_self_test);
    assert!(prod.pairwise_consistency_check);
    assert!(prod.verify_ntt_roundtrip);
}

#[test]
fn test_builder_chain() {
    let config = CoreConfig::new()
        .with_max_xof_blocks(32)
        .with_ntt_roundtrip_check(true)
        .with_log_filter("lattice_kem=trace")
        .build()
        .unwrap();
    assert_eq!(config.max_xof_blocks, 32);
    assert_eq!(config.kem_config().max_xof_blocks, 32);
    assert!(config.kem_config().verify_ntt_roundtrip);
}

#[test]
fn test_instance_reports_config() {
    let config = CoreConfig::for_development().with_hash_algorithm(HashAlgorithm::Shake128);
    let kem = LatticeKem::new(config.clone()).unwrap();
    assert_eq!(kem.config(), &config);
    assert_eq!(kem.primitive().config().max_xof_blocks, config.max_xof_blocks);
}
