// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::io::Write;

use crate::config::QuantizeConfig;
use crate::error::RtlSimError;
use crate::policy::{OverflowPolicy, RoundingPolicy};

#[test]
fn test_config_defaults() {
    let cfg = QuantizeConfig::from_json_str(r#"{ "signed": false, "width": 6, "frac_bits": 2 }"#).unwrap();
    assert_eq!(cfg, QuantizeConfig::new(false, 6, 2));
    let q = cfg.build().unwrap();
    assert_eq!(q.overflow(), OverflowPolicy::Wrap);
    assert_eq!(q.rounding(), RoundingPolicy::Truncate);
}

#[test]
fn test_config_policy_names() {
    let cfg = QuantizeConfig::from_json_str(
        r#"{ "signed": true, "width": 3, "frac_bits": -1, "overflow": "Saturate", "rounding": "AROUND" }"#,
    )
    .unwrap();
    assert_eq!(cfg.overflow, Some(OverflowPolicy::Saturate));
    assert_eq!(cfg.rounding, Some(RoundingPolicy::NearestAwayFromZero));

    let err = QuantizeConfig::from_json_str(
        r#"{ "signed": true, "width": 3, "frac_bits": 0, "overflow": "clip" }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("clip"));
}

#[test]
fn test_config_serialize_canonical_names() {
    let mut cfg = QuantizeConfig::new(true, 8, 4);
    cfg.rounding = Some(RoundingPolicy::TowardZero);
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(json, r#"{"signed":true,"width":8,"frac_bits":4,"rounding":"fix"}"#);
    assert_eq!(QuantizeConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn test_config_invalid_width() {
    let cfg = QuantizeConfig::new(true, 0, 4);
    assert!(matches!(cfg.build(), Err(RtlSimError::InvalidFormat { width: 0, .. })));
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "signed": false, "width": 6, "frac_bits": 2, "overflow": "saturate" }}"#).unwrap();
    let q = QuantizeConfig::from_json_file(file.path()).unwrap().build().unwrap();
    assert_eq!(q.quantize(&34.1_f64), 15.75);

    assert!(QuantizeConfig::from_json_file(file.path().with_extension("missing")).is_err());
}
