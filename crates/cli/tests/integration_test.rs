use std::io::Write;

use rtlsim_cli::commands::{decode, info, quantize};
use rtlsim_cli::engine::FormatArgs;

const SAMPLES: [f64; 7] = [1.23, -1.2, 34.1, 0.0, 3.26, 1.0, -2.34];

fn u6_2() -> FormatArgs {
    FormatArgs {
        width: Some(6),
        frac: Some(2),
        ..Default::default()
    }
}

#[test]
fn test_quantize_rows() {
    let engine = u6_2().resolve().unwrap();
    let rows = quantize::rows(&engine, &SAMPLES);
    let quantized: Vec<f64> = rows.iter().map(|r| r.quantized).collect();
    let bits: Vec<&str> = rows.iter().map(|r| r.bits.as_str()).collect();
    assert_eq!(quantized, vec![1.0, 14.75, 2.0, 0.0, 3.25, 1.0, 13.5]);
    assert_eq!(bits, vec!["000100", "111011", "001000", "000000", "001101", "000100", "110110"]);
    assert_eq!(rows[1].unsigned_code, 59);
}

#[test]
fn test_quantize_render() {
    let engine = u6_2().resolve().unwrap();
    let table = quantize::render(&engine, &SAMPLES, false).unwrap();
    assert!(table.contains("u6.2 overflow=wrap rounding=truncate"));
    assert!(table.contains("111011"));

    let json = quantize::render(&engine, &SAMPLES, true).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 7);
    assert_eq!(parsed[2]["quantized"], 2.0);
    assert_eq!(parsed[6]["bits"], "110110");
}

#[test]
fn test_saturate_flag() {
    let args = FormatArgs {
        overflow: Some("Saturate".into()),
        ..u6_2()
    };
    let engine = args.resolve().unwrap();
    let rows = quantize::rows(&engine, &SAMPLES);
    assert_eq!(rows[2].quantized, 15.75);
    assert_eq!(rows[1].quantized, 0.0);
}

#[test]
fn test_resolve_errors() {
    assert!(FormatArgs::default().resolve().is_err(), "width is required");

    let bad_width = FormatArgs { width: Some(0), ..Default::default() };
    assert!(bad_width.resolve().is_err());

    let bad_policy = FormatArgs { rounding: Some("sideways".into()), ..u6_2() };
    let err = bad_policy.resolve().unwrap_err();
    assert!(err.to_string().contains("sideways"));
}

#[test]
fn test_config_file_with_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "signed": true, "width": 3, "frac_bits": -1 }}"#).unwrap();

    let args = FormatArgs { config: Some(file.path().to_path_buf()), ..Default::default() };
    let engine = args.resolve().unwrap();
    assert_eq!(quantize::rows(&engine, &[3.1415926])[0].quantized, 2.0);

    let args = FormatArgs {
        config: Some(file.path().to_path_buf()),
        overflow: Some("saturate".into()),
        ..Default::default()
    };
    let engine = args.resolve().unwrap();
    assert_eq!(quantize::rows(&engine, &[100.0])[0].quantized, 6.0);
}

#[test]
fn test_info() {
    let engine = u6_2().resolve().unwrap();
    let text = info::render(&engine, true, false).unwrap();
    assert!(text.contains("max:       15.75"));

    let json = info::render(&engine, false, true).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["overflow"], "wrap");
    assert_eq!(parsed["format"]["width"], 6);
}

#[test]
fn test_decode() {
    let engine = u6_2().resolve().unwrap();
    let values = decode::decode_all(&engine, &["111011".into(), "110110".into()]).unwrap();
    assert_eq!(values, vec![14.75, 13.5]);

    assert!(decode::render(&engine, &["11101".into()]).is_err());
}

#[test]
fn test_unsigned_flag_overrides_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "signed": true, "width": 6, "frac_bits": 2 }}"#).unwrap();

    let from_file = FormatArgs { config: Some(file.path().to_path_buf()), ..Default::default() };
    assert!(from_file.resolve().unwrap().format().signed());

    let args = FormatArgs { unsigned: true, ..from_file.clone() };
    let engine = args.resolve().unwrap();
    assert!(!engine.format().signed());
    assert_eq!(quantize::rows(&engine, &[-1.2])[0].quantized, 14.75);
}
