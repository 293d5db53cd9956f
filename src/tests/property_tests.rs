// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::policy::{OverflowPolicy, RoundingPolicy};
use crate::quantize::QuantizationEngine;

const OVERFLOWS: [OverflowPolicy; 2] = [OverflowPolicy::Wrap, OverflowPolicy::Saturate];
const ROUNDINGS: [RoundingPolicy; 5] = [
    RoundingPolicy::Truncate,
    RoundingPolicy::NearestAwayFromZero,
    RoundingPolicy::Floor,
    RoundingPolicy::Ceil,
    RoundingPolicy::TowardZero,
];

fn inputs() -> Vec<f64> {
    let mut xs: Vec<f64> = (-400..=400).map(|i| i as f64 * 0.37).collect();
    xs.extend([0.0, -0.0, 1e-9, -1e-9, 0.5, -0.5, 1e6, -1e6, 123456.789]);
    xs
}

/// Widest format whose every codeword is exact in f64.
const EXACT_WIDTH: u32 = 53;

/// Every (format, overflow, rounding) combination over a small grid.
fn engines() -> Vec<QuantizationEngine> {
    let mut out = Vec::new();
    for signed in [false, true] {
        for width in [1, 2, 3, 6, 8, 13, 54, 60, 64] {
            for frac in [-3, -1, 0, 2, 5, 9] {
                for overflow in OVERFLOWS {
                    for rounding in ROUNDINGS {
                        out.push(
                            QuantizationEngine::new(signed, width, frac, overflow, rounding).unwrap(),
                        );
                    }
                }
            }
        }
    }
    out
}

#[test]
fn test_bit_string_width() {
    let xs = inputs();
    for q in engines() {
        let w = q.format().width() as usize;
        for bits in q.to_bit_string(&xs) {
            assert_eq!(bits.len(), w, "{q}");
            assert!(bits.bytes().all(|b| b == b'0' || b == b'1'), "{q}: {bits}");
        }
    }
}

#[test]
fn test_quantize_idempotent() {
    let xs = inputs();
    for q in engines().into_iter().filter(|q| q.format().width() <= EXACT_WIDTH) {
        let once = q.quantize(&xs);
        let twice = q.quantize(&once);
        assert_eq!(once, twice, "{q}");
    }
}

#[test]
fn test_saturate_within_bounds() {
    let xs = inputs();
    for q in engines().into_iter().filter(|q| q.overflow() == OverflowPolicy::Saturate) {
        let b = *q.bounds();
        for y in q.quantize(&xs) {
            assert!(b.min_value <= y && y <= b.max_value, "{q}: {y}");
        }
    }
}

#[test]
fn test_codes_within_bounds() {
    let xs = inputs();
    for q in engines() {
        let b = *q.bounds();
        for code in q.to_signed_code(&xs) {
            assert!(b.min_int <= code && code <= b.max_int, "{q}: {code}");
        }
        for code in q.to_unsigned_code(&xs) {
            assert!((code as i128) < b.modulus, "{q}: {code}");
        }
    }
}

#[test]
fn test_representable_values_pass_through() {
    for q in engines().into_iter().filter(|q| q.format().width() <= EXACT_WIDTH) {
        let b = *q.bounds();
        let step = ((b.range_int / 50).max(1)) as usize;
        for code in (b.min_int..=b.max_int).step_by(step) {
            let x = code as f64 * b.precision;
            assert_eq!(q.to_signed_code(&x), code, "{q}");
            assert_eq!(q.quantize(&x), x, "{q}");
        }
    }
}

#[test]
fn test_truncate_matches_floor() {
    let xs = inputs();
    for overflow in OVERFLOWS {
        let t = QuantizationEngine::new(true, 8, 3, overflow, RoundingPolicy::Truncate).unwrap();
        let f = QuantizationEngine::new(true, 8, 3, overflow, RoundingPolicy::Floor).unwrap();
        assert_eq!(t.to_signed_code(&xs), f.to_signed_code(&xs));
    }
}

#[test]
fn test_wide_signed_idempotent() {
    // Signed codes of these inputs stay far below 2^53, so they are exact at any width.
    let xs = inputs();
    for q in engines()
        .into_iter()
        .filter(|q| q.format().signed() && q.format().width() > EXACT_WIDTH)
    {
        let once = q.quantize(&xs);
        assert_eq!(q.quantize(&once), once, "{q}");
    }
}
