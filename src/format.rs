// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point format math.
//!
//! Every bound is a pure function of the `(signed, width, frac_bits)` triple.
//! `width` must already be validated (`1..=MAX_WIDTH`, `|frac_bits| <= MAX_FRAC_BITS`); [`FixedPointFormat::new`]
//! is the only checked entry point.

use core::fmt;

use serde::Serialize;

use crate::config::{MAX_FRAC_BITS, MAX_WIDTH};
use crate::error::{Result, RtlSimError};

/// Smallest codeword (disregarding `frac_bits`).
pub fn min_int(signed: bool, width: u32) -> i128 {
    debug_assert!(width > 0 && width <= MAX_WIDTH);
    if signed {
        -(1i128 << (width - 1))
    } else {
        0
    }
}

/// Largest codeword (disregarding `frac_bits`).
pub fn max_int(signed: bool, width: u32) -> i128 {
    debug_assert!(width > 0 && width <= MAX_WIDTH);
    if signed {
        (1i128 << (width - 1)) - 1
    } else {
        (1i128 << width) - 1
    }
}

pub fn range_int(signed: bool, width: u32) -> i128 {
    max_int(signed, width) - min_int(signed, width)
}

/// Number of distinct codewords, `2^width`. Used for wraparound and re-centering.
pub fn modulus(width: u32) -> i128 {
    1i128 << width
}

/// `2^frac_bits`: the factor from real value to codeword.
pub fn scale(frac_bits: i32) -> f64 {
    2f64.powi(frac_bits)
}

/// Weight of one LSB, `2^-frac_bits`. Greater than one for negative `frac_bits`.
pub fn precision(frac_bits: i32) -> f64 {
    2f64.powi(-frac_bits)
}

pub fn min_value(signed: bool, width: u32, frac_bits: i32) -> f64 {
    min_int(signed, width) as f64 * precision(frac_bits)
}

pub fn max_value(signed: bool, width: u32, frac_bits: i32) -> f64 {
    max_int(signed, width) as f64 * precision(frac_bits)
}

pub fn value_range(signed: bool, width: u32, frac_bits: i32) -> f64 {
    max_value(signed, width, frac_bits) - min_value(signed, width, frac_bits)
}

/// Sign bit, word width `W` and fractional width `F` of a fixed-point number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FixedPointFormat {
    signed: bool,
    width: u32,
    frac_bits: i32,
}

impl FixedPointFormat {
    pub fn new(signed: bool, width: i64, frac_bits: i32) -> Result<Self> {
        if width <= 0 {
            return Err(RtlSimError::InvalidFormat {
                width,
                frac_bits,
                reason: "width must be positive",
            });
        }
        if width > MAX_WIDTH as i64 {
            return Err(RtlSimError::InvalidFormat {
                width,
                frac_bits,
                reason: "width exceeds 64 bits",
            });
        }
        if frac_bits.unsigned_abs() > MAX_FRAC_BITS as u32 {
            return Err(RtlSimError::InvalidFormat {
                width,
                frac_bits,
                reason: "frac bits outside +/-512",
            });
        }
        Ok(Self {
            signed,
            width: width as u32,
            frac_bits,
        })
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn frac_bits(&self) -> i32 {
        self.frac_bits
    }

    /// Evaluates every bound for this format.
    pub fn bounds(&self) -> FormatBounds {
        let (s, w, f) = (self.signed, self.width, self.frac_bits);
        FormatBounds {
            min_int: min_int(s, w),
            max_int: max_int(s, w),
            range_int: range_int(s, w),
            modulus: modulus(w),
            min_value: min_value(s, w, f),
            max_value: max_value(s, w, f),
            value_range: value_range(s, w, f),
            precision: precision(f),
            scale: scale(f),
        }
    }
}

impl fmt::Display for FixedPointFormat {
    /// `s8.4` for signed 8-bit with 4 fractional bits, `u6.2` for unsigned.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.signed { 's' } else { 'u' };
        write!(f, "{}{}.{}", sign, self.width, self.frac_bits)
    }
}

/// Cached bounds of a [`FixedPointFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FormatBounds {
    pub min_int: i128,
    pub max_int: i128,
    pub range_int: i128,
    pub modulus: i128,
    pub min_value: f64,
    pub max_value: f64,
    pub value_range: f64,
    pub precision: f64,
    pub scale: f64,
}
