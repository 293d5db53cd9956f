// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point quantization engine.

use core::fmt;

use serde::Serialize;

use crate::error::{Result, RtlSimError};
use crate::format::{FixedPointFormat, FormatBounds};
use crate::policy::{OverflowPolicy, RoundingPolicy};
use crate::quant::Quantizer;
use crate::samples::Samples;

/// A validated format plus its overflow and rounding policy.
///
/// Immutable after construction; bounds are computed once in [`Self::from_format`].
/// Share freely across threads.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct QuantizationEngine {
    format: FixedPointFormat,
    overflow: OverflowPolicy,
    rounding: RoundingPolicy,
    bounds: FormatBounds,
}

impl QuantizationEngine {
    pub fn new(
        signed: bool,
        width: i64,
        frac_bits: i32,
        overflow: OverflowPolicy,
        rounding: RoundingPolicy,
    ) -> Result<Self> {
        let format = FixedPointFormat::new(signed, width, frac_bits)?;
        Ok(Self::from_format(format, overflow, rounding))
    }

    /// Builds an engine from policy names, e.g. `"Saturate"` or `"around"`.
    pub fn with_names(
        signed: bool,
        width: i64,
        frac_bits: i32,
        overflow: &str,
        rounding: &str,
    ) -> Result<Self> {
        let format = FixedPointFormat::new(signed, width, frac_bits)?;
        Ok(Self::from_format(format, overflow.parse()?, rounding.parse()?))
    }

    pub fn from_format(
        format: FixedPointFormat,
        overflow: OverflowPolicy,
        rounding: RoundingPolicy,
    ) -> Self {
        tracing::debug!(
            "Built quantization engine {} (overflow={}, rounding={})",
            format,
            overflow,
            rounding
        );
        Self {
            format,
            overflow,
            rounding,
            bounds: format.bounds(),
        }
    }

    pub fn format(&self) -> &FixedPointFormat {
        &self.format
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    pub fn bounds(&self) -> &FormatBounds {
        &self.bounds
    }

    /// Quantizes to the nearest representable value (per policy), as a float.
    pub fn quantize<S: Samples + ?Sized>(&self, x: &S) -> S::Output<f64> {
        x.map_samples(&mut |v| self.quantize_scalar(v))
    }

    /// Alias of [`Self::quantize`].
    pub fn q<S: Samples + ?Sized>(&self, x: &S) -> S::Output<f64> {
        self.quantize(x)
    }

    pub fn to_signed_code<S: Samples + ?Sized>(&self, x: &S) -> S::Output<i128> {
        x.map_samples(&mut |v| self.signed_code(v))
    }

    /// Codewords as raw `width`-bit patterns in `[0, 2^width)`.
    pub fn to_unsigned_code<S: Samples + ?Sized>(&self, x: &S) -> S::Output<u64> {
        x.map_samples(&mut |v| self.unsigned_code(v))
    }

    /// Each sample as exactly `width` binary digits, MSB first.
    pub fn to_bit_string<S: Samples + ?Sized>(&self, x: &S) -> S::Output<String> {
        x.map_samples(&mut |v| self.bit_string(v))
    }

    /// Overwrites every element of `buffer` with its quantized value.
    ///
    /// Fails with [`RtlSimError::TypeMismatch`] when `buffer` is a lone scalar.
    pub fn quantize_self<S: Samples + ?Sized>(&self, buffer: &mut S) -> Result<()> {
        if S::IS_SCALAR {
            return Err(RtlSimError::TypeMismatch(std::any::type_name::<S>()));
        }
        tracing::trace!(
            "Quantizing {} samples in place as {}",
            buffer.sample_count(),
            self.format
        );
        buffer.for_each_sample_mut(&mut |v| *v = self.quantize_scalar(*v));
        Ok(())
    }

    /// Alias of [`Self::quantize_self`].
    pub fn qs<S: Samples + ?Sized>(&self, buffer: &mut S) -> Result<()> {
        self.quantize_self(buffer)
    }

    pub fn quantize_scalar(&self, x: f64) -> f64 {
        self.signed_code(x) as f64 / self.bounds.scale
    }

    /// Scale, apply overflow, then round. The result is always in `[min_int, max_int]`.
    pub fn signed_code(&self, x: f64) -> i128 {
        let b = &self.bounds;
        if x.is_nan() {
            tracing::warn!("NaN sample mapped to code 0 in {}", self.format);
            return 0;
        }
        let raw = x * b.scale;
        match self.overflow {
            OverflowPolicy::Saturate => {
                let clipped = raw.clamp(b.min_int as f64, b.max_int as f64);
                // i128 clamp absorbs f64 rounding of the bounds above 2^53.
                (self.rounding.apply(clipped) as i128).clamp(b.min_int, b.max_int)
            }
            OverflowPolicy::Wrap => {
                if raw.is_infinite() {
                    tracing::warn!("Infinite sample has no residue, mapped to code 0 in {}", self.format);
                    return 0;
                }
                let (whole, frac) = split_scaled(raw);
                let mut residue = whole.rem_euclid(b.modulus);
                // Re-center on the real residue `residue + frac`, by 2^width.
                if self.format.signed() && (residue > b.max_int || (residue == b.max_int && frac > 0.0)) {
                    residue -= b.modulus;
                }
                self.wrap_code(self.rounding.apply_split(residue, frac))
            }
        }
    }

    pub fn unsigned_code(&self, x: f64) -> u64 {
        let code = self.signed_code(x);
        let pattern = if code < 0 {
            code + self.bounds.modulus
        } else {
            code
        };
        pattern as u64
    }

    pub fn bit_string(&self, x: f64) -> String {
        format!(
            "{:0width$b}",
            self.unsigned_code(x),
            width = self.format.width() as usize
        )
    }

    /// Reads a `width`-digit bit pattern back as a real value.
    pub fn from_bit_string(&self, bits: &str) -> Result<f64> {
        if !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(RtlSimError::InvalidBitString(format!(
                "{bits:?} contains characters other than '0' and '1'"
            )));
        }
        let width = self.format.width() as usize;
        if bits.len() != width {
            return Err(RtlSimError::InvalidBitString(format!(
                "expected {width} bits, found {}",
                bits.len()
            )));
        }
        let pattern = u64::from_str_radix(bits, 2)
            .map_err(|e| RtlSimError::InvalidBitString(e.to_string()))?;
        let mut code = pattern as i128;
        if code > self.bounds.max_int {
            code -= self.bounds.modulus;
        }
        Ok(self.decode(&code))
    }

    /// Drops carry bits so that `code` lands in `[min_int, max_int]`.
    /// Re-centering subtracts `2^width`, not `range_int`.
    fn wrap_code(&self, code: i128) -> i128 {
        let b = &self.bounds;
        if (b.min_int..=b.max_int).contains(&code) {
            return code;
        }
        let residue = code.rem_euclid(b.modulus);
        if residue > b.max_int {
            residue - b.modulus
        } else {
            residue
        }
    }

    /// Human-readable summary; `verbose` adds every cached bound.
    pub fn describe(&self, verbose: bool) -> String {
        let f = &self.format;
        let mut out = format!("Fixed-point quantization {}\n", f);
        out.push_str(&format!(
            "  sign:      {}\n",
            if f.signed() { "signed" } else { "unsigned" }
        ));
        out.push_str(&format!("  width:     {}\n", f.width()));
        out.push_str(&format!("  frac bits: {}\n", f.frac_bits()));
        out.push_str(&format!("  overflow:  {}\n", self.overflow));
        out.push_str(&format!("  rounding:  {}\n", self.rounding));
        if verbose {
            let b = &self.bounds;
            out.push_str(&format!("  min int:   {}\n", b.min_int));
            out.push_str(&format!("  max int:   {}\n", b.max_int));
            out.push_str(&format!("  range int: {}\n", b.range_int));
            out.push_str(&format!("  min:       {}\n", b.min_value));
            out.push_str(&format!("  max:       {}\n", b.max_value));
            out.push_str(&format!("  range:     {}\n", b.value_range));
            out.push_str(&format!("  precision: {}\n", b.precision));
        }
        out
    }
}

/// Splits a finite scaled sample into `floor(raw)` and `raw - floor(raw)`.
///
/// Beyond 2^120 every f64 is a multiple of 2^64, so the residue modulo any
/// supported width is zero.
fn split_scaled(raw: f64) -> (i128, f64) {
    const EXACT_LIMIT: f64 = (1u128 << 120) as f64;
    if raw.abs() >= EXACT_LIMIT {
        return (0, 0.0);
    }
    let whole = raw.floor();
    (whole as i128, raw - whole)
}

impl Quantizer for QuantizationEngine {
    type Code = i128;

    fn encode(&self, x: f64) -> i128 {
        self.signed_code(x)
    }

    fn decode(&self, code: &i128) -> f64 {
        *code as f64 / self.bounds.scale
    }
}

impl fmt::Display for QuantizationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} overflow={} rounding={}",
            self.format, self.overflow, self.rounding
        )
    }
}

/// One-shot [`QuantizationEngine::quantize`] for callers without an engine.
pub fn quantize<S: Samples + ?Sized>(
    x: &S,
    signed: bool,
    width: i64,
    frac_bits: i32,
    overflow: OverflowPolicy,
    rounding: RoundingPolicy,
) -> Result<S::Output<f64>> {
    let engine = QuantizationEngine::new(signed, width, frac_bits, overflow, rounding)?;
    Ok(engine.quantize(x))
}

/// One-shot [`QuantizationEngine::quantize_self`].
pub fn quantize_self<S: Samples + ?Sized>(
    buffer: &mut S,
    signed: bool,
    width: i64,
    frac_bits: i32,
    overflow: OverflowPolicy,
    rounding: RoundingPolicy,
) -> Result<()> {
    QuantizationEngine::new(signed, width, frac_bits, overflow, rounding)?.quantize_self(buffer)
}
