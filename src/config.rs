// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants and the serializable engine description.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::policy::{OverflowPolicy, RoundingPolicy};
use crate::quantize::QuantizationEngine;

/// Widest supported word. Signed codewords are held in `i128`, unsigned in `u64`.
pub const MAX_WIDTH: u32 = 64;

/// Largest `|frac_bits|`. Keeps `2^frac_bits` and the real-valued bounds of a
/// 64-bit word finite and normal in f64.
pub const MAX_FRAC_BITS: i32 = 512;

/// Overflow behavior used when none is named.
pub const DEFAULT_OVERFLOW: OverflowPolicy = OverflowPolicy::Wrap;

/// Rounding behavior used when none is named.
pub const DEFAULT_ROUNDING: RoundingPolicy = RoundingPolicy::Truncate;

/// An engine described as data, e.g. loaded from a JSON file.
///
/// ```json
/// { "signed": false, "width": 6, "frac_bits": 2, "overflow": "Saturate" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantizeConfig {
    pub signed: bool,
    pub width: i64,
    pub frac_bits: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<OverflowPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<RoundingPolicy>,
}

impl QuantizeConfig {
    pub fn new(signed: bool, width: i64, frac_bits: i32) -> Self {
        Self {
            signed,
            width,
            frac_bits,
            overflow: None,
            rounding: None,
        }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(std::io::Error::from)
    }

    /// Validates the format and builds the engine.
    pub fn build(&self) -> Result<QuantizationEngine> {
        QuantizationEngine::new(
            self.signed,
            self.width,
            self.frac_bits,
            self.overflow.unwrap_or(DEFAULT_OVERFLOW),
            self.rounding.unwrap_or(DEFAULT_ROUNDING),
        )
    }
}
