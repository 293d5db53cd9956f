// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Overflow and rounding policies.
//!
//! Names resolve through process-wide read-only tables, built once on first
//! lookup. Matching is case-insensitive.

use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RtlSimError};

/// Handling of values outside the representable codeword range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum OverflowPolicy {
    /// Keep the low `width` bits (default).
    Wrap = 0,
    /// Clamp to `[min_int, max_int]`.
    Saturate = 1,
}

/// Collapsing a scaled real value to an integer codeword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum RoundingPolicy {
    /// Drop the fractional bits (default). Same as `Floor` on two's complement.
    Truncate = 0,
    /// Round half away from zero.
    NearestAwayFromZero = 1,
    Floor = 2,
    Ceil = 3,
    TowardZero = 4,
}

static OVERFLOW_TABLE: OnceLock<FxHashMap<&'static str, OverflowPolicy>> = OnceLock::new();
static ROUNDING_TABLE: OnceLock<FxHashMap<&'static str, RoundingPolicy>> = OnceLock::new();

/// Name -> overflow policy.
pub fn overflow_table() -> &'static FxHashMap<&'static str, OverflowPolicy> {
    OVERFLOW_TABLE.get_or_init(|| {
        [("wrap", OverflowPolicy::Wrap), ("saturate", OverflowPolicy::Saturate)]
            .into_iter()
            .collect()
    })
}

/// Name -> rounding policy. `around`/`fix` are the short hardware names.
pub fn rounding_table() -> &'static FxHashMap<&'static str, RoundingPolicy> {
    ROUNDING_TABLE.get_or_init(|| {
        [
            ("truncate", RoundingPolicy::Truncate),
            ("around", RoundingPolicy::NearestAwayFromZero),
            ("nearest", RoundingPolicy::NearestAwayFromZero),
            ("floor", RoundingPolicy::Floor),
            ("ceil", RoundingPolicy::Ceil),
            ("fix", RoundingPolicy::TowardZero),
            ("toward_zero", RoundingPolicy::TowardZero),
        ]
        .into_iter()
        .collect()
    })
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Wrap => "wrap",
            OverflowPolicy::Saturate => "saturate",
        }
    }
}

impl RoundingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingPolicy::Truncate => "truncate",
            RoundingPolicy::NearestAwayFromZero => "around",
            RoundingPolicy::Floor => "floor",
            RoundingPolicy::Ceil => "ceil",
            RoundingPolicy::TowardZero => "fix",
        }
    }

    /// Rounds a scaled value to an integer-valued float.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            RoundingPolicy::Truncate | RoundingPolicy::Floor => x.floor(),
            RoundingPolicy::NearestAwayFromZero => x.round(),
            RoundingPolicy::Ceil => x.ceil(),
            RoundingPolicy::TowardZero => x.trunc(),
        }
    }

    /// Rounds `whole + frac` without forming the sum in f64. `frac` is the
    /// fractional part, in `[0, 1]` (1 only when f64 rounds it up).
    pub fn apply_split(&self, whole: i128, frac: f64) -> i128 {
        let up = match self {
            RoundingPolicy::Truncate | RoundingPolicy::Floor => false,
            RoundingPolicy::Ceil => frac > 0.0,
            // Ties go away from zero: up when the value is positive.
            RoundingPolicy::NearestAwayFromZero => frac > 0.5 || (frac == 0.5 && whole >= 0),
            RoundingPolicy::TowardZero => whole < 0 && frac > 0.0,
        };
        whole + up as i128
    }
}

impl Default for OverflowPolicy {
    fn default() -> Self {
        OverflowPolicy::Wrap
    }
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        RoundingPolicy::Truncate
    }
}

impl FromStr for OverflowPolicy {
    type Err = RtlSimError;

    fn from_str(name: &str) -> Result<Self> {
        overflow_table()
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| RtlSimError::InvalidPolicy {
                kind: "overflow",
                name: name.to_string(),
            })
    }
}

impl FromStr for RoundingPolicy {
    type Err = RtlSimError;

    fn from_str(name: &str) -> Result<Self> {
        rounding_table()
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| RtlSimError::InvalidPolicy {
                kind: "rounding",
                name: name.to_string(),
            })
    }
}

impl TryFrom<String> for OverflowPolicy {
    type Error = RtlSimError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl TryFrom<String> for RoundingPolicy {
    type Error = RtlSimError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl From<OverflowPolicy> for &'static str {
    fn from(p: OverflowPolicy) -> Self {
        p.as_str()
    }
}

impl From<RoundingPolicy> for &'static str {
    fn from(p: RoundingPolicy) -> Self {
        p.as_str()
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
