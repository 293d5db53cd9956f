// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtlSimError {
    /// Word width outside `1..=MAX_WIDTH` or `|frac_bits|` above `MAX_FRAC_BITS`.
    #[error("Invalid fixed-point format: width {width}, frac bits {frac_bits} ({reason})")]
    InvalidFormat {
        width: i64,
        frac_bits: i32,
        reason: &'static str,
    },

    /// Policy name not present in the lookup table.
    #[error("Invalid {kind} policy: {name:?}")]
    InvalidPolicy { kind: &'static str, name: String },

    /// In-place operation given something that is not a sequence.
    #[error("Type mismatch: expected a mutable sequence of samples, found {0}")]
    TypeMismatch(&'static str),

    #[error("Invalid bit string: {0}")]
    InvalidBitString(String),
}

pub type Result<T> = std::result::Result<T, RtlSimError>;
