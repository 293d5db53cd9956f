// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! rtlsim: bit-exact fixed-point quantization matching RTL arithmetic.
//!
//! ```
//! use rtlsim::{QuantizationEngine, OverflowPolicy, RoundingPolicy};
//!
//! let q = QuantizationEngine::new(false, 6, 2, OverflowPolicy::Wrap, RoundingPolicy::Truncate).unwrap();
//! assert_eq!(q.quantize(&vec![1.23_f64, -1.2]), vec![1.0, 14.75]);
//! assert_eq!(q.to_bit_string(&-1.2_f64), "111011");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod policy;
pub mod quant;
pub mod quantize;
pub mod samples;

pub use config::QuantizeConfig;
pub use error::{Result, RtlSimError};
pub use format::{FixedPointFormat, FormatBounds};
pub use policy::{OverflowPolicy, RoundingPolicy};
pub use quant::Quantizer;
pub use quantize::{quantize, quantize_self, QuantizationEngine};
pub use samples::Samples;

#[cfg(test)]
pub mod tests;
