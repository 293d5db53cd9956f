// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

/// Scalar codec between real values and integer codewords.
pub trait Quantizer {
    type Code;

    /// Deterministically quantize one sample to its codeword.
    fn encode(&self, x: f64) -> Self::Code;

    /// Real value represented by a codeword.
    fn decode(&self, code: &Self::Code) -> f64;
}
