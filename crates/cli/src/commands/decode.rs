// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use anyhow::Context;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use rtlsim::QuantizationEngine;

/// Reads each bit pattern back as a real value. Fails on the first malformed pattern.
pub fn decode_all(engine: &QuantizationEngine, patterns: &[String]) -> anyhow::Result<Vec<f64>> {
    patterns
        .iter()
        .map(|bits| {
            engine
                .from_bit_string(bits)
                .with_context(|| format!("Cannot decode {bits:?} as {}", engine.format()))
        })
        .collect()
}

pub fn render(engine: &QuantizationEngine, patterns: &[String]) -> anyhow::Result<String> {
    let values = decode_all(engine, patterns)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Bits", "Value"]);
    for (bits, value) in patterns.iter().zip(values) {
        table.add_row(vec![bits.clone(), value.to_string()]);
    }

    Ok(format!("{engine}\n{table}"))
}

pub fn run(engine: &QuantizationEngine, patterns: &[String]) -> anyhow::Result<()> {
    println!("{}", render(engine, patterns)?);
    Ok(())
}
