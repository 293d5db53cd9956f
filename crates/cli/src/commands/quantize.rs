// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use rtlsim::QuantizationEngine;

#[derive(Debug, Serialize)]
pub struct QuantizedRow {
    pub input: f64,
    pub quantized: f64,
    pub signed_code: i128,
    pub unsigned_code: u64,
    pub bits: String,
}

pub fn rows(engine: &QuantizationEngine, values: &[f64]) -> Vec<QuantizedRow> {
    let quantized = engine.quantize(values);
    let signed = engine.to_signed_code(values);
    let unsigned = engine.to_unsigned_code(values);
    let bits = engine.to_bit_string(values);

    values
        .iter()
        .zip(quantized)
        .zip(signed)
        .zip(unsigned)
        .zip(bits)
        .map(|((((&input, quantized), signed_code), unsigned_code), bits)| QuantizedRow {
            input,
            quantized,
            signed_code,
            unsigned_code,
            bits,
        })
        .collect()
}

pub fn render(engine: &QuantizationEngine, values: &[f64], json: bool) -> anyhow::Result<String> {
    let rows = rows(engine, values);
    if json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Input", "Quantized", "Signed", "Unsigned", "Bits"]);

    for row in rows {
        table.add_row(vec![
            row.input.to_string(),
            row.quantized.to_string(),
            row.signed_code.to_string(),
            row.unsigned_code.to_string(),
            row.bits,
        ]);
    }

    Ok(format!("{engine}\n{table}"))
}

pub fn run(engine: &QuantizationEngine, values: &[f64], json: bool) -> anyhow::Result<()> {
    println!("{}", render(engine, values, json)?);
    Ok(())
}
