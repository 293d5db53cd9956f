// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use rtlsim::QuantizationEngine;

pub fn render(engine: &QuantizationEngine, verbose: bool, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(engine)?)
    } else {
        Ok(engine.describe(verbose))
    }
}

pub fn run(engine: &QuantizationEngine, verbose: bool, json: bool) -> anyhow::Result<()> {
    print!("{}", render(engine, verbose, json)?);
    Ok(())
}
