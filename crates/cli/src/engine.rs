// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rtlsim::{QuantizationEngine, QuantizeConfig};

/// Format and policy selection shared by every subcommand.
///
/// Inline flags override the matching fields of `--config`; `--signed` and
/// `--unsigned` override its `signed` field.
#[derive(Args, Debug, Clone, Default)]
pub struct FormatArgs {
    /// JSON file describing the format ({"signed", "width", "frac_bits", "overflow", "rounding"})
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Treat the MSB as a sign bit
    #[arg(long, short, conflicts_with = "unsigned")]
    pub signed: bool,

    /// Treat every bit as magnitude (the default without --config)
    #[arg(long, short)]
    pub unsigned: bool,

    /// Word bit width
    #[arg(long, short)]
    pub width: Option<i64>,

    /// Fractional bit width (may be negative)
    #[arg(long, short, allow_negative_numbers = true)]
    pub frac: Option<i32>,

    /// Overflow behavior: wrap | saturate
    #[arg(long)]
    pub overflow: Option<String>,

    /// Rounding behavior: truncate | around | floor | ceil | fix
    #[arg(long)]
    pub rounding: Option<String>,
}

impl FormatArgs {
    pub fn resolve(&self) -> Result<QuantizationEngine> {
        let mut cfg = match &self.config {
            Some(path) => QuantizeConfig::from_json_file(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => {
                let width = self
                    .width
                    .context("--width is required when no --config is given")?;
                QuantizeConfig::new(self.signed, width, self.frac.unwrap_or(0))
            }
        };

        if self.config.is_some() {
            if self.signed {
                cfg.signed = true;
            } else if self.unsigned {
                cfg.signed = false;
            }
            if let Some(width) = self.width {
                cfg.width = width;
            }
            if let Some(frac) = self.frac {
                cfg.frac_bits = frac;
            }
        }
        if let Some(name) = &self.overflow {
            cfg.overflow = Some(name.parse()?);
        }
        if let Some(name) = &self.rounding {
            cfg.rounding = Some(name.parse()?);
        }

        let engine = cfg.build()?;
        tracing::info!("Using {}", engine);
        Ok(engine)
    }
}
