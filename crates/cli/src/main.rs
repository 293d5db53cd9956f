// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::{Parser, Subcommand};
use rtlsim_cli::commands::{decode, info, quantize};
use rtlsim_cli::engine::FormatArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rtlsim")]
#[command(about = "Bit-exact fixed-point quantization, as the RTL would compute it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize values and show codewords and bit strings
    Quantize {
        #[command(flatten)]
        format: FormatArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Samples to quantize
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Describe the format and its bounds
    Info {
        #[command(flatten)]
        format: FormatArgs,

        /// Also report integer and real-valued bounds
        #[arg(long, short)]
        verbose: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Read bit strings back as real values
    Decode {
        #[command(flatten)]
        format: FormatArgs,

        /// Bit strings, exactly `width` digits each
        #[arg(required = true)]
        bits: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "rtlsim=info,rtlsim_cli=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Quantize { format, json, values } => {
            quantize::run(&format.resolve()?, &values, json)
        }
        Commands::Info { format, verbose, json } => info::run(&format.resolve()?, verbose, json),
        Commands::Decode { format, bits } => decode::run(&format.resolve()?, &bits),
    }
}
