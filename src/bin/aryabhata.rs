use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lib_aryabhata::number_theory::digit_pair_square_root::aryabhata_square_root;
use lib_aryabhata::number_theory::radicand::{normalize_digit_count, normalize_radicand};
use lib_aryabhata::prelude::ErrorsAryabhata;
use lib_aryabhata::presentation::root_identity::RootIdentity;
use lib_aryabhata::presentation::scaled_decimal::format_scaled_decimal;
use tracing_subscriber::EnvFilter;

/// Exit status for rejected arguments, same as clap's own usage errors.
const USAGE_ERROR: u8 = 2;
const RUNTIME_ERROR: u8 = 1;

/// Aryabhata digit-pair square root calculator
#[derive(Debug, Parser)]
#[command(name = "aryabhata", version, about)]
struct Cli{
    /// Integer radicand
    #[arg(allow_negative_numbers = true)]
    n: String,

    /// Number of fractional digits to compute
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    digits: i64,

    /// Show the raw scaled root, the remainder and the exact identity
    #[arg(long)]
    debug: bool,
}

fn run(cli: Cli) -> anyhow::Result<()>{
    let digits = normalize_digit_count(cli.digits)?;
    let radicand = normalize_radicand(cli.n.as_str())?;
    let result = aryabhata_square_root(&radicand, digits)
        .with_context(|| format!("square root of {radicand} to {digits} digits"))?;

    println!("{}", format_scaled_decimal(&result.0, digits)?);
    if cli.debug{
        println!("{}", RootIdentity::new(radicand, digits, result)?);
    }
    Ok(())
}

fn main() -> ExitCode{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli){
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            // Inputs that fail normalization are usage errors
            if e.downcast_ref::<ErrorsAryabhata>().is_some(){
                ExitCode::from(USAGE_ERROR)
            }else{
                ExitCode::from(RUNTIME_ERROR)
            }
        }
    }
}
