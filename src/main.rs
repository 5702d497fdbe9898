use clap::Parser;
use color_eyre::Result;

use histoprobe::cli::Cli;
use histoprobe::verify;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Diagnostics go to stderr via RUST_LOG; the summary stays clean on stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();

    let report = verify::run(&config)?;
    println!("{}", report);

    Ok(())
}
