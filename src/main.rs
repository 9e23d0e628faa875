//! `bmpvox`: bitmap slice stack to hexahedral lattice.
#![forbid(unsafe_code)]

mod cli;
mod run;

use std::process::ExitCode;

use bmpvox_io::RunConfig;
use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let base = match &cli.config {
        Some(path) => match RunConfig::from_path(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => RunConfig::default(),
    };
    let cfg = cli.apply(base);

    let default_level = if cfg.silent { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    if let Some(path) = &cli.config {
        log::info!("settings loaded from {:?}", path);
    }

    match run::run(&cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}. Use --help.", e);
            ExitCode::FAILURE
        }
    }
}
