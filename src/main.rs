mod config;
mod error;
mod export;
mod metadata;
mod processor;
mod scanner;
mod tally;
mod walker;

#[cfg(test)]
mod test_support;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::scanner::{ScanOptions, ScanReport};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Tally camera models, lens models and 35mm-equivalent focal lengths
/// across a photo archive, and write each tally to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "exif-census")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Image file or directory to scan recursively
    path: PathBuf,

    /// Directory the CSV files are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Extra configuration file layered over the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Count byte-identical files only once
    #[arg(long)]
    dedup: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = cli.output_dir {
        config.output_directory = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.dedup |= cli.dedup;

    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    info!(">>>>>>>>>>>>>>>>>>>>  Task Started  >>>>>>>>>>>>>>>>>>>>");

    match run(&cli.path, &config) {
        Ok(report) => {
            info!(
                "<<<<<<<<<<<<<<<<<<<<  Task completed ({} files processed)  <<<<<<<<<<<<<<<<<<<<",
                report.files_visited
            );
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<AppError>() {
            Some(AppError::InvalidInput(path)) => {
                eprintln!(
                    "{:?} is not a file or directory.\nUsage: exif-census <PATH>",
                    path
                );
                ExitCode::from(2)
            }
            _ => {
                log::error!("{:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(root: &Path, config: &AppConfig) -> Result<ScanReport> {
    let options = ScanOptions {
        dedup: config.dedup,
    };
    let report = scanner::scan(root, options)?;

    print_table("Camera models", &report.tallies.models);
    print_table("Lens models", &report.tallies.lenses);
    print_table("Focal lengths (35mm equivalent)", &report.tallies.focal_lengths);

    let written = export::write_reports(&report.tallies, &config.output_directory)
        .with_context(|| {
            format!(
                "Failed to write reports to {:?}",
                config.output_directory
            )
        })?;
    for path in &written {
        info!("Wrote {}", path.display());
    }

    Ok(report)
}

fn print_table<K: std::fmt::Display>(title: &str, table: &tally::FrequencyTable<K>) {
    println!("{} ({} tagged files):", title, table.total());
    println!("{}", table);
}
