pub mod links;
pub mod map;
pub mod scan;

use std::path::PathBuf;

use anyhow::Context;
use cdpmap_common::config::{Config, DEFAULT_MARKER, DEFAULT_OUTPUT, DEFAULT_SOURCE_DIR};
use cdpmap_common::render::OutputFormat;
use cdpmap_core::scanner::{CaptureScanner, ScanOptions};
use cdpmap_core::service::{TopologyReport, TopologyService};
use cdpmap_core::source::DirectoryCaptureSource;
use clap::{ArgAction, Parser, Subcommand};

use crate::terminal::spinner;

#[derive(Parser)]
#[command(name = "cdpmap")]
#[command(about = "Draws a network map from CDP neighbor captures.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output, repeat for even less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output, repeat for trace level
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Phrase identifying the prompt line that names the device
    #[arg(long, global = true, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Only accept neighbor rows with a numeric hold time
    #[arg(long, global = true)]
    pub strict_hold_time: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the topology and render it with graphviz
    #[command(alias = "m")]
    Map {
        /// Directory with one capture file per device
        #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
        source_directory: PathBuf,
        /// Output path without extension
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// svg, png, pdf or dot
        #[arg(short, long, default_value = "svg")]
        format: OutputFormat,
    },
    /// List the deduplicated links
    #[command(alias = "l")]
    Links {
        /// Directory with one capture file per device
        #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
        source_directory: PathBuf,
        /// Also list every directed observation before deduplication
        #[arg(long)]
        raw: bool,
    },
    /// Show how a single capture is segmented
    #[command(alias = "s")]
    Scan { file: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn base_config(&self) -> Config {
        Config {
            marker: self.marker.clone(),
            strict_hold_time: self.strict_hold_time,
            quiet: self.quiet,
            ..Config::default()
        }
    }
}

/// Runs the topology service over `cfg.source_dir` with a progress spinner.
pub fn build_report(cfg: &Config) -> anyhow::Result<TopologyReport> {
    let source = Box::new(DirectoryCaptureSource::new(&cfg.source_dir));
    let scanner = CaptureScanner::new(ScanOptions::from(cfg));
    let mut service = TopologyService::new(source, scanner);
    if cfg.quiet == 0 {
        spinner::get_spinner().set_message("Reading captures...");
        service = service.with_progress(Box::new(spinner::report_capture_progress));
    }

    let report = service
        .build()
        .with_context(|| format!("Could not map captures in {}", cfg.source_dir.display()));
    spinner::finish();
    report
}
