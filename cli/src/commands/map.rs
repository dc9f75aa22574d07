use std::time::{Duration, Instant};

use anyhow::Context;
use cdpmap_common::config::Config;
use cdpmap_common::render::TopologyRenderer;
use cdpmap_core::render::GraphvizRenderer;
use cdpmap_core::service::TopologyReport;
use colored::*;
use tracing::warn;

use crate::commands::build_report;
use crate::mprint;
use crate::terminal::{colors, print};

pub fn map(cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let report: TopologyReport = build_report(cfg)?;

    if report.topology.is_empty() {
        print::header("empty topology", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    let renderer = GraphvizRenderer::new(&cfg.output, cfg.format);
    let written = renderer
        .render(&report.topology)
        .with_context(|| format!("Failed to render topology to {}", cfg.output.display()))?;

    print_summary(&report, start_time.elapsed(), cfg);
    print::aligned_line("Saved", written.display().to_string().color(colors::ACCENT), 5);
    Ok(())
}

fn print_summary(report: &TopologyReport, total_time: Duration, cfg: &Config) {
    for path in &report.unnamed_captures {
        warn!("{path} has no device prompt; its links share one unnamed node");
    }

    let links: ColoredString = format!("{} links", report.topology.len()).bold().green();
    let nodes: ColoredString = format!("{} devices", report.topology.nodes().len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!(
        "Mapped {links} between {nodes} from {} captures in {total_time}",
        report.captures
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::fat_separator();
        }
        _ => {
            mprint!(&output);
        }
    }
}
