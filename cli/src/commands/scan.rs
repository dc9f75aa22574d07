use std::fs;
use std::path::Path;

use anyhow::Context;
use cdpmap_common::config::Config;
use cdpmap_core::scanner::{CaptureScanner, NeighborRow, ScanOptions};
use colored::*;

use crate::terminal::{colors, format, print};

pub fn scan(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let scanner = CaptureScanner::new(ScanOptions::from(cfg));
    let device = scanner.extract_device_name(text.lines());
    let rows: Vec<NeighborRow> = scanner.rows(&text).collect();

    print::header("capture", cfg.quiet);
    print::aligned_line("File", file.display().to_string().color(colors::TEXT_DEFAULT), 6);
    print::aligned_line("Device", format::device(device.as_deref()), 6);
    print::aligned_line("Rows", rows.len().to_string().color(colors::ACCENT), 6);

    if rows.is_empty() {
        print::no_results();
        return Ok(());
    }

    print::header("neighbors", cfg.quiet);
    for (idx, row) in rows.iter().enumerate() {
        print::tree_head(idx, format::device(Some(row.remote_device)));
        print::as_tree_one_level(row_details(row));
    }
    print::end_of_program();
    Ok(())
}

fn row_details(row: &NeighborRow) -> Vec<(String, ColoredString)> {
    vec![
        ("Local".to_string(), format::interface(&row.local_interface)),
        ("Remote".to_string(), format::interface(&row.remote_interface)),
        ("Hold".to_string(), row.hold_time.normal()),
        ("Caps".to_string(), row.capability.join(" ").normal()),
        ("Platform".to_string(), row.platform.color(colors::ACCENT)),
    ]
}
