use cdpmap_common::config::Config;
use cdpmap_common::topology::AdjacencyMapping;
use cdpmap_core::service::TopologyReport;
use colored::*;

use crate::commands::build_report;
use crate::mprint;
use crate::terminal::{colors, format, print};

type Detail = (String, ColoredString);

pub fn links(cfg: &Config, raw: bool) -> anyhow::Result<()> {
    let report: TopologyReport = build_report(cfg)?;

    if raw {
        print::header("raw observations", cfg.quiet);
        print_grouped(&report.raw);
        mprint!();
    }

    if report.topology.is_empty() {
        print::header("zero links", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    print::header("links", cfg.quiet);
    print_grouped(report.topology.as_mapping());
    mprint!();

    let nodes = report.topology.nodes();
    print::aligned_line("Devices", format::node_list(nodes.iter().copied()), 7);
    print::aligned_line(
        "Links",
        report.topology.len().to_string().color(colors::ACCENT),
        7,
    );
    if !report.unnamed_captures.is_empty() {
        print::aligned_line(
            "Unnamed",
            report.unnamed_captures.join(", ").color(colors::UNNAMED),
            7,
        );
    }
    print::end_of_program();
    Ok(())
}

/// One tree per local device, in the order devices first appear.
fn print_grouped(mapping: &AdjacencyMapping) {
    let mut groups: Vec<(Option<&str>, Vec<Detail>)> = Vec::new();
    for (local, remote) in mapping {
        let detail = format::link_to_detail(local, remote);
        match groups.iter_mut().find(|(device, _)| *device == local.device()) {
            Some((_, details)) => details.push(detail),
            None => groups.push((local.device(), vec![detail])),
        }
    }

    for (idx, (device, details)) in groups.into_iter().enumerate() {
        print::tree_head(idx, format::device(device));
        print::as_tree_one_level(details);
    }
}
