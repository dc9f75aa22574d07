#![cfg(test)]
use std::collections::BTreeSet;

use cdpmap_common::topology::Endpoint;
use cdpmap_core::scanner::CaptureScanner;
use cdpmap_core::service::{TopologyReport, TopologyService};
use cdpmap_core::source::DirectoryCaptureSource;

use crate::support::{CaptureDir, SW1_CAPTURE, SW2_CAPTURE};

fn build(dir: &CaptureDir) -> anyhow::Result<TopologyReport> {
    TopologyService::new(
        Box::new(DirectoryCaptureSource::new(dir.path())),
        CaptureScanner::default(),
    )
    .build()
}

/// Both ends of one cable captured: a single link, two devices.
#[test]
fn two_switches_one_link() {
    let dir = CaptureDir::new("two-switches")
        .with("SW1.txt", SW1_CAPTURE)
        .with("SW2.txt", SW2_CAPTURE);

    let report = build(&dir).unwrap();

    assert_eq!(report.captures, 2);
    assert_eq!(report.raw.len(), 2);
    assert_eq!(report.topology.len(), 1);

    let (local, remote) = report.topology.iter().next().unwrap();
    assert_eq!(local, &Endpoint::new("SW1", "Gig 0/1"));
    assert_eq!(remote, &Endpoint::new("SW2", "Gig 0/24"));

    let nodes: BTreeSet<Option<&str>> = report.topology.nodes();
    assert_eq!(nodes, BTreeSet::from([Some("SW1"), Some("SW2")]));
}

#[test]
fn file_name_order_picks_surviving_direction() {
    let dir = CaptureDir::new("order")
        .with("a-SW2.txt", SW2_CAPTURE)
        .with("b-SW1.txt", SW1_CAPTURE);

    let report = build(&dir).unwrap();

    assert_eq!(report.topology.len(), 1);
    assert_eq!(
        report.topology.get(&Endpoint::new("SW2", "Gig 0/24")),
        Some(&Endpoint::new("SW1", "Gig 0/1"))
    );
}

#[test]
fn triangle_with_one_missing_capture() {
    let dir = CaptureDir::new("triangle")
        .with(
            "R1.txt",
            "R1>show cdp neighbors\n\
             SW1 Fas 0/0 150 R S I WS-C2960 Gig 0/2\n\
             SW2 Fas 0/1 150 R S I WS-C2960 Gig 0/2\n",
        )
        .with(
            "SW1.txt",
            "SW1>show cdp neighbors\n\
             R1 Gig 0/2 140 R B S I C2811 Fas 0/0\n\
             SW2 Gig 0/1 123 S I WS-C2960 Gig 0/24\n",
        );

    let report = build(&dir).unwrap();

    // R1-SW1 seen twice, R1-SW2 and SW1-SW2 only from one side.
    assert_eq!(report.raw.len(), 4);
    assert_eq!(report.topology.len(), 3);
    assert_eq!(report.topology.nodes().len(), 3);
    assert!(report.unnamed_captures.is_empty());
}

#[test]
fn captures_without_prompt_share_the_unnamed_device() {
    let dir = CaptureDir::new("unnamed")
        .with("a.txt", "SW2 Gig 0/1 123 R S I WS-C2960 Gig 0/24\n")
        .with("b.txt", "SW3 Gig 0/1 123 R S I WS-C2960 Gig 0/24\n");

    let report = build(&dir).unwrap();

    // Same local key, so the later capture overwrites the earlier one.
    assert_eq!(report.unnamed_captures.len(), 2);
    assert_eq!(report.topology.len(), 1);
    assert_eq!(
        report.topology.get(&Endpoint::unnamed("Gig 0/1")),
        Some(&Endpoint::new("SW3", "Gig 0/24"))
    );
}

#[test]
fn rerunning_gives_the_same_topology() {
    let dir = CaptureDir::new("rerun")
        .with("SW1.txt", SW1_CAPTURE)
        .with("SW2.txt", SW2_CAPTURE);

    assert_eq!(build(&dir).unwrap().topology, build(&dir).unwrap().topology);
}

#[test]
fn missing_source_directory_is_fatal() {
    let dir = CaptureDir::new("missing");
    let missing = dir.path().join("nope");

    let err = TopologyService::new(
        Box::new(DirectoryCaptureSource::new(&missing)),
        CaptureScanner::default(),
    )
    .build()
    .unwrap_err();

    assert!(format!("{err:#}").contains("does not exist"), "unexpected error: {err:#}");
}

#[test]
fn empty_directory_gives_empty_topology() {
    let dir = CaptureDir::new("empty");
    let report = build(&dir).unwrap();

    assert_eq!(report.captures, 0);
    assert!(report.topology.is_empty());
}
