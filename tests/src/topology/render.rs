#![cfg(test)]
use std::fs;

use cdpmap_common::render::{OutputFormat, TopologyRenderer};
use cdpmap_core::render::{DotRenderer, GraphvizRenderer};
use cdpmap_core::scanner::CaptureScanner;
use cdpmap_core::service::TopologyService;
use cdpmap_core::source::DirectoryCaptureSource;

use crate::support::{CaptureDir, SW1_CAPTURE, SW2_CAPTURE};

#[test]
fn dot_file_has_one_edge_per_link() {
    let dir = CaptureDir::new("render-dot")
        .with("SW1.txt", SW1_CAPTURE)
        .with("SW2.txt", SW2_CAPTURE);
    let report = TopologyService::new(
        Box::new(DirectoryCaptureSource::new(dir.path().to_path_buf())),
        CaptureScanner::default(),
    )
    .build()
    .unwrap();

    let out_dir = CaptureDir::new("render-dot-out");
    let written = DotRenderer::new(out_dir.path().join("img/topology"))
        .render(&report.topology)
        .unwrap();
    let dot = fs::read_to_string(&written).unwrap();

    assert_eq!(written, out_dir.path().join("img/topology.dot"));
    assert_eq!(dot.matches(" -- ").count(), 1);
    assert!(dot.contains("\"SW1\" -- \"SW2\" [taillabel=\"Gig 0/1\", headlabel=\"Gig 0/24\""));
    assert!(dot.contains("label=\"Network Map\""));
}

#[test]
fn graphviz_renderer_in_dot_mode_writes_source_only() {
    let out_dir = CaptureDir::new("render-gv");
    let renderer = GraphvizRenderer::new(out_dir.path().join("map"), OutputFormat::Dot);

    let written = renderer.render(&Default::default()).unwrap();

    assert_eq!(written, out_dir.path().join("map.dot"));
    assert!(!out_dir.path().join("map.svg").exists());
}
