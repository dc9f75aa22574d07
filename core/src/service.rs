//! # Topology Service
//!
//! Implements the "map the network" use case.
//!
//! Reads every capture from a [`CaptureSource`], scans them one at a time and
//! merges the results into a [`LinkRegistry`] in source order, then runs the
//! canonicalization pass once.

use std::path::Path;

use anyhow::Context;
use cdpmap_common::source::CaptureSource;
use cdpmap_common::topology::{AdjacencyMapping, Topology};
use tracing::{info, warn};

use crate::registry::LinkRegistry;
use crate::scanner::CaptureScanner;

/// Called after each capture is merged with its 1-based position and path.
pub type ProgressCallback = Box<dyn Fn(usize, &Path)>;

#[derive(Debug, Clone, Default)]
pub struct TopologyReport {
    pub topology: Topology,
    /// Every merged entry before symmetric duplicates were dropped.
    pub raw: AdjacencyMapping,
    pub captures: usize,
    /// Captures with no device-name marker; their local endpoints share the absent device name.
    pub unnamed_captures: Vec<String>,
}

pub struct TopologyService {
    source: Box<dyn CaptureSource>,
    scanner: CaptureScanner,
    on_capture: Option<ProgressCallback>,
}

impl TopologyService {
    pub fn new(source: Box<dyn CaptureSource>, scanner: CaptureScanner) -> Self {
        Self {
            source,
            scanner,
            on_capture: None,
        }
    }

    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_capture = Some(callback);
        self
    }

    /// Builds the deduplicated topology.
    ///
    /// Fails only when the source cannot be read. Capture content never fails.
    pub fn build(&self) -> anyhow::Result<TopologyReport> {
        let captures = self
            .source
            .captures()
            .context("Failed to collect capture files")?;

        let mut registry = LinkRegistry::new();
        let mut unnamed_captures = Vec::new();

        for (idx, capture) in captures.iter().enumerate() {
            let scanned = self.scanner.scan(&capture.text);
            let path = capture.path.display();

            match &scanned.device {
                Some(device) => {
                    info!("{path}: {device} lists {} neighbors", scanned.adjacencies.len());
                }
                None => {
                    warn!(
                        "{path}: no '{}' prompt found, {} neighbors recorded under an unnamed device",
                        self.scanner.options().marker,
                        scanned.adjacencies.len()
                    );
                    unnamed_captures.push(path.to_string());
                }
            }

            registry.merge(scanned.adjacencies);

            if let Some(callback) = &self.on_capture {
                callback(idx + 1, &capture.path);
            }
        }

        let raw = registry.snapshot();
        let topology = registry.canonicalize();
        info!(
            "{} directed entries collapsed into {} links",
            raw.len(),
            topology.len()
        );

        Ok(TopologyReport {
            topology,
            raw,
            captures: captures.len(),
            unnamed_captures,
        })
    }
}
