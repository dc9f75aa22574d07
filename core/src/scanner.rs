//! # Capture Scanner
//!
//! Turns one capture's raw text into a device name and the directed adjacencies
//! it lists.
//!
//! A capture is the verbatim output of a neighbor listing, e.g.:
//!
//! ```text
//! SW1>show cdp neighbors
//! Device ID  Local Intrfce  Holdtme  Capability  Platform  Port ID
//! SW2        Gig 0/1        123      R S I       WS-C2960  Gig 0/24
//! ```
//!
//! The device name comes from the prompt line, the adjacencies from every line
//! that segments into a [`NeighborRow`]. Everything else is skipped silently.

mod segment;

use cdpmap_common::config::{Config, DEFAULT_MARKER};
use cdpmap_common::topology::{DirectedAdjacency, Endpoint};
use tracing::{debug, trace};

pub use segment::{NeighborRow, segment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Phrase identifying the prompt line that carries the device name.
    pub marker: String,
    /// Rejects rows whose hold-time column is not all digits.
    pub strict_hold_time: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            strict_hold_time: false,
        }
    }
}

impl From<&Config> for ScanOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            marker: cfg.marker.clone(),
            strict_hold_time: cfg.strict_hold_time,
        }
    }
}

/// Result of scanning one capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capture {
    /// `None` when no line carried the marker.
    pub device: Option<String>,
    pub adjacencies: Vec<DirectedAdjacency>,
}

/// Stateless; one instance can scan any number of captures.
#[derive(Debug, Clone, Default)]
pub struct CaptureScanner {
    options: ScanOptions,
}

impl CaptureScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    pub fn scan(&self, text: &str) -> Capture {
        let device = self.extract_device_name(text.lines());
        let adjacencies = self.extract_adjacencies(text.lines(), device.as_deref());
        Capture {
            device,
            adjacencies,
        }
    }

    /// Text before the first `>` on the first line containing the marker.
    ///
    /// Later marker lines are never looked at.
    pub fn extract_device_name<I, S>(&self, lines: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let marker: &str = &self.options.marker;
        lines
            .into_iter()
            .find(|line| line.as_ref().contains(marker))
            .map(|line| prompt_label(line.as_ref()).to_string())
    }

    pub fn extract_adjacencies<I, S>(&self, lines: I, device: Option<&str>) -> Vec<DirectedAdjacency>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut adjacencies = Vec::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let Some(row) = segment(line, self.options.strict_hold_time) else {
                trace!(line = idx + 1, "skipping non-neighbor line");
                continue;
            };

            let adjacency = row.to_adjacency(device);
            debug!(line = idx + 1, "{adjacency}");
            adjacencies.push(adjacency);
        }
        adjacencies
    }

    /// Every line of `text` that segments into a row, in order.
    pub fn rows<'a>(&self, text: &'a str) -> impl Iterator<Item = NeighborRow<'a>> + 'a {
        let strict = self.options.strict_hold_time;
        text.lines().filter_map(move |line| segment(line, strict))
    }
}

impl NeighborRow<'_> {
    pub fn to_adjacency(&self, device: Option<&str>) -> DirectedAdjacency {
        DirectedAdjacency::new(
            Endpoint::with_device(device, &self.local_interface),
            Endpoint::new(self.remote_device, &self.remote_interface),
        )
    }
}

fn prompt_label(line: &str) -> &str {
    line.split('>').next().unwrap_or(line).trim()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
