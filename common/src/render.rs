//! # Rendering Port
//!
//! The core stops at [`Topology`]; drawing it is delegated to a
//! [`TopologyRenderer`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::RenderError;
use crate::topology::Topology;

pub trait TopologyRenderer {
    /// Draws one node per device and one edge per topology entry.
    ///
    /// Returns the path of the main artifact written.
    fn render(&self, topology: &Topology) -> Result<PathBuf, RenderError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
    Pdf,
    /// DOT source only, graphviz is not invoked.
    Dot,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Dot => "dot",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "pdf" => Ok(OutputFormat::Pdf),
            "dot" | "gv" => Ok(OutputFormat::Dot),
            _ => Err(format!("unsupported output format: {s}")),
        }
    }
}
