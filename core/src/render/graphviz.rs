use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use cdpmap_common::error::RenderError;
use cdpmap_common::render::{OutputFormat, TopologyRenderer};
use cdpmap_common::topology::Topology;
use tracing::{debug, info};

use super::dot::DotRenderer;
use super::style::GraphStyle;
use super::with_suffix;

const DOT_BIN: &str = "dot";

/// Writes the DOT source, then exports it with the graphviz `dot` executable.
pub struct GraphvizRenderer {
    source: DotRenderer,
    format: OutputFormat,
}

impl GraphvizRenderer {
    pub fn new(output: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            source: DotRenderer::new(output),
            format,
        }
    }

    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.source = self.source.with_style(style);
        self
    }

    pub fn image_path(&self) -> PathBuf {
        with_suffix(self.source.output(), self.format.extension())
    }
}

impl TopologyRenderer for GraphvizRenderer {
    fn render(&self, topology: &Topology) -> Result<PathBuf, RenderError> {
        let dot_path = self.source.write_source(topology)?;
        if self.format == OutputFormat::Dot {
            info!("Topology saved in {}", dot_path.display());
            return Ok(dot_path);
        }

        let image = self.image_path();
        debug!(format = %self.format, "running {DOT_BIN}");
        let output = Command::new(DOT_BIN)
            .arg(format!("-T{}", self.format.extension()))
            .arg("-o")
            .arg(&image)
            .arg(&dot_path)
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => RenderError::GraphvizMissing,
                _ => RenderError::Io {
                    path: image.clone(),
                    source,
                },
            })?;

        if !output.status.success() {
            return Err(RenderError::GraphvizFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!("Topology saved in {}", image.display());
        Ok(image)
    }
}
