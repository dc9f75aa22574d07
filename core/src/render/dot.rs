use std::fmt::Write;
use std::path::{Path, PathBuf};

use cdpmap_common::error::RenderError;
use cdpmap_common::render::TopologyRenderer;
use cdpmap_common::topology::{Topology, UNNAMED_DEVICE};
use tracing::info;

use super::style::GraphStyle;
use super::{with_suffix, write_file};

/// Keeps interface labels clear of the edge midpoint.
const EDGE_SPACER: &str = "            ";

/// Undirected DOT graph: one node per device, one edge per topology entry.
///
/// Each edge runs local -> remote, with the local interface as `taillabel` and
/// the remote interface as `headlabel`.
pub fn to_dot(topology: &Topology, style: &GraphStyle) -> String {
    let mut out = String::from("graph {\n");

    write_attr_stmt(&mut out, "graph", &style.graph);
    write_attr_stmt(&mut out, "node", &style.nodes);
    write_attr_stmt(&mut out, "edge", &style.edges);

    for node in topology.nodes() {
        let _ = writeln!(out, "    {};", quote(node.unwrap_or(UNNAMED_DEVICE)));
    }

    for (local, remote) in topology {
        let _ = writeln!(
            out,
            "    {} -- {} [taillabel={}, headlabel={}, label={}];",
            quote(local.device_label()),
            quote(remote.device_label()),
            quote(local.interface()),
            quote(remote.interface()),
            quote(EDGE_SPACER),
        );
    }

    out.push_str("}\n");
    out
}

fn write_attr_stmt(out: &mut String, kind: &str, attrs: &[(String, String)]) {
    if attrs.is_empty() {
        return;
    }
    let body: Vec<String> = attrs
        .iter()
        .map(|(k, v)| format!("{k}={}", quote(v)))
        .collect();
    let _ = writeln!(out, "    {kind} [{}];", body.join(", "));
}

fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Writes `<output>.dot` and nothing else.
pub struct DotRenderer {
    output: PathBuf,
    style: GraphStyle,
}

impl DotRenderer {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            style: GraphStyle::default(),
        }
    }

    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn dot_path(&self) -> PathBuf {
        with_suffix(&self.output, "dot")
    }

    pub(super) fn write_source(&self, topology: &Topology) -> Result<PathBuf, RenderError> {
        let path = self.dot_path();
        write_file(&path, &to_dot(topology, &self.style))?;
        Ok(path)
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl TopologyRenderer for DotRenderer {
    fn render(&self, topology: &Topology) -> Result<PathBuf, RenderError> {
        let path = self.write_source(topology)?;
        info!("Topology source saved in {}", path.display());
        Ok(path)
    }
}
