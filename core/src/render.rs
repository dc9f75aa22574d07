//! Graphviz based [`TopologyRenderer`]s.
//!
//! [`to_dot`] produces the DOT source; [`DotRenderer`] stops there and
//! [`GraphvizRenderer`] hands the source to the `dot` executable for export.

mod dot;
mod graphviz;
mod style;

pub use dot::{DotRenderer, to_dot};
pub use graphviz::GraphvizRenderer;
pub use style::GraphStyle;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use cdpmap_common::error::RenderError;

/// `img/topology` + `svg` -> `img/topology.svg`, keeping any dots already in the name.
fn with_suffix(output: &Path, extension: &str) -> PathBuf {
    let mut name: OsString = output.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    let io_err = |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}
