//! Errors raised by the collaborators around the core.
//!
//! Parsing and deduplication never fail: malformed capture content is absorbed.
//! Only I/O on the capture source and the rendering step can go wrong.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture directory {0} does not exist")]
    SourceMissing(PathBuf),

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to read {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("graphviz `dot` executable not found in PATH")]
    GraphvizMissing,

    #[error("graphviz exited with {status}: {stderr}")]
    GraphvizFailed { status: ExitStatus, stderr: String },
}
