//! # Capture Source
//!
//! The file-collection collaborator. Implementations decide where captures come
//! from; the order of the returned vector is the merge order, so it must be
//! deterministic.

use std::path::PathBuf;

use crate::error::CaptureError;

/// Raw text of one device's neighbor listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureFile {
    pub path: PathBuf,
    pub text: String,
}

impl CaptureFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

pub trait CaptureSource {
    /// Reads every capture. An unreadable capture fails the whole call.
    fn captures(&self) -> Result<Vec<CaptureFile>, CaptureError>;
}
