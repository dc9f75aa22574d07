//! Concrete [`CaptureSource`]s.
//!
//! * [`DirectoryCaptureSource`]: one capture file per device in a directory.
//! * [`MemoryCaptureSource`]: captures already held in memory.

mod directory;

pub use directory::DirectoryCaptureSource;

use cdpmap_common::error::CaptureError;
use cdpmap_common::source::{CaptureFile, CaptureSource};

#[derive(Debug, Clone, Default)]
pub struct MemoryCaptureSource {
    captures: Vec<CaptureFile>,
}

impl MemoryCaptureSource {
    pub fn new(captures: Vec<CaptureFile>) -> Self {
        Self { captures }
    }

    pub fn push(&mut self, capture: CaptureFile) {
        self.captures.push(capture);
    }
}

impl CaptureSource for MemoryCaptureSource {
    fn captures(&self) -> Result<Vec<CaptureFile>, CaptureError> {
        Ok(self.captures.clone())
    }
}
