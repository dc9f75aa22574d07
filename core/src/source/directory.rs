use std::fs;
use std::path::{Path, PathBuf};

use cdpmap_common::error::CaptureError;
use cdpmap_common::source::{CaptureFile, CaptureSource};
use tracing::{debug, trace};

/// Reads every regular file of a directory as one capture.
///
/// Files are returned sorted by name so repeated runs merge in the same order.
/// Sub-directories are skipped.
pub struct DirectoryCaptureSource {
    dir: PathBuf,
}

impl DirectoryCaptureSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn capture_paths(&self) -> Result<Vec<PathBuf>, CaptureError> {
        if !self.dir.exists() {
            return Err(CaptureError::SourceMissing(self.dir.clone()));
        }
        if !self.dir.is_dir() {
            return Err(CaptureError::NotADirectory(self.dir.clone()));
        }

        let unreadable = |path: &Path| {
            let path = path.to_path_buf();
            move |source| CaptureError::Unreadable { path, source }
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(unreadable(&self.dir))? {
            let entry = entry.map_err(unreadable(&self.dir))?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            } else {
                trace!(path = %path.display(), "skipping non-file entry");
            }
        }

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }
}

impl CaptureSource for DirectoryCaptureSource {
    fn captures(&self) -> Result<Vec<CaptureFile>, CaptureError> {
        let paths = self.capture_paths()?;
        debug!(dir = %self.dir.display(), count = paths.len(), "listed captures");

        paths.into_iter().map(|path| read_capture(&path)).collect()
    }
}

fn read_capture(path: &Path) -> Result<CaptureFile, CaptureError> {
    let bytes = fs::read(path).map_err(|source| CaptureError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    Ok(CaptureFile::new(path, text))
}
