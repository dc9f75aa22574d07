use std::path::PathBuf;

use crate::render::OutputFormat;

/// Phrase that marks the prompt line carrying the device name.
pub const DEFAULT_MARKER: &str = "show cdp neighbors";
pub const DEFAULT_SOURCE_DIR: &str = "./cdp";
pub const DEFAULT_OUTPUT: &str = "img/topology";

pub struct Config {
    /// Directory holding one capture file per device.
    pub source_dir: PathBuf,
    /// Output path without extension.
    ///
    /// The renderer appends `.dot` and the image format extension.
    pub output: PathBuf,
    pub format: OutputFormat,
    pub marker: String,
    /// Requires the hold-time column to be numeric.
    pub strict_hold_time: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::default(),
            marker: DEFAULT_MARKER.to_string(),
            strict_hold_time: false,
            quiet: 0,
        }
    }
}
