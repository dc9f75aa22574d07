use std::fs;
use std::path::{Path, PathBuf};

pub const SW1_CAPTURE: &str = "\
SW1>show cdp neighbors
Capability Codes: R - Router, T - Trans Bridge, B - Source Route Bridge
                  S - Switch, H - Host, I - IGMP, r - Repeater

Device ID  Local Intrfce  Holdtme  Capability  Platform  Port ID
SW2 Gig 0/1 123 R S I WS-C2960 Gig 0/24
";

pub const SW2_CAPTURE: &str = "\
SW2>show cdp neighbors
Device ID  Local Intrfce  Holdtme  Capability  Platform  Port ID
SW1 Gig 0/24 98 R S I WS-C3560 Gig 0/1
";

/// Fresh directory under the system temp dir, removed on drop.
pub struct CaptureDir {
    path: PathBuf,
}

impl CaptureDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("cdpmap-it-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn with(self, file: &str, contents: &str) -> Self {
        fs::write(self.path.join(file), contents).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CaptureDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
