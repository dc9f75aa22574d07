use std::fmt;

/// Label used wherever an absent device name has to be displayed.
pub const UNNAMED_DEVICE: &str = "(unnamed)";

/// One physical connector on one device.
///
/// Both fields are whitespace-normalized on construction: the device name is
/// trimmed and the interface tokens are re-joined with a single space, so
/// `"Gig   0/1"` and `"Gig 0/1"` are the same interface. Comparison is
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Endpoint {
    device: Option<String>,
    interface: String,
}

impl Endpoint {
    pub fn new(device: impl AsRef<str>, interface: impl AsRef<str>) -> Self {
        Self::with_device(Some(device.as_ref()), interface)
    }

    /// Endpoint on a device whose capture carried no name.
    pub fn unnamed(interface: impl AsRef<str>) -> Self {
        Self::with_device(None, interface)
    }

    pub fn with_device(device: Option<&str>, interface: impl AsRef<str>) -> Self {
        Self {
            device: device.map(|name| name.trim().to_string()),
            interface: normalize_interface(interface.as_ref()),
        }
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    /// Device name for display, [`UNNAMED_DEVICE`] when absent.
    pub fn device_label(&self) -> &str {
        self.device.as_deref().unwrap_or(UNNAMED_DEVICE)
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.device_label(), self.interface)
    }
}

fn normalize_interface(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<&str>>().join(" ")
}
