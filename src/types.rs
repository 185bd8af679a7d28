//! Shared data types
//!
//! Records held by the stores and the static navigation metadata.

use serde::{Deserialize, Serialize};

/// One row of disk-usage data shown on the dashboard
///
/// `used <= total` is expected but not enforced; records are taken as-is
/// from callers and from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskRecord {
    /// Display label, e.g. "System (C:)"
    pub name: String,

    /// Used amount
    pub used: f64,

    /// Total capacity
    pub total: f64,

    /// Display-style tag (gradient classes)
    pub color: String,
}

impl DiskRecord {
    pub fn new(
        name: impl Into<String>,
        used: f64,
        total: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            used,
            total,
            color: color.into(),
        }
    }

    /// Remaining capacity (may be negative for over-full records)
    pub fn free(&self) -> f64 {
        self.total - self.used
    }

    /// Used share of capacity in percent, `0.0` for non-positive totals
    pub fn usage_percent(&self) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        self.used / self.total * 100.0
    }
}

/// Static navigation-tab metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabDescriptor {
    /// Stable key stored in the active-tab value
    pub id: &'static str,

    /// Display label
    pub name: &'static str,

    /// Glyph shown next to the label
    pub icon: &'static str,
}

/// Capacity of a mounted drive, as reported for the drive list
///
/// Sizes are in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveSpace {
    /// Mount point or drive letter, e.g. "C:\\"
    pub letter: String,

    /// Volume label
    pub name: String,

    pub total: u64,
    pub free: u64,
}

impl DriveSpace {
    /// Occupied bytes (saturates at zero)
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.free)
    }

    /// Drive as a dashboard row, sizes converted to GB
    pub fn to_record(&self, color: impl Into<String>) -> DiskRecord {
        const GB: f64 = 1024.0 * 1024.0 * 1024.0;
        let label = if self.name.is_empty() {
            self.letter.clone()
        } else {
            format!("{} ({})", self.name, self.letter)
        };
        DiskRecord::new(label, self.used() as f64 / GB, self.total as f64 / GB, color)
    }
}

/// Recently touched file listed on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentFile {
    pub name: String,

    /// Human-readable size, e.g. "1.2 GB"
    pub size: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub path: String,
}

/// Space taken by one file type (analytics tab)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeItem {
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable size
    pub size: String,

    /// Display-style tag
    pub color: String,
}

/// Space taken by one folder (analytics tab)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderItem {
    pub folder: String,

    /// Human-readable size
    pub size: String,
}
