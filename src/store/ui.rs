//! UI navigation store
//!
//! Transient state for the running dashboard; never persisted.

use crate::types::TabDescriptor;

use super::Writable;

/// Tab selected when the dashboard starts
pub const DEFAULT_TAB: &str = "dashboard";

/// Navigation tabs, in display order
pub static TABS: [TabDescriptor; 4] = [
    TabDescriptor { id: "dashboard", name: "Dashboard", icon: "📊" },
    TabDescriptor { id: "cleanup", name: "Smart Cleanup", icon: "🧹" },
    TabDescriptor { id: "recycle", name: "Recycle Settings", icon: "🗑️" },
    TabDescriptor { id: "analytics", name: "Disk Analytics", icon: "📈" },
];

/// Look up a tab by id
pub fn find_tab(id: &str) -> Option<&'static TabDescriptor> {
    TABS.iter().find(|tab| tab.id == id)
}

/// Active tab and scanning flag
///
/// The two values are independent. Neither is validated: the active tab may
/// hold an id that is not in [`TABS`], and the scanning flag is flipped only
/// by callers.
#[derive(Debug, Clone)]
pub struct UiStore {
    /// Id of the selected tab
    pub active_tab: Writable<String>,

    /// Whether a (simulated) scan is running
    pub is_scanning: Writable<bool>,
}

impl UiStore {
    pub fn new() -> Self {
        Self {
            active_tab: Writable::new(DEFAULT_TAB.to_string()),
            is_scanning: Writable::new(false),
        }
    }

    /// Descriptor for the active tab, `None` if the id is unknown
    pub fn active_descriptor(&self) -> Option<&'static TabDescriptor> {
        find_tab(&self.active_tab.get())
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}
