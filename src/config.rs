use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTACT_URL: &str = "https://wa.me/923000000000";
pub const DEFAULT_ENTER_DELAY_MS: u32 = 20;

/// Host-level display settings, shared with the modal through context.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ModalConfig {
    /// Outbound link behind the call-to-action button. Never unit-specific.
    pub contact_url: String,
    /// Delay before the entrance transition starts.
    pub enter_delay_ms: u32,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            contact_url: DEFAULT_CONTACT_URL.to_string(),
            enter_delay_ms: DEFAULT_ENTER_DELAY_MS,
        }
    }
}
