//! Frontend Models
//!
//! Backend payloads and view records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /api/resources`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceEnvelope {
    #[serde(rename = "Data")]
    pub data: ResourceData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    /// Stored verbatim, shape is up to the backend
    pub objects: Value,
}

/// Sticky header settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedHeaderConfig {
    /// Scroll offset in px past which the header is fixed
    pub threshold: u32,
    pub header_class: String,
    pub fixed_class: String,
    pub hide_scroll_up: bool,
}

impl FixedHeaderConfig {
    /// Class attribute for the header in the given state
    pub fn class_for(&self, is_fixed: bool) -> String {
        if is_fixed {
            format!("{} {}", self.header_class, self.fixed_class)
        } else {
            self.header_class.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedStatus {
    pub header_is_fixed: bool,
}
