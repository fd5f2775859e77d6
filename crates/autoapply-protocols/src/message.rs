//! Messages exchanged with the calling surfaces.
//!
//! The popup and background script drive the engine through these requests;
//! every fill/detect request is answered with a [`FillOutcome`]. At most one
//! request is in flight per user action; there is no cancellation.

use serde::{Deserialize, Serialize};

use crate::Profile;

/// Inbound request consumed by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// Fill the form on the current page with the given profile.
    #[serde(rename_all = "camelCase")]
    FillForm { user_data: Profile },

    /// Detect and highlight form fields without writing anything.
    DetectFields,

    /// Show a transient notification on the page.
    ShowNotification { message: String },
}

/// Result of a top-level fill or detect operation. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillOutcome {
    /// Whether the operation completed (partial coverage still counts).
    pub success: bool,

    /// Number of fields filled or detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_count: Option<u32>,

    /// Human-readable status text.
    pub message: String,
}

impl FillOutcome {
    /// Successful fill with a field count.
    pub fn filled(count: u32) -> Self {
        Self {
            success: true,
            field_count: Some(count),
            message: format!("Successfully filled {} fields", count),
        }
    }

    /// Successful detection with a field count.
    pub fn detected(count: u32) -> Self {
        Self {
            success: true,
            field_count: Some(count),
            message: format!("Detected {} form fields", count),
        }
    }

    /// Successful operation without a count (e.g. notification shown).
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            field_count: None,
            message: message.into(),
        }
    }

    /// Failed operation with the error's text.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            field_count: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
