//! Transient status notifications injected into the page.

use std::sync::Arc;

use tracing::debug;

use autoapply_dom::{ElementNode, Page};

use crate::config::EngineConfig;

/// Handle of the injected status node. Reused across notifications so
/// repeated operations never stack widgets.
pub const STATUS_NODE_ID: &str = "autoapply-status";

/// Severity of a status notification, mapped to a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn background(&self) -> &'static str {
        match self {
            StatusKind::Info => "#007bff",
            StatusKind::Success => "#28a745",
            StatusKind::Error => "#dc3545",
        }
    }
}

/// Injects a single notification node and hides it after a delay.
pub struct StatusWidget {
    page: Arc<Page>,
    duration: std::time::Duration,
}

impl StatusWidget {
    pub fn new(page: Arc<Page>, config: &EngineConfig) -> Self {
        Self {
            page,
            duration: config.status_duration,
        }
    }

    /// Show a notification, replacing any previous one, and schedule it to
    /// hide itself.
    pub fn show(&self, kind: StatusKind, message: &str) {
        debug!(?kind, message, "status");
        self.page.mutate(|tree| {
            if !tree.contains(STATUS_NODE_ID) {
                let mut node = ElementNode::container(STATUS_NODE_ID);
                node.attributes.role = Some("status".to_string());
                tree.attach(node, None);
            }
            if let Some(node) = tree.get_mut(STATUS_NODE_ID) {
                node.text = message.to_string();
                node.style.display = "block".to_string();
                node.style.background_color = kind.background().to_string();
            }
        });

        let page = Arc::clone(&self.page);
        let duration = self.duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            page.mutate(|tree| {
                if let Some(node) = tree.get_mut(STATUS_NODE_ID) {
                    node.style.display = "none".to_string();
                }
            });
        });
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
