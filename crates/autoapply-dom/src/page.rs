//! Shareable page handle: value writes, synthetic events, click hooks,
//! and transient highlight styling with timed reversion.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock, RwLockReadGuard};
use thiserror::Error;
use tracing::debug;

use crate::tree::PageTree;

/// Page access errors.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Not a select control: {0}")]
    NotASelect(String),
}

/// Kind of synthetic notification dispatched to the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Input,
    Change,
    Click,
}

/// One synthetic event observed by the host page's listeners.
#[derive(Debug, Clone)]
pub struct PageEvent {
    pub target: String,
    pub kind: EventKind,
    /// Events bubble to ancestors so delegated listeners fire too.
    pub bubbles: bool,
}

/// Transient styling applied to signal detection or fill outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// Blue outline for detected fields.
    Detected,
    /// Green outline for filled fields.
    Filled,
}

impl HighlightKind {
    pub fn border(&self) -> &'static str {
        match self {
            HighlightKind::Detected => "2px solid #007bff",
            HighlightKind::Filled => "2px solid #28a745",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            HighlightKind::Detected => "rgba(0, 123, 255, 0.1)",
            HighlightKind::Filled => "rgba(40, 167, 69, 0.1)",
        }
    }
}

type ClickHook = Box<dyn Fn(&mut PageTree, &str) + Send + Sync>;

/// Handle to the hosting page.
///
/// The page owns its DOM; this handle models the engine's borrowed access:
/// reads through [`Page::tree`], writes through the typed mutators, and a
/// log of the synthetic events a real host page would observe. Click hooks
/// let a harness simulate the host re-rendering after an "add entry" click.
pub struct Page {
    tree: RwLock<PageTree>,
    events: Mutex<Vec<PageEvent>>,
    click_hooks: Mutex<Vec<ClickHook>>,
}

impl Page {
    pub fn from_tree(tree: PageTree) -> Arc<Self> {
        Arc::new(Self {
            tree: RwLock::new(tree),
            events: Mutex::new(Vec::new()),
            click_hooks: Mutex::new(Vec::new()),
        })
    }

    /// Read access to the current tree. Visibility and matching are always
    /// computed against this live state, never cached.
    pub fn tree(&self) -> RwLockReadGuard<'_, PageTree> {
        self.tree.read()
    }

    pub fn url(&self) -> String {
        self.tree.read().url.clone()
    }

    /// Mutate the tree in place. Used by harnesses simulating host
    /// re-renders and by the status widget creating its overlay node.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut PageTree) -> R) -> R {
        f(&mut self.tree.write())
    }

    /// Register a host hook invoked on every click.
    pub fn on_click(&self, hook: impl Fn(&mut PageTree, &str) + Send + Sync + 'static) {
        self.click_hooks.lock().push(Box::new(hook));
    }

    /// Click an element, running any host hooks against the tree.
    pub fn click(&self, id: &str) -> Result<(), PageError> {
        if !self.tree.read().contains(id) {
            return Err(PageError::NodeNotFound(id.to_string()));
        }
        self.push_event(id, EventKind::Click);
        let hooks = self.click_hooks.lock();
        if !hooks.is_empty() {
            let mut tree = self.tree.write();
            for hook in hooks.iter() {
                hook(&mut tree, id);
            }
        }
        Ok(())
    }

    /// Write a value into an input or textarea.
    pub fn set_value(&self, id: &str, value: &str) -> Result<(), PageError> {
        let mut tree = self.tree.write();
        let node = tree
            .get_mut(id)
            .ok_or_else(|| PageError::NodeNotFound(id.to_string()))?;
        node.attributes.value = Some(value.to_string());
        Ok(())
    }

    /// Set the checked state of a radio or checkbox.
    pub fn set_checked(&self, id: &str, checked: bool) -> Result<(), PageError> {
        let mut tree = self.tree.write();
        let node = tree
            .get_mut(id)
            .ok_or_else(|| PageError::NodeNotFound(id.to_string()))?;
        node.checked = checked;
        Ok(())
    }

    /// Select an option of a select control by index.
    pub fn select_index(&self, id: &str, index: usize) -> Result<(), PageError> {
        let mut tree = self.tree.write();
        let node = tree
            .get_mut(id)
            .ok_or_else(|| PageError::NodeNotFound(id.to_string()))?;
        if index >= node.options.len() {
            return Err(PageError::NotASelect(id.to_string()));
        }
        node.selected_index = Some(index);
        node.attributes.value = Some(node.options[index].value.clone());
        Ok(())
    }

    /// Assign text content (content-editable elements).
    pub fn set_text(&self, id: &str, text: &str) -> Result<(), PageError> {
        let mut tree = self.tree.write();
        let node = tree
            .get_mut(id)
            .ok_or_else(|| PageError::NodeNotFound(id.to_string()))?;
        node.text = text.to_string();
        Ok(())
    }

    /// Dispatch the synthetic input and change notifications that follow
    /// every value mutation, so the host page's own listeners observe it.
    pub fn notify_changed(&self, id: &str) {
        self.push_event(id, EventKind::Input);
        self.push_event(id, EventKind::Change);
    }

    fn push_event(&self, id: &str, kind: EventKind) {
        self.events.lock().push(PageEvent {
            target: id.to_string(),
            kind,
            bubbles: true,
        });
    }

    /// Events dispatched so far, oldest first.
    pub fn events(&self) -> Vec<PageEvent> {
        self.events.lock().clone()
    }

    /// Apply transient highlight styling, reverting to the original border
    /// and background after `revert_after`. Reversion runs on its own
    /// fire-and-forget timer per element.
    pub fn apply_highlight(
        self: &Arc<Self>,
        id: &str,
        kind: HighlightKind,
        revert_after: Duration,
    ) -> Result<(), PageError> {
        let (original_border, original_background) = {
            let mut tree = self.tree.write();
            let node = tree
                .get_mut(id)
                .ok_or_else(|| PageError::NodeNotFound(id.to_string()))?;
            let original = (node.style.border.clone(), node.style.background_color.clone());
            node.style.border = kind.border().to_string();
            node.style.background_color = kind.background().to_string();
            original
        };

        let page = Arc::clone(self);
        let id = id.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(revert_after).await;
            let mut tree = page.tree.write();
            if let Some(node) = tree.get_mut(&id) {
                node.style.border = original_border;
                node.style.background_color = original_background;
            } else {
                debug!("highlighted node {} left the tree before reversion", id);
            }
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
