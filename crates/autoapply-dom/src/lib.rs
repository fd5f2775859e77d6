//! Page model for AutoApply.
//!
//! A lightweight in-memory rendition of the hosting page: element nodes with
//! the attributes and computed style the matching heuristics care about, a
//! tree with document-order queries and label association, and a shareable
//! [`Page`] handle that records synthetic input/change notifications, runs
//! host click hooks (so "add entry" re-renders can be simulated), and applies
//! transient highlight styling with timed reversion.
//!
//! The engine never owns the hosting page; every write here models a side
//! effect on borrowed state. Snapshots serialize to JSON so recorded pages
//! can be replayed by the CLI harness and by tests.

mod attributes;
mod node;
mod page;
mod tree;

pub use attributes::{ComputedStyle, NodeAttributes, SelectOption};
pub use node::ElementNode;
pub use page::{EventKind, HighlightKind, Page, PageError, PageEvent};
pub use tree::PageTree;
