//! Engine configuration.

use std::time::Duration;

/// Timings and thresholds for one fill/detect operation.
///
/// Production defaults match the observed behavior of the target pages;
/// tests shrink the durations.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Wait after each "add entry" click for the page to re-render.
    pub settle_delay: Duration,

    /// How long detection/fill highlights stay before reverting.
    pub highlight_duration: Duration,

    /// How long the status notification stays visible.
    pub status_duration: Duration,

    /// Consecutive "add entry" clicks tolerated without the section count
    /// growing before giving up on a category.
    pub max_add_attempts: u32,

    /// A single discovered section holding more than this many controls is
    /// assumed to be a wrapper around several entries and gets subdivided.
    pub oversized_section_controls: usize,

    /// Minimum controls a subdivision must hold to count as one entry.
    pub min_section_controls: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_secs(1),
            highlight_duration: Duration::from_secs(2),
            status_duration: Duration::from_secs(3),
            max_add_attempts: 2,
            oversized_section_controls: 15,
            min_section_controls: 3,
        }
    }
}

impl EngineConfig {
    /// Fast timings for tests and replay harnesses.
    pub fn immediate() -> Self {
        Self {
            settle_delay: Duration::from_millis(1),
            highlight_duration: Duration::from_millis(10),
            status_duration: Duration::from_millis(10),
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
