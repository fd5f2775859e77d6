//! Field matching and form filling engine for AutoApply.
//!
//! The heuristic pipeline that identifies repeating sections of a hosted
//! job-application form, maps canonical profile fields to candidate page
//! elements under ambiguity, writes values per control kind, and reports
//! how many fields were filled versus attempted.
//!
//! ## Pipeline
//!
//! ```text
//! Request ──► FillEngine ──► sections (work/education entry groups)
//!                 │                 │
//!                 ▼                 ▼
//!             resolve  ◄────── catalog (strategy ladders, synonym terms)
//!                 │
//!                 ▼
//!           classify::fill_control (per-kind writes + events + highlight)
//! ```
//!
//! Matching is best-effort: resolution misses and control-write failures
//! are skipped silently and only show up as a lower total fill count.

pub mod catalog;
pub mod classify;
pub mod dates;
pub mod resolve;
pub mod sections;

mod config;
mod dispatch;
mod engine;
mod error;
mod status;

pub use config::EngineConfig;
pub use dispatch::handle_request;
pub use engine::{is_target_url, FillEngine};
pub use error::EngineError;
pub use status::{StatusKind, StatusWidget};
