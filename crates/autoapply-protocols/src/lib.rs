//! Shared protocol types for AutoApply.
//!
//! Defines the canonical user profile, the field vocabulary the matching
//! engine works with, and the request/response messages exchanged between
//! the engine and the calling surfaces (popup, background). Pure data; all
//! behavior lives in `autoapply-dom` and `autoapply-engine`.

mod field;
mod message;
mod profile;

pub use field::{Category, FieldKey};
pub use message::{FillOutcome, Request};
pub use profile::{EducationEntry, PersonalInfo, Profile, SkillsInfo, WorkEntry};
