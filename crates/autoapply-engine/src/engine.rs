//! Top-level fill and detect operations.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use autoapply_dom::{HighlightKind, Page};
use autoapply_protocols::{
    Category, EducationEntry, FieldKey, FillOutcome, PersonalInfo, Profile, SkillsInfo, WorkEntry,
};

use crate::catalog::{self, DETECT_ID_PROBES, DETECT_INPUT_TYPES};
use crate::classify::{self, FillValue};
use crate::config::EngineConfig;
use crate::dates::normalize_date;
use crate::error::EngineError;
use crate::resolve;
use crate::sections;
use crate::status::{StatusKind, StatusWidget};

/// Domains the engine operates on. Anything else is refused.
pub const TARGET_DOMAINS: &[&str] = &["workday.com", "myworkday.com", "myworkdayjobs.com"];

/// Whether a page URL belongs to a supported vendor domain.
pub fn is_target_url(url: &str) -> bool {
    let url = url.to_lowercase();
    TARGET_DOMAINS.iter().any(|domain| url.contains(domain))
}

/// Runs fill and detect operations against one page.
pub struct FillEngine {
    page: Arc<Page>,
    config: EngineConfig,
    status: StatusWidget,
}

impl FillEngine {
    pub fn new(page: Arc<Page>, config: EngineConfig) -> Self {
        let status = StatusWidget::new(Arc::clone(&page), &config);
        Self {
            page,
            config,
            status,
        }
    }

    fn check_target(&self) -> Result<(), EngineError> {
        if is_target_url(&self.page.url()) {
            Ok(())
        } else {
            Err(EngineError::NotTargetPage)
        }
    }

    /// Fill the page from a profile, category by category.
    pub async fn fill(&self, profile: &Profile) -> Result<FillOutcome, EngineError> {
        self.check_target()?;
        self.status.show(StatusKind::Info, "Starting to fill form...");

        let mut filled: HashSet<String> = HashSet::new();
        if let Some(personal) = &profile.personal {
            self.fill_personal(personal, &mut filled);
        }
        if !profile.work.is_empty() {
            self.fill_work(&profile.work, &mut filled).await;
        }
        if !profile.education.is_empty() {
            self.fill_education(&profile.education, &mut filled).await;
        }
        if let Some(skills) = &profile.skills {
            self.fill_skills(skills, &mut filled);
        }

        // A page without matches is a zero-count success, not an error.
        let count = filled.len() as u32;
        info!(count, "form filled");
        self.status.show(
            StatusKind::Success,
            &format!("Successfully filled {} fields!", count),
        );
        Ok(FillOutcome::filled(count))
    }

    /// Resolve one field in a scope and write a value into it. Empty values
    /// are skipped unless `write_empty` is set (end dates of finished
    /// entries must clear the control).
    fn fill_field(
        &self,
        key: FieldKey,
        value: &str,
        scope: Option<&str>,
        write_empty: bool,
        filled: &mut HashSet<String>,
    ) -> bool {
        if value.is_empty() && !write_empty {
            return false;
        }
        let target = {
            let tree = self.page.tree();
            resolve::resolve(&tree, key, scope)
                .or_else(|| resolve::resolve_container_nested(&tree, key.terms(), scope))
        };
        let Some(target) = target else {
            debug!(field = key.as_str(), "no match");
            return false;
        };

        let value = if key.is_date() {
            FillValue::text(normalize_date(value))
        } else {
            FillValue::text(value)
        };
        if classify::fill_control(&self.page, &target, &value, &self.config) {
            filled.insert(target);
            true
        } else {
            false
        }
    }

    fn fill_personal(&self, personal: &PersonalInfo, filled: &mut HashSet<String>) {
        for &key in catalog::fields_for(Category::Personal) {
            let Some(value) = personal_value(personal, key) else {
                continue;
            };
            self.fill_field(key, value, None, false, filled);
        }

        // Some forms use one combined name field instead of a split pair.
        if let Some(full_name) = personal.full_name() {
            let target = {
                let tree = self.page.tree();
                resolve::resolve_full_name(&tree)
            };
            if let Some(target) = target {
                if !filled.contains(&target)
                    && classify::fill_control(
                        &self.page,
                        &target,
                        &FillValue::text(full_name),
                        &self.config,
                    )
                {
                    filled.insert(target);
                }
            }
        }
    }

    async fn fill_work(&self, entries: &[WorkEntry], filled: &mut HashSet<String>) {
        let sections =
            sections::ensure_section_count(&self.page, &self.config, Category::Work, entries.len())
                .await;
        if sections.is_empty() {
            debug!("no work sections on page");
            return;
        }

        for (entry, section) in entries.iter().zip(&sections) {
            let scope = Some(section.as_str());
            if let Some(company) = &entry.company {
                self.fill_field(FieldKey::Company, company, scope, false, filled);
            }
            if let Some(title) = &entry.title {
                self.fill_field(FieldKey::JobTitle, title, scope, false, filled);
            }
            if let Some(start) = &entry.start_date {
                self.fill_field(FieldKey::StartDate, start, scope, false, filled);
            }
            self.fill_field(FieldKey::EndDate, entry.effective_end_date(), scope, true, filled);
            if let Some(description) = &entry.description {
                self.fill_field(FieldKey::Description, description, scope, false, filled);
            }
            self.fill_flag(FieldKey::CurrentJob, entry.current_job, scope, filled);
        }
    }

    async fn fill_education(&self, entries: &[EducationEntry], filled: &mut HashSet<String>) {
        let sections = sections::ensure_section_count(
            &self.page,
            &self.config,
            Category::Education,
            entries.len(),
        )
        .await;
        if sections.is_empty() {
            debug!("no education sections on page");
            return;
        }

        for (entry, section) in entries.iter().zip(&sections) {
            let scope = Some(section.as_str());
            if let Some(school) = &entry.school {
                self.fill_field(FieldKey::School, school, scope, false, filled);
            }
            if let Some(degree) = &entry.degree {
                self.fill_field(FieldKey::Degree, degree, scope, false, filled);
            }
            if let Some(field) = &entry.field_of_study {
                self.fill_field(FieldKey::FieldOfStudy, field, scope, false, filled);
            }
            if let Some(start) = &entry.start_date {
                self.fill_field(FieldKey::StartDate, start, scope, false, filled);
            }
            self.fill_field(FieldKey::EndDate, entry.effective_end_date(), scope, true, filled);
            self.fill_flag(FieldKey::CurrentSchool, entry.current_school, scope, filled);
        }
    }

    /// Set a "current entry" checkbox when the section has one.
    fn fill_flag(
        &self,
        key: FieldKey,
        value: bool,
        scope: Option<&str>,
        filled: &mut HashSet<String>,
    ) {
        let target = {
            let tree = self.page.tree();
            resolve::resolve_checkbox(&tree, key.terms(), scope)
        };
        let Some(target) = target else {
            return;
        };
        if classify::fill_control(&self.page, &target, &FillValue::Toggle(value), &self.config) {
            filled.insert(target);
        }
    }

    fn fill_skills(&self, skills: &SkillsInfo, filled: &mut HashSet<String>) {
        for &key in catalog::fields_for(Category::Skills) {
            let Some(value) = skills_value(skills, key) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            if self.fill_field(key, value, None, false, filled) {
                continue;
            }
            // Skills blocks are frequently label-only; retry through labels
            // with the terms spelled out as words.
            let target = {
                let tree = self.page.tree();
                resolve::resolve_by_label_variants(&tree, key.terms(), None)
            };
            if let Some(target) = target {
                if classify::fill_control(
                    &self.page,
                    &target,
                    &FillValue::text(value),
                    &self.config,
                ) {
                    filled.insert(target);
                }
            }
        }
    }

    /// Find and highlight fillable controls without writing anything.
    pub async fn detect(&self) -> Result<FillOutcome, EngineError> {
        self.check_target()?;

        let found = {
            let tree = self.page.tree();
            let mut seen = HashSet::new();
            let mut found = Vec::new();
            for id in tree.document_order() {
                let Some(node) = tree.get(&id) else {
                    continue;
                };
                let broad_sweep = match node.tag_name.as_str() {
                    "select" | "textarea" => true,
                    "input" => {
                        DETECT_INPUT_TYPES.contains(&node.input_type().as_str())
                            || node.attributes.aria_label.is_some()
                            || node.attributes.automation_id.is_some()
                    }
                    _ => false,
                };
                let probed = node.dom_id().map_or(false, |dom_id| {
                    let dom_id = dom_id.to_lowercase();
                    DETECT_ID_PROBES
                        .iter()
                        .any(|probe| dom_id.contains(&probe.to_lowercase()))
                });
                if (broad_sweep || probed)
                    && classify::is_visible(&tree, &id)
                    && seen.insert(id.clone())
                {
                    found.push(id);
                }
            }
            found
        };

        for id in &found {
            if let Err(error) =
                self.page
                    .apply_highlight(id, HighlightKind::Detected, self.config.highlight_duration)
            {
                debug!(%error, "detect highlight failed");
            }
        }

        let count = found.len() as u32;
        info!(count, "fields detected");
        self.status
            .show(StatusKind::Info, &format!("Detected {} form fields", count));
        Ok(FillOutcome::detected(count))
    }
}

fn personal_value(personal: &PersonalInfo, key: FieldKey) -> Option<&str> {
    match key {
        FieldKey::FirstName => personal.first_name.as_deref(),
        FieldKey::LastName => personal.last_name.as_deref(),
        FieldKey::Email => personal.email.as_deref(),
        FieldKey::Phone => personal.phone.as_deref(),
        FieldKey::Address => personal.address.as_deref(),
        FieldKey::City => personal.city.as_deref(),
        FieldKey::State => personal.state.as_deref(),
        FieldKey::Zip => personal.zip.as_deref(),
        FieldKey::Country => personal.country.as_deref(),
        _ => None,
    }
}

fn skills_value(skills: &SkillsInfo, key: FieldKey) -> Option<&str> {
    match key {
        FieldKey::Skills => skills.skills.as_deref(),
        FieldKey::Certifications => skills.certifications.as_deref(),
        FieldKey::Languages => skills.languages.as_deref(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
