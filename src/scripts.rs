//! Outreach script library: versioned drafts, duplication for testing, and
//! lifecycle transitions.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::PortalError;
use crate::roster;
use crate::types::{ScriptPerformance, ScriptStatus, ScriptType, ScriptVersion, Tone};

/// Version increment applied when drafting or duplicating a script.
const VERSION_STEP: f64 = 0.1;

fn variable_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\w+\}\}").expect("variable pattern is valid"))
}

/// Pull the `{{placeholder}}` tokens out of a script body, in order of
/// first appearance, without duplicates.
pub fn extract_variables(content: &str) -> Vec<String> {
    let mut vars: Vec<String> = Vec::new();
    for m in variable_re().find_iter(content) {
        if !vars.iter().any(|v| v == m.as_str()) {
            vars.push(m.as_str().to_string());
        }
    }
    vars
}

fn transition_allowed(from: ScriptStatus, to: ScriptStatus) -> bool {
    match (from, to) {
        // Same-state writes are a no-op, not an error.
        (a, b) if a == b => true,
        (ScriptStatus::Active, ScriptStatus::Testing) => true,
        (ScriptStatus::Testing, ScriptStatus::Active) => true,
        (_, ScriptStatus::Archived) => true,
        // Archived is terminal.
        (ScriptStatus::Archived, _) => false,
        _ => false,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptLibrary {
    scripts: Vec<ScriptVersion>,
    selected: Option<u64>,
}

impl ScriptLibrary {
    pub fn new(scripts: Vec<ScriptVersion>) -> Self {
        let selected = scripts.first().map(|s| s.id);
        ScriptLibrary { scripts, selected }
    }

    pub fn scripts(&self) -> &[ScriptVersion] {
        &self.scripts
    }

    pub fn select(&mut self, id: u64) -> Result<(), PortalError> {
        roster::find(&self.scripts, id).ok_or(PortalError::NotFound {
            entity: "script",
            id,
        })?;
        self.selected = Some(id);
        Ok(())
    }

    pub fn selected(&self) -> Option<&ScriptVersion> {
        self.selected.and_then(|id| roster::find(&self.scripts, id))
    }

    /// Draft a new script. The version continues from the head of the
    /// library (or starts at 1.1 when the library is empty), and the
    /// variables are read straight out of the content.
    pub fn create(
        &self,
        name: &str,
        tone: Tone,
        script_type: ScriptType,
        content: &str,
        today: NaiveDate,
    ) -> ScriptVersion {
        let base = self.scripts.first().map_or(1.0, |s| s.version);
        ScriptVersion {
            id: roster::next_id(&self.scripts),
            version: base + VERSION_STEP,
            name: name.to_string(),
            date: today,
            tone,
            script_type,
            variables: extract_variables(content),
            content: content.to_string(),
            status: ScriptStatus::Active,
            performance: ScriptPerformance::default(),
        }
    }

    /// Insert a new script, or replace the stored one with the same id.
    pub fn save(&mut self, script: ScriptVersion) {
        match roster::find_mut(&mut self.scripts, script.id) {
            Some(existing) => *existing = script,
            None => {
                if self.selected.is_none() {
                    self.selected = Some(script.id);
                }
                self.scripts.push(script);
            }
        }
    }

    /// Clone a script into a Testing copy one version step up. Performance
    /// carries over so the copy can be compared against its source.
    pub fn duplicate(&mut self, id: u64) -> Result<u64, PortalError> {
        let source = roster::find(&self.scripts, id).ok_or(PortalError::NotFound {
            entity: "script",
            id,
        })?;
        let mut copy = source.clone();
        copy.id = roster::next_id(&self.scripts);
        copy.version += VERSION_STEP;
        copy.status = ScriptStatus::Testing;
        let new_id = copy.id;
        self.scripts.push(copy);
        Ok(new_id)
    }

    /// Remove a script. If it was selected, selection falls back to the
    /// first remaining script, or clears when the library is empty.
    pub fn delete(&mut self, id: u64) -> Result<ScriptVersion, PortalError> {
        let removed = roster::remove_record(&mut self.scripts, id, "script")?;
        if self.selected == Some(id) {
            self.selected = self.scripts.first().map(|s| s.id);
        }
        Ok(removed)
    }

    pub fn set_status(&mut self, id: u64, to: ScriptStatus) -> Result<(), PortalError> {
        let script = roster::find_mut(&mut self.scripts, id).ok_or(PortalError::NotFound {
            entity: "script",
            id,
        })?;
        if !transition_allowed(script.status, to) {
            return Err(PortalError::InvalidTransition {
                from: script.status,
                to,
            });
        }
        script.status = to;
        Ok(())
    }

    pub fn archive(&mut self, id: u64) -> Result<(), PortalError> {
        self.set_status(id, ScriptStatus::Archived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn library() -> ScriptLibrary {
        ScriptLibrary::new(seed::seed_scripts())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
    }

    #[test]
    fn extracts_variables_in_order_without_repeats() {
        let vars = extract_variables(
            "Hi {{first_name}}, your {{product_name}} order — {{first_name}}, right?",
        );
        assert_eq!(vars, vec!["{{first_name}}", "{{product_name}}"]);
        assert!(extract_variables("no placeholders here").is_empty());
    }

    #[test]
    fn new_library_selects_the_first_script() {
        let library = library();
        assert_eq!(library.selected().map(|s| s.id), Some(1));
    }

    #[test]
    fn create_continues_the_head_version() {
        let library = library();
        let draft = library.create(
            "Renewal Pitch",
            Tone::Empathetic,
            ScriptType::Voice,
            "Hello {{first_name}}, about {{product_name}}...",
            today(),
        );
        assert_eq!(draft.id, 4);
        assert!((draft.version - 2.2).abs() < 1e-9);
        assert_eq!(draft.status, ScriptStatus::Active);
        assert_eq!(draft.variables.len(), 2);
        assert_eq!(draft.performance.attempts, 0);
    }

    #[test]
    fn create_on_empty_library_starts_at_one_point_one() {
        let library = ScriptLibrary::default();
        let draft = library.create("First", Tone::Casual, ScriptType::Sms, "", today());
        assert_eq!(draft.id, 1);
        assert!((draft.version - 1.1).abs() < 1e-9);
    }

    #[test]
    fn save_upserts_by_id() {
        let mut library = library();
        let mut edited = library.scripts()[1].clone();
        edited.content = "Rewritten body".into();
        library.save(edited);
        assert_eq!(library.scripts().len(), 3);
        assert_eq!(library.scripts()[1].content, "Rewritten body");

        let draft = library.create("New", Tone::Professional, ScriptType::Email, "", today());
        library.save(draft);
        assert_eq!(library.scripts().len(), 4);
    }

    #[test]
    fn duplicate_bumps_version_and_enters_testing() {
        let mut library = library();
        let copy_id = library.duplicate(1).unwrap();
        let copy = roster::find(library.scripts(), copy_id).unwrap();
        assert_eq!(copy.status, ScriptStatus::Testing);
        assert!((copy.version - 2.2).abs() < 1e-9);
        // Performance follows the copy for comparison.
        assert_eq!(copy.performance.attempts, 1247);
    }

    #[test]
    fn delete_moves_selection_to_first_remaining() {
        let mut library = library();
        library.delete(1).unwrap();
        assert_eq!(library.selected().map(|s| s.id), Some(2));

        library.delete(2).unwrap();
        library.delete(3).unwrap();
        assert!(library.selected().is_none());
    }

    #[test]
    fn delete_of_unselected_script_keeps_selection() {
        let mut library = library();
        library.delete(3).unwrap();
        assert_eq!(library.selected().map(|s| s.id), Some(1));
    }

    #[test]
    fn archived_scripts_stay_archived() {
        let mut library = library();
        library.archive(2).unwrap();
        assert!(matches!(
            library.set_status(2, ScriptStatus::Active),
            Err(PortalError::InvalidTransition { .. })
        ));
        // Re-archiving is a no-op.
        library.archive(2).unwrap();
    }

    #[test]
    fn active_and_testing_swap_freely() {
        let mut library = library();
        library.set_status(1, ScriptStatus::Testing).unwrap();
        library.set_status(1, ScriptStatus::Active).unwrap();
    }
}
