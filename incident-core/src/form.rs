use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::model::{NewIncident, Severity};

/// Form inputs that carry validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Description,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            FormField::Title => "Title is required",
            FormField::Description => "Description is required",
        }
    }
}

/// Inline error message per invalid field.
pub type FormErrors = BTreeMap<FormField, String>;

/// State behind the "Report New Incident" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncidentForm {
    title: String,
    description: String,
    severity: Severity,
    errors: FormErrors,
}

impl IncidentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// CSS class for an input: `"error"` while its field is invalid.
    pub fn field_class(&self, field: FormField) -> &'static str {
        if self.errors.contains_key(&field) {
            "error"
        } else {
            ""
        }
    }

    /// Replaces the stored errors with the result of checking the current
    /// inputs. Whitespace-only text counts as empty.
    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::new();
        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, FormField::Title.required_message().into());
        }
        if self.description.trim().is_empty() {
            errors.insert(
                FormField::Description,
                FormField::Description.required_message().into(),
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validates and, on success, hands the untrimmed inputs to `on_submit`
    /// and resets the form. On failure `on_submit` is not called.
    pub fn submit<F>(&mut self, reported_at: DateTime<Utc>, on_submit: F) -> Result<(), ValidationError>
    where
        F: FnOnce(NewIncident),
    {
        if !self.validate() {
            let fields: Vec<FormField> = self.errors.keys().copied().collect();
            debug!(?fields, "incident form rejected");
            return Err(ValidationError { fields });
        }

        let new = NewIncident {
            title: self.title.clone(),
            description: self.description.clone(),
            severity: self.severity,
            reported_at,
        };
        on_submit(new);
        self.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 8, 15, 0).unwrap()
    }

    #[test]
    fn defaults() {
        let form = IncidentForm::new();
        assert_eq!(form.title(), "");
        assert_eq!(form.description(), "");
        assert_eq!(form.severity(), Severity::Medium);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn empty_title_is_the_only_error() {
        let mut form = IncidentForm::new();
        form.set_description("Model refused a benign request");
        let mut called = false;

        let err = form.submit(now(), |_| called = true).unwrap_err();

        assert!(!called);
        assert_eq!(err.fields, vec![FormField::Title]);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error(FormField::Title), Some("Title is required"));
        assert_eq!(form.field_class(FormField::Title), "error");
        assert_eq!(form.field_class(FormField::Description), "");
        assert_eq!(form.description(), "Model refused a benign request");
    }

    #[test]
    fn whitespace_only_is_empty() {
        let mut form = IncidentForm::new();
        form.set_title("   ");
        form.set_description("\n\t ");
        let mut called = false;

        let err = form.submit(now(), |_| called = true).unwrap_err();

        assert!(!called);
        assert_eq!(err.fields, vec![FormField::Title, FormField::Description]);
        assert_eq!(
            form.error(FormField::Description),
            Some("Description is required")
        );
    }

    #[test]
    fn valid_submit_emits_untrimmed_values_and_resets() {
        let mut form = IncidentForm::new();
        form.set_title("  Reward hacking ");
        form.set_description("Agent exploited a scoring bug\n");
        form.set_severity(Severity::High);
        let mut emitted = None;

        form.submit(now(), |new| emitted = Some(new)).expect("valid form");

        let new = emitted.expect("callback invoked");
        assert_eq!(new.title, "  Reward hacking ");
        assert_eq!(new.description, "Agent exploited a scoring bug\n");
        assert_eq!(new.severity, Severity::High);
        assert_eq!(new.reported_at, now());
        assert_eq!(form, IncidentForm::new());
    }

    #[test]
    fn fixing_the_field_clears_its_error_on_next_submit() {
        let mut form = IncidentForm::new();
        assert!(form.submit(now(), |_| {}).is_err());
        assert_eq!(form.errors().len(), 2);

        form.set_title("Prompt injection");
        form.set_description("Tool output hijacked the agent");
        assert!(form.submit(now(), |_| {}).is_ok());
        assert!(form.errors().is_empty());
    }
}
