use crate::utils::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of a single field check: `Ok(())` on pass, a human-readable
/// message on failure.
pub type RuleResult = std::result::Result<(), String>;

/// Field values read from one submission attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    pub fields: HashMap<String, String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Raw value for a field; an absent control reads as empty.
    pub fn value(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Parses a JSON object of field values. Scalars are accepted and
    /// stringified; nested values are rejected since form controls only
    /// carry strings.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(content)?;
        let mut submission = Submission::new();
        for (field, value) in raw {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => String::new(),
                other => {
                    return Err(FormError::FieldValueError {
                        field,
                        reason: format!("expected a scalar, got {}", other),
                    })
                }
            };
            submission.set(field, text);
        }
        Ok(submission)
    }
}

/// Per-field failure messages collected over one validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: HashMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    /// Records a rule outcome against a field. Passing outcomes leave the
    /// report untouched.
    pub fn check(&mut self, field: &str, outcome: RuleResult) {
        if let Err(message) = outcome {
            self.add_error(field, message);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn failing_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

/// What the gate decided about a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition {
    /// Every field check passed; default submission may proceed.
    Allowed,
    /// At least one field check failed; submission is cancelled.
    Blocked(ValidationReport),
}

impl Disposition {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Disposition::Allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_value_defaults_to_empty() {
        let submission = Submission::new().with("name", "Ada Lovelace");
        assert_eq!(submission.value("name"), "Ada Lovelace");
        assert_eq!(submission.value("phone"), "");
    }

    #[test]
    fn test_submission_from_json_accepts_scalars() {
        let submission =
            Submission::from_json_str(r#"{"name": "Ada", "age": 36, "active": true}"#).unwrap();
        assert_eq!(submission.value("name"), "Ada");
        assert_eq!(submission.value("age"), "36");
        assert_eq!(submission.value("active"), "true");
    }

    #[test]
    fn test_submission_from_json_rejects_nested_values() {
        assert!(Submission::from_json_str(r#"{"name": {"first": "Ada"}}"#).is_err());
        assert!(Submission::from_json_str("not json").is_err());
    }

    #[test]
    fn test_report_aggregates_per_field() {
        let mut report = ValidationReport::new();
        report.check("name", Ok(()));
        report.check("phone", Err("Phone must be 10–15 digits.".to_string()));
        report.add_error("phone", "second message");

        assert!(!report.is_valid());
        assert_eq!(report.messages("name"), &[] as &[String]);
        assert_eq!(report.messages("phone").len(), 2);
        assert_eq!(report.failing_fields(), vec!["phone"]);
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.failing_fields().is_empty());
    }
}
