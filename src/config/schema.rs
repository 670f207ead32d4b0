//! TOML-defined forms. A schema file describes a form declaratively (fields
//! plus per-field rules) so deployments can validate forms beyond the
//! built-in ones through the same gate.

use crate::core::rules;
use crate::domain::model::{Submission, ValidationReport};
use crate::domain::ports::Form;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{
    validate_bounds, validate_field_reference, validate_non_empty_string, validate_pattern,
    validate_unique_names, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchema {
    pub name: String,
    #[serde(rename = "field", default)]
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub label: Option<String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| {
            let mut label = self.name.replace('_', " ");
            if let Some(first) = label.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            label
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    Required,
    Alphabetic { min: usize },
    Digits { min: usize, max: usize },
    Email,
    Length { min: Option<usize>, max: Option<usize> },
    Pattern { pattern: String, message: Option<String> },
    Password,
    Matches { other: String },
}

impl FormSchema {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FormError::SchemaParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_schema(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;

        if self.fields.is_empty() {
            return Err(FormError::SchemaParseError {
                message: "Schema must declare at least one field".to_string(),
            });
        }

        let names: Vec<String> = self.fields.iter().map(|f| f.name.clone()).collect();
        validate_unique_names("field.name", &names)?;

        for field in &self.fields {
            validate_non_empty_string("field.name", &field.name)?;
            let slot = format!("field.{}.rules", field.name);
            for rule in &field.rules {
                match rule {
                    Rule::Alphabetic { min } => {
                        if *min == 0 {
                            return Err(FormError::InvalidSchemaValueError {
                                field: slot.clone(),
                                value: "0".to_string(),
                                reason: "Alphabetic minimum must be at least 1".to_string(),
                            });
                        }
                    }
                    Rule::Digits { min, max } => {
                        validate_bounds(&slot, Some(*min), Some(*max))?;
                    }
                    Rule::Length { min, max } => {
                        validate_bounds(&slot, *min, *max)?;
                    }
                    Rule::Pattern { pattern, .. } => {
                        validate_pattern(&slot, pattern)?;
                    }
                    Rule::Matches { other } => {
                        validate_field_reference(&slot, other, &names)?;
                    }
                    Rule::Required | Rule::Email | Rule::Password => {}
                }
            }
        }

        Ok(())
    }
}

impl Validate for FormSchema {
    fn validate(&self) -> Result<()> {
        self.validate_schema()
    }
}

enum CompiledRule {
    Required,
    Alphabetic { min: usize },
    Digits { min: usize, max: usize },
    Email,
    Length { min: Option<usize>, max: Option<usize> },
    Pattern { regex: Regex, message: Option<String> },
    Password,
    Matches { other: String, other_label: String },
}

struct CompiledField {
    name: String,
    label: String,
    rules: Vec<CompiledRule>,
}

/// A schema compiled into a runnable form: patterns pre-built, labels and
/// cross-field references resolved.
pub struct SchemaForm {
    name: String,
    field_names: Vec<String>,
    fields: Vec<CompiledField>,
}

impl SchemaForm {
    pub fn from_schema(schema: FormSchema) -> Result<Self> {
        schema.validate_schema()?;

        let labels: Vec<(String, String)> = schema
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.display_label()))
            .collect();
        let label_of = |name: &str| -> String {
            labels
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, l)| l.clone())
                .unwrap_or_else(|| name.to_string())
        };

        let mut fields = Vec::with_capacity(schema.fields.len());
        for field in &schema.fields {
            let slot = format!("field.{}.rules", field.name);
            let mut rules = Vec::with_capacity(field.rules.len());
            for rule in &field.rules {
                rules.push(match rule {
                    Rule::Required => CompiledRule::Required,
                    Rule::Alphabetic { min } => CompiledRule::Alphabetic { min: *min },
                    Rule::Digits { min, max } => CompiledRule::Digits {
                        min: *min,
                        max: *max,
                    },
                    Rule::Email => CompiledRule::Email,
                    Rule::Length { min, max } => CompiledRule::Length {
                        min: *min,
                        max: *max,
                    },
                    Rule::Pattern { pattern, message } => CompiledRule::Pattern {
                        regex: validate_pattern(&slot, pattern)?,
                        message: message.clone(),
                    },
                    Rule::Password => CompiledRule::Password,
                    Rule::Matches { other } => CompiledRule::Matches {
                        other: other.clone(),
                        other_label: label_of(other),
                    },
                });
            }
            fields.push(CompiledField {
                name: field.name.clone(),
                label: field.display_label(),
                rules,
            });
        }

        Ok(Self {
            name: schema.name,
            field_names: labels.into_iter().map(|(n, _)| n).collect(),
            fields,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_schema(FormSchema::from_file(path)?)
    }
}

impl Form for SchemaForm {
    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> &[String] {
        &self.field_names
    }

    fn validate(&self, submission: &Submission) -> ValidationReport {
        let mut report = ValidationReport::new();

        for field in &self.fields {
            let value = submission.value(&field.name);
            for rule in &field.rules {
                // Blank values only trip the required rule; format rules
                // apply once something was entered.
                let outcome = match rule {
                    CompiledRule::Required => rules::required(&field.label, value),
                    _ if value.is_empty() => Ok(()),
                    CompiledRule::Alphabetic { min } => {
                        rules::alphabetic(&field.label, value, *min)
                    }
                    CompiledRule::Digits { min, max } => {
                        rules::digits(&field.label, value, *min, *max)
                    }
                    CompiledRule::Email => rules::email(value),
                    CompiledRule::Length { min, max } => {
                        rules::length(&field.label, value, *min, *max)
                    }
                    CompiledRule::Pattern { regex, message } => {
                        rules::pattern(&field.label, value, regex, message.as_deref())
                    }
                    CompiledRule::Password => rules::register_password(value),
                    CompiledRule::Matches { other, other_label } => rules::matches(
                        &field.label,
                        value,
                        other_label,
                        submission.value(other),
                    ),
                };

                if outcome.is_err() {
                    report.check(&field.name, outcome);
                    break; // one message per field per attempt
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CONTACT_SCHEMA: &str = r#"
name = "contact"

[[field]]
name = "full_name"
label = "Full name"
rules = [{ type = "required" }, { type = "alphabetic", min = 3 }]

[[field]]
name = "phone"
rules = [{ type = "digits", min = 10, max = 15 }]

[[field]]
name = "email"
rules = [{ type = "required" }, { type = "email" }]
"#;

    #[test]
    fn test_parse_basic_schema() {
        let schema = FormSchema::from_toml_str(CONTACT_SCHEMA).unwrap();
        assert_eq!(schema.name, "contact");
        assert_eq!(schema.fields.len(), 3);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(FormSchema::from_toml_str("name = ").is_err());
    }

    #[test]
    fn test_schema_sanity_checks() {
        let no_fields = FormSchema::from_toml_str(r#"name = "empty""#).unwrap();
        assert!(no_fields.validate_schema().is_err());

        let bad_pattern = r#"
name = "bad"

[[field]]
name = "pin"
rules = [{ type = "pattern", pattern = "[unclosed" }]
"#;
        let schema = FormSchema::from_toml_str(bad_pattern).unwrap();
        assert!(schema.validate_schema().is_err());

        let dangling_matches = r#"
name = "bad"

[[field]]
name = "confirm"
rules = [{ type = "matches", other = "password" }]
"#;
        let schema = FormSchema::from_toml_str(dangling_matches).unwrap();
        assert!(schema.validate_schema().is_err());
    }

    #[test]
    fn test_schema_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(CONTACT_SCHEMA.as_bytes()).unwrap();

        let form = SchemaForm::from_file(temp_file.path()).unwrap();
        assert_eq!(form.name(), "contact");
        assert_eq!(form.fields().len(), 3);
    }

    #[test]
    fn test_schema_form_validates_submission() {
        let schema = FormSchema::from_toml_str(CONTACT_SCHEMA).unwrap();
        let form = SchemaForm::from_schema(schema).unwrap();

        let good = Submission::new()
            .with("full_name", "Ada Lovelace")
            .with("phone", "0123456789")
            .with("email", "ada@example.com");
        assert!(form.validate(&good).is_valid());

        let bad = Submission::new()
            .with("full_name", "A1")
            .with("email", "nope");
        let report = form.validate(&bad);
        assert_eq!(report.failing_fields(), vec!["email", "full_name"]);
        // phone is optional here: blank skips the digits rule
        assert!(report.messages("phone").is_empty());
    }

    #[test]
    fn test_blank_optional_field_skips_format_rules() {
        let schema = FormSchema::from_toml_str(CONTACT_SCHEMA).unwrap();
        let form = SchemaForm::from_schema(schema).unwrap();

        let report = form.validate(&Submission::new());
        assert_eq!(report.messages("full_name"), &["Full name is required."]);
        assert!(report.messages("phone").is_empty());
    }

    #[test]
    fn test_matches_rule_uses_labels() {
        let toml = r#"
name = "register"

[[field]]
name = "password"
rules = [{ type = "password" }]

[[field]]
name = "confirm_password"
label = "Confirmation"
rules = [{ type = "matches", other = "password" }]
"#;
        let form = SchemaForm::from_schema(FormSchema::from_toml_str(toml).unwrap()).unwrap();
        let report = form.validate(
            &Submission::new()
                .with("password", "Abcdef1!")
                .with("confirm_password", "different"),
        );
        assert_eq!(
            report.messages("confirm_password"),
            &["Confirmation does not match Password."]
        );
    }
}
