//! The built-in forms: admin patient entry, registration, and login. Each
//! runs its field checks against a submission and reports every failure at
//! once, so the presenter can mark all offending fields in one pass.

use crate::core::rules;
use crate::domain::model::{Submission, ValidationReport};
use crate::domain::ports::Form;
use crate::utils::error::{FormError, Result};

/// Numeric measurements captured on the admin patient form.
pub const HEALTH_FIELDS: [&str; 7] = [
    "glucose",
    "blood_pressure",
    "skin_thickness",
    "insulin",
    "bmi",
    "diabetes_pedigree",
    "age",
];

fn field_label(field: &str) -> String {
    let mut label = field.replace('_', " ");
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    label
}

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

pub struct AdminPatientForm {
    fields: Vec<String>,
}

impl AdminPatientForm {
    pub fn new() -> Self {
        let mut fields = owned(&["name", "phone", "email"]);
        fields.extend(owned(&HEALTH_FIELDS));
        Self { fields }
    }
}

impl Default for AdminPatientForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AdminPatientForm {
    fn name(&self) -> &str {
        "admin-add"
    }

    fn fields(&self) -> &[String] {
        &self.fields
    }

    fn validate(&self, submission: &Submission) -> ValidationReport {
        let mut report = ValidationReport::new();

        report.check("name", rules::name(submission.value("name").trim()));
        report.check("phone", rules::phone(submission.value("phone").trim()));
        report.check("email", rules::email(submission.value("email").trim()));

        for field in HEALTH_FIELDS {
            let value = submission.value(field);
            if field == "age" {
                report.check(field, rules::positive_age(value));
            } else {
                report.check(field, rules::numeric(&field_label(field), value));
            }
        }

        report
    }
}

pub struct RegisterForm {
    fields: Vec<String>,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            fields: owned(&["username", "email", "password", "confirm_password"]),
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn name(&self) -> &str {
        "register"
    }

    fn fields(&self) -> &[String] {
        &self.fields
    }

    fn validate(&self, submission: &Submission) -> ValidationReport {
        let mut report = ValidationReport::new();

        let username = submission.value("username").trim();
        let email = submission.value("email").trim();
        let password = submission.value("password");
        let confirmation = submission.value("confirm_password");

        // Presence first, format second; one message per field per attempt.
        match rules::required("Username", username) {
            Ok(()) => report.check("username", rules::username(username)),
            missing => report.check("username", missing),
        }
        match rules::required("Email", email) {
            Ok(()) => report.check("email", rules::email(email)),
            missing => report.check("email", missing),
        }
        match rules::required("Password", password) {
            Ok(()) => report.check("password", rules::register_password(password)),
            missing => report.check("password", missing),
        }
        match rules::required("Password confirmation", confirmation) {
            Ok(()) => report.check(
                "confirm_password",
                rules::confirm_password(password, confirmation),
            ),
            missing => report.check("confirm_password", missing),
        }

        report
    }
}

pub struct LoginForm {
    fields: Vec<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            fields: owned(&["username", "password"]),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn name(&self) -> &str {
        "login"
    }

    fn fields(&self) -> &[String] {
        &self.fields
    }

    fn validate(&self, submission: &Submission) -> ValidationReport {
        let mut report = ValidationReport::new();

        let username = submission.value("username").trim();
        match rules::required("Username", username) {
            Ok(()) => report.check("username", rules::login_username(username)),
            missing => report.check("username", missing),
        }

        let password = submission.value("password");
        match rules::required("Password", password) {
            Ok(()) => report.check("password", rules::login_password(password)),
            missing => report.check("password", missing),
        }

        report
    }
}

/// Looks up a built-in form by its CLI name.
pub fn builtin_form(name: &str) -> Result<Box<dyn Form>> {
    match name {
        "admin-add" => Ok(Box::new(AdminPatientForm::new())),
        "register" => Ok(Box::new(RegisterForm::new())),
        "login" => Ok(Box::new(LoginForm::new())),
        other => Err(FormError::UnknownFormError(other.to_string())),
    }
}
