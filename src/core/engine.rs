use crate::domain::model::{Disposition, Submission};
use crate::domain::ports::{ErrorPresenter, Form};

/// The submission gate: runs every field check, surfaces failures through
/// the presenter, and decides whether the submission may proceed.
pub struct FormEngine<F: Form> {
    form: F,
}

impl<F: Form> FormEngine<F> {
    pub fn new(form: F) -> Self {
        Self { form }
    }

    pub fn form_name(&self) -> &str {
        self.form.name()
    }

    pub fn submit<P: ErrorPresenter>(
        &self,
        submission: &Submission,
        presenter: &mut P,
    ) -> Disposition {
        tracing::debug!("Validating form '{}'", self.form.name());

        // Stale errors from the previous attempt are wiped before re-checking.
        for field in self.form.fields() {
            presenter.clear_error(field);
        }

        let report = self.form.validate(submission);
        if report.is_valid() {
            tracing::debug!("Form '{}' passed all field checks", self.form.name());
            return Disposition::Allowed;
        }

        for field in self.form.fields() {
            if let Some(message) = report.messages(field).first() {
                presenter.show_error(field, message);
            }
        }

        tracing::debug!(
            "Form '{}' blocked: {} failing field(s)",
            self.form.name(),
            report.failing_fields().len()
        );
        Disposition::Blocked(report)
    }
}
