use crate::domain::model::{Submission, ValidationReport};

/// A validatable form: names its fields in declaration order and checks a
/// submission against its rules. Pure and synchronous.
pub trait Form {
    fn name(&self) -> &str;
    fn fields(&self) -> &[String];
    fn validate(&self, submission: &Submission) -> ValidationReport;
}

impl<F: Form + ?Sized> Form for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fields(&self) -> &[String] {
        (**self).fields()
    }

    fn validate(&self, submission: &Submission) -> ValidationReport {
        (**self).validate(submission)
    }
}

/// Shows or clears the inline error slot for a field. Both operations must
/// be idempotent: repeating either converges to the same visible state.
pub trait ErrorPresenter {
    fn show_error(&mut self, field: &str, message: &str);
    fn clear_error(&mut self, field: &str);
}
