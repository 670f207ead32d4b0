use formgate::{AdminPatientForm, Disposition, FormEngine, FormView, Submission};

fn valid_patient() -> Submission {
    Submission::new()
        .with("name", "Ada Lovelace")
        .with("phone", "0123456789")
        .with("email", "ada@example.com")
        .with("glucose", "120")
        .with("blood_pressure", "70")
        .with("skin_thickness", "20")
        .with("insulin", "80")
        .with("bmi", "24.5")
        .with("diabetes_pedigree", "0.52")
        .with("age", "36")
}

#[test]
fn test_valid_patient_entry_is_allowed() {
    let engine = FormEngine::new(AdminPatientForm::new());
    let mut view = FormView::new();

    assert!(engine.submit(&valid_patient(), &mut view).is_allowed());
    assert!(view.invalid_fields().is_empty());
}

#[test]
fn test_contact_field_errors_are_presented_per_field() {
    let engine = FormEngine::new(AdminPatientForm::new());
    let mut view = FormView::new();

    let mut submission = valid_patient();
    submission.set("name", "X9");
    submission.set("phone", "123-456-7890");

    let disposition = engine.submit(&submission, &mut view);

    assert!(!disposition.is_allowed());
    assert_eq!(
        view.error_text("name"),
        "Name must be at least 3 letters (only alphabets and spaces)."
    );
    assert_eq!(view.error_text("phone"), "Phone must be 10–15 digits.");
    assert!(!view.is_invalid("email"));
}

#[test]
fn test_non_numeric_health_field_blocks() {
    let engine = FormEngine::new(AdminPatientForm::new());
    let mut view = FormView::new();

    let mut submission = valid_patient();
    submission.set("glucose", "high");

    match engine.submit(&submission, &mut view) {
        Disposition::Blocked(report) => {
            assert_eq!(report.messages("glucose"), &["Glucose must be a number."]);
        }
        Disposition::Allowed => panic!("non-numeric glucose must block"),
    }
}

#[test]
fn test_zero_age_is_rejected() {
    let engine = FormEngine::new(AdminPatientForm::new());
    let mut view = FormView::new();

    let mut submission = valid_patient();
    submission.set("age", "0");

    assert!(!engine.submit(&submission, &mut view).is_allowed());
    assert_eq!(view.error_text("age"), "Age must be greater than 0.");
}

#[test]
fn test_resubmission_clears_stale_errors() {
    let engine = FormEngine::new(AdminPatientForm::new());
    let mut view = FormView::new();

    let mut submission = valid_patient();
    submission.set("phone", "12");
    assert!(!engine.submit(&submission, &mut view).is_allowed());
    assert!(view.is_invalid("phone"));

    submission.set("phone", "0123456789");
    assert!(engine.submit(&submission, &mut view).is_allowed());
    assert!(!view.is_invalid("phone"));
}
