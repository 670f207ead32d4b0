use formgate::{FormEngine, FormView, LoginForm, Submission};

#[test]
fn test_login_allows_any_character_class_at_length_8() {
    let engine = FormEngine::new(LoginForm::new());

    for password in ["12345678", "aaaaaaaa", "!!!!!!!!", "pass word"] {
        let mut view = FormView::new();
        let submission = Submission::new()
            .with("username", "ada")
            .with("password", password);
        assert!(
            engine.submit(&submission, &mut view).is_allowed(),
            "password {:?} should pass the login check",
            password
        );
    }
}

#[test]
fn test_login_blocks_short_password() {
    let engine = FormEngine::new(LoginForm::new());
    let mut view = FormView::new();

    let submission = Submission::new()
        .with("username", "ada")
        .with("password", "Abc1!");

    assert!(!engine.submit(&submission, &mut view).is_allowed());
    assert_eq!(
        view.error_text("password"),
        "Password must be at least 8 characters."
    );
}

#[test]
fn test_login_checks_username_length_band() {
    let engine = FormEngine::new(LoginForm::new());
    let mut view = FormView::new();

    let submission = Submission::new()
        .with("username", "ab")
        .with("password", "longenough");

    assert!(!engine.submit(&submission, &mut view).is_allowed());
    assert_eq!(view.error_text("username"), "Invalid username format.");
}

#[test]
fn test_missing_credentials_are_required() {
    let engine = FormEngine::new(LoginForm::new());
    let mut view = FormView::new();

    assert!(!engine.submit(&Submission::new(), &mut view).is_allowed());
    assert_eq!(view.error_text("username"), "Username is required.");
    assert_eq!(view.error_text("password"), "Password is required.");
}
