use rstest::*;

use crate::domain::error::DomainError;
use crate::domain::models::account::mock::account_model;
use crate::presentation::pages::login::LoginField;
use crate::tests::{TestContext, context};
use crate::{AppError, ensure_valid, submitted};

#[rstest]
#[awt]
#[tokio::test]
async fn test_field_errors_reported_by_name(#[future] context: TestContext) {
    let mut page = context.container.login();

    page.populate(LoginField::Email, "not-an-email");

    let err = ensure_valid(page.state().errors()).unwrap_err();

    assert!(matches!(&err, AppError::InvalidForm(_)));
    assert_eq!(
        err.to_string(),
        "email: Invalid value\npassword: Required field"
    );
}

#[rstest]
#[awt]
#[tokio::test]
async fn test_valid_form_passes(#[future] context: TestContext) {
    let mut page = context.container.login();

    page.populate(LoginField::Email, "test_account@email.com");
    page.populate(LoginField::Password, "stR0ngP4ssw0rd!");

    assert!(ensure_valid(page.state().errors()).is_ok());
}

#[rstest]
fn test_submitted_account() {
    let account = submitted(Ok(Some(account_model()))).unwrap();

    assert_eq!(account, account_model());
}

#[rstest]
fn test_submitted_skipped_is_invalid_form() {
    assert!(matches!(submitted(Ok(None)), Err(AppError::InvalidForm(_))));
}

#[rstest]
fn test_submitted_domain_error() {
    let err = submitted(Err(DomainError::EmailInUse)).unwrap_err();

    assert!(matches!(err, AppError::Domain(DomainError::EmailInUse)));
    assert_eq!(err.to_string(), "This email is already in use");
}
