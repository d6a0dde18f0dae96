use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::domain::error::DomainResult;
use crate::domain::models::account::{AccountModel, AddAccountParams};
use crate::domain::usecases::add_account::AddAccount;
use crate::presentation::protocols::validation::Validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl SignUpField {
    pub const ALL: [SignUpField; 4] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::PasswordConfirmation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirmation => "passwordConfirmation",
        }
    }
}

impl std::fmt::Display for SignUpField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl SignUpInput {
    pub fn value(&self, field: SignUpField) -> &str {
        match field {
            SignUpField::Name => &self.name,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
            SignUpField::PasswordConfirmation => &self.password_confirmation,
        }
    }

    fn value_mut(&mut self, field: SignUpField) -> &mut String {
        match field {
            SignUpField::Name => &mut self.name,
            SignUpField::Email => &mut self.email,
            SignUpField::Password => &mut self.password,
            SignUpField::PasswordConfirmation => &mut self.password_confirmation,
        }
    }
}

impl From<SignUpInput> for AddAccountParams {
    fn from(input: SignUpInput) -> Self {
        AddAccountParams {
            name: input.name,
            email: input.email,
            password: input.password,
            password_confirmation: input.password_confirmation,
        }
    }
}

/// Builds the rule set for the current input; the confirmation rule captures the password.
pub type SignUpValidation = Arc<dyn Fn(&SignUpInput) -> Box<dyn Validation> + Send + Sync>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpState {
    pub input: SignUpInput,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub password_confirmation_error: Option<String>,
    pub is_loading: bool,
    pub main_error: Option<String>,
}

impl SignUpState {
    pub fn error(&self, field: SignUpField) -> Option<&str> {
        match field {
            SignUpField::Name => self.name_error.as_deref(),
            SignUpField::Email => self.email_error.as_deref(),
            SignUpField::Password => self.password_error.as_deref(),
            SignUpField::PasswordConfirmation => self.password_confirmation_error.as_deref(),
        }
    }

    fn error_mut(&mut self, field: SignUpField) -> &mut Option<String> {
        match field {
            SignUpField::Name => &mut self.name_error,
            SignUpField::Email => &mut self.email_error,
            SignUpField::Password => &mut self.password_error,
            SignUpField::PasswordConfirmation => &mut self.password_confirmation_error,
        }
    }

    pub fn is_form_invalid(&self) -> bool {
        SignUpField::ALL
            .iter()
            .any(|field| self.error(*field).is_some())
    }

    pub fn errors(&self) -> Vec<(SignUpField, String)> {
        SignUpField::ALL
            .into_iter()
            .filter_map(|field| self.error(field).map(|error| (field, error.to_string())))
            .collect()
    }
}

pub struct SignUp {
    validation: SignUpValidation,
    add_account: Arc<dyn AddAccount>,
    state: watch::Sender<SignUpState>,
}

impl SignUp {
    pub fn new(validation: SignUpValidation, add_account: Arc<dyn AddAccount>) -> Self {
        let (state, _) = watch::channel(SignUpState::default());

        let sign_up = Self {
            validation,
            add_account,
            state,
        };

        for field in SignUpField::ALL {
            sign_up.validate(field);
        }

        sign_up
    }

    /// Current state; the guard must not be held across `populate` or `submit`.
    pub fn state(&self) -> watch::Ref<'_, SignUpState> {
        self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SignUpState> {
        self.state.subscribe()
    }

    pub fn populate(&mut self, field: SignUpField, value: impl Into<String>) {
        let value = value.into();
        self.state
            .send_modify(|state| *state.input.value_mut(field) = value);

        self.validate(field);

        if field == SignUpField::Password {
            self.validate(SignUpField::PasswordConfirmation);
        }
    }

    /// Returns `Ok(None)` without calling the backend while the form is invalid.
    pub async fn submit(&mut self) -> DomainResult<Option<AccountModel>> {
        let params = {
            let state = self.state.borrow();
            if state.is_form_invalid() {
                return Ok(None);
            }
            AddAccountParams::from(state.input.clone())
        };

        self.state.send_modify(|state| {
            state.is_loading = true;
            state.main_error = None;
        });

        let result = self.add_account.add(params).await;

        self.state.send_modify(|state| {
            state.is_loading = false;
            state.main_error = result.as_ref().err().map(ToString::to_string);
        });

        let account = result?;
        info!(name = %account.name, "account created");

        Ok(Some(account))
    }

    fn validate(&self, field: SignUpField) {
        let error = {
            let state = self.state.borrow();
            let validation = (self.validation)(&state.input);
            validation.validate(field.as_str(), state.input.value(field))
        };

        self.state
            .send_modify(|state| *state.error_mut(field) = error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::models::account::mock::account_model;
    use crate::domain::usecases::add_account::mock::AddAccountSpy;
    use crate::presentation::tests::ValidationStub;
    use rstest::*;

    fn stub(message: Option<&'static str>) -> SignUpValidation {
        Arc::new(move |_: &SignUpInput| -> Box<dyn Validation> {
            Box::new(ValidationStub {
                error_message: message.map(str::to_string),
            })
        })
    }

    fn populate_all(sut: &mut SignUp) {
        sut.populate(SignUpField::Name, "Test Account");
        sut.populate(SignUpField::Email, "test_account@email.com");
        sut.populate(SignUpField::Password, "stR0ngP4ssw0rd!");
        sut.populate(SignUpField::PasswordConfirmation, "stR0ngP4ssw0rd!");
    }

    #[test]
    fn test_initial_state() {
        let sut = SignUp::new(stub(Some("Required field")), Arc::new(AddAccountSpy::default()));
        let state = sut.state();

        assert!(state.main_error.is_none());
        assert!(!state.is_loading);
        assert!(state.is_form_invalid());
        for field in SignUpField::ALL {
            assert_eq!(state.error(field), Some("Required field"));
        }
    }

    #[rstest]
    #[case::name(SignUpField::Name)]
    #[case::email(SignUpField::Email)]
    #[case::password(SignUpField::Password)]
    #[case::password_confirmation(SignUpField::PasswordConfirmation)]
    fn test_field_error(#[case] field: SignUpField) {
        let mut sut = SignUp::new(stub(Some("Invalid value")), Arc::new(AddAccountSpy::default()));

        sut.populate(field, "any_value");

        assert_eq!(sut.state().input.value(field), "any_value");
        assert_eq!(sut.state().error(field), Some("Invalid value"));
    }

    #[rstest]
    #[case::name(SignUpField::Name)]
    #[case::email(SignUpField::Email)]
    #[case::password(SignUpField::Password)]
    #[case::password_confirmation(SignUpField::PasswordConfirmation)]
    fn test_field_valid(#[case] field: SignUpField) {
        let mut sut = SignUp::new(stub(None), Arc::new(AddAccountSpy::default()));

        sut.populate(field, "any_value");

        assert_eq!(sut.state().error(field), None);
    }

    #[test]
    fn test_password_change_revalidates_confirmation() {
        let validation: SignUpValidation = Arc::new(|input: &SignUpInput| -> Box<dyn Validation> {
            let mismatch = input.password != input.password_confirmation;
            Box::new(ValidationStub {
                error_message: mismatch.then(|| "Invalid value".to_string()),
            })
        });
        let mut sut = SignUp::new(validation, Arc::new(AddAccountSpy::default()));

        sut.populate(SignUpField::PasswordConfirmation, "12345");
        assert_eq!(sut.state().error(SignUpField::PasswordConfirmation), Some("Invalid value"));

        sut.populate(SignUpField::Password, "12345");
        assert_eq!(sut.state().error(SignUpField::PasswordConfirmation), None);
    }

    #[tokio::test]
    async fn test_submit_calls_add_account_with_input() {
        let spy = Arc::new(AddAccountSpy::default());
        let mut sut = SignUp::new(stub(None), spy.clone());
        populate_all(&mut sut);

        let account = sut.submit().await.unwrap();

        assert_eq!(account, Some(account_model()));
        assert!(!sut.state().is_loading);

        let calls = spy.calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            AddAccountParams {
                name: "Test Account".to_string(),
                email: "test_account@email.com".to_string(),
                password: "stR0ngP4ssw0rd!".to_string(),
                password_confirmation: "stR0ngP4ssw0rd!".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_submit_skipped_when_invalid() {
        let spy = Arc::new(AddAccountSpy::default());
        let mut sut = SignUp::new(stub(Some("Required field")), spy.clone());

        let result = sut.submit().await;

        assert_eq!(result, Ok(None));
        assert!(spy.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_sets_main_error() {
        let spy = Arc::new(AddAccountSpy {
            result: Err(DomainError::EmailInUse),
            ..Default::default()
        });
        let mut sut = SignUp::new(stub(None), spy);
        populate_all(&mut sut);

        let result = sut.submit().await;

        assert_eq!(result, Err(DomainError::EmailInUse));
        assert_eq!(
            sut.state().main_error.as_deref(),
            Some("This email is already in use")
        );
        assert!(!sut.state().is_loading);
    }

    #[tokio::test]
    async fn test_loading_while_add_account_pending() {
        let (spy, release) = AddAccountSpy::gated();
        let mut sut = SignUp::new(stub(None), Arc::new(spy));
        populate_all(&mut sut);
        let mut state = sut.subscribe();

        let pending = async {
            state.wait_for(|state| state.is_loading).await.unwrap();
            release.send(()).unwrap();
        };

        let (result, _) = tokio::join!(sut.submit(), pending);

        assert_eq!(result, Ok(Some(account_model())));
        assert!(!state.borrow().is_loading);
    }
}
