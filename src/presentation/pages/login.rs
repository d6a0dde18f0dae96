use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::domain::error::DomainResult;
use crate::domain::models::account::{AccountModel, AuthenticationParams};
use crate::domain::usecases::authentication::Authentication;
use crate::presentation::protocols::validation::Validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub const ALL: [LoginField; 2] = [Self::Email, Self::Password];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl std::fmt::Display for LoginField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub is_loading: bool,
    pub main_error: Option<String>,
}

impl LoginState {
    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn value_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn error(&self, field: LoginField) -> Option<&str> {
        match field {
            LoginField::Email => self.email_error.as_deref(),
            LoginField::Password => self.password_error.as_deref(),
        }
    }

    fn error_mut(&mut self, field: LoginField) -> &mut Option<String> {
        match field {
            LoginField::Email => &mut self.email_error,
            LoginField::Password => &mut self.password_error,
        }
    }

    pub fn is_form_invalid(&self) -> bool {
        self.email_error.is_some() || self.password_error.is_some()
    }

    pub fn errors(&self) -> Vec<(LoginField, String)> {
        LoginField::ALL
            .into_iter()
            .filter_map(|field| self.error(field).map(|error| (field, error.to_string())))
            .collect()
    }
}

pub struct Login {
    validation: Arc<dyn Validation>,
    authentication: Arc<dyn Authentication>,
    state: watch::Sender<LoginState>,
}

impl Login {
    pub fn new(validation: Arc<dyn Validation>, authentication: Arc<dyn Authentication>) -> Self {
        let (state, _) = watch::channel(LoginState::default());

        let login = Self {
            validation,
            authentication,
            state,
        };

        for field in LoginField::ALL {
            login.validate(field);
        }

        login
    }

    pub fn state(&self) -> watch::Ref<'_, LoginState> {
        self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.state.subscribe()
    }

    pub fn populate(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        self.state
            .send_modify(|state| *state.value_mut(field) = value);

        self.validate(field);
    }

    pub async fn submit(&mut self) -> DomainResult<Option<AccountModel>> {
        let params = {
            let state = self.state.borrow();
            if state.is_form_invalid() {
                return Ok(None);
            }
            AuthenticationParams {
                email: state.email.clone(),
                password: state.password.clone(),
            }
        };

        self.state.send_modify(|state| {
            state.is_loading = true;
            state.main_error = None;
        });

        let result = self.authentication.auth(params).await;

        self.state.send_modify(|state| {
            state.is_loading = false;
            state.main_error = result.as_ref().err().map(ToString::to_string);
        });

        let account = result?;
        info!(name = %account.name, "account authenticated");

        Ok(Some(account))
    }

    fn validate(&self, field: LoginField) {
        let error = {
            let state = self.state.borrow();
            self.validation.validate(field.as_str(), state.value(field))
        };

        self.state
            .send_modify(|state| *state.error_mut(field) = error);
    }
}
