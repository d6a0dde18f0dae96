use std::sync::Arc;

use crate::config::ApiConfig;
use crate::data::usecases::add_account::RemoteAddAccount;
use crate::data::usecases::authentication::RemoteAuthentication;
use crate::domain::usecases::add_account::AddAccount;
use crate::domain::usecases::authentication::Authentication;
use crate::infrastructure::http::reqwest_client::ReqwestHttpClient;
use crate::presentation::pages::login::Login;
use crate::presentation::pages::signup::{SignUp, SignUpInput};
use crate::presentation::protocols::validation::Validation;
use crate::validation::builder::ValidationBuilder;
use crate::validation::composite::ValidationComposite;

pub struct Container {
    pub authentication: Arc<dyn Authentication>,
    pub add_account: Arc<dyn AddAccount>,
}

impl Container {
    pub fn new(api: &ApiConfig) -> Result<Self, reqwest::Error> {
        let http_client = ReqwestHttpClient::new(api.timeout())?;

        Ok(Container {
            authentication: authentication(api, http_client.clone()),
            add_account: add_account(api, http_client),
        })
    }

    pub fn login(&self) -> Login {
        Login::new(login_validation(), self.authentication.clone())
    }

    pub fn signup(&self) -> SignUp {
        SignUp::new(Arc::new(signup_validation), self.add_account.clone())
    }
}

fn authentication(api: &ApiConfig, http_client: ReqwestHttpClient) -> Arc<dyn Authentication> {
    Arc::new(RemoteAuthentication::new(api.url("/login"), Arc::new(http_client)))
}

fn add_account(api: &ApiConfig, http_client: ReqwestHttpClient) -> Arc<dyn AddAccount> {
    Arc::new(RemoteAddAccount::new(api.url("/signup"), Arc::new(http_client)))
}

pub fn login_validation() -> Arc<dyn Validation> {
    Arc::new(ValidationComposite::build(
        [
            ValidationBuilder::field("email").required().email().build(),
            ValidationBuilder::field("password").required().min(5).build(),
        ]
        .into_iter()
        .flatten()
        .collect(),
    ))
}

pub fn signup_validation(input: &SignUpInput) -> Box<dyn Validation> {
    Box::new(ValidationComposite::build(
        [
            ValidationBuilder::field("name").required().build(),
            ValidationBuilder::field("email").required().email().build(),
            ValidationBuilder::field("password").required().min(5).build(),
            ValidationBuilder::field("passwordConfirmation")
                .required()
                .same_as(input.password.as_str())
                .build(),
        ]
        .into_iter()
        .flatten()
        .collect(),
    ))
}
