use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::data::protocols::http::{HttpPostClient, HttpPostParams, status_code};
use crate::domain::{
    error::{DomainError, DomainResult},
    models::account::{AccountModel, AuthenticationParams},
    usecases::authentication::Authentication,
};

pub struct RemoteAuthentication {
    url: String,
    http_post_client: Arc<dyn HttpPostClient<AuthenticationParams, AccountModel>>,
}

impl RemoteAuthentication {
    pub fn new(
        url: impl Into<String>,
        http_post_client: Arc<dyn HttpPostClient<AuthenticationParams, AccountModel>>,
    ) -> Self {
        Self {
            url: url.into(),
            http_post_client,
        }
    }
}

#[async_trait]
impl Authentication for RemoteAuthentication {
    async fn auth(&self, params: AuthenticationParams) -> DomainResult<AccountModel> {
        debug!(url = %self.url, "authenticating account");

        let response = self
            .http_post_client
            .post(HttpPostParams {
                url: self.url.clone(),
                body: Some(params),
            })
            .await
            .map_err(|err| {
                error!(error = %err, "authentication request failed");
                DomainError::Unexpected
            })?;

        match (response.status_code, response.body) {
            (status_code::OK, Some(account)) => Ok(account),
            (status_code::UNAUTHORIZED, _) => Err(DomainError::InvalidCredentials),
            (status, _) => {
                warn!(status, "unexpected authentication response");
                Err(DomainError::Unexpected)
            }
        }
    }
}
