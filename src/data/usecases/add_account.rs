use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::data::protocols::http::{HttpPostClient, HttpPostParams, status_code};
use crate::domain::{
    error::{DomainError, DomainResult},
    models::account::{AccountModel, AddAccountParams},
    usecases::add_account::AddAccount,
};

pub struct RemoteAddAccount {
    url: String,
    http_post_client: Arc<dyn HttpPostClient<AddAccountParams, AccountModel>>,
}

impl RemoteAddAccount {
    pub fn new(
        url: impl Into<String>,
        http_post_client: Arc<dyn HttpPostClient<AddAccountParams, AccountModel>>,
    ) -> Self {
        Self {
            url: url.into(),
            http_post_client,
        }
    }
}

#[async_trait]
impl AddAccount for RemoteAddAccount {
    async fn add(&self, params: AddAccountParams) -> DomainResult<AccountModel> {
        debug!(url = %self.url, "creating account");

        let response = self
            .http_post_client
            .post(HttpPostParams {
                url: self.url.clone(),
                body: Some(params),
            })
            .await
            .map_err(|err| {
                error!(error = %err, "add account request failed");
                DomainError::Unexpected
            })?;

        match (response.status_code, response.body) {
            (status_code::OK, Some(account)) => Ok(account),
            (status_code::FORBIDDEN, _) => Err(DomainError::EmailInUse),
            (status, _) => {
                warn!(status, "unexpected add account response");
                Err(DomainError::Unexpected)
            }
        }
    }
}
