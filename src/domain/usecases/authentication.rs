use async_trait::async_trait;

use crate::domain::error::DomainResult;
use crate::domain::models::account::{AccountModel, AuthenticationParams};

#[async_trait]
pub trait Authentication: 'static + Sync + Send {
    async fn auth(&self, params: AuthenticationParams) -> DomainResult<AccountModel>;
}
