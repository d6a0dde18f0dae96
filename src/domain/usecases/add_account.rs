use async_trait::async_trait;

use crate::domain::error::DomainResult;
use crate::domain::models::account::{AccountModel, AddAccountParams};

#[async_trait]
pub trait AddAccount: 'static + Sync + Send {
    async fn add(&self, params: AddAccountParams) -> DomainResult<AccountModel>;
}
