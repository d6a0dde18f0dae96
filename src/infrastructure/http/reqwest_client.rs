use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::data::protocols::http::{
    HttpError, HttpPostClient, HttpPostParams, HttpResponse, HttpResult,
};

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl<B, R> HttpPostClient<B, R> for ReqwestHttpClient
where
    B: Serialize + Send + Sync + 'static,
    R: DeserializeOwned + Send + 'static,
{
    async fn post(&self, params: HttpPostParams<B>) -> HttpResult<HttpResponse<R>> {
        let mut request = self.client.post(&params.url);

        if let Some(body) = &params.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| HttpError::Transport {
            url: params.url.clone(),
            message: err.to_string(),
        })?;

        let status = response.status();

        let bytes = response.bytes().await.map_err(|err| HttpError::Transport {
            url: params.url.clone(),
            message: err.to_string(),
        })?;

        // Error payloads have their own shape, only successful bodies are decoded.
        if !status.is_success() || bytes.is_empty() {
            return Ok(HttpResponse::new(status.as_u16(), None));
        }

        let body = serde_json::from_slice::<R>(&bytes).map_err(|err| HttpError::Decode {
            url: params.url,
            message: err.to_string(),
        })?;

        Ok(HttpResponse::new(status.as_u16(), Some(body)))
    }
}
