use async_trait::async_trait;
use thiserror::Error;

pub type HttpResult<T> = core::result::Result<T, HttpError>;

#[rustfmt::skip]
pub mod status_code {
    pub const OK: u16 = 200;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;

    #[cfg(test)] pub const NO_CONTENT: u16 = 204;
    #[cfg(test)] pub const BAD_REQUEST: u16 = 400;
    #[cfg(test)] pub const NOT_FOUND: u16 = 404;
    #[cfg(test)] pub const SERVER_ERROR: u16 = 500;
}

/// Failure to complete the exchange at all; a response with any status code is not an error here.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("response from {url} could not be decoded: {message}")]
    Decode { url: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpPostParams<B> {
    pub url: String,
    pub body: Option<B>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse<R> {
    pub status_code: u16,
    pub body: Option<R>,
}

impl<R> HttpResponse<R> {
    pub fn new(status_code: u16, body: Option<R>) -> Self {
        Self { status_code, body }
    }
}

#[async_trait]
pub trait HttpPostClient<B, R>: Send + Sync
where
    B: Send + Sync + 'static,
    R: Send + 'static,
{
    async fn post(&self, params: HttpPostParams<B>) -> HttpResult<HttpResponse<R>>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Captures the last request and replies with `response`.
    pub struct HttpPostClientSpy<B, R> {
        pub url: Mutex<Option<String>>,
        pub body: Mutex<Option<B>>,
        pub response: HttpResponse<R>,
        pub fail: bool,
    }

    impl<B, R> HttpPostClientSpy<B, R> {
        pub fn new(response: HttpResponse<R>) -> Self {
            Self {
                url: Mutex::new(None),
                body: Mutex::new(None),
                response,
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(HttpResponse::new(status_code::OK, None))
            }
        }
    }

    #[async_trait]
    impl<B, R> HttpPostClient<B, R> for HttpPostClientSpy<B, R>
    where
        B: Send + Sync + 'static,
        R: Clone + Send + Sync + 'static,
    {
        async fn post(&self, params: HttpPostParams<B>) -> HttpResult<HttpResponse<R>> {
            *self.url.lock().unwrap() = Some(params.url.clone());
            *self.body.lock().unwrap() = params.body;

            if self.fail {
                return Err(HttpError::Transport {
                    url: params.url,
                    message: "connection refused".to_string(),
                });
            }

            Ok(self.response.clone())
        }
    }
}
