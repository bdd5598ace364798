//! Transport seam between the controllers and the remote game service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    error::ApiError,
    protocol::{GuessRequest, GuessResponse, StartSessionResponse},
};
use tracing::debug;
use url::Url;

use crate::error::ServiceError;

#[async_trait]
pub trait GameService: Send + Sync {
    async fn start_session(&self) -> Result<StartSessionResponse, ServiceError>;
    async fn submit_guess(&self, request: &GuessRequest) -> Result<GuessResponse, ServiceError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub start_url: Url,
    pub guess_url: Url,
}

impl ServiceEndpoints {
    /// Resolves both endpoint paths against `server_url` using standard URL
    /// reference rules, so `/start` replaces any base path while `start` is
    /// appended to a base ending in `/`.
    pub fn resolve(
        server_url: &str,
        start_path: &str,
        guess_path: &str,
    ) -> Result<Self, ServiceError> {
        let base = Url::parse(server_url)?;
        Ok(Self {
            start_url: base.join(start_path)?,
            guess_url: base.join(guess_path)?,
        })
    }
}

pub struct HttpGameService {
    http: Client,
    endpoints: ServiceEndpoints,
}

impl HttpGameService {
    pub fn new(endpoints: ServiceEndpoints, timeout: Option<Duration>) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoints,
        })
    }
}

#[async_trait]
impl GameService for HttpGameService {
    async fn start_session(&self) -> Result<StartSessionResponse, ServiceError> {
        debug!(url = %self.endpoints.start_url, "requesting new game session");
        let res = self
            .http
            .get(self.endpoints.start_url.clone())
            .send()
            .await?;
        read_json(res).await
    }

    async fn submit_guess(&self, request: &GuessRequest) -> Result<GuessResponse, ServiceError> {
        debug!(
            url = %self.endpoints.guess_url,
            guess_index = request.guess_index,
            guess_letter = %request.guess_letter,
            "posting guess"
        );
        let res = self
            .http
            .post(self.endpoints.guess_url.clone())
            .json(request)
            .send()
            .await?;
        read_json(res).await
    }
}

async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ServiceError> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ServiceError::Status {
            status,
            detail: describe_error_body(&body),
        });
    }
    Ok(res.json().await?)
}

fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => format!("{:?}: {}", api_error.code, api_error.message),
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
