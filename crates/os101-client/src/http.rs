//! HTTP implementation of [`RegistrationApi`] on top of `reqwest`.
//!
//! Paths are joined onto a configurable base URL so tests can point the
//! client at a fake backend on `127.0.0.1`.

use os101_core::{config::Config, RegistrationInput};
use reqwest::{Client, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize};

use crate::api::{
    ApiError, DuplicateCheck, DuplicateCheckRequest, RecordKey, RecordResponse, RegisterResponse,
    RegistrationApi,
};

pub const REGISTER_PATH: &str = "/api/register";
pub const CHECK_DUPLICATES_PATH: &str = "/api/register/check-duplicates";

/// Error body the backend sends with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Registration backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRegistrationApi {
    client: Client,
    base: Url,
}

impl HttpRegistrationApi {
    pub fn new(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::Transport(format!("invalid API base URL {base_url:?}: {e}")))?;
        Ok(Self { client, base })
    }

    /// Build from the `[api]` section of the configuration.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = build_client(config)?;
        Self::new(client, &config.api.base_url)
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

/// A `reqwest` client honouring the configured timeout.
pub fn build_client(config: &Config) -> Result<Client, ApiError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Send `request` and decode a 2xx body as `T`.
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !status.is_success() {
        let error = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error);
        tracing::debug!(status = status.as_u16(), error = ?error, "backend rejected request");
        return Err(ApiError::Status {
            status: status.as_u16(),
            error,
        });
    }

    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl RegistrationApi for HttpRegistrationApi {
    async fn check_duplicates(
        &self,
        request: &DuplicateCheckRequest,
    ) -> Result<DuplicateCheck, ApiError> {
        let url = self.url(CHECK_DUPLICATES_PATH)?;
        tracing::debug!(%url, "POST duplicate check");
        send_json(self.client.post(url).json(request)).await
    }

    async fn register(&self, input: &RegistrationInput) -> Result<RegisterResponse, ApiError> {
        let url = self.url(REGISTER_PATH)?;
        tracing::debug!(%url, "POST registration");
        send_json(self.client.post(url).json(input)).await
    }

    async fn find_record(&self, key: RecordKey<'_>) -> Result<RecordResponse, ApiError> {
        let mut url = self.url(REGISTER_PATH)?;
        let (param, value) = key.param();
        url.query_pairs_mut().append_pair(param, value);
        tracing::debug!(param, "GET registration record");
        send_json(self.client.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_join_onto_base_url() {
        let api = HttpRegistrationApi::new(Client::new(), "http://127.0.0.1:3000/ignored").unwrap();
        assert_eq!(
            api.url(CHECK_DUPLICATES_PATH).unwrap().as_str(),
            "http://127.0.0.1:3000/api/register/check-duplicates"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = HttpRegistrationApi::new(Client::new(), "not a url").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
