// REST client
//
// Every request resolves its bearer token from the token store at send time,
// so a login or logout in one command is seen by the next request. Paths that
// contain one of the configured public substrings are sent without it.
// Endpoints are given as path segments; each one is escaped on its own, so an
// id can never reach a different route.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::Form;
use anyhow::bail;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use eventora_domain::{GatewayError, RuntimeConfig, TokenStore};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    public_paths: Vec<String>,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &RuntimeConfig, tokens: Arc<dyn TokenStore>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds.max(1)))
            .build()?;
        let base_url = Url::parse(config.api_base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            bail!("api_base_url {} cannot carry a path", base_url);
        }
        Ok(Self {
            client,
            base_url,
            public_paths: config.public_paths.clone(),
            tokens,
        })
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths
            .iter()
            .any(|public| !public.is_empty() && path.contains(public.as_str()))
    }

    /// The base URL followed by `segments`, each percent-escaped.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects bases that cannot take segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, GatewayError> {
        let url = self.endpoint(segments);
        let path = url.path().to_string();
        let builder = self.client.request(method.clone(), url);
        if self.is_public(&path) {
            debug!("{} {} (public)", method, path);
            return Ok(builder);
        }
        let session = self
            .tokens
            .load()
            .await
            .map_err(|err| GatewayError::Storage(err.to_string()))?;
        match session {
            Some(session) => {
                debug!("{} {}", method, path);
                Ok(builder.header(AUTHORIZATION, format!("Bearer {}", session.token)))
            }
            None => {
                debug!("{} {} (no session)", method, path);
                Ok(builder)
            }
        }
    }

    pub async fn get_json(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Value, GatewayError> {
        let builder = self.request(Method::GET, segments).await?.query(query);
        read_json(send(builder).await?).await
    }

    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<Value, GatewayError> {
        let builder = self.request(method, segments).await?.json(body);
        read_json(send(builder).await?).await
    }

    pub async fn send_multipart(
        &self,
        method: Method,
        segments: &[&str],
        form: Form,
    ) -> Result<Value, GatewayError> {
        let builder = self.request(method, segments).await?.multipart(form);
        read_json(send(builder).await?).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<(), GatewayError> {
        let builder = self.request(Method::DELETE, segments).await?;
        send(builder).await?;
        Ok(())
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, GatewayError> {
    let response = builder
        .send()
        .await
        .map_err(|err| GatewayError::Transport(err.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    warn!("backend responded {}: {}", status, message);
    Err(match status {
        StatusCode::UNAUTHORIZED => GatewayError::Unauthorized,
        StatusCode::NOT_FOUND => GatewayError::NotFound(message),
        status => GatewayError::Api {
            status: status.as_u16(),
            message,
        },
    })
}

async fn read_json(response: Response) -> Result<Value, GatewayError> {
    let body = response
        .text()
        .await
        .map_err(|err| GatewayError::Transport(err.to_string()))?;
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|err| GatewayError::Schema(err.to_string()))
}

// Backends report failures as `{"message": ...}` or `{"error": ...}`.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(ToString::to_string)
        .or_else(|| Some(body.trim().to_string()).filter(|text| !text.is_empty()))
}
