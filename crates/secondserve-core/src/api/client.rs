//! Generic HTTP client for the SecondServe backend.

use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use crate::config::Config;
use crate::session::SessionStore;

/// Whether a call must carry the session's auth header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Required,
    None,
}

/// Client for the backend REST API.
///
/// Turns a (method, path, optional body, auth requirement) tuple into a
/// typed result. Protected calls fail locally with
/// [`ApiError::AuthenticationMissing`] when no session exists; no network
/// I/O happens in that case. The pipeline performs no retries.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Creates a client from configuration.
    ///
    /// Resolves the base URL (env > config > default) and applies the
    /// configured request timeout to the underlying transport.
    pub fn new(config: &Config, session: SessionStore) -> Result<Self> {
        let base_url = config.resolve_base_url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Creates a client against an explicit base URL (used by tests and
    /// tools that bypass config resolution).
    pub fn with_base_url(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// The session store this client reads tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> ApiResult<T> {
        let builder = self.begin(Method::GET, path, auth)?;
        self.execute(path, builder).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, auth: Auth) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.begin(Method::POST, path, auth)?.json(body);
        self.execute(path, builder).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, auth: Auth) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.begin(Method::PUT, path, auth)?.json(body);
        self.execute(path, builder).await
    }

    /// PUT with no request body and no expected response body, for
    /// state-transition endpoints like approve/reject/complete.
    pub async fn put_unit(&self, path: &str, auth: Auth) -> ApiResult<()> {
        let builder = self.begin(Method::PUT, path, auth)?;
        self.execute_unit(path, builder).await
    }

    pub async fn delete(&self, path: &str, auth: Auth) -> ApiResult<()> {
        let builder = self.begin(Method::DELETE, path, auth)?;
        self.execute_unit(path, builder).await
    }

    /// Builds the request, attaching the auth header when required.
    ///
    /// This is the single pre-flight check that replaces the "if token is
    /// null, alert and return" guard every screen used to duplicate.
    fn begin(&self, method: Method, path: &str, auth: Auth) -> ApiResult<RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if auth == Auth::Required {
            let header_value = self
                .session
                .auth_header()
                .ok_or(ApiError::AuthenticationMissing)?;
            builder = builder.header(header::AUTHORIZATION, header_value);
        }
        Ok(builder)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> ApiResult<T> {
        let body = self.run(path, builder).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(path, error = %e, "response body did not match expected shape");
            ApiError::parsing(e.to_string())
        })
    }

    async fn execute_unit(&self, path: &str, builder: RequestBuilder) -> ApiResult<()> {
        self.run(path, builder).await.map(|_| ())
    }

    /// Sends the request and maps the outcome: 2xx passes the body through,
    /// non-2xx becomes an application error with the exact status, transport
    /// failures become connection errors.
    async fn run(&self, path: &str, builder: RequestBuilder) -> ApiResult<String> {
        tracing::debug!(path, "issuing request");
        let response = builder.send().await.map_err(|e| ApiError::connection(&e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::connection(&e))?;

        tracing::debug!(path, status = status.as_u16(), "request completed");
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::application(status.as_u16(), body))
        }
    }
}
