//! HTTP Catalog Client
//!
//! Streams profile archives with `reqwest`'s blocking client.

use std::io::Write;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};

use crate::domain::ports::{CatalogClient, CatalogError};
use crate::domain::value_objects::Credentials;

const USER_AGENT: &str = concat!("compliance/", env!("CARGO_PKG_VERSION"));

/// TLS and timeout settings for the catalog connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpOptions {
    /// Accept any server certificate. Off unless explicitly requested.
    pub insecure_skip_verify: bool,
    /// Whole-request timeout; `None` keeps the client default.
    pub timeout: Option<Duration>,
}

pub struct HttpCatalogClient {
    client: Client,
}

impl HttpCatalogClient {
    pub fn new(options: HttpOptions) -> Result<Self, reqwest::Error> {
        if options.insecure_skip_verify {
            tracing::warn!("TLS certificate verification is disabled for the compliance catalog");
        }

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(options.insecure_skip_verify);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

fn authorize(request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
    match credentials {
        Credentials::None => request,
        Credentials::Basic { username, password } => request.basic_auth(username, Some(password)),
        Credentials::Token(token) => request.bearer_auth(token),
    }
}

fn transport(url: &str, err: reqwest::Error) -> CatalogError {
    CatalogError::Transport {
        url: url.to_string(),
        status: err.status().map(|s| s.as_u16()),
        message: err.to_string(),
    }
}

impl CatalogClient for HttpCatalogClient {
    fn download(
        &self,
        url: &str,
        credentials: &Credentials,
        sink: &mut dyn Write,
    ) -> Result<u64, CatalogError> {
        tracing::debug!(url, auth = credentials.kind(), "requesting profile archive");

        let mut response = authorize(self.client.get(url), credentials)
            .send()
            .map_err(|e| transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::from_status(
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("request failed"),
            ));
        }

        response.copy_to(sink).map_err(|e| transport(url, e))
    }
}
