//! Catalog Client Port
//!
//! Streams a profile archive from the remote catalog. HTTP status codes are
//! classified here so callers branch on a typed error instead of matching on
//! message text.

use std::io::Write;

use thiserror::Error;

use crate::domain::value_objects::Credentials;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// HTTP 401
    #[error("401 Unauthorized from {url}")]
    Unauthorized { url: String },

    /// HTTP 403
    #[error("403 Forbidden from {url}")]
    Forbidden { url: String },

    /// Anything else: connection failures, TLS errors, other status codes.
    #[error("transport error fetching {url}: {message}")]
    Transport {
        url: String,
        status: Option<u16>,
        message: String,
    },
}

impl CatalogError {
    /// Map a non-success HTTP status to an error.
    pub fn from_status(url: &str, status: u16, message: impl Into<String>) -> Self {
        match status {
            401 => CatalogError::Unauthorized {
                url: url.to_string(),
            },
            403 => CatalogError::Forbidden {
                url: url.to_string(),
            },
            _ => CatalogError::Transport {
                url: url.to_string(),
                status: Some(status),
                message: message.into(),
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Unauthorized { .. } => Some(401),
            CatalogError::Forbidden { .. } => Some(403),
            CatalogError::Transport { status, .. } => *status,
        }
    }

    /// 401 and 403 may be tolerated; everything else is always fatal.
    pub fn is_classified(&self) -> bool {
        self.diagnosis().is_some()
    }

    /// Likely cause, for the operator.
    pub fn diagnosis(&self) -> Option<&'static str> {
        match self {
            CatalogError::Unauthorized { .. } => Some("Possible time/date issue on the client."),
            CatalogError::Forbidden { .. } => {
                Some("Possible offline compliance server or auth gateway issue.")
            }
            CatalogError::Transport { .. } => None,
        }
    }
}

/// Access to the profile catalog.
pub trait CatalogClient {
    /// Stream the body at `url` into `sink`, returning the number of bytes written.
    ///
    /// Nothing is guaranteed about `sink` contents when an error is returned.
    fn download(
        &self,
        url: &str,
        credentials: &Credentials,
        sink: &mut dyn Write,
    ) -> Result<u64, CatalogError>;
}
