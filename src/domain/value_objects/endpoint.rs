//! Remote Endpoint Value Object
//!
//! Connection parameters for the profile catalog: where it lives, which
//! organization scopes the request, and how to authenticate.

use thiserror::Error;
use url::Url;

/// Errors resolving a catalog endpoint from configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("cannot derive an organization from '{url}' (expected .../organizations/<org>)")]
    MissingOrganization { url: String },

    #[error("both a token and a username/password were configured; use only one")]
    ConflictingCredentials,

    #[error("username and password must be configured together")]
    IncompleteBasicAuth,
}

/// How requests to the catalog authenticate.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Credentials {
    #[default]
    None,
    Basic {
        username: String,
        password: String,
    },
    Token(String),
}

impl Credentials {
    /// Build credentials from the optional configuration fields.
    pub fn from_parts(
        username: Option<String>,
        password: Option<String>,
        token: Option<String>,
    ) -> Result<Self, EndpointError> {
        match (username, password, token) {
            (None, None, None) => Ok(Credentials::None),
            (None, None, Some(token)) => Ok(Credentials::Token(token)),
            (Some(username), Some(password), None) => Ok(Credentials::Basic { username, password }),
            (Some(_), Some(_), Some(_)) => Err(EndpointError::ConflictingCredentials),
            _ => Err(EndpointError::IncompleteBasicAuth),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Credentials::None => "none",
            Credentials::Basic { .. } => "basic",
            Credentials::Token(_) => "token",
        }
    }
}

// Secrets stay out of debug output and therefore out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::None => write!(f, "Credentials::None"),
            Credentials::Basic { username, .. } => {
                write!(f, "Credentials::Basic {{ username: {:?}, .. }}", username)
            }
            Credentials::Token(_) => write!(f, "Credentials::Token(..)"),
        }
    }
}

/// Tenant namespace scoping catalog requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Organization(String);

impl Organization {
    /// Take the final non-empty path segment of the management server URL,
    /// e.g. `https://chef.example.com/organizations/acme` -> `acme`.
    pub fn from_server_url(server_url: &str) -> Result<Self, EndpointError> {
        let url = parse_url(server_url)?;
        url.path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(|segment| Organization(segment.to_string()))
            .ok_or_else(|| EndpointError::MissingOrganization {
                url: server_url.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Organization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEndpoint {
    base: Url,
    organization: Organization,
    credentials: Credentials,
}

impl RemoteEndpoint {
    /// Resolve the endpoint.
    ///
    /// The organization always comes from `server_url`. The base is `server`
    /// when configured, otherwise the origin of `server_url`. `port`, when
    /// set, replaces the port of whichever base was chosen.
    pub fn resolve(
        server_url: &str,
        server: Option<&str>,
        port: Option<u16>,
        credentials: Credentials,
    ) -> Result<Self, EndpointError> {
        let organization = Organization::from_server_url(server_url)?;

        let mut base = match server {
            Some(server) => parse_url(server)?,
            None => {
                let mut url = parse_url(server_url)?;
                url.set_path("");
                url
            }
        };
        base.set_query(None);
        base.set_fragment(None);

        if let Some(port) = port {
            base.set_port(Some(port))
                .map_err(|_| EndpointError::InvalidUrl {
                    url: base.to_string(),
                    message: format!("cannot set port {}", port),
                })?;
        }

        Ok(Self {
            base,
            organization,
            credentials,
        })
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// `<base>/organizations/<org>`
    pub fn org_url(&self) -> String {
        format!(
            "{}/organizations/{}",
            self.base.as_str().trim_end_matches('/'),
            self.organization
        )
    }

    /// `<org_url>/owners/<owner>/compliance/<name>/tar`
    pub fn profile_tar_url(&self, owner: &str, name: &str) -> String {
        format!(
            "{}/owners/{}/compliance/{}/tar",
            self.org_url(),
            owner,
            name
        )
    }
}

fn parse_url(raw: &str) -> Result<Url, EndpointError> {
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };
    Url::parse(&candidate).map_err(|e| EndpointError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })
}
