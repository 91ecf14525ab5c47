//! Mock compliance catalog built on `wiremock`.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockBuilder, MockServer};

/// Organization every mock catalog serves.
pub const ORGANIZATION: &str = "acme";

/// Management server URL whose origin is `server` and whose org is [`ORGANIZATION`].
pub fn server_url(server: &MockServer) -> String {
    format!("{}/organizations/{}", server.uri(), ORGANIZATION)
}

/// Catalog path of the `owner/name` profile archive.
pub fn tar_path(owner: &str, name: &str) -> String {
    format!(
        "/organizations/{}/owners/{}/compliance/{}/tar",
        ORGANIZATION, owner, name
    )
}

/// Matches the archive download for `owner/name`.
pub fn profile_tar(owner: &str, name: &str) -> MockBuilder {
    Mock::given(method("GET")).and(path(tar_path(owner, name)))
}
