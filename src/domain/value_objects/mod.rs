//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod endpoint;
mod hash;
mod profile_ref;

pub use endpoint::{Credentials, EndpointError, Organization, RemoteEndpoint};
pub use hash::ContentHash;
pub use profile_ref::{normalize, ProfileReference, COMPLIANCE_DIR, DEFAULT_OWNER};
