//! Catalog Clients

mod http;

pub use http::{HttpCatalogClient, HttpOptions};
