//! DTOs for the service root and endpoint catalogue.

use serde::Serialize;

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub docs: &'static str,
}

/// Body of `GET /docs`.
#[derive(Debug, Serialize)]
pub struct ApiCatalog {
    pub service: &'static str,
    pub endpoints: &'static [EndpointDoc],
}

/// One documented route.
#[derive(Debug, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}
