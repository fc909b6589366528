//! Root and `/docs` handlers for both services.

use axum::Json;

use crate::api::dto::service_info::{ApiCatalog, EndpointDoc, ServiceInfo};

const SHORTENER_ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc {
        method: "POST",
        path: "/shorten",
        description: "Shorten a URL; body {\"url\": string}",
    },
    EndpointDoc {
        method: "GET",
        path: "/{short_id}",
        description: "Redirect to the target URL and count the click",
    },
    EndpointDoc {
        method: "GET",
        path: "/stats/{short_id}",
        description: "Target URL, click count and creation time",
    },
];

const TODO_ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc {
        method: "POST",
        path: "/items",
        description: "Create an item; body {\"title\", \"description\"?, \"completed\"?}",
    },
    EndpointDoc {
        method: "GET",
        path: "/items",
        description: "List all items",
    },
    EndpointDoc {
        method: "GET",
        path: "/items/{id}",
        description: "Fetch one item",
    },
    EndpointDoc {
        method: "PUT",
        path: "/items/{id}",
        description: "Replace every field of an item",
    },
    EndpointDoc {
        method: "DELETE",
        path: "/items/{id}",
        description: "Delete an item",
    },
    EndpointDoc {
        method: "GET",
        path: "/health",
        description: "Database liveness",
    },
];

/// `GET /` on the shortener.
pub async fn shortener_root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "URL Shortener Service",
        docs: "/docs",
    })
}

/// `GET /docs` on the shortener.
pub async fn shortener_docs_handler() -> Json<ApiCatalog> {
    Json(ApiCatalog {
        service: "URL Shortener",
        endpoints: SHORTENER_ENDPOINTS,
    })
}

/// `GET /` on the to-do service.
pub async fn todo_root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "ToDo Service is running",
        docs: "/docs",
    })
}

/// `GET /docs` on the to-do service.
pub async fn todo_docs_handler() -> Json<ApiCatalog> {
    Json(ApiCatalog {
        service: "ToDo Service",
        endpoints: TODO_ENDPOINTS,
    })
}
