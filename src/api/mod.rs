//! HTTP API Module
//!
//! Binds `FileStore` operations to JSON endpoints. Every response body uses the
//! same envelope (`success` plus `data`, `message` or `error`), and store errors
//! map to `400 Bad Request` or `404 Not Found`.
//!
//! ## Submodules
//! - **`protocol`**: Endpoint paths and Data Transfer Objects.
//! - **`handlers`**: Axum request handlers, one per store operation.

pub mod handlers;
pub mod protocol;


use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::store::service::FileStore;
use handlers::*;
use protocol::*;

/// Builds the API router around a shared store.
pub fn router(store: Arc<FileStore>) -> Router {
    Router::new()
        .route(ENDPOINT_STATUS, get(handle_status))
        .route(ENDPOINT_UPLOAD, post(handle_upload))
        .route(ENDPOINT_FILES, get(handle_list_files))
        .route(
            ENDPOINT_FILE,
            get(handle_get_file).delete(handle_delete_file),
        )
        .route(ENDPOINT_DOWNLOAD, get(handle_download))
        .route(ENDPOINT_VERIFY, post(handle_verify))
        .route(ENDPOINT_TOGGLE_NODE, post(handle_toggle_node))
        .route(ENDPOINT_REPLICATION, get(handle_replication))
        .route(ENDPOINT_LOGS, get(handle_logs))
        .route(ENDPOINT_STATS, get(handle_stats))
        .route(ENDPOINT_RESET, post(handle_reset))
        .layer(Extension(store))
}
