use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::protocol::{ApiResponse, UploadRequest};
use crate::catalog::types::{FileId, FileRecord, ReplicationReport, VerificationEntry};
use crate::error::{ErrorKind, StoreError};
use crate::journal::LogEntry;
use crate::store::service::FileStore;
use crate::store::types::{ClusterStatus, DownloadTicket, FileListing, StoreStats, ToggleOutcome};

type ApiResult<T> = (StatusCode, Json<ApiResponse<T>>);

fn status_for(err: &StoreError) -> StatusCode {
    match err.kind() {
        ErrorKind::BadInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
    }
}

fn failure<T>(err: StoreError) -> ApiResult<T> {
    let message = match &err {
        StoreError::InvalidInput(_) => "Invalid filename or size".to_string(),
        StoreError::InvalidNodeId { .. } => "Invalid node ID".to_string(),
        StoreError::NotFound(_) => "File not found".to_string(),
        StoreError::MalformedId { what, raw } => format!("Invalid {} ID: {}", what, raw),
    };
    tracing::debug!("Request failed: {}", err);

    (status_for(&err), Json(ApiResponse::failure(message)))
}

fn malformed_id(what: &'static str, raw: &str, err: std::num::ParseIntError) -> StoreError {
    tracing::warn!("Rejected {} id {:?}: {}", what, raw, err);
    StoreError::MalformedId {
        what,
        raw: raw.to_string(),
    }
}

fn parse_file_id(raw: &str) -> Result<FileId, StoreError> {
    raw.parse::<u64>()
        .map(FileId)
        .map_err(|e| malformed_id("file", raw, e))
}

fn parse_node_id(raw: &str) -> Result<u32, StoreError> {
    raw.parse::<u32>().map_err(|e| malformed_id("node", raw, e))
}

pub async fn handle_status(
    Extension(store): Extension<Arc<FileStore>>,
) -> ApiResult<ClusterStatus> {
    (StatusCode::OK, Json(ApiResponse::ok(store.status())))
}

pub async fn handle_upload(
    Extension(store): Extension<Arc<FileStore>>,
    payload: Result<Json<UploadRequest>, JsonRejection>,
) -> ApiResult<FileRecord> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("Rejected upload body: {}", rejection.body_text());
            return failure(StoreError::InvalidInput(rejection.body_text()));
        }
    };

    match store.upload(&req.filename, req.size) {
        Ok(record) => (
            StatusCode::OK,
            Json(ApiResponse::ok_with_message(
                "File uploaded successfully",
                record,
            )),
        ),
        Err(e) => {
            tracing::warn!("Rejected upload {:?}: {}", req.filename, e);
            failure(e)
        }
    }
}

pub async fn handle_list_files(
    Extension(store): Extension<Arc<FileStore>>,
) -> ApiResult<FileListing> {
    (StatusCode::OK, Json(ApiResponse::ok(store.list_files())))
}

pub async fn handle_get_file(
    Extension(store): Extension<Arc<FileStore>>,
    Path(id): Path<String>,
) -> ApiResult<FileRecord> {
    match parse_file_id(&id).and_then(|id| store.get_file(id)) {
        Ok(record) => (StatusCode::OK, Json(ApiResponse::ok(record))),
        Err(e) => failure(e),
    }
}

pub async fn handle_download(
    Extension(store): Extension<Arc<FileStore>>,
    Path(id): Path<String>,
) -> ApiResult<DownloadTicket> {
    match parse_file_id(&id).and_then(|id| store.download(id)) {
        Ok(ticket) => (
            StatusCode::OK,
            Json(ApiResponse::ok_with_message("Download initiated", ticket)),
        ),
        Err(e) => failure(e),
    }
}

pub async fn handle_verify(
    Extension(store): Extension<Arc<FileStore>>,
) -> ApiResult<Vec<VerificationEntry>> {
    let report = store.verify();
    let message = format!("Verified {} files", report.len());

    (
        StatusCode::OK,
        Json(ApiResponse::ok_with_message(message, report)),
    )
}

pub async fn handle_toggle_node(
    Extension(store): Extension<Arc<FileStore>>,
    Path(node_id): Path<String>,
) -> ApiResult<ToggleOutcome> {
    match parse_node_id(&node_id).and_then(|id| store.toggle_node(id)) {
        Ok(outcome) => {
            let message = format!("Node {} is now {}", outcome.node_id, outcome.status);
            (
                StatusCode::OK,
                Json(ApiResponse::ok_with_message(message, outcome)),
            )
        }
        Err(e) => failure(e),
    }
}

pub async fn handle_replication(
    Extension(store): Extension<Arc<FileStore>>,
) -> ApiResult<ReplicationReport> {
    (
        StatusCode::OK,
        Json(ApiResponse::ok(store.replication_report())),
    )
}

pub async fn handle_delete_file(
    Extension(store): Extension<Arc<FileStore>>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    match parse_file_id(&id).and_then(|id| store.delete_file(id)) {
        Ok(record) => (
            StatusCode::OK,
            Json(ApiResponse::message(format!(
                "File {} deleted successfully",
                record.name
            ))),
        ),
        Err(e) => failure(e),
    }
}

pub async fn handle_logs(Extension(store): Extension<Arc<FileStore>>) -> ApiResult<Vec<LogEntry>> {
    (StatusCode::OK, Json(ApiResponse::ok(store.logs())))
}

pub async fn handle_stats(Extension(store): Extension<Arc<FileStore>>) -> ApiResult<StoreStats> {
    (StatusCode::OK, Json(ApiResponse::ok(store.stats())))
}

pub async fn handle_reset(Extension(store): Extension<Arc<FileStore>>) -> ApiResult<()> {
    store.reset();
    (
        StatusCode::OK,
        Json(ApiResponse::message("System reset successfully")),
    )
}
