//! API Protocol
//!
//! Endpoint paths and the Data Transfer Objects (DTOs) exchanged with clients.

use serde::{Deserialize, Deserializer, Serialize};

// --- API Endpoints ---

/// Cluster overview: nodes, file count, storage used, health.
pub const ENDPOINT_STATUS: &str = "/api/status";
/// Register a new file.
pub const ENDPOINT_UPLOAD: &str = "/api/upload";
/// List all files.
pub const ENDPOINT_FILES: &str = "/api/files";
/// Fetch (GET) or delete (DELETE) a single file.
pub const ENDPOINT_FILE: &str = "/api/files/:id";
/// Download metadata for a file.
pub const ENDPOINT_DOWNLOAD: &str = "/api/download/:id";
/// Run an integrity verification pass.
pub const ENDPOINT_VERIFY: &str = "/api/verify";
/// Flip a storage node between online and offline.
pub const ENDPOINT_TOGGLE_NODE: &str = "/api/nodes/:id/toggle";
/// Per-file replication overview.
pub const ENDPOINT_REPLICATION: &str = "/api/replication";
/// Recent system log entries.
pub const ENDPOINT_LOGS: &str = "/api/logs";
/// Aggregate statistics.
pub const ENDPOINT_STATS: &str = "/api/stats";
/// Drop all files and bring all nodes online.
pub const ENDPOINT_RESET: &str = "/api/reset";

// --- Data Transfer Objects ---

/// Envelope wrapped around every response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Client request to register a file.
///
/// Missing fields fall back to an empty name and zero size, which the store
/// rejects as invalid input. `size` may be sent as a number or a numeric string;
/// any other value (`null`, `true`, ...) is read as NaN.
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(default, deserialize_with = "lenient_size")]
    pub size: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeInput {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_size<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match SizeInput::deserialize(deserializer)? {
        SizeInput::Number(n) => n,
        // Unparsable text becomes NaN and is rejected downstream
        SizeInput::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        SizeInput::Other(_) => f64::NAN,
    })
}
