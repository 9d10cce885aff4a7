use serde::{Deserialize, Serialize};

use crate::catalog::types::FileRecord;
use crate::health::FileStatus;
use crate::membership::types::{NodeState, NodeView};

/// Cluster overview returned by `FileStore::status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterStatus {
    pub nodes: Vec<NodeView>,
    pub file_count: usize,
    pub storage_used: f64,
    pub replication_factor: u32,
    pub active_nodes: usize,
    pub health: FileStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileListing {
    pub files: Vec<FileRecord>,
    pub total: usize,
}

/// What a client needs to fetch a file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadTicket {
    pub filename: String,
    pub size: f64,
    pub checksum: String,
    pub chunks: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToggleOutcome {
    pub node_id: u32,
    pub status: NodeState,
    pub active_nodes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreStats {
    pub total_files: usize,
    pub total_storage: f64,
    pub total_chunks: u64,
    pub avg_file_size: f64,
    pub active_nodes: usize,
    pub replication_factor: u32,
}

/// Rounds to two decimals for reporting.
///
/// Values too large to scale have no fractional part and are returned as is.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}
