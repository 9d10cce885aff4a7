use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::health::FileStatus;
use crate::membership::types::NodeId;

/// Identifier of a registered file. Assigned from a monotonic counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered file and its replica placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub size: f64,
    /// Placeholder token, not derived from content.
    pub checksum: String,
    pub chunks: u64,
    /// Nodes that were alive when the file was registered, ascending.
    pub replicas: Vec<NodeId>,
    pub uploaded_at: DateTime<Utc>,
    pub status: FileStatus,
}

/// One row of an integrity verification pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationEntry {
    pub filename: String,
    pub checksum: String,
    pub active_replicas: usize,
    pub status: FileStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplicationEntry {
    pub filename: String,
    pub total_replicas: usize,
    pub active_replicas: usize,
    pub status: FileStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplicationReport {
    pub files: Vec<ReplicationEntry>,
    pub active_nodes: usize,
}

/// Aggregates over the live record set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogTotals {
    pub total_files: usize,
    pub total_storage: f64,
    pub total_chunks: u64,
}

impl CatalogTotals {
    pub fn avg_file_size(&self) -> f64 {
        if self.total_files > 0 {
            self.total_storage / self.total_files as f64
        } else {
            0.0
        }
    }
}
