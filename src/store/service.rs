use parking_lot::RwLock;

use super::types::*;
use crate::catalog::catalog::ReplicaCatalog;
use crate::catalog::types::{FileId, FileRecord, ReplicationReport, VerificationEntry};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::health::HealthPolicy;
use crate::journal::{LogEntry, SystemLog};
use crate::membership::registry::NodeRegistry;
use crate::membership::types::{NodeId, NodeState};

/// Everything guarded by the store lock.
struct StoreState {
    registry: NodeRegistry,
    catalog: ReplicaCatalog,
    journal: SystemLog,
}

pub struct FileStore {
    config: StoreConfig,
    policy: HealthPolicy,
    state: RwLock<StoreState>,
}

impl FileStore {
    pub fn new(config: StoreConfig) -> Self {
        let policy = HealthPolicy::new(config.health_threshold);
        let state = StoreState {
            registry: NodeRegistry::new(config.node_count),
            catalog: ReplicaCatalog::new(policy, config.chunk_size),
            journal: SystemLog::new(config.log_capacity),
        };

        tracing::info!(
            "File store ready: {} nodes, health threshold {}, replication factor {}",
            config.node_count,
            config.health_threshold,
            config.replication_factor
        );

        Self {
            config,
            policy,
            state: RwLock::new(state),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn status(&self) -> ClusterStatus {
        let state = self.state.read();
        let totals = state.catalog.totals();
        let active_nodes = state.registry.alive_count();

        ClusterStatus {
            nodes: state.registry.report(),
            file_count: totals.total_files,
            storage_used: round2(totals.total_storage),
            replication_factor: self.config.replication_factor,
            active_nodes,
            health: self.policy.classify(active_nodes),
        }
    }

    pub fn upload(&self, name: &str, size: f64) -> Result<FileRecord> {
        let mut state = self.state.write();
        let StoreState {
            registry,
            catalog,
            journal,
        } = &mut *state;

        let record = catalog.register(name, size, registry)?;
        journal.success(format!("File uploaded: {} ({:.2} MB)", record.name, record.size));

        tracing::info!(
            "Uploaded file {} ({}, {:.2}) to nodes {:?}",
            record.id,
            record.name,
            record.size,
            record.replicas
        );

        Ok(record)
    }

    pub fn list_files(&self) -> FileListing {
        let state = self.state.read();
        let files = state.catalog.list();

        FileListing {
            total: files.len(),
            files,
        }
    }

    pub fn get_file(&self, id: FileId) -> Result<FileRecord> {
        let state = self.state.read();
        state.catalog.get(id).cloned()
    }

    pub fn download(&self, id: FileId) -> Result<DownloadTicket> {
        let mut state = self.state.write();
        let record = state.catalog.get(id)?;

        let ticket = DownloadTicket {
            filename: record.name.clone(),
            size: record.size,
            checksum: record.checksum.clone(),
            chunks: record.chunks,
        };

        state
            .journal
            .info(format!("File downloaded: {}", ticket.filename));
        tracing::info!("Download requested for file {} ({})", id, ticket.filename);

        Ok(ticket)
    }

    pub fn verify(&self) -> Vec<VerificationEntry> {
        let mut state = self.state.write();
        let StoreState {
            registry,
            catalog,
            journal,
        } = &mut *state;

        let report = catalog.verify_integrity(registry);
        journal.success(format!("Verified {} files", report.len()));

        tracing::info!("Verified {} files", report.len());

        report
    }

    /// Flips a node and recomputes every file status before releasing the lock.
    pub fn toggle_node(&self, node_id: u32) -> Result<ToggleOutcome> {
        let mut state = self.state.write();
        let StoreState {
            registry,
            catalog,
            journal,
        } = &mut *state;

        let alive = registry.toggle(NodeId(node_id))?;
        let changed = catalog.recompute_statuses(registry);

        let status = NodeState::from_alive(alive);
        let message = format!("Node {} is now {}", node_id, status);
        if alive {
            journal.success(message);
        } else {
            journal.warning(message);
        }

        let active_nodes = registry.alive_count();
        tracing::info!(
            "Node {} toggled to {} ({} active, {} file statuses changed)",
            node_id,
            status,
            active_nodes,
            changed
        );

        Ok(ToggleOutcome {
            node_id,
            status,
            active_nodes,
        })
    }

    pub fn replication_report(&self) -> ReplicationReport {
        let state = self.state.read();
        state.catalog.replication_report(&state.registry)
    }

    /// Removes a file and returns the removed record.
    pub fn delete_file(&self, id: FileId) -> Result<FileRecord> {
        let mut state = self.state.write();

        let record = match state.catalog.delete(id) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Delete of file {} failed: {}", id, e);
                return Err(e);
            }
        };

        state
            .journal
            .warning(format!("File deleted: {}", record.name));
        tracing::info!("Deleted file {} ({})", id, record.name);

        Ok(record)
    }

    /// Most recent log entries, newest first.
    pub fn logs(&self) -> Vec<LogEntry> {
        let state = self.state.read();
        state.journal.recent(self.config.log_page_size)
    }

    pub fn stats(&self) -> StoreStats {
        let state = self.state.read();
        let totals = state.catalog.totals();

        StoreStats {
            total_files: totals.total_files,
            total_storage: round2(totals.total_storage),
            total_chunks: totals.total_chunks,
            avg_file_size: round2(totals.avg_file_size()),
            active_nodes: state.registry.alive_count(),
            replication_factor: self.config.replication_factor,
        }
    }

    /// Drops every file and brings all nodes back online. The log is kept.
    pub fn reset(&self) {
        let mut state = self.state.write();

        state.catalog.clear();
        state.registry.reset();
        state.journal.warning("System reset");

        tracing::warn!("Store reset: all files dropped, all nodes online");
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
