use chrono::Utc;
use std::collections::BTreeMap;

use super::metadata::{chunk_count, placeholder_checksum};
use super::types::*;
use crate::error::{Result, StoreError};
use crate::health::HealthPolicy;
use crate::membership::registry::NodeRegistry;

/// Registered files keyed by id.
///
/// Ids are handed out in increasing order, so iterating the map yields files in
/// registration order. Totals are computed from the records on every read and
/// are therefore always consistent with the record set.
#[derive(Debug, Clone)]
pub struct ReplicaCatalog {
    records: BTreeMap<FileId, FileRecord>,
    next_id: u64,
    policy: HealthPolicy,
    chunk_size: f64,
}

impl ReplicaCatalog {
    pub fn new(policy: HealthPolicy, chunk_size: f64) -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
            policy,
            chunk_size,
        }
    }

    pub fn policy(&self) -> HealthPolicy {
        self.policy
    }

    /// Registers a file, placing replicas on every node alive right now.
    ///
    /// Registration succeeds even when no node is alive; the file then starts
    /// out `degraded` with an empty replica set.
    pub fn register(&mut self, name: &str, size: f64, registry: &NodeRegistry) -> Result<FileRecord> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidInput("filename must not be empty".to_string()));
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(StoreError::InvalidInput(format!(
                "size must be a positive number, got {}",
                size
            )));
        }
        if !(self.totals().total_storage + size).is_finite() {
            return Err(StoreError::InvalidInput(format!(
                "size {} would overflow total storage",
                size
            )));
        }

        let uploaded_at = Utc::now();
        let replicas = registry.alive_nodes();
        let (_, status) = self.policy.evaluate(&replicas, registry);

        let record = FileRecord {
            id: FileId(self.next_id),
            name: name.to_string(),
            size,
            checksum: placeholder_checksum(name, size, uploaded_at),
            chunks: chunk_count(size, self.chunk_size),
            replicas,
            uploaded_at,
            status,
        };

        self.next_id += 1;
        self.records.insert(record.id, record.clone());

        tracing::debug!(
            "Registered file {} ({}) on {} replicas",
            record.id,
            record.name,
            record.replicas.len()
        );

        Ok(record)
    }

    pub fn get(&self, id: FileId) -> Result<&FileRecord> {
        self.records.get(&id).ok_or(StoreError::NotFound(id.0))
    }

    pub fn list(&self) -> Vec<FileRecord> {
        self.records.values().cloned().collect()
    }

    /// Removes a file and returns it. The id is retired for good.
    pub fn delete(&mut self, id: FileId) -> Result<FileRecord> {
        self.records.remove(&id).ok_or(StoreError::NotFound(id.0))
    }

    /// Re-evaluates every file against the registry. Returns how many statuses changed.
    ///
    /// Idempotent: a second call without an intervening liveness change is a no-op.
    pub fn recompute_statuses(&mut self, registry: &NodeRegistry) -> usize {
        let policy = self.policy;
        let mut changed = 0;

        for record in self.records.values_mut() {
            let (_, status) = policy.evaluate(&record.replicas, registry);
            if record.status != status {
                record.status = status;
                changed += 1;
            }
        }

        tracing::debug!(
            "Recomputed {} file statuses ({} changed)",
            self.records.len(),
            changed
        );

        changed
    }

    /// Recomputes statuses and reports them, from the same single pass.
    pub fn verify_integrity(&mut self, registry: &NodeRegistry) -> Vec<VerificationEntry> {
        let policy = self.policy;

        self.records
            .values_mut()
            .map(|record| {
                let (active, status) = policy.evaluate(&record.replicas, registry);
                record.status = status;

                VerificationEntry {
                    filename: record.name.clone(),
                    checksum: record.checksum.clone(),
                    active_replicas: active,
                    status,
                }
            })
            .collect()
    }

    /// Replication overview using the stored statuses. Performs no recomputation.
    pub fn replication_report(&self, registry: &NodeRegistry) -> ReplicationReport {
        let files = self
            .records
            .values()
            .map(|record| ReplicationEntry {
                filename: record.name.clone(),
                total_replicas: record.replicas.len(),
                active_replicas: self.policy.active_replicas(&record.replicas, registry),
                status: record.status,
            })
            .collect();

        ReplicationReport {
            files,
            active_nodes: registry.alive_count(),
        }
    }

    /// Chunk counts saturate at `u64::MAX` rather than wrapping.
    pub fn totals(&self) -> CatalogTotals {
        self.records
            .values()
            .fold(CatalogTotals::default(), |mut totals, record| {
                totals.total_files += 1;
                totals.total_storage += record.size;
                totals.total_chunks = totals.total_chunks.saturating_add(record.chunks);
                totals
            })
    }

    /// Drops every record. The id counter keeps running.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
