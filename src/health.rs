//! Replica health policy.
//!
//! One formula decides file health everywhere: at registration, on recompute
//! after a liveness change, in integrity verification and in replication
//! reports. Cluster health uses the same threshold against the alive node count.

use serde::{Deserialize, Serialize};

use crate::membership::registry::NodeRegistry;
use crate::membership::types::NodeId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthPolicy {
    threshold: usize,
}

impl HealthPolicy {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of replica holders that are currently alive.
    pub fn active_replicas(&self, replicas: &[NodeId], registry: &NodeRegistry) -> usize {
        replicas
            .iter()
            .filter(|node| registry.is_alive_or_false(**node))
            .count()
    }

    pub fn classify(&self, active: usize) -> FileStatus {
        if active >= self.threshold {
            FileStatus::Healthy
        } else {
            FileStatus::Degraded
        }
    }

    /// Active replica count and the status it implies, in one pass.
    pub fn evaluate(&self, replicas: &[NodeId], registry: &NodeRegistry) -> (usize, FileStatus) {
        let active = self.active_replicas(replicas, registry);
        (active, self.classify(active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_threshold_boundary() {
        let policy = HealthPolicy::new(2);

        assert_eq!(policy.classify(0), FileStatus::Degraded);
        assert_eq!(policy.classify(1), FileStatus::Degraded);
        assert_eq!(policy.classify(2), FileStatus::Healthy);
        assert_eq!(policy.classify(3), FileStatus::Healthy);
    }

    #[test]
    fn test_active_replicas_counts_only_alive_holders() {
        let policy = HealthPolicy::new(2);
        let mut registry = NodeRegistry::new(3);
        registry.toggle(NodeId(2)).unwrap();

        let replicas = vec![NodeId(1), NodeId(2), NodeId(3)];
        assert_eq!(policy.evaluate(&replicas, &registry), (2, FileStatus::Healthy));

        let replicas = vec![NodeId(2), NodeId(3)];
        assert_eq!(policy.evaluate(&replicas, &registry), (1, FileStatus::Degraded));
    }

    #[test]
    fn test_empty_replica_set_is_degraded() {
        let policy = HealthPolicy::new(2);
        let registry = NodeRegistry::new(3);

        assert_eq!(policy.evaluate(&[], &registry), (0, FileStatus::Degraded));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FileStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&FileStatus::Degraded).unwrap(),
            "\"degraded\""
        );
    }
}
