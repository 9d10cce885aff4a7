//! Membership Module Tests
//!
//! Validates the node registry and its reporting types.
//!
//! ## Test Scopes
//! - **Data Structures**: Node state mapping and serialization of report rows.
//! - **Registry Logic**: Toggling, range checks, counting and reset.

#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::membership::registry::NodeRegistry;
    use crate::membership::types::{COORDINATOR_ID, Node, NodeId, NodeState, NodeView};

    // ============================================================
    // NODE STATE TESTS
    // ============================================================

    #[test]
    fn test_node_state_from_alive() {
        assert_eq!(NodeState::from_alive(true), NodeState::Online);
        assert_eq!(NodeState::from_alive(false), NodeState::Offline);
    }

    #[test]
    fn test_node_state_serializes_uppercase() {
        let json = serde_json::to_string(&NodeState::Offline).unwrap();
        assert_eq!(json, "\"OFFLINE\"");
        assert_eq!(NodeState::Online.to_string(), "ONLINE");
    }

    // ============================================================
    // NODE VIEW TESTS
    // ============================================================

    #[test]
    fn test_node_view_serialization() {
        let view = NodeView::storage(&Node {
            id: NodeId(2),
            alive: false,
        });

        let json = serde_json::to_value(&view).expect("Serialization failed");
        assert_eq!(json["id"], 2);
        assert_eq!(json["name"], "Storage Node 2");
        assert_eq!(json["status"], "OFFLINE");
    }

    // ============================================================
    // REGISTRY TESTS
    // ============================================================

    #[test]
    fn test_registry_starts_all_alive() {
        let registry = NodeRegistry::new(3);

        assert_eq!(registry.node_count(), 3);
        assert_eq!(registry.alive_count(), 3);
        assert_eq!(registry.alive_nodes(), vec![NodeId(1), NodeId(2), NodeId(3)]);
    }

    #[test]
    fn test_toggle_flips_and_returns_new_state() {
        let mut registry = NodeRegistry::new(3);

        assert_eq!(registry.toggle(NodeId(2)), Ok(false));
        assert_eq!(registry.is_alive(NodeId(2)), Ok(false));
        assert_eq!(registry.alive_count(), 2);
        assert_eq!(registry.alive_nodes(), vec![NodeId(1), NodeId(3)]);

        assert_eq!(registry.toggle(NodeId(2)), Ok(true));
        assert_eq!(registry.alive_count(), 3);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut registry = NodeRegistry::new(3);

        for bad in [0, 4, 100] {
            assert_eq!(
                registry.toggle(NodeId(bad)),
                Err(StoreError::InvalidNodeId {
                    node_id: bad,
                    node_count: 3
                })
            );
        }

        // Failed toggles leave state untouched
        assert_eq!(registry.alive_count(), 3);
    }

    #[test]
    fn test_is_alive_out_of_range() {
        let registry = NodeRegistry::new(3);

        assert!(registry.is_alive(NodeId(0)).is_err());
        assert!(registry.is_alive(NodeId(4)).is_err());
        assert!(!registry.is_alive_or_false(NodeId(4)));
    }

    #[test]
    fn test_snapshot_is_ordered() {
        let mut registry = NodeRegistry::new(4);
        registry.toggle(NodeId(3)).unwrap();

        let snapshot = registry.snapshot();
        let ids: Vec<u32> = snapshot.iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(!snapshot[2].alive);
    }

    #[test]
    fn test_report_includes_coordinator_first() {
        let mut registry = NodeRegistry::new(3);
        registry.toggle(NodeId(1)).unwrap();

        let report = registry.report();
        assert_eq!(report.len(), 4);
        assert_eq!(report[0].id, COORDINATOR_ID);
        assert_eq!(report[0].status, NodeState::Online);
        assert_eq!(report[1].status, NodeState::Offline);
        assert_eq!(report[2].status, NodeState::Online);

        // Coordinator is not part of the eligible set
        assert_eq!(registry.alive_count(), 2);
    }

    #[test]
    fn test_reset_brings_everything_online() {
        let mut registry = NodeRegistry::new(3);
        registry.toggle(NodeId(1)).unwrap();
        registry.toggle(NodeId(3)).unwrap();
        assert_eq!(registry.alive_count(), 1);

        registry.reset();
        assert_eq!(registry.alive_count(), 3);
    }
}
