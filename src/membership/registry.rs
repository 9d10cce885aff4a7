use crate::error::{Result, StoreError};

use super::types::{Node, NodeId, NodeView};

/// Liveness state of the storage nodes.
///
/// The registry is a plain value; callers that share it across threads wrap it
/// (together with whatever depends on it) in a single lock.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    /// Creates `node_count` nodes, all alive.
    pub fn new(node_count: u32) -> Self {
        let nodes = (1..=node_count)
            .map(|id| Node {
                id: NodeId(id),
                alive: true,
            })
            .collect();

        Self { nodes }
    }

    pub fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    /// Flips the node's liveness and returns the new value.
    ///
    /// Anything derived from liveness (file statuses) is stale after this call
    /// until the owner recomputes it.
    pub fn toggle(&mut self, node_id: NodeId) -> Result<bool> {
        let idx = self.index_of(node_id)?;
        let node = &mut self.nodes[idx];
        node.alive = !node.alive;

        if node.alive {
            tracing::info!("Node {} marked online", node.id);
        } else {
            tracing::warn!("Node {} marked offline", node.id);
        }

        Ok(node.alive)
    }

    pub fn is_alive(&self, node_id: NodeId) -> Result<bool> {
        let idx = self.index_of(node_id)?;
        Ok(self.nodes[idx].alive)
    }

    /// Liveness lookup that treats unknown ids as dead. Used when evaluating
    /// replica sets, which only ever contain ids that were valid at placement.
    pub fn is_alive_or_false(&self, node_id: NodeId) -> bool {
        self.is_alive(node_id).unwrap_or(false)
    }

    pub fn alive_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.alive).count()
    }

    /// Ids of every currently alive node, ascending.
    pub fn alive_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|node| node.alive)
            .map(|node| node.id)
            .collect()
    }

    /// Ordered `{id, alive}` for every storage node.
    pub fn snapshot(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    /// Node list for external reporting, coordinator first.
    pub fn report(&self) -> Vec<NodeView> {
        std::iter::once(NodeView::coordinator())
            .chain(self.nodes.iter().map(NodeView::storage))
            .collect()
    }

    /// Brings every node back online.
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.alive = true;
        }
    }

    fn index_of(&self, node_id: NodeId) -> Result<usize> {
        let node_count = self.node_count();
        if node_id.0 < 1 || node_id.0 > node_count {
            return Err(StoreError::InvalidNodeId {
                node_id: node_id.0,
                node_count,
            });
        }
        Ok((node_id.0 - 1) as usize)
    }
}
