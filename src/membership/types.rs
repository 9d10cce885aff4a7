use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the synthetic coordinator entry in node reports.
pub const COORDINATOR_ID: u32 = 0;

/// Identifier of a storage node, in `1..=N`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeState {
    Online,
    Offline,
}

impl NodeState {
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            NodeState::Online
        } else {
            NodeState::Offline
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeState::Online => "ONLINE",
            NodeState::Offline => "OFFLINE",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single storage node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub alive: bool,
}

/// One row of the externally reported node list.
///
/// Unlike `Node`, this includes the coordinator entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeView {
    pub id: u32,
    pub name: String,
    pub status: NodeState,
}

impl NodeView {
    pub fn coordinator() -> Self {
        Self {
            id: COORDINATOR_ID,
            name: "Coordinator".to_string(),
            status: NodeState::Online,
        }
    }

    pub fn storage(node: &Node) -> Self {
        Self {
            id: node.id.0,
            name: format!("Storage Node {}", node.id),
            status: NodeState::from_alive(node.alive),
        }
    }
}
