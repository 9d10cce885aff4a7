//! Membership Module
//!
//! Tracks the liveness of a fixed set of storage nodes.
//!
//! ## Core Concepts
//! - **Fixed membership**: Nodes `1..=N` exist from construction and are never removed.
//! - **Injected liveness**: A node flips between Online and Offline only through explicit
//!   toggle commands. There is no failure detector.
//! - **Coordinator**: Reports include a synthetic, always-online coordinator entry (id 0).
//!   It is never eligible to hold replicas.

pub mod registry;
pub mod types;

#[cfg(test)]
mod tests;
