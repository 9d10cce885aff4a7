//! Replica Store Module
//!
//! The single owned store object that external callers talk to. It bundles the
//! node registry, the replica catalog and the system log behind one lock.
//!
//! ## Consistency
//! - **Toggle**: A liveness flip and the status recompute it triggers happen under
//!   one write guard, so no reader sees new liveness with old statuses.
//! - **Mutations**: Register, delete and reset change records (and therefore totals)
//!   in a single critical section.
//! - **Reads**: Listing, lookups, stats and reports share a read guard and run
//!   concurrently with each other.

pub mod service;
pub mod types;
