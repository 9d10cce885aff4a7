//! Replicated File Store Control Plane
//!
//! This library crate holds the bookkeeping core of a replicated file store:
//! which storage nodes are alive, which files have replicas where, and whether
//! each file is still healthy. The binary (`main.rs`) exposes it over HTTP.
//!
//! ## Architecture Modules
//! - **`membership`**: Fixed set of storage nodes with externally toggled liveness.
//! - **`catalog`**: Registered files, their replica sets and health statuses.
//! - **`health`**: The single healthy/degraded formula shared by every report.
//! - **`journal`**: Bounded log of user-facing events.
//! - **`store`**: `FileStore`, the one shared object wrapping all of the above
//!   behind a single lock so every operation is atomic.
//! - **`api`**: JSON endpoints and handlers over `FileStore`.
//! - **`config`** / **`error`**: Injected tunables and the store error type.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod health;
pub mod journal;
pub mod membership;
pub mod store;
