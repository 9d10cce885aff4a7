//! Replica Catalog Module
//!
//! Owns the registered files and their replica placements, and keeps each file's
//! health status in line with node liveness.
//!
//! ## Core Concepts
//! - **Placement**: A file's replica set is the set of nodes alive at registration.
//!   It is fixed for the life of the file; nodes joining later never receive replicas.
//! - **Health**: A file is `healthy` while at least `health_threshold` of its replica
//!   holders are alive, `degraded` otherwise (see `crate::health`).
//! - **Identity**: File ids increase monotonically and are never reused.
//! - **Metadata**: Checksums and chunk counts are synthetic placeholders (see `metadata`).

pub mod catalog;
pub mod metadata;
pub mod types;
