//! Store Configuration
//!
//! Tunables injected into `FileStore` at construction. Nothing here is a
//! process-wide global; every store owns its own copy.

use anyhow::{Context, Result, ensure};
use std::str::FromStr;

pub const DEFAULT_NODE_COUNT: u32 = 3;
pub const DEFAULT_REPLICATION_FACTOR: u32 = 3;
pub const DEFAULT_HEALTH_THRESHOLD: usize = 2;
pub const DEFAULT_CHUNK_SIZE: f64 = 64.0;
pub const DEFAULT_LOG_CAPACITY: usize = 100;
pub const DEFAULT_LOG_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Number of storage nodes, addressed as `1..=node_count`.
    pub node_count: u32,
    /// Reported replication factor. Fixed, never derived from actual placements.
    pub replication_factor: u32,
    /// Minimum number of live replicas for a file to count as healthy.
    pub health_threshold: usize,
    /// Size of one synthetic chunk, in the same unit as file sizes.
    pub chunk_size: f64,
    /// Maximum number of entries retained in the system log.
    pub log_capacity: usize,
    /// Number of entries returned by a log read.
    pub log_page_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            health_threshold: DEFAULT_HEALTH_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
            log_capacity: DEFAULT_LOG_CAPACITY,
            log_page_size: DEFAULT_LOG_PAGE_SIZE,
        }
    }
}

impl StoreConfig {
    /// Builds a config from `DFS_*` environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            node_count: read_var(&lookup, "DFS_NODE_COUNT", defaults.node_count)?,
            replication_factor: read_var(
                &lookup,
                "DFS_REPLICATION_FACTOR",
                defaults.replication_factor,
            )?,
            health_threshold: read_var(&lookup, "DFS_HEALTH_THRESHOLD", defaults.health_threshold)?,
            chunk_size: read_var(&lookup, "DFS_CHUNK_SIZE", defaults.chunk_size)?,
            log_capacity: read_var(&lookup, "DFS_LOG_CAPACITY", defaults.log_capacity)?,
            log_page_size: read_var(&lookup, "DFS_LOG_PAGE_SIZE", defaults.log_page_size)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.node_count > 0, "node_count must be at least 1");
        ensure!(
            self.health_threshold > 0,
            "health_threshold must be at least 1"
        );
        ensure!(
            self.chunk_size.is_finite() && self.chunk_size > 0.0,
            "chunk_size must be a positive number, got {}",
            self.chunk_size
        );
        ensure!(self.log_capacity > 0, "log_capacity must be at least 1");
        ensure!(self.log_page_size > 0, "log_page_size must be at least 1");
        Ok(())
    }
}

fn read_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.node_count, 3);
        assert_eq!(config.replication_factor, 3);
        assert_eq!(config.health_threshold, 2);
        assert_eq!(config.chunk_size, 64.0);
        assert_eq!(config.log_capacity, 100);
        assert_eq!(config.log_page_size, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_without_vars_gives_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("DFS_NODE_COUNT", "5"),
            ("DFS_HEALTH_THRESHOLD", " 3 "),
            ("DFS_CHUNK_SIZE", "128"),
        ]))
        .unwrap();

        assert_eq!(config.node_count, 5);
        assert_eq!(config.health_threshold, 3);
        assert_eq!(config.chunk_size, 128.0);
        assert_eq!(config.replication_factor, 3);
    }

    #[test]
    fn test_unparsable_value_is_rejected() {
        let err = StoreConfig::from_lookup(lookup_from(&[("DFS_NODE_COUNT", "three")]))
            .unwrap_err();
        assert!(err.to_string().contains("DFS_NODE_COUNT"));
    }

    #[test]
    fn test_zero_nodes_is_rejected() {
        let result = StoreConfig::from_lookup(lookup_from(&[("DFS_NODE_COUNT", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_chunk_size_is_rejected() {
        let config = StoreConfig {
            chunk_size: 0.0,
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());

        let config = StoreConfig {
            chunk_size: f64::NAN,
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
