//! System Log
//!
//! A bounded, append-only ring of user-facing events (uploads, node changes,
//! deletions). It is observational only; no store state is derived from it.
//! Operator diagnostics go through `tracing` instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub level: LogLevel,
}

#[derive(Debug, Clone)]
pub struct SystemLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl SystemLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest one once capacity is exceeded.
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        self.entries.push_back(LogEntry {
            timestamp: Utc::now(),
            message: message.into(),
            level,
        });

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Warning, message);
    }

    /// Up to `limit` most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_recent_newest_first() {
        let mut log = SystemLog::new(10);
        log.info("first");
        log.success("second");
        log.warning("third");

        let recent = log.recent(10);
        let messages: Vec<&str> = recent.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
        assert_eq!(recent[0].level, LogLevel::Warning);
        assert_eq!(recent[2].level, LogLevel::Info);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = SystemLog::new(100);
        for i in 0..120 {
            log.info(format!("event {}", i));
        }

        assert_eq!(log.len(), 100);

        let page = log.recent(50);
        assert_eq!(page.len(), 50);
        assert_eq!(page[0].message, "event 119");
        assert_eq!(page[49].message, "event 70");

        let all = log.recent(usize::MAX);
        assert_eq!(all.last().unwrap().message, "event 20");
    }

    #[test]
    fn test_recent_on_short_log() {
        let mut log = SystemLog::new(100);
        assert!(log.is_empty());
        log.info("only");

        assert_eq!(log.recent(50).len(), 1);
    }

    #[test]
    fn test_entry_serialization() {
        let mut log = SystemLog::new(5);
        log.warning("Node 1 is now OFFLINE");

        let json = serde_json::to_value(&log.recent(1)[0]).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["message"], "Node 1 is now OFFLINE");
        assert!(json["timestamp"].as_str().is_some());
    }
}
