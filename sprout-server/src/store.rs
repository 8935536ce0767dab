//! Append-only storage of submitted configurations.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use sprout_manifest::ProjectConfig;

/// A persisted configuration: the payload plus `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u64,
    #[serde(flatten)]
    pub config: ProjectConfig,
    pub created_at: String,
}

pub trait ProjectStore: Send + Sync {
    /// Store `config` under the next id.
    fn create(&self, config: ProjectConfig) -> ProjectRecord;

    fn get(&self, id: u64) -> Option<ProjectRecord>;
}

#[derive(Debug)]
struct Inner {
    next_id: u64,
    projects: HashMap<u64, ProjectRecord>,
}

/// Process-local store. Ids start at 1 and are assigned under a single lock.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                projects: HashMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .projects
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore for MemoryStore {
    fn create(&self, config: ProjectConfig) -> ProjectRecord {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;

        let record = ProjectRecord {
            id,
            config,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        inner.projects.insert(id, record.clone());
        record
    }

    fn get(&self, id: u64) -> Option<ProjectRecord> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .projects
            .get(&id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;
    use crate::tests::demo_config;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = MemoryStore::new();
        let first = store.create(demo_config());
        let second = store.create(demo_config());

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.get(1), Some(first));
        assert_eq!(store.get(3), None);
    }

    #[test]
    fn test_created_at_is_rfc3339_millis() {
        let record = MemoryStore::new().create(demo_config());
        assert!(chrono::DateTime::parse_from_rfc3339(&record.created_at).is_ok());
        assert!(record.created_at.ends_with('Z'));
        assert_eq!(record.created_at.len(), "2024-01-01T00:00:00.000Z".len());
    }

    #[test]
    fn test_record_is_flattened() {
        let record = MemoryStore::new().create(demo_config());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["artifactId"], "demo");
        assert!(json["createdAt"].is_string());
        assert!(json.get("config").is_none());
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|_| store.create(demo_config()).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=200).collect::<Vec<_>>());
        assert_eq!(store.len(), 200);
    }
}
