pub mod loader;

use std::sync::{Arc, RwLock};
use tokio::sync::{Mutex, MutexGuard};

use crate::{models::User, utils::AppError};

/// In-memory roster shared by every worker.
///
/// Holds the whole collection behind one `Arc`; `replace` swaps that `Arc` in a
/// single write, so a reader either sees the old snapshot or the new one.
#[derive(Clone, Default)]
pub struct DatasetStore {
    current: Arc<RwLock<Option<Arc<Vec<User>>>>>,
    /// Serializes uploads so persist-then-replace runs one at a time
    writer: Arc<Mutex<()>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, or `DatasetUnavailable` when nothing was loaded yet.
    pub fn snapshot(&self) -> Result<Arc<Vec<User>>, AppError> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().cloned().ok_or(AppError::DatasetUnavailable)
    }

    pub fn replace(&self, users: Vec<User>) {
        let next = Arc::new(users);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(next);
    }

    /// Held across "write file, then swap snapshot" so disk and memory agree.
    pub async fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }

    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Number of users in the current snapshot (0 when nothing is loaded)
    pub fn len(&self) -> usize {
        self.snapshot().map(|users| users.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: id.to_string(),
            age: 20,
            score: serde_json::Number::from(0),
            active: true,
            country: "BR".to_string(),
            team: Team {
                name: "A".to_string(),
                leader: false,
                projects: vec![],
            },
            logs: vec![],
        }
    }

    #[test]
    fn test_empty_store_is_unavailable() {
        let store = DatasetStore::new();
        assert!(!store.is_loaded());
        assert_eq!(store.len(), 0);
        assert!(matches!(store.snapshot(), Err(AppError::DatasetUnavailable)));
    }

    #[test]
    fn test_replace_swaps_whole_snapshot() {
        let store = DatasetStore::new();
        store.replace(vec![user("1"), user("2")]);

        let old = store.snapshot().unwrap();
        store.replace(vec![user("3")]);
        let new = store.snapshot().unwrap();

        // Readers holding the previous snapshot keep a consistent view
        assert_eq!(old.len(), 2);
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].id, "3");
        assert!(store.is_loaded());
    }

    #[test]
    fn test_poisoned_lock_still_reports_loaded() {
        let store = DatasetStore::new();
        store.replace(vec![user("1")]);

        let handle = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = handle.current.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(store.current.is_poisoned());
        assert!(store.is_loaded());
        assert_eq!(store.len(), 1);
        assert!(store.snapshot().is_ok());
    }

    #[tokio::test]
    async fn test_writer_lock_is_shared_between_clones() {
        let store = DatasetStore::new();
        let handle = store.clone();

        let guard = store.lock_writer().await;
        assert!(handle.writer.try_lock().is_err());
        drop(guard);
        assert!(handle.writer.try_lock().is_ok());
    }

    #[test]
    fn test_clones_share_state() {
        let store = DatasetStore::new();
        let handle = store.clone();
        handle.replace(vec![user("1")]);

        assert_eq!(store.len(), 1);
    }
}
