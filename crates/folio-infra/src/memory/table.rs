use std::collections::BTreeMap;

use tokio::sync::RwLock;

use folio_core::domain::{Comment, Post, UNSAVED_ID, User};
use folio_core::error::RepoError;

/// A row type the in-memory table can store.
pub(crate) trait Record: Clone + Send + Sync {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);

    /// Value of the column carrying a unique constraint, if any.
    fn unique_key(&self) -> Option<&str> {
        None
    }
}

impl Record for User {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.email)
    }
}

impl Record for Post {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.title)
    }
}

impl Record for Comment {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

struct Rows<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

/// Auto-incrementing table guarded by an async `RwLock`.
///
/// Ids start at 1 and are never reused, matching SQL sequences.
pub(crate) struct Table<T> {
    name: &'static str,
    inner: RwLock<Rows<T>>,
}

impl<T: Record> Table<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Rows {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub(crate) async fn get(&self, id: i32) -> Option<T> {
        self.inner.read().await.rows.get(&id).cloned()
    }

    /// Rows in ascending id order matching `pred`.
    pub(crate) async fn filter<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let inner = self.inner.read().await;
        inner.rows.values().filter(|r| pred(r)).cloned().collect()
    }

    pub(crate) async fn find<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let inner = self.inner.read().await;
        inner.rows.values().find(|r| pred(r)).cloned()
    }

    pub(crate) async fn save(&self, mut record: T) -> Result<T, RepoError> {
        let mut inner = self.inner.write().await;

        if let Some(key) = record.unique_key() {
            let taken = inner
                .rows
                .values()
                .any(|r| r.id() != record.id() && r.unique_key() == Some(key));
            if taken {
                return Err(RepoError::Constraint(format!(
                    "duplicate key in table '{}'",
                    self.name
                )));
            }
        }

        if record.id() == UNSAVED_ID {
            let id = inner.next_id;
            inner.next_id += 1;
            record.set_id(id);
        } else if !inner.rows.contains_key(&record.id()) {
            return Err(RepoError::NotFound);
        }

        inner.rows.insert(record.id(), record.clone());
        Ok(record)
    }

    pub(crate) async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut inner = self.inner.write().await;
        inner.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}
