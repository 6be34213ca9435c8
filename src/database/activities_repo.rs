use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::database::seed_data;
use crate::models::Activity;

/// The full set of activities, keyed by their unique name.
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    activities: BTreeMap<String, Activity>,
}

impl ActivityDirectory {
    pub fn new(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        Self {
            activities: activities.into_iter().collect(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_data::seed_activities())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.get_mut(name)
    }

    pub fn activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// Shared handle to the in-memory directory. Cloning is cheap; all clones see the same state.
///
/// Writers hold the lock for the whole check-then-mutate step, which keeps each roster
/// free of duplicates when signups race.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityDirectory>>,
}

impl ActivityStore {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(ActivityDirectory::seeded())
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, ActivityDirectory> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, ActivityDirectory> {
        self.inner.write().await
    }
}

pub async fn list_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    store.read().await.activities().clone()
}

pub async fn load_activity(store: &ActivityStore, name: &str) -> Option<Activity> {
    store.read().await.get(name).cloned()
}
