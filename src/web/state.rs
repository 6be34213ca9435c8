use crate::database::ActivityStore;

/// Shared by every handler. Built once in `main`; tests build their own.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: ActivityStore,
}

impl AppState {
    pub fn new(store: ActivityStore) -> Self {
        Self { store }
    }

    pub fn seeded() -> Self {
        Self::new(ActivityStore::seeded())
    }
}
