use std::collections::BTreeMap;

use crate::database::{activities_repo, ActivityStore};
use crate::models::Activity;

pub async fn load_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    activities_repo::list_activities(store).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn listing_does_not_mutate() {
        let store = ActivityStore::seeded();
        let first = load_activities(&store).await;
        let second = load_activities(&store).await;
        assert_eq!(first, second);
    }
}
