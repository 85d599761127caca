use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::engine::MatchEngine;

/// Live matches by id
#[derive(Clone, Default)]
pub struct MatchRegistry {
    engines: Arc<RwLock<HashMap<String, MatchEngine>>>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self {
            engines: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, engine: MatchEngine) {
        let mut engines = self.engines.write().await;
        engines.insert(engine.match_id().to_string(), engine);
    }

    pub async fn get(&self, match_id: &str) -> Option<MatchEngine> {
        let engines = self.engines.read().await;
        engines.get(match_id).cloned()
    }

    pub async fn contains(&self, match_id: &str) -> bool {
        self.engines.read().await.contains_key(match_id)
    }

    pub async fn remove(&self, match_id: &str) -> Option<MatchEngine> {
        debug!(match_id = %match_id, "Removing match from registry");
        let mut engines = self.engines.write().await;
        engines.remove(match_id)
    }

    /// Handles to every registered match
    pub async fn all(&self) -> Vec<MatchEngine> {
        self.engines.read().await.values().cloned().collect()
    }

    pub async fn active_count(&self) -> usize {
        self.engines.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::TeamDescriptor;

    fn engine(id: &str) -> MatchEngine {
        MatchEngine::new(
            id,
            TeamDescriptor::named("Rovers"),
            TeamDescriptor::named("United"),
            EngineConfig::default().with_seed(1),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_get_remove() {
        let registry = MatchRegistry::new();
        registry.insert(engine("m-1")).await;
        registry.insert(engine("m-2")).await;

        assert_eq!(registry.active_count().await, 2);
        assert_eq!(registry.all().await.len(), 2);
        assert_eq!(registry.get("m-1").await.unwrap().match_id(), "m-1");
        assert!(registry.get("m-3").await.is_none());

        assert!(registry.remove("m-1").await.is_some());
        assert!(!registry.contains("m-1").await);
        assert_eq!(registry.active_count().await, 1);
    }
}
