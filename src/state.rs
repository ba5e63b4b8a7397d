use std::sync::Arc;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::config::Config;
use crate::engine::{EngineFactory, TranslationEngine};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<dyn TranslationEngine>,
    pub client_contexts: Arc<DashMap<String, ClientContext>>,
}

/// Per-connection bookkeeping. Calls themselves are stateless; this only
/// feeds the disconnect diagnostics.
#[derive(Debug, Clone)]
pub struct ClientContext {
    pub client_uid: String,
    pub connected_at: DateTime<Utc>,
    pub calls_handled: u64,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let engine = EngineFactory::create(&config.engine_config)?;

        Ok(Self {
            config,
            engine,
            client_contexts: Arc::new(DashMap::new()),
        })
    }

    pub fn generate_client_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }

    pub fn register_client(&self, client_uid: &str) {
        let context = ClientContext {
            client_uid: client_uid.to_string(),
            connected_at: Utc::now(),
            calls_handled: 0,
        };
        self.client_contexts.insert(client_uid.to_string(), context);
    }

    pub fn record_call(&self, client_uid: &str) {
        if let Some(mut context) = self.client_contexts.get_mut(client_uid) {
            context.value_mut().calls_handled += 1;
        }
    }

    pub fn remove_client(&self, client_uid: &str) -> Option<ClientContext> {
        self.client_contexts
            .remove(client_uid)
            .map(|(_, context)| context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_lifecycle_tracks_calls() {
        let state = AppState::new(Config::default()).unwrap();
        let uid = state.generate_client_uid();

        state.register_client(&uid);
        state.record_call(&uid);
        state.record_call(&uid);

        let context = state.remove_client(&uid).unwrap();
        assert_eq!(context.calls_handled, 2);
        assert!(state.client_contexts.is_empty());
    }
}
