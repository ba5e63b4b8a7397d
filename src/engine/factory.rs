use std::sync::Arc;
use anyhow::Result;
use tracing::info;

use crate::config::EngineConfig;
use super::interface::TranslationEngine;
use super::nano::GeminiNanoEngine;

/// Factory for creating translation engines
pub struct EngineFactory;

impl EngineFactory {
    /// Create a translation engine based on configuration
    ///
    /// # Arguments
    /// * `engine_config` - Engine section of the loaded configuration
    ///
    /// # Returns
    /// Shared TranslationEngine implementation
    pub fn create(engine_config: &EngineConfig) -> Result<Arc<dyn TranslationEngine>> {
        info!("Initializing translation engine: {}", engine_config.engine);

        match engine_config.engine.as_str() {
            "gemini_nano" => Ok(Arc::new(GeminiNanoEngine::new())),
            other => Err(anyhow::anyhow!("Unknown translation engine: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_the_nano_engine() {
        let engine = EngineFactory::create(&EngineConfig::default()).unwrap();
        assert_eq!(engine.name(), "gemini_nano");
    }

    #[test]
    fn rejects_unknown_engine_ids() {
        let config = EngineConfig {
            engine: "cloud_nmt".to_string(),
            options: None,
        };
        assert!(EngineFactory::create(&config).is_err());
    }
}
