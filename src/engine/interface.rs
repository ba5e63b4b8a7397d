use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub success: bool,
}

/// Translation engine interface - the real on-device model integration
/// lands behind this seam.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Engine identifier used in logs and the health endpoint
    fn name(&self) -> &str;

    /// Translate text between the given language pair
    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, anyhow::Error>;

    /// Whether the on-device model can serve requests right now
    async fn is_available(&self) -> Result<bool, anyhow::Error>;
}
