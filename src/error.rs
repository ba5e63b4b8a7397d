use thiserror::Error;

/// Failures at the method-channel boundary.
///
/// Missing arguments are deliberately not represented here: the channel
/// substitutes defaults for them instead of failing the call.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Malformed method call: {0}")]
    MalformedCall(#[from] serde_json::Error),

    #[error("Method not implemented: {method}")]
    NotImplemented { method: String },

    #[error("Engine error: {0}")]
    Engine(anyhow::Error),
}

impl From<anyhow::Error> for ChannelError {
    fn from(err: anyhow::Error) -> Self {
        ChannelError::Engine(err)
    }
}
