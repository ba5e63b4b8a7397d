pub mod channel;
pub mod config;
pub mod engine;
pub mod error;
pub mod routes;
pub mod state;
pub mod websocket;

pub use channel::{MethodCall, MethodResult, CHANNEL_NAME};
pub use config::Config;
pub use error::ChannelError;
pub use state::AppState;
