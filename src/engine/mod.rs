pub mod factory;
pub mod interface;
pub mod nano;

pub use factory::EngineFactory;
pub use interface::{TranslateRequest, TranslateResponse, TranslationEngine};
