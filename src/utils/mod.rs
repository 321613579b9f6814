mod api;
mod controller;
mod settings;
mod types;

pub use api::{ApiClient, ApiError};
pub use controller::{ModelRegistry, PromptController, RecordFetch};
pub use settings::Settings;
pub use types::{AppView, HistoryRecord, ModelOption, PromptRequest, PromptResponse};
