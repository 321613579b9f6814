use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug)]
pub enum AppView {
    Prompt,
    Record(String),
}

/// One prompt submission, snapshotted at submit time. The backend is
/// authoritative on validity, so empty strings pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptRequest {
    pub system_message: String,
    pub user_message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PromptResponse {
    pub content: String,
}

/// A selectable backend model. The backend only reports a name, which serves
/// as both the identifier and the display label.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOption {
    pub id: String,
    pub label: String,
}

impl ModelOption {
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            label: name,
        }
    }
}

/// A persisted prompt/response exchange, addressable by its server-assigned
/// id. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub system_message: String,
    pub user_message: String,
    pub response: String,
}
