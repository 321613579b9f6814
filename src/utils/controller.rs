use crate::utils::api::ApiError;
use crate::utils::types::{HistoryRecord, ModelOption, PromptRequest, PromptResponse};

// ============================================================================
// Prompt Submission Controller
// ============================================================================

/// State machine for the prompt form: `Idle -> Submitting -> {Success, Failed}
/// -> Idle`.
///
/// The async half lives in the owning component: `begin_submit` hands back a
/// request snapshot when a submission may start, the component performs the
/// HTTP call, and `finish_submit` records the outcome. A second `begin_submit`
/// while one is outstanding returns `None`, so at most one call is ever in
/// flight per controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptController {
    system_text: String,
    user_message: String,
    is_submitting: bool,
    last_response: Option<PromptResponse>,
    last_error: Option<ApiError>,
}

impl Default for PromptController {
    fn default() -> Self {
        // Same starter prompt the backend demo ships with.
        Self {
            system_text: "you are a pirate".to_string(),
            user_message: "what is 1+1".to_string(),
            is_submitting: false,
            last_response: None,
            last_error: None,
        }
    }
}

impl PromptController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system_text(&self) -> &str {
        &self.system_text
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn last_response(&self) -> Option<&PromptResponse> {
        self.last_response.as_ref()
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    pub fn set_system_text(&mut self, value: impl Into<String>) {
        self.system_text = value.into();
    }

    pub fn set_user_message(&mut self, value: impl Into<String>) {
        self.user_message = value.into();
    }

    /// Starts a submission. Returns the request snapshot to send, or `None`
    /// when one is already in flight; the caller must not issue a call in
    /// that case. Edits made after this point do not affect the snapshot.
    pub fn begin_submit(&mut self) -> Option<PromptRequest> {
        if self.is_submitting {
            return None;
        }

        self.is_submitting = true;
        self.last_error = None;

        Some(PromptRequest {
            system_message: self.system_text.clone(),
            user_message: self.user_message.clone(),
        })
    }

    /// Records the outcome of the in-flight submission. A failure keeps the
    /// previous response in place so the last good output stays visible.
    pub fn finish_submit(&mut self, result: Result<PromptResponse, ApiError>) {
        match result {
            Ok(response) => {
                self.last_response = Some(response);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e),
        }
        self.is_submitting = false;
    }
}

// ============================================================================
// Model Registry
// ============================================================================

/// Client-side mirror of the backend's model list and current selection.
/// The selection is only ever an entry of the current list; an id the list
/// does not contain resolves to no selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelRegistry {
    models: Vec<ModelOption>,
    selected: Option<ModelOption>,
}

impl ModelRegistry {
    pub fn models(&self) -> &[ModelOption] {
        &self.models
    }

    pub fn selected(&self) -> Option<&ModelOption> {
        self.selected.as_ref()
    }

    /// Replaces the option list wholesale and re-checks the current selection
    /// against it.
    pub fn set_models(&mut self, models: Vec<ModelOption>) {
        self.models = models;
        if let Some(selected) = &self.selected {
            if !self.contains(&selected.id) {
                self.selected = None;
            }
        }
    }

    /// Applies the backend-reported selection. `None`, or an id that does not
    /// match any fetched option, clears the selection rather than leaving a
    /// stale or dangling one.
    pub fn resolve_selected(&mut self, id: Option<&str>) {
        self.selected = id.and_then(|id| self.models.iter().find(|m| m.id == id).cloned());
    }

    /// Optimistically selects `id` so the UI reflects the click before the
    /// backend call resolves. Returns false when the id is not a known
    /// option, in which case nothing changes.
    pub fn select(&mut self, id: &str) -> bool {
        match self.models.iter().find(|m| m.id == id).cloned() {
            Some(option) => {
                self.selected = Some(option);
                true
            }
            None => false,
        }
    }

    /// Puts back a selection captured before an optimistic `select`, for when
    /// the backend rejects the change.
    pub fn restore(&mut self, previous: Option<ModelOption>) {
        self.selected = previous;
    }

    fn contains(&self, id: &str) -> bool {
        self.models.iter().any(|m| m.id == id)
    }
}

// ============================================================================
// Single-Record Fetch State
// ============================================================================

/// Fetch state for one history record, tracked independently of the list
/// fetch. Terminal once resolved for a given id.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordFetch {
    Loading,
    Loaded(HistoryRecord),
    NotFound,
    Failed(String),
}

impl RecordFetch {
    pub fn from_result(result: Result<HistoryRecord, ApiError>) -> Self {
        match result {
            Ok(record) => Self::Loaded(record),
            Err(ApiError::NotFound) => Self::NotFound,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(names: &[&str]) -> Vec<ModelOption> {
        names.iter().map(|name| ModelOption::from_name(*name)).collect()
    }

    #[test]
    fn test_text_state_last_write_wins() {
        let mut controller = PromptController::new();

        controller.set_system_text("first");
        controller.set_system_text("second");
        controller.set_user_message("hello");
        controller.set_user_message("hello again");

        assert_eq!(controller.system_text(), "second");
        assert_eq!(controller.user_message(), "hello again");
    }

    #[test]
    fn test_begin_submit_snapshots_current_text() {
        let mut controller = PromptController::new();
        controller.set_system_text("you are a pirate");
        controller.set_user_message("what is 1+1");

        let request = controller.begin_submit().expect("first submit starts");

        // Edits after the snapshot must not leak into the in-flight request.
        controller.set_user_message("what is 2+2");

        assert_eq!(request.system_message, "you are a pirate");
        assert_eq!(request.user_message, "what is 1+1");
    }

    #[test]
    fn test_begin_submit_rejects_while_in_flight() {
        let mut controller = PromptController::new();

        assert!(controller.begin_submit().is_some());
        // Second rapid click: no snapshot, so the caller issues no call.
        assert!(controller.begin_submit().is_none());
        assert!(controller.is_submitting());
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let mut controller = PromptController::new();

        controller.begin_submit().expect("submit starts");
        controller.finish_submit(Err(ApiError::Transport("connection refused".to_string())));
        assert!(controller.last_error().is_some());

        controller.begin_submit().expect("retry starts");
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn test_successful_submission_sets_response() {
        let mut controller = PromptController::new();

        controller.begin_submit().expect("submit starts");
        controller.finish_submit(Ok(PromptResponse {
            content: "2, matey".to_string(),
        }));

        assert_eq!(controller.last_response().unwrap().content, "2, matey");
        assert!(controller.last_error().is_none());
        assert!(!controller.is_submitting());
    }

    #[test]
    fn test_failed_submission_keeps_previous_response() {
        let mut controller = PromptController::new();

        controller.begin_submit().expect("submit starts");
        controller.finish_submit(Ok(PromptResponse {
            content: "first answer".to_string(),
        }));

        controller.begin_submit().expect("second submit starts");
        controller.finish_submit(Err(ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        }));

        // The last good output stays visible alongside the error.
        assert_eq!(controller.last_response().unwrap().content, "first answer");
        assert!(controller.last_error().is_some());
        assert!(!controller.is_submitting());
    }

    #[test]
    fn test_finish_submit_allows_next_submission() {
        let mut controller = PromptController::new();

        controller.begin_submit().expect("submit starts");
        controller.finish_submit(Err(ApiError::Transport("timed out".to_string())));

        assert!(controller.begin_submit().is_some());
    }

    #[test]
    fn test_resolve_selected_matches_option() {
        let mut registry = ModelRegistry::default();
        registry.set_models(options(&["llm1", "llm2"]));

        registry.resolve_selected(Some("llm1"));

        let selected = registry.selected().expect("selection resolves");
        assert_eq!(selected.id, "llm1");
        assert_eq!(selected.label, "llm1");
    }

    #[test]
    fn test_resolve_selected_unknown_id_is_none() {
        let mut registry = ModelRegistry::default();
        registry.set_models(options(&["llm1", "llm2"]));

        registry.resolve_selected(Some("llm3"));

        assert!(registry.selected().is_none());
    }

    #[test]
    fn test_resolve_selected_none_clears_stale_value() {
        let mut registry = ModelRegistry::default();
        registry.set_models(options(&["llm1"]));
        assert!(registry.select("llm1"));

        registry.resolve_selected(None);

        assert!(registry.selected().is_none());
    }

    #[test]
    fn test_set_models_drops_dangling_selection() {
        let mut registry = ModelRegistry::default();
        registry.set_models(options(&["llm1", "llm2"]));
        assert!(registry.select("llm2"));

        registry.set_models(options(&["llm1"]));

        assert!(registry.selected().is_none());
    }

    #[test]
    fn test_set_models_keeps_surviving_selection() {
        let mut registry = ModelRegistry::default();
        registry.set_models(options(&["llm1", "llm2"]));
        assert!(registry.select("llm2"));

        registry.set_models(options(&["llm2", "llm3"]));

        assert_eq!(registry.selected().unwrap().id, "llm2");
    }

    #[test]
    fn test_select_unknown_id_rejected() {
        let mut registry = ModelRegistry::default();
        registry.set_models(options(&["llm1"]));

        assert!(!registry.select("llm9"));
        assert!(registry.selected().is_none());
    }

    #[test]
    fn test_select_then_restore_rolls_back() {
        let mut registry = ModelRegistry::default();
        registry.set_models(options(&["llm1", "llm2"]));
        assert!(registry.select("llm1"));

        let previous = registry.selected().cloned();
        assert!(registry.select("llm2"));
        assert_eq!(registry.selected().unwrap().id, "llm2");

        // Backend rejected the change: the optimistic update is undone.
        registry.restore(previous);
        assert_eq!(registry.selected().unwrap().id, "llm1");
    }

    #[test]
    fn test_record_fetch_not_found_is_distinct() {
        let state = RecordFetch::from_result(Err(ApiError::NotFound));
        assert_eq!(state, RecordFetch::NotFound);
    }

    #[test]
    fn test_record_fetch_transport_failure_message() {
        let state =
            RecordFetch::from_result(Err(ApiError::Transport("connection refused".to_string())));
        match state {
            RecordFetch::Failed(message) => assert!(message.contains("connection refused")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_record_fetch_loads_record() {
        let record = HistoryRecord {
            id: "abc".to_string(),
            system_message: "s".to_string(),
            user_message: "u".to_string(),
            response: "r".to_string(),
        };
        let state = RecordFetch::from_result(Ok(record.clone()));
        assert_eq!(state, RecordFetch::Loaded(record));
    }
}
