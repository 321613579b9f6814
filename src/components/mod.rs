mod header;
mod model_dropdown;
mod prompt_form;
mod response_view;
mod sidebar;

pub use header::Header;
pub use model_dropdown::ModelDropdown;
pub use prompt_form::PromptForm;
pub use response_view::ResponseView;
pub use sidebar::Sidebar;
