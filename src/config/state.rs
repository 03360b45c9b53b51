// src/config/state.rs
use super::options::AppOptions;
use crate::data::FieldMap;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text in the source field (path or URL)
    pub source_text: String,
    /// URL override text; empty means "derive from page"
    pub url_text: String,

    /// Pending alert; shown as a modal until dismissed
    pub alert: Option<String>,

    /// Last copied text, echoed under the buttons
    pub last_copied: Option<String>,

    /// Result of the last "Log All Details"
    pub last_details: Option<FieldMap>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            source_text: s!(),
            url_text: s!(),
            alert: None,
            last_copied: None,
            last_details: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
