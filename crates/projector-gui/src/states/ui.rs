use std::path::PathBuf;

use projector_core::source::SourceKind;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub thumb_path: Option<PathBuf>,
    pub full_path: Option<PathBuf>,

    /// Sources with a decode in flight on the worker.
    pub loading: Vec<SourceKind>,

    /// Pointer was over the thumbnail last frame.
    pub was_hovering: bool,
    /// Last container-local pointer position handed to the throttle.
    pub last_pointer: Option<egui::Pos2>,

    /// Show the inspector snapshot in the controls panel.
    pub show_debug: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_loading(&self) -> bool {
        !self.loading.is_empty()
    }

    pub fn finish_loading(&mut self, kind: SourceKind) {
        if let Some(pos) = self.loading.iter().position(|k| *k == kind) {
            self.loading.remove(pos);
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
