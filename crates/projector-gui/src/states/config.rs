use projector_core::config::InspectorConfig;

/// Editable copy of the inspector config shown in the controls panel.
///
/// Slider edits go to `draft`; `applied` is what the inspector currently runs
/// with. Applying validates the draft first.
#[derive(Default)]
pub struct ConfigState {
    pub draft: InspectorConfig,
    pub applied: InspectorConfig,
}

impl ConfigState {
    pub fn is_dirty(&self) -> bool {
        self.draft != self.applied
    }

    pub fn revert(&mut self) {
        self.draft = self.applied.clone();
    }
}
