use projector_core::source::SourceKind;

/// GPU textures for the two sources of the current image.
#[derive(Default)]
pub struct SourceTextures {
    pub thumb: Option<egui::TextureHandle>,
    pub full: Option<egui::TextureHandle>,
}

impl SourceTextures {
    pub fn get(&self, kind: SourceKind) -> Option<&egui::TextureHandle> {
        match kind {
            SourceKind::Thumb => self.thumb.as_ref(),
            SourceKind::Full => self.full.as_ref(),
        }
    }

    pub fn set(&mut self, kind: SourceKind, texture: egui::TextureHandle) {
        match kind {
            SourceKind::Thumb => self.thumb = Some(texture),
            SourceKind::Full => self.full = Some(texture),
        }
    }

    pub fn clear(&mut self) {
        self.thumb = None;
        self.full = None;
    }
}
