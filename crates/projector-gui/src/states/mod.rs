mod config;
mod textures;
mod ui;

pub use config::ConfigState;
pub use textures::SourceTextures;
pub use ui::UIState;
