#![allow(dead_code)]

use std::path::{Path, PathBuf};

use projector_core::geometry::{Rect, Size};
use projector_core::inspector::Inspector;
use projector_core::source::SourceSet;
use projector_core::zoom::ZoomConfig;

/// Zoom config used by most tests: levels in [1, 10], loads full source above 2.
pub fn test_zoom_config() -> ZoomConfig {
    ZoomConfig {
        initial: 1.0,
        min: 1.0,
        max: 10.0,
        load_threshold: 2.0,
        wheel_sensitivity: 0.1,
    }
}

pub fn thumb_and_full() -> SourceSet {
    SourceSet::new("thumb.jpg", Some("full.jpg".to_string()))
}

/// Inspector with a 400x400 container, a 500x400 projector and a loaded
/// 800x400 thumbnail. The pointer is hovering at the container centre.
pub fn hovering_inspector() -> Inspector {
    let mut inspector = Inspector::new(test_zoom_config());
    inspector.set_container(Rect::new(0.0, 0.0, 400.0, 400.0));
    inspector.set_projector(Rect::new(410.0, 0.0, 500.0, 400.0));
    let request = inspector.set_source(thumb_and_full());
    assert!(inspector.image_loaded(request.ticket, Size::new(800.0, 400.0)));
    inspector.pointer_enter();
    inspector.pointer_move(projector_core::geometry::Point::new(200.0, 200.0));
    inspector
}

/// Write a solid-colour RGB PNG of the given size into `dir`.
pub fn write_test_png(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join(format!("test_{width}x{height}.png"));
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 100, 50]));
    img.save(&path).expect("write test PNG");
    path
}
