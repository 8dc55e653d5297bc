pub mod controls;
pub mod menu_bar;
pub mod projector;
pub mod status;
pub mod thumbnail;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// Convert a core rect, offset by `origin`, to screen space.
pub(crate) fn to_screen(origin: egui::Pos2, r: &projector_core::geometry::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(r.x as f32, r.y as f32),
        egui::vec2(r.w as f32, r.h as f32),
    )
}

/// Core rect for a laid-out egui rect.
pub(crate) fn from_screen(r: egui::Rect) -> projector_core::geometry::Rect {
    projector_core::geometry::Rect::new(
        r.min.x as f64,
        r.min.y as f64,
        r.width() as f64,
        r.height() as f64,
    )
}
