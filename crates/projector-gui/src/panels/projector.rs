use crate::app::ProjectorApp;
use crate::panels::{from_screen, to_screen};

const RIGHT_PANEL_WIDTH: f32 = 480.0;

/// Magnified view of the region under the pointer.
pub fn show(ctx: &egui::Context, app: &mut ProjectorApp) {
    egui::SidePanel::right("projector")
        .default_width(RIGHT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            ui.allocate_rect(rect, egui::Sense::hover());
            app.inspector.set_projector(from_screen(rect));

            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, egui::Color32::from_gray(20));

            if !app.inspector.projector_visible() {
                show_placeholder(&painter, rect, "Hover the image to inspect");
                return;
            }

            let texture = app
                .inspector
                .projected_source()
                .and_then(|kind| app.textures.get(kind));
            let (Some(texture), Some(transform)) = (texture, app.inspector.transform()) else {
                return;
            };

            // Offsets are relative to the projector's top-left corner.
            let img_rect = to_screen(rect.min, &transform.image_rect());
            painter.image(
                texture.id(),
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        });
}

fn show_placeholder(painter: &egui::Painter, rect: egui::Rect, text: &str) {
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(16.0),
        egui::Color32::from_gray(100),
    );
}
