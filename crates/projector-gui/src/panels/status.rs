use crate::app::ProjectorApp;

pub fn show(ctx: &egui::Context, app: &mut ProjectorApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        let inspector = &app.inspector;
        let zoom = inspector.zoom_state();
        ui.horizontal(|ui| {
            let size = inspector.image_size();
            if size.is_measured() {
                ui.label(format!("{}x{}", size.w, size.h));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.2}x", zoom.level));
            ui.separator();
            ui.label(format!("Requested: {}", zoom.active_source));
            ui.separator();
            match inspector.projected_source() {
                Some(kind) => ui.label(format!("Showing: {kind}")),
                None => ui.label("Showing: nothing"),
            };
            if let Some(t) = inspector.transform() {
                ui.separator();
                ui.label(format!("Anchor: {}", t.anchor));
            }
            if app.ui_state.is_loading() {
                ui.separator();
                ui.spinner();
                ui.label("Loading...");
            }
        });

        ui.add_space(2.0);
    });
}
