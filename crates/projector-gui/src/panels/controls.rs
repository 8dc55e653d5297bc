use projector_core::config::InspectorConfig;

use crate::app::ProjectorApp;
use crate::panels::section_header;

const LEFT_PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut ProjectorApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                source_section(ui, app);
                ui.separator();
                zoom_section(ui, app);
                if app.ui_state.show_debug {
                    ui.separator();
                    debug_section(ui, app);
                }
            });
        });
}

fn source_section(ui: &mut egui::Ui, app: &mut ProjectorApp) {
    section_header(ui, "Source", None);
    ui.add_space(4.0);

    let name = |p: &Option<std::path::PathBuf>| {
        p.as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "none".to_string())
    };
    ui.label(format!("Thumbnail: {}", name(&app.ui_state.thumb_path)));
    ui.label(format!("Full: {}", name(&app.ui_state.full_path)));

    if app.ui_state.thumb_path.is_some() && ui.button("Reload").clicked() {
        app.reload_sources();
    }
}

fn zoom_section(ui: &mut egui::Ui, app: &mut ProjectorApp) {
    let status = app.config.is_dirty().then_some("Modified");
    section_header(ui, "Zoom", status);
    ui.add_space(4.0);

    let z = &mut app.config.draft.zoom;
    ui.add(egui::Slider::new(&mut z.min, 0.1..=10.0).text("Min").fixed_decimals(2));
    ui.add(egui::Slider::new(&mut z.max, 1.0..=50.0).text("Max").fixed_decimals(2));
    ui.add(egui::Slider::new(&mut z.initial, 0.1..=50.0).text("Initial").fixed_decimals(2));
    ui.add(
        egui::Slider::new(&mut z.load_threshold, 0.1..=50.0)
            .text("Load above")
            .fixed_decimals(2),
    );
    ui.add(
        egui::Slider::new(&mut z.wheel_sensitivity, 0.01..=1.0)
            .text("Step")
            .logarithmic(true)
            .fixed_decimals(2),
    );

    ui.small("Pointer updates:");
    ui.add(
        egui::Slider::new(&mut app.config.draft.rewrite_interval_ms, 0..=200)
            .text("Interval (ms)"),
    );

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(app.config.is_dirty(), egui::Button::new("Apply"))
            .clicked()
        {
            if let Err(e) = app.apply_config() {
                app.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
        if ui
            .add_enabled(app.config.is_dirty(), egui::Button::new("Revert"))
            .clicked()
        {
            app.config.revert();
        }
        if ui.button("Defaults").clicked() {
            app.config.draft = InspectorConfig::default();
            if let Err(e) = app.apply_config() {
                app.ui_state.add_log(format!("ERROR: {e}"));
            } else {
                app.ui_state.add_log("Config reset to defaults".into());
            }
        }
    });
}

fn debug_section(ui: &mut egui::Ui, app: &ProjectorApp) {
    section_header(ui, "Inspector State", None);
    ui.add_space(4.0);

    let snap = app.inspector.snapshot();
    egui::Grid::new("inspector_state")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.label("Hovering");
            ui.label(snap.hovering.to_string());
            ui.end_row();

            ui.label("Pointer");
            ui.label(format!("{:.1}, {:.1}", snap.pointer.x, snap.pointer.y));
            ui.end_row();

            ui.label("Zoom");
            ui.label(format!("{:.2}", snap.zoom_level));
            ui.end_row();

            ui.label("High-res");
            ui.label(if snap.high_res_loaded { "requested" } else { "no" });
            ui.end_row();

            ui.label("Padding");
            ui.label(format!("{:.1} x {:.1}", snap.padding.w, snap.padding.h));
            ui.end_row();

            if let Some(view) = snap.view {
                ui.label("Area");
                ui.label(format!("{:.1} x {:.1}", view.area.w, view.area.h));
                ui.end_row();

                let (x, y) = view.transform.offset();
                ui.label("Offset");
                ui.label(format!("{x:.1}, {y:.1}"));
                ui.end_row();
            }
        });
}
