use std::path::Path;

use anyhow::Context;

use projector_core::config::InspectorConfig;
use projector_core::source::SourceKind;

use crate::app::ProjectorApp;
use crate::messages::WorkerResult;
use crate::workers::{send, send_error};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp"];

pub fn show(ctx: &egui::Context, app: &mut ProjectorApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Thumbnail...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_source(ctx, app, SourceKind::Thumb);
                }

                let full_enabled = app.ui_state.thumb_path.is_some();
                if ui.add_enabled(full_enabled, egui::Button::new("Open Full Resolution...")).clicked() {
                    ui.close();
                    open_source(ctx, app, SourceKind::Full);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.checkbox(&mut app.ui_state.show_debug, "Inspector State").clicked() {
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_source(ctx, app, SourceKind::Thumb);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_source(ctx: &egui::Context, app: &ProjectorApp, kind: SourceKind) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .set_title(format!("Open {kind}"))
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            send(&result_tx, &ctx, WorkerResult::SourcePicked { kind, path });
        }
    });
}

fn import_config(ctx: &egui::Context, app: &ProjectorApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        match read_config(&path) {
            Ok(config) => send(&result_tx, &ctx, WorkerResult::ConfigImported { config }),
            Err(e) => send_error(
                &result_tx,
                &ctx,
                format!("Failed to import {}: {e:#}", path.display()),
            ),
        }
    });
}

fn export_config(ctx: &egui::Context, app: &ProjectorApp) {
    let config = app.config.applied.clone();
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("projector.toml")
            .save_file()
        else {
            return;
        };
        match write_config(&path, &config) {
            Ok(()) => crate::workers::send_log(
                &result_tx,
                &ctx,
                format!("Config saved to {}", path.display()),
            ),
            Err(e) => send_error(
                &result_tx,
                &ctx,
                format!("Failed to export {}: {e:#}", path.display()),
            ),
        }
    });
}

fn read_config(path: &Path) -> anyhow::Result<InspectorConfig> {
    let content = std::fs::read_to_string(path).context("reading file")?;
    toml::from_str(&content).context("parsing TOML")
}

fn write_config(path: &Path, config: &InspectorConfig) -> anyhow::Result<()> {
    let content = toml::to_string_pretty(config).context("serializing config")?;
    std::fs::write(path, content).context("writing file")
}
