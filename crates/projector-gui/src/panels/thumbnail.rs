use std::time::Instant;

use projector_core::consts::MASK_OPACITY;
use projector_core::geometry::Point;
use projector_core::source::SourceKind;

use crate::app::ProjectorApp;
use crate::panels::{from_screen, to_screen};

/// Thumbnail container: contain-fitted image, pointer tracking, wheel zoom
/// and the dimming mask around the active area.
pub fn show(ctx: &egui::Context, app: &mut ProjectorApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        ui.painter()
            .rect_filled(rect, 0.0, egui::Color32::from_gray(30));

        let Some(texture_id) = app.textures.get(SourceKind::Thumb).map(|t| t.id()) else {
            show_placeholder(ui, app.ui_state.is_loading());
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::hover());
        app.inspector.set_container(from_screen(rect));

        handle_pointer(ctx, ui, &response, app, rect);
        handle_wheel(ui, &response, app);

        draw_image(ui, texture_id, image_rect(rect, app));
        draw_mask(ui, rect, app);
    });
}

/// Screen rect of the image after removing the letterbox padding.
fn image_rect(rect: egui::Rect, app: &ProjectorApp) -> egui::Rect {
    let padding = app.inspector.padding();
    rect.shrink2(egui::vec2(padding.w as f32, padding.h as f32))
}

fn handle_pointer(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut ProjectorApp,
    rect: egui::Rect,
) {
    let now = Instant::now();
    let hovering = response.hovered();

    if hovering && !app.ui_state.was_hovering {
        app.inspector.pointer_enter();
    } else if !hovering && app.ui_state.was_hovering {
        app.inspector.pointer_leave();
        app.throttle.reset();
        app.ui_state.last_pointer = None;
        ctx.request_repaint();
    }
    app.ui_state.was_hovering = hovering;

    if !hovering {
        return;
    }

    if let Some(pos) = ui.input(|i| i.pointer.hover_pos()) {
        let local = pos - rect.min;
        let local = egui::pos2(local.x, local.y);
        if app.ui_state.last_pointer != Some(local) {
            app.ui_state.last_pointer = Some(local);
            let pointer = Point::new(local.x as f64, local.y as f64);
            if let Some(p) = app.throttle.offer(now, pointer) {
                app.inspector.pointer_move(p);
                ctx.request_repaint();
            }
        }
    }

    // Trailing edge: release the held position once the interval has passed.
    if let Some(p) = app.throttle.flush(now) {
        app.inspector.pointer_move(p);
        ctx.request_repaint();
    }
    if let Some(deadline) = app.throttle.next_deadline() {
        ctx.request_repaint_after(deadline.saturating_duration_since(now));
    }
}

fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut ProjectorApp) {
    if !response.hovered() {
        return;
    }
    let scroll = ui.input(|i| i.raw_scroll_delta.y);
    if scroll == 0.0 {
        return;
    }
    // Scrolling up reports a positive delta; the zoom machine zooms in on negative.
    if let Some(request) = app.inspector.wheel(-scroll as f64) {
        app.request_load(request);
    }
    ui.ctx().request_repaint();
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_mask(ui: &egui::Ui, rect: egui::Rect, app: &ProjectorApp) {
    let mask = app.inspector.mask();
    if mask.is_cleared() {
        return;
    }
    let dim_color = egui::Color32::from_black_alpha((MASK_OPACITY * 255.0).round() as u8);
    let painter = ui.painter_at(rect);
    for region in mask.iter() {
        painter.rect_filled(to_screen(rect.min, region), 0.0, dim_color);
    }
}

fn show_placeholder(ui: &mut egui::Ui, loading: bool) {
    ui.centered_and_justified(|ui| {
        if loading {
            ui.spinner();
        } else {
            ui.label(
                egui::RichText::new("Open a thumbnail to begin")
                    .size(18.0)
                    .color(egui::Color32::from_gray(100)),
            );
        }
    });
}
