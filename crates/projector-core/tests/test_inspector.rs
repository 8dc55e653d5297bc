mod common;

use approx::assert_relative_eq;

use projector_core::fit::Padding;
use projector_core::geometry::{Point, Rect, Size};
use projector_core::inspector::Inspector;
use projector_core::lens::AnchorMode;
use projector_core::source::{LoadTicket, SourceKind, SourceSet};

use common::{hovering_inspector, test_zoom_config, thumb_and_full};

#[test]
fn test_source_change_requests_thumbnail() {
    let mut inspector = Inspector::new(test_zoom_config());
    let request = inspector.set_source(thumb_and_full());
    assert_eq!(request.uri, "thumb.jpg");
    assert_eq!(request.ticket.kind, SourceKind::Thumb);
    assert_eq!(inspector.projected_source(), None);
}

#[test]
fn test_thumbnail_load_sets_padding() {
    let inspector = hovering_inspector();
    assert_eq!(inspector.image_size(), Size::new(800.0, 400.0));
    assert_eq!(inspector.padding(), Padding { w: 0.0, h: 100.0 });
    assert_eq!(inspector.projected_source(), Some(SourceKind::Thumb));
}

#[test]
fn test_hover_produces_mask_and_transform() {
    let inspector = hovering_inspector();
    assert!(inspector.projector_visible());
    assert!(!inspector.mask().is_cleared());

    // Level 1: area 400x320 centred at (200, 200).
    let view = inspector.view().unwrap();
    assert_relative_eq!(view.area.w, 400.0);
    assert_relative_eq!(view.area.h, 320.0);
    assert_relative_eq!(inspector.mask().top.h, 40.0);

    let t = inspector.transform().unwrap();
    assert_eq!(t.anchor, AnchorMode::CropX);
}

#[test]
fn test_pointer_leave_clears_mask() {
    let mut inspector = hovering_inspector();
    inspector.pointer_leave();
    assert!(!inspector.projector_visible());
    assert!(inspector.mask().is_cleared());
    assert!(inspector.transform().is_none());

    // Moving without re-entering does not bring the mask back.
    inspector.pointer_move(Point::new(100.0, 100.0));
    assert!(inspector.mask().is_cleared());
}

#[test]
fn test_unmeasured_projector_clears_previous_mask() {
    let mut inspector = hovering_inspector();
    assert!(!inspector.mask().is_cleared());

    inspector.set_projector(Rect::new(410.0, 0.0, 0.0, 400.0));
    assert!(inspector.mask().is_cleared());
    assert!(inspector.transform().is_none());

    inspector.set_projector(Rect::new(410.0, 0.0, 500.0, 400.0));
    assert!(!inspector.mask().is_cleared());
}

#[test]
fn test_projector_rect_is_republished() {
    let inspector = hovering_inspector();
    assert_eq!(inspector.projector_rect(), Rect::new(410.0, 0.0, 500.0, 400.0));
}

#[test]
fn test_pointer_move_updates_mask() {
    let mut inspector = hovering_inspector();
    let before = inspector.mask();
    inspector.pointer_move(Point::new(250.0, 180.0));
    let after = inspector.mask();
    assert_ne!(before, after);
    assert_relative_eq!(after.left.w, 50.0);
}

#[test]
fn test_non_finite_pointer_is_ignored() {
    let mut inspector = hovering_inspector();
    let before = inspector.snapshot();
    inspector.pointer_move(Point::new(f64::NAN, 10.0));
    inspector.pointer_move(Point::new(10.0, f64::INFINITY));
    assert_eq!(inspector.snapshot(), before);
}

#[test]
fn test_wheel_past_threshold_requests_full_once() {
    let mut inspector = hovering_inspector();
    let mut requests = Vec::new();
    for _ in 0..30 {
        if let Some(r) = inspector.wheel(-1.0) {
            requests.push(r);
        }
    }
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].uri, "full.jpg");
    assert_eq!(requests[0].ticket.kind, SourceKind::Full);
    assert!(inspector.zoom_state().high_res_loaded);
    assert_eq!(inspector.zoom_state().active_source, SourceKind::Full);
    // Pixels still come from the thumbnail until the load completes.
    assert_eq!(inspector.projected_source(), Some(SourceKind::Thumb));

    assert!(inspector.image_loaded(requests[0].ticket, Size::new(4000.0, 2000.0)));
    assert_eq!(inspector.projected_source(), Some(SourceKind::Full));
    assert_eq!(inspector.image_size(), Size::new(4000.0, 2000.0));
    // Same aspect as the thumbnail, so the padding is unchanged.
    assert_relative_eq!(inspector.padding().h, 100.0);
}

#[test]
fn test_wheel_changes_active_area() {
    let mut inspector = hovering_inspector();
    let before = inspector.view().unwrap().area;
    inspector.wheel(-1.0);
    let after = inspector.view().unwrap().area;
    assert!(after.w < before.w);
    assert_relative_eq!(before.w / after.w, 1.1, max_relative = 1e-12);
}

#[test]
fn test_ticket_redeemed_at_most_once() {
    let mut inspector = Inspector::new(test_zoom_config());
    let request = inspector.set_source(thumb_and_full());
    assert!(inspector.image_loaded(request.ticket, Size::new(100.0, 100.0)));
    assert!(!inspector.image_loaded(request.ticket, Size::new(300.0, 100.0)));
    assert_eq!(inspector.image_size(), Size::new(100.0, 100.0));
}

#[test]
fn test_stale_load_after_source_change_is_ignored() {
    let mut inspector = Inspector::new(test_zoom_config());
    let old = inspector.set_source(thumb_and_full());
    let new = inspector.set_source(SourceSet::new("other.jpg", None));
    assert_ne!(old.ticket, new.ticket);

    assert!(!inspector.image_loaded(old.ticket, Size::new(10.0, 10.0)));
    assert_eq!(inspector.image_size(), Size::ZERO);
    assert!(inspector.image_loaded(new.ticket, Size::new(20.0, 10.0)));
    assert_eq!(inspector.image_size(), Size::new(20.0, 10.0));
}

#[test]
fn test_unknown_ticket_is_ignored() {
    let mut inspector = Inspector::new(test_zoom_config());
    inspector.set_source(thumb_and_full());
    let forged = LoadTicket {
        generation: 1,
        kind: SourceKind::Full,
    };
    assert!(!inspector.image_loaded(forged, Size::new(10.0, 10.0)));
}

#[test]
fn test_late_thumbnail_does_not_replace_full() {
    let mut inspector = Inspector::new(test_zoom_config());
    inspector.set_container(Rect::new(0.0, 0.0, 400.0, 400.0));
    let thumb = inspector.set_source(thumb_and_full());
    let full = (0..30).find_map(|_| inspector.wheel(-1.0)).unwrap();

    assert!(inspector.image_loaded(full.ticket, Size::new(4000.0, 2000.0)));
    assert!(inspector.image_loaded(thumb.ticket, Size::new(400.0, 200.0)));
    assert_eq!(inspector.projected_source(), Some(SourceKind::Full));
    assert_eq!(inspector.image_size(), Size::new(4000.0, 2000.0));
}

#[test]
fn test_source_change_resets_zoom_and_latch() {
    let mut inspector = hovering_inspector();
    for _ in 0..80 {
        inspector.wheel(-1.0);
    }
    assert_eq!(inspector.zoom_state().level, 10.0);

    inspector.set_source(SourceSet::new("b.jpg", Some("b-full.jpg".into())));
    let zoom = inspector.zoom_state();
    assert_eq!(zoom.level, 1.0);
    assert!(!zoom.high_res_loaded);
    assert_eq!(zoom.active_source, SourceKind::Thumb);
}

#[test]
fn test_container_resize_refits_padding() {
    let mut inspector = hovering_inspector();
    inspector.set_container(Rect::new(0.0, 0.0, 800.0, 200.0));
    assert_eq!(inspector.padding(), Padding { w: 200.0, h: 0.0 });
}

#[test]
fn test_zoom_config_change_restarts_level() {
    let mut inspector = hovering_inspector();
    inspector.wheel(-1.0);
    let mut config = test_zoom_config();
    config.initial = 3.0;
    inspector.set_zoom_config(config);
    assert_eq!(inspector.zoom_state().level, 3.0);
}

#[test]
fn test_zoom_config_out_of_range_initial_is_clamped() {
    let mut inspector = hovering_inspector();
    let mut config = test_zoom_config();
    config.initial = 15.0;
    inspector.set_zoom_config(config);
    assert_eq!(inspector.zoom_state().level, 10.0);
    assert!(inspector.view().is_some());
}

#[test]
fn test_accessors_report_inputs() {
    let mut inspector = Inspector::new(test_zoom_config());
    assert_eq!(inspector.container(), Rect::ZERO);
    assert!(inspector.sources().is_none());
    assert!(!inspector.hovering());

    let container = Rect::new(5.0, 10.0, 400.0, 300.0);
    inspector.set_container(container);
    inspector.set_source(thumb_and_full());
    inspector.pointer_enter();
    inspector.pointer_move(Point::new(12.0, 34.0));

    assert_eq!(inspector.container(), container);
    let sources = inspector.sources().unwrap();
    assert_eq!(sources.thumb, "thumb.jpg");
    assert_eq!(sources.full.as_deref(), Some("full.jpg"));
    assert!(inspector.hovering());
    assert_eq!(inspector.pointer(), Point::new(12.0, 34.0));

    inspector.pointer_leave();
    assert!(!inspector.hovering());
}

#[test]
fn test_snapshot_serializes() {
    let inspector = hovering_inspector();
    let snapshot = inspector.snapshot();
    assert!(snapshot.hovering);
    assert_eq!(snapshot.zoom_level, 1.0);
    assert_eq!(snapshot.pointer, Point::new(200.0, 200.0));

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"active_source\":\"thumb\""), "got: {json}");
    assert!(json.contains("\"anchor\":\"crop-x\""), "got: {json}");
}
