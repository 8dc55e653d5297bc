use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::fit::{compute_padding, Padding};
use crate::geometry::{Point, Rect, Size};
use crate::lens::{compute_lens_view, LensTransform, LensView, MaskRegions};
use crate::source::{LoadRequest, LoadTicket, SourceKind, SourceSet};
use crate::zoom::{ZoomConfig, ZoomMachine, ZoomState};

/// Read-only view of the inspector state, suitable for debug overlays and traces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspectorSnapshot {
    pub hovering: bool,
    pub pointer: Point,
    pub zoom_level: f64,
    pub high_res_loaded: bool,
    pub active_source: SourceKind,
    pub projected_source: Option<SourceKind>,
    pub image_size: Size,
    pub padding: Padding,
    pub view: Option<LensView>,
}

/// Magnifier state for one thumbnail/projector pair.
///
/// Inputs arrive through the setter methods; every derived fact (padding,
/// active area, mask, transform) is recomputed from the current inputs
/// whenever one of its dependencies changes.
#[derive(Clone, Debug)]
pub struct Inspector {
    container: Rect,
    projector: Rect,
    image_size: Size,
    padding: Padding,
    zoom: ZoomMachine,
    sources: Option<SourceSet>,
    generation: u64,
    outstanding: Vec<LoadTicket>,
    projected: Option<SourceKind>,
    hovering: bool,
    pointer: Point,
    view: Option<LensView>,
}

impl Inspector {
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            container: Rect::ZERO,
            projector: Rect::ZERO,
            image_size: Size::ZERO,
            padding: Padding::default(),
            zoom: ZoomMachine::new(config),
            sources: None,
            generation: 0,
            outstanding: Vec::new(),
            projected: None,
            hovering: false,
            pointer: Point::default(),
            view: None,
        }
    }

    // --- inputs -----------------------------------------------------------

    /// The thumbnail container was measured.
    pub fn set_container(&mut self, rect: Rect) {
        let rect = rect.sanitized();
        if rect == self.container {
            return;
        }
        self.container = rect;
        self.refit();
    }

    /// The projector viewport was measured.
    pub fn set_projector(&mut self, rect: Rect) {
        let rect = rect.sanitized();
        if rect == self.projector {
            return;
        }
        self.projector = rect;
        self.recompute_view();
    }

    /// Show a new image. Resets the zoom state and returns the thumbnail load
    /// to perform; completions for earlier source sets are ignored from now on.
    pub fn set_source(&mut self, sources: SourceSet) -> LoadRequest {
        self.generation += 1;
        self.zoom.on_source_changed(&sources);
        self.outstanding.clear();
        self.projected = None;

        let request = self.issue(SourceKind::Thumb, sources.thumb.clone());
        self.sources = Some(sources);
        self.recompute_view();
        request
    }

    /// Report a finished load. Returns `false` if the ticket was stale or
    /// already redeemed.
    pub fn image_loaded(&mut self, ticket: LoadTicket, natural_size: Size) -> bool {
        let Some(pos) = self.outstanding.iter().position(|t| *t == ticket) else {
            warn!(?ticket, generation = self.generation, "Ignoring stale image load");
            return false;
        };
        self.outstanding.swap_remove(pos);

        // A late thumbnail must not replace full-resolution pixels.
        if ticket.kind == SourceKind::Thumb && self.projected == Some(SourceKind::Full) {
            debug!("Thumbnail finished after full-resolution source, keeping full");
            return true;
        }

        info!(
            kind = %ticket.kind,
            width = natural_size.w,
            height = natural_size.h,
            "Image loaded"
        );
        self.projected = Some(ticket.kind);
        self.image_size = natural_size;
        self.refit();
        true
    }

    pub fn pointer_enter(&mut self) {
        self.hovering = true;
        self.recompute_view();
    }

    /// Pointer position in container-local pixels. Non-finite positions are ignored.
    pub fn pointer_move(&mut self, pointer: Point) {
        if !pointer.is_finite() {
            debug!(?pointer, "Ignoring non-finite pointer position");
            return;
        }
        self.pointer = pointer;
        self.recompute_view();
    }

    pub fn pointer_leave(&mut self) {
        self.hovering = false;
        self.view = None;
    }

    /// Apply a wheel delta. Returns the full-resolution load to perform when
    /// this step crossed the load threshold.
    pub fn wheel(&mut self, delta_y: f64) -> Option<LoadRequest> {
        let outcome = self.zoom.on_wheel(delta_y);
        let full_uri = if outcome.load_full {
            self.sources.as_ref().and_then(|s| s.full.clone())
        } else {
            None
        };
        let request = full_uri.map(|uri| self.issue(SourceKind::Full, uri));
        if outcome.changed() {
            self.recompute_view();
        }
        request
    }

    /// Replace the zoom config; the level restarts at the new initial value.
    pub fn set_zoom_config(&mut self, config: ZoomConfig) {
        self.zoom.set_config(config);
        self.recompute_view();
    }

    // --- outputs ----------------------------------------------------------

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Measured projector rect, republished for positioning the projection element.
    pub fn projector_rect(&self) -> Rect {
        self.projector
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn zoom_state(&self) -> &ZoomState {
        self.zoom.state()
    }

    pub fn zoom_config(&self) -> &ZoomConfig {
        self.zoom.config()
    }

    pub fn sources(&self) -> Option<&SourceSet> {
        self.sources.as_ref()
    }

    /// Source whose pixels are currently available for display.
    pub fn projected_source(&self) -> Option<SourceKind> {
        self.projected
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn projector_visible(&self) -> bool {
        self.hovering
    }

    pub fn view(&self) -> Option<&LensView> {
        self.view.as_ref()
    }

    /// Current dimming mask; cleared while not hovering or unmeasured.
    pub fn mask(&self) -> MaskRegions {
        self.view.map(|v| v.mask).unwrap_or_default()
    }

    pub fn transform(&self) -> Option<LensTransform> {
        self.view.map(|v| v.transform)
    }

    pub fn snapshot(&self) -> InspectorSnapshot {
        let zoom = self.zoom.state();
        InspectorSnapshot {
            hovering: self.hovering,
            pointer: self.pointer,
            zoom_level: zoom.level,
            high_res_loaded: zoom.high_res_loaded,
            active_source: zoom.active_source,
            projected_source: self.projected,
            image_size: self.image_size,
            padding: self.padding,
            view: self.view,
        }
    }

    // --- recomputation ----------------------------------------------------

    fn issue(&mut self, kind: SourceKind, uri: String) -> LoadRequest {
        let ticket = LoadTicket {
            generation: self.generation,
            kind,
        };
        self.outstanding.push(ticket);
        debug!(?ticket, %uri, "Requesting image load");
        LoadRequest { ticket, uri }
    }

    fn refit(&mut self) {
        self.padding = compute_padding(self.container.size(), self.image_size);
        self.recompute_view();
    }

    fn recompute_view(&mut self) {
        if !self.hovering {
            self.view = None;
            return;
        }
        self.view = compute_lens_view(
            self.pointer,
            self.padding,
            &self.container,
            &self.projector,
            self.zoom.level(),
        );
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}
