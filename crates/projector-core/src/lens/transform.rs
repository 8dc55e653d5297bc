use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fit::Padding;
use crate::geometry::{Point, Rect};

use super::area::ActiveArea;

/// How the magnified image is positioned inside the projector.
///
/// Margins place an image smaller than its frame; crop anchors pick the
/// visible window of an image larger than its frame. Mixed modes use one
/// mechanism per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorMode {
    /// Smaller than the projector on both axes.
    Margin,
    /// Wider than the projector, shorter than it: horizontal crop, vertical margin.
    CropX,
    /// Narrower than the projector, taller than it: horizontal margin, vertical crop.
    CropY,
    /// Larger than the projector on both axes.
    CropBoth,
}

impl fmt::Display for AnchorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Margin => write!(f, "margin"),
            Self::CropX => write!(f, "crop-x"),
            Self::CropY => write!(f, "crop-y"),
            Self::CropBoth => write!(f, "crop-both"),
        }
    }
}

/// Size and placement of the magnified image inside the projector.
///
/// Unused positioning fields are zero: `margin_*` outside the margin axes,
/// `crop_*` outside the cropped axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LensTransform {
    /// Scaled image width in projector pixels.
    pub width: f64,
    /// Scaled image height in projector pixels.
    pub height: f64,
    pub anchor: AnchorMode,
    pub margin_top: f64,
    pub margin_left: f64,
    pub crop_x: f64,
    pub crop_y: f64,
}

impl LensTransform {
    /// Top-left corner of the scaled image in projector-local pixels.
    ///
    /// Both mechanisms resolve to the same offset on a given axis, so a renderer
    /// with free placement can ignore the anchor mode.
    pub fn offset(&self) -> (f64, f64) {
        let x = match self.anchor {
            AnchorMode::Margin | AnchorMode::CropY => self.margin_left,
            AnchorMode::CropX | AnchorMode::CropBoth => self.crop_x,
        };
        let y = match self.anchor {
            AnchorMode::Margin | AnchorMode::CropX => self.margin_top,
            AnchorMode::CropY | AnchorMode::CropBoth => self.crop_y,
        };
        (x, y)
    }

    /// Scaled image rectangle in projector-local pixels.
    pub fn image_rect(&self) -> Rect {
        let (x, y) = self.offset();
        Rect::new(x, y, self.width, self.height)
    }
}

/// Compute the magnified image transform for the pointer position.
///
/// The letterbox padding is removed before scaling so the projected image
/// lines up with the visible thumbnail pixels under the active area.
///
/// Returns `None` unless the area is finite and positive and the projector is
/// measured; use the area returned by `compute_active_area`.
pub fn compute_lens_transform(
    pointer: Point,
    padding: Padding,
    area: ActiveArea,
    container: &Rect,
    projector: &Rect,
) -> Option<LensTransform> {
    let area_ok = area.w.is_finite() && area.h.is_finite() && area.w > 0.0 && area.h > 0.0;
    if !area_ok || !projector.is_measured() {
        return None;
    }

    let width = (container.w - padding.w * 2.0) / area.w * projector.w;
    let height = (container.h - padding.h * 2.0) / area.h * projector.h;
    let lens_x = -(pointer.x - padding.w - area.w / 2.0) * projector.w / area.w;
    let lens_y = -(pointer.y - padding.h - area.h / 2.0) * projector.h / area.h;

    let narrow = width < projector.w;
    let short = height < projector.h;

    let (anchor, margin_top, margin_left, crop_x, crop_y) = match (narrow, short) {
        (true, true) => (AnchorMode::Margin, lens_y, lens_x, 0.0, 0.0),
        (true, false) => (AnchorMode::CropY, 0.0, lens_x, 0.0, lens_y),
        (false, true) => (AnchorMode::CropX, lens_y, 0.0, lens_x, 0.0),
        (false, false) => (AnchorMode::CropBoth, 0.0, 0.0, lens_x, lens_y),
    };

    Some(LensTransform {
        width,
        height,
        anchor,
        margin_top,
        margin_left,
        crop_x,
        crop_y,
    })
}
