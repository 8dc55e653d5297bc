use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

use super::area::ActiveArea;

/// Four rectangles dimming everything outside the active area.
///
/// `top` and `bottom` span the full container width; `left` and `right` fill
/// the band between them. The default value is the cleared (all-zero) mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaskRegions {
    pub top: Rect,
    pub left: Rect,
    pub right: Rect,
    pub bottom: Rect,
}

impl MaskRegions {
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        [&self.top, &self.left, &self.right, &self.bottom].into_iter()
    }
}

/// Frame the active area centred on `pointer`, in container-local pixels.
///
/// Every width and height is clamped at zero, including the side bands when
/// the active area is taller than the container.
pub fn compute_mask_regions(pointer: Point, area: ActiveArea, container: &Rect) -> MaskRegions {
    let half_w = area.w / 2.0;
    let half_h = area.h / 2.0;
    let band_y = pointer.y - half_h;
    let band_h = area.h.max(0.0);

    MaskRegions {
        top: Rect::new(0.0, 0.0, container.w, (pointer.y - half_h).max(0.0)),
        left: Rect::new(0.0, band_y, (pointer.x - half_w).max(0.0), band_h),
        right: Rect::new(
            pointer.x + half_w,
            band_y,
            (container.w - pointer.x - half_w).max(0.0),
            band_h,
        ),
        bottom: Rect::new(
            0.0,
            pointer.y + half_h,
            container.w,
            (container.h - pointer.y - half_h).max(0.0),
        ),
    }
}
