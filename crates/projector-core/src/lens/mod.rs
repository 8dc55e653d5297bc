mod area;
mod mask;
mod transform;

use serde::{Deserialize, Serialize};

use crate::fit::Padding;
use crate::geometry::{Point, Rect};

pub use area::{compute_active_area, ActiveArea};
pub use mask::{compute_mask_regions, MaskRegions};
pub use transform::{compute_lens_transform, AnchorMode, LensTransform};

/// Everything the renderer needs for one hovered pointer position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LensView {
    pub area: ActiveArea,
    pub mask: MaskRegions,
    pub transform: LensTransform,
}

/// Compute area, mask and transform together.
///
/// Returns `None` when the container or projector has not been measured yet.
pub fn compute_lens_view(
    pointer: Point,
    padding: Padding,
    container: &Rect,
    projector: &Rect,
    level: f64,
) -> Option<LensView> {
    let area = compute_active_area(container, projector, level)?;
    let transform = compute_lens_transform(pointer, padding, area, container, projector)?;
    Some(LensView {
        area,
        mask: compute_mask_regions(pointer, area, container),
        transform,
    })
}
