use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Size of the region, in container pixels, mapped onto the projector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveArea {
    pub w: f64,
    pub h: f64,
}

/// Compute the active area for the given zoom level.
///
/// The area always has the projector's aspect ratio. The axis that binds is
/// chosen by comparing the container's aspect to the projector's: a container
/// relatively wider than the projector divides its height by the level.
///
/// Returns `None` while either rectangle is unmeasured or the level is not positive.
pub fn compute_active_area(container: &Rect, projector: &Rect, level: f64) -> Option<ActiveArea> {
    if !container.is_measured() || !projector.is_measured() || level.is_nan() || level <= 0.0 {
        return None;
    }

    let aspect = container.w / container.h;
    let lens_aspect = projector.w / projector.h;

    let area = if aspect > lens_aspect {
        let h = container.h / level;
        ActiveArea { w: h * lens_aspect, h }
    } else {
        let w = container.w / level;
        ActiveArea { w, h: w / lens_aspect }
    };

    (area.w.is_finite() && area.h.is_finite() && area.w > 0.0 && area.h > 0.0).then_some(area)
}
