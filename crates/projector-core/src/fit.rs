use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Letterbox padding on each axis produced by a "contain" fit.
///
/// At most one axis is non-zero; both are zero when the aspect ratios match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub w: f64,
    pub h: f64,
}

/// Compute the letterbox padding of `image` fitted inside `container`.
///
/// A container that is relatively wider than the image gets horizontal
/// padding, a relatively taller one gets vertical padding. Degenerate sizes
/// are treated as aspect ratio 1 and the result never goes below zero.
pub fn compute_padding(container: Size, image: Size) -> Padding {
    let image_aspect = image.aspect_ratio();
    let container_aspect = container.aspect_ratio();

    if container_aspect > image_aspect {
        Padding {
            w: non_negative((container.w - container.h * image_aspect) / 2.0),
            h: 0.0,
        }
    } else if container_aspect < image_aspect {
        Padding {
            w: 0.0,
            h: non_negative((container.h - container.w / image_aspect) / 2.0),
        }
    } else {
        Padding::default()
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

