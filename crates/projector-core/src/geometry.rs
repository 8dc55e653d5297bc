use serde::{Deserialize, Serialize};

/// Width and height in pixels (natural image size or padding).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const ZERO: Self = Self { w: 0.0, h: 0.0 };

    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Width over height, or 1.0 when either side is unusable.
    pub fn aspect_ratio(&self) -> f64 {
        aspect_ratio(self.w, self.h)
    }

    /// True when both sides are finite and strictly positive.
    pub fn is_measured(&self) -> bool {
        is_positive(self.w) && is_positive(self.h)
    }
}

/// Pointer position relative to the container's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle, origin top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.w, size.h)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn aspect_ratio(&self) -> f64 {
        aspect_ratio(self.w, self.h)
    }

    pub fn is_measured(&self) -> bool {
        self.size().is_measured()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x <= self.x + self.w && p.y <= self.y + self.h
    }

    /// Replace non-finite fields with zero and negative extents with zero.
    pub fn sanitized(&self) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            x: finite(self.x),
            y: finite(self.y),
            w: finite(self.w).max(0.0),
            h: finite(self.h).max(0.0),
        }
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// `w / h`, treating degenerate input (zero, negative, NaN, infinite) as a square.
pub fn aspect_ratio(w: f64, h: f64) -> f64 {
    if is_positive(w) && is_positive(h) {
        w / h
    } else {
        1.0
    }
}
