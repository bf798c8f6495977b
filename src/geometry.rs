//! Chord geometry of a vertical probe line crossing the circle
//!
//! The circle is inscribed in the square `[0, 2r] x [0, 2r]`, so its center
//! is at `(r, r)`. All inputs are micrometers; results keep fractional
//! micrometers until they are converted for output.

use crate::{
    render::{Line, Rect},
    types::{um_to_mm, Micrometer},
};

/// Vertical segment between the two points where the probe crosses the circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub x: Micrometer,
    pub top: f64,
    pub bottom: f64,
}

impl Chord {
    pub fn to_mm(&self, stroke_width: Micrometer) -> Line {
        Line {
            x: self.x.to_mm(),
            y1: um_to_mm(self.top),
            y2: um_to_mm(self.bottom),
            stroke_width: stroke_width.to_mm(),
        }
    }
}

/// Filled rectangle covering the chord, `width` wide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub x: Micrometer,
    pub top: f64,
    pub width: Micrometer,
    pub height: f64,
}

impl Band {
    pub fn to_mm(&self) -> Rect {
        Rect {
            x: self.x.to_mm(),
            y: um_to_mm(self.top),
            width: self.width.to_mm(),
            height: um_to_mm(self.height),
        }
    }
}

/// Half of the chord length at `x`
///
/// `x` must lie in `[0, 2 * radius]`, otherwise the result is `NaN`.
pub fn half_chord(x: Micrometer, radius: Micrometer) -> f64 {
    let r = radius.0 as i128;
    let d = (x.0 as i128 - r).abs();
    // Exact in integers, the only rounding is in `sqrt`
    (((r - d) * (r + d)) as f64).sqrt()
}

pub fn compute_chord(x: Micrometer, radius: Micrometer) -> Chord {
    let h = half_chord(x, radius);
    let r = radius.0 as f64;
    Chord {
        x,
        top: r - h,
        bottom: r + h,
    }
}

pub fn compute_band(x: Micrometer, width: Micrometer, radius: Micrometer) -> Band {
    let h = half_chord(x, radius);
    Band {
        x,
        top: radius.0 as f64 - h,
        width,
        height: 2.0 * h,
    }
}
