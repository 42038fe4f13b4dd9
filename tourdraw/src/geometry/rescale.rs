use serde::{Deserialize, Serialize};

use super::limits::VIEWPORT_MAX;
use crate::error::{Result, TourError};
use crate::model::Node;

/// Drawing area the loaded coordinates are fitted into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { width: 1200.0, height: 800.0, padding: 40.0 }
    }
}

impl Viewport {
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("width", self.width), ("height", self.height), ("padding", self.padding)] {
            if !v.is_finite() {
                return Err(TourError::NonFinite(name));
            }
        }
        if self.padding < 0.0 {
            return Err(TourError::OutOfRange { param: "padding", min: 0.0, max: VIEWPORT_MAX, got: self.padding });
        }
        let min_dim = 2.0 * self.padding;
        if self.width < min_dim || self.width > VIEWPORT_MAX {
            return Err(TourError::OutOfRange { param: "width", min: min_dim, max: VIEWPORT_MAX, got: self.width });
        }
        if self.height < min_dim || self.height > VIEWPORT_MAX {
            return Err(TourError::OutOfRange { param: "height", min: min_dim, max: VIEWPORT_MAX, got: self.height });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
struct AxisMap {
    min: f64,
    span: f64,
    lo: f64,
    hi: f64,
}

impl AxisMap {
    fn fit(values: impl Iterator<Item = f64>, lo: f64, hi: f64) -> Option<AxisMap> {
        let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        if min > max {
            return None;
        }
        Some(AxisMap { min, span: max - min, lo, hi })
    }

    #[inline]
    fn apply(&self, v: f64) -> f64 {
        // Degenerate domain lands in the middle of the range.
        let t = if self.span > 0.0 { (v - self.min) / self.span } else { 0.5 };
        self.lo + t * (self.hi - self.lo)
    }
}

/// Map each axis' [min, max] independently onto [padding, dim - padding].
pub fn rescale(nodes: &mut [Node], vp: &Viewport) {
    let sx = AxisMap::fit(nodes.iter().map(|n| n.x), vp.padding, vp.width - vp.padding);
    let sy = AxisMap::fit(nodes.iter().map(|n| n.y), vp.padding, vp.height - vp.padding);
    let (Some(sx), Some(sy)) = (sx, sy) else { return };
    for n in nodes.iter_mut() {
        n.x = sx.apply(n.x);
        n.y = sy.apply(n.y);
    }
}
