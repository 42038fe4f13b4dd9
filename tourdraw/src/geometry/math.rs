#[inline]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Squared distance from (px,py) to segment (x1,y1)-(x2,y2) and the clamped
/// parameter of the closest point along it.
pub fn seg_distance_sq(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64) {
    let vx = x2 - x1; let vy = y2 - y1;
    let wx = px - x1; let wy = py - y1;
    let vv = vx*vx + vy*vy;
    let t = if vv > 0.0 { ((wx*vx + wy*vy) / vv).clamp(0.0, 1.0) } else { 0.0 };
    let projx = x1 + t * vx; let projy = y1 + t * vy;
    let dx = px - projx; let dy = py - projy;
    (dx*dx + dy*dy, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pythagorean_distance() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn segment_projection_clamps() {
        let (d2, t) = seg_distance_sq(-5.0, 0.0, 0.0, 0.0, 10.0, 0.0);
        assert_eq!(t, 0.0);
        assert_eq!(d2, 25.0);
        let (d2, t) = seg_distance_sq(5.0, 2.0, 0.0, 0.0, 10.0, 0.0);
        assert_eq!(t, 0.5);
        assert_eq!(d2, 4.0);
    }
}
