// Ingestion limits for untrusted input (TSPLIB text, JSON snapshots)

pub const MAX_NODES: usize = 200_000;
pub const MAX_EDGES: usize = 300_000;
pub const MAX_ID_LEN: usize = 256;

// Numeric bounds
pub const COORD_MIN: f64 = -1.0e12;
pub const COORD_MAX: f64 = 1.0e12;
pub const VIEWPORT_MAX: f64 = 100_000.0;
pub const PICK_TOL_MAX: f64 = 1_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn valid_id(id: &str) -> bool { !id.is_empty() && id.len() <= MAX_ID_LEN }
