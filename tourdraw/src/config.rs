use serde::{Deserialize, Serialize};

use crate::algorithms::tour_check;
use crate::error::{Result, TourError};
use crate::geometry::limits::PICK_TOL_MAX;
use crate::geometry::rescale::Viewport;
use crate::Graph;

/// Which shape the drawn edges must have before a cost is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourMode {
    #[default]
    Cycle,
    Path,
    /// Always show the running cost, whatever the edges look like.
    Free,
}

impl TourMode {
    pub fn accepts(&self, g: &Graph) -> bool {
        match self {
            TourMode::Cycle => tour_check::is_hamiltonian_cycle(g),
            TourMode::Path => tour_check::is_hamiltonian_path(g),
            TourMode::Free => true,
        }
    }

    pub fn parse(s: &str) -> Option<TourMode> {
        match s {
            "cycle" => Some(TourMode::Cycle),
            "path" => Some(TourMode::Path),
            "free" => Some(TourMode::Free),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub mode: TourMode,
    pub viewport: Viewport,
    /// Fit loaded coordinates into `viewport`.
    pub rescale_on_load: bool,
    /// Hit radius for `click_at`, in viewport units.
    pub pick_tolerance: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            mode: TourMode::Cycle,
            viewport: Viewport::default(),
            rescale_on_load: true,
            pick_tolerance: 7.0,
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<()> {
        self.viewport.validate()?;
        if !self.pick_tolerance.is_finite() {
            return Err(TourError::NonFinite("pick_tolerance"));
        }
        if self.pick_tolerance < 0.0 || self.pick_tolerance > PICK_TOL_MAX {
            return Err(TourError::OutOfRange {
                param: "pick_tolerance",
                min: 0.0,
                max: PICK_TOL_MAX,
                got: self.pick_tolerance,
            });
        }
        Ok(())
    }

    /// Missing fields fall back to their defaults.
    pub fn from_json_value(v: serde_json::Value) -> Result<Self> {
        let cfg: EditorConfig = serde_json::from_value(v)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
