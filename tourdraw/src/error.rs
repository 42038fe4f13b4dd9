use thiserror::Error;

pub type Result<T> = std::result::Result<T, TourError>;

/// Everything a tour editing operation can refuse. None of these are fatal;
/// the graph is left as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourError {
    #[error("NODE_COORD_SECTION not found")]
    MissingCoordSection,

    #[error("line {line}: {reason}")]
    TsplibLine { line: usize, reason: String },

    #[error("duplicate node id '{0}'")]
    DuplicateId(String),

    #[error("unknown node id '{0}'")]
    UnknownNode(String),

    #[error("unknown edge id {0}")]
    UnknownEdge(u32),

    #[error("edge endpoints cannot be the same node ('{0}')")]
    SelfLoop(String),

    #[error("parameter '{0}' must be finite")]
    NonFinite(&'static str),

    #[error("parameter '{param}' out of range [{min}, {max}], got {got}")]
    OutOfRange {
        param: &'static str,
        min: f64,
        max: f64,
        got: f64,
    },

    #[error("{what} limit of {limit} exceeded")]
    LimitExceeded { what: &'static str, limit: usize },

    #[error("invalid JSON document: {0}")]
    Json(String),

    #[error("editor is busy")]
    Busy,
}

impl TourError {
    /// Stable machine-readable code, used by the browser binding's result envelope.
    pub fn code(&self) -> &'static str {
        match self {
            TourError::MissingCoordSection => "missing_section",
            TourError::TsplibLine { .. } => "tsplib_line",
            TourError::DuplicateId(_) => "duplicate_id",
            TourError::UnknownNode(_) | TourError::UnknownEdge(_) => "invalid_id",
            TourError::SelfLoop(_) => "invalid_edge",
            TourError::NonFinite(_) => "non_finite",
            TourError::OutOfRange { .. } => "out_of_range",
            TourError::LimitExceeded { .. } => "limit_exceeded",
            TourError::Json(_) => "json_parse",
            TourError::Busy => "busy",
        }
    }
}

impl From<serde_json::Error> for TourError {
    fn from(e: serde_json::Error) -> Self {
        TourError::Json(e.to_string())
    }
}
