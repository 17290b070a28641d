use std::fmt::Display;

/// The reasons the engine refuses a move or a query. These travel inside
/// `anyhow::Error`; recover them with `downcast_ref::<EngineError>()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    InvalidMove { mv: String, reason: String },
    UnknownShape { name: String },
    OutOfBounds { offset: isize, width: usize, bounds: usize },
    InvalidWidth { width: usize },
}

impl std::error::Error for EngineError {}

impl Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove { mv, reason } => write!(f, "invalid move {:?}: {}", mv, reason),
            Self::UnknownShape { name } => write!(f, "unknown shape {:?}", name),
            Self::OutOfBounds {
                offset,
                width,
                bounds,
            } => write!(
                f,
                "columns [{}, {}) exceed board of width {}",
                offset,
                offset.saturating_add(*width as isize),
                bounds
            ),
            Self::InvalidWidth { width } => write!(f, "board width must be at least 1, received {}", width),
        }
    }
}
