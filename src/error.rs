use crate::termite::TermiteId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("scale must be positive, got {0}")]
    NonPositiveScale(f32),
    #[error("box_size must be positive")]
    NonPositiveBoxSize,
    #[error("n_termites must be positive")]
    NoTermites,
    #[error("expected {expected} starting regions, got {got}")]
    RegionCountMismatch { expected: usize, got: usize },
    #[error("malformed config line: {0:?}")]
    MalformedLine(String),
    #[error("invalid value {value:?} for parameter {key}")]
    InvalidValue { key: String, value: String },
    #[error("missing required parameter {0}")]
    MissingParameter(&'static str),
    #[error("could not read config: {0}")]
    Unreadable(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not read video source: {0}")]
    Video(String),
    #[error("tracker initialization failed for termite {identity}: {reason}")]
    TrackerInit { identity: TermiteId, reason: String },
    #[error("no termite with identity {0}")]
    UnknownTermite(TermiteId),
    #[error("{command} is not valid while the session is {state}")]
    InvalidState {
        command: &'static str,
        state: &'static str,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
