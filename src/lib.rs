pub mod config;
pub mod data;
pub mod distance;
pub mod error;
pub mod interaction;
pub mod rect;
pub mod session;
pub mod termite;
pub mod tracker;
pub mod trail;
pub mod video;

pub use config::ExperimentConfig;
pub use distance::DistanceCalculator;
pub use error::{ConfigError, SessionError};
pub use interaction::{InteractionDetector, InteractionKind};
pub use rect::Rect;
pub use session::{
    Command, CommandSource, SessionState, StepOutcome, TrackingSession,
};
pub use termite::{Termite, TermiteId};
pub use tracker::TrackerAdapter;
pub use trail::{FrameRecord, Trail};
pub use video::VideoSource;

#[cfg(test)]
mod test_distance;
#[cfg(test)]
mod test_interaction;
#[cfg(test)]
mod test_rect;
#[cfg(test)]
mod test_trail;
