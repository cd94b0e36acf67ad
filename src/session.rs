use crate::config::ExperimentConfig;
use crate::data;
use crate::distance::DistanceCalculator;
use crate::error::{ConfigError, SessionError};
use crate::interaction::{InteractionDetector, InteractionKind};
use crate::rect::Rect;
use crate::termite::{Termite, TermiteId};
use crate::tracker::TrackerAdapter;
use crate::trail::FrameRecord;
use crate::video::VideoSource;
use std::path::Path;
use tracing::{debug, info, warn};

/*------------------------------------------------------------------------------
Session state and commands
------------------------------------------------------------------------------*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    Locating,
    Running,
    Paused,
    Terminated,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Locating => "locating",
            SessionState::Running => "running",
            SessionState::Paused => "paused",
            SessionState::Terminated => "terminated",
        }
    }
}

/// Operator commands, observed only at the per-frame decision point. A quit
/// never interrupts an in-progress tracker update.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Pause,
    Resume,
    Restart {
        identity: TermiteId,
        region: Rect<f32>,
    },
    RestartAll {
        regions: Vec<Rect<f32>>,
    },
    Rewind {
        frames: usize,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Restart { .. } => "restart",
            Command::RestartAll { .. } => "restart_all",
            Command::Rewind { .. } => "rewind",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// One frame fully processed. `lost` names every termite currently
    /// flagged as lost so the operator display can call them out.
    Advanced {
        frame_index: usize,
        lost: Vec<TermiteId>,
    },
    /// The video is exhausted; the session is terminated.
    Finished,
}

/// Operator input boundary. `poll` is consulted at the decision point after
/// each frame and must not block; `wait` is the suspension point used while
/// paused and blocks until the operator acts.
pub trait CommandSource {
    fn poll(&mut self) -> Option<Command>;
    fn wait(&mut self) -> Command;
}

/*------------------------------------------------------------------------------
TrackingSession
------------------------------------------------------------------------------*/

/// Orchestrator for one experiment: owns the termites, drives the per-frame
/// loop and dispatches recovery commands.
///
/// Lost-tracker policy: when a tracker reports its target missing, the
/// termite keeps its last known region, is flagged lost and reported in the
/// step outcome, and the session keeps running. Recovery is always an
/// explicit operator restart; the session never invents data.
pub struct TrackingSession<V, A>
where
    V: VideoSource,
    A: TrackerAdapter<V::Frame>,
{
    video: V,
    adapter: A,
    detector: InteractionDetector,
    distances: DistanceCalculator,
    n_termites: usize,
    box_size: f32,
    termites: Vec<Termite<A::Handle>>,
    state: SessionState,
    current_frame_index: usize,
    // frame 0 is consumed at start() for tracker init and then processed by
    // the first step()
    pending_frame: Option<V::Frame>,
    // most recently processed frame, kept for restarts
    last_frame: Option<V::Frame>,
}

impl<V, A> TrackingSession<V, A>
where
    V: VideoSource,
    A: TrackerAdapter<V::Frame>,
{
    pub fn new(
        video: V,
        adapter: A,
        config: &ExperimentConfig,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            video,
            adapter,
            detector: InteractionDetector::new(InteractionKind::BoxOverlap),
            distances: DistanceCalculator::new(config.scale)?,
            n_termites: config.n_termites,
            box_size: config.box_size as f32,
            termites: Vec::new(),
            state: SessionState::Locating,
            current_frame_index: 0,
            pending_frame: None,
            last_frame: None,
        })
    }

    /// Swap the interaction predicate, e.g. proximity-based encounters
    /// instead of bounding-box collisions. Only valid before `start`.
    pub fn with_interaction_kind(mut self, kind: InteractionKind) -> Self {
        self.detector = InteractionDetector::new(kind);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    pub fn termites(&self) -> &[Termite<A::Handle>] {
        &self.termites
    }

    pub fn termite(
        &self,
        identity: TermiteId,
    ) -> Result<&Termite<A::Handle>, SessionError> {
        self.termites
            .iter()
            .find(|t| t.identity() == identity)
            .ok_or(SessionError::UnknownTermite(identity))
    }

    /// Holds after every completed step; a violation anywhere else than
    /// inside a recovery operation is a programming error.
    pub fn trails_synchronized(&self) -> bool {
        let mut lens = self.termites.iter().map(|t| t.trail().len());
        match lens.next() {
            Some(first) => lens.all(|len| len == first),
            None => true,
        }
    }

    /// End the locate phase: create one termite per operator-selected point,
    /// initialize every tracker on the first frame and transition to running.
    /// All failures here are fatal, nothing is retried mid-session.
    pub fn start(
        &mut self,
        starting_points: &[(f32, f32)],
    ) -> Result<(), SessionError> {
        if self.state != SessionState::Locating {
            return Err(SessionError::InvalidState {
                command: "start",
                state: self.state.name(),
            });
        }
        if starting_points.len() != self.n_termites {
            return Err(ConfigError::RegionCountMismatch {
                expected: self.n_termites,
                got: starting_points.len(),
            }
            .into());
        }

        let frame = self
            .video
            .next_frame()
            .ok_or_else(|| SessionError::Video("no first frame".to_string()))?;

        for (number, &(x, y)) in starting_points.iter().enumerate() {
            let identity = number + 1;
            let region = Rect::square(x, y, self.box_size);
            let handle = self.adapter.init(&frame, &region)?;
            let mut termite = Termite::new(identity, region);
            termite.replace_tracker(handle);
            self.termites.push(termite);
        }

        self.current_frame_index = 0;
        self.pending_frame = Some(frame);
        self.state = SessionState::Running;
        info!(termites = self.termites.len(), "session started");
        Ok(())
    }

    /// Process exactly one frame: advance every tracker, recompute the
    /// pairwise interaction sets and distances, append one record per
    /// termite. The trail-length invariant holds again when this returns.
    pub fn step(&mut self) -> Result<StepOutcome, SessionError> {
        match self.state {
            SessionState::Running => {}
            SessionState::Terminated => return Ok(StepOutcome::Finished),
            _ => {
                return Err(SessionError::InvalidState {
                    command: "step",
                    state: self.state.name(),
                })
            }
        }

        let frame = match self.pending_frame.take() {
            Some(frame) => frame,
            None => match self.video.next_frame() {
                Some(frame) => {
                    self.current_frame_index += 1;
                    frame
                }
                None => {
                    info!(
                        frames = self.current_frame_index + 1,
                        "video exhausted"
                    );
                    self.state = SessionState::Terminated;
                    return Ok(StepOutcome::Finished);
                }
            },
        };

        let mut lost = Vec::new();
        for termite in self.termites.iter_mut() {
            let updated = match termite.tracker_mut() {
                Some(handle) => Some(self.adapter.update(handle, &frame)),
                None => None,
            };
            match updated {
                Some((true, region)) => {
                    termite.set_region(region);
                    termite.mark_as_tracked();
                }
                Some((false, _)) => {
                    if !termite.is_lost() {
                        warn!(
                            identity = termite.identity(),
                            frame_index = self.current_frame_index,
                            "tracker lost its target, keeping last region"
                        );
                    }
                    termite.mark_as_lost();
                    lost.push(termite.identity());
                }
                // no handle at all (a rewind reinit failed); region stays
                None => lost.push(termite.identity()),
            }
        }

        self.record_frame();
        debug_assert!(self.trails_synchronized());

        debug!(
            frame_index = self.current_frame_index,
            lost = lost.len(),
            "frame processed"
        );
        self.last_frame = Some(frame);
        Ok(StepOutcome::Advanced {
            frame_index: self.current_frame_index,
            lost,
        })
    }

    /// Recompute both pairwise relations from the current regions and append
    /// one synchronized record per termite.
    fn record_frame(&mut self) {
        let regions = self.current_regions();
        let interactions = self.detector.detect(&regions);
        let distances = self.distances.pairwise(&regions);
        let frame_index = self.current_frame_index;

        for ((termite, interacting), distances) in self
            .termites
            .iter_mut()
            .zip(interactions.into_iter())
            .zip(distances.into_iter())
        {
            termite.set_interacting_with(interacting.clone());
            termite.set_distances(distances.clone());
            let x = termite.region().x();
            let y = termite.region().y();
            termite.trail_mut().push(FrameRecord {
                frame_index,
                x,
                y,
                interacting_with: interacting,
                distances,
            });
        }
    }

    /// Dispatch an operator command at the per-frame decision point.
    pub fn apply(&mut self, command: Command) -> Result<(), SessionError> {
        match self.state {
            SessionState::Running | SessionState::Paused => {}
            _ => {
                return Err(SessionError::InvalidState {
                    command: command.name(),
                    state: self.state.name(),
                })
            }
        }

        match command {
            Command::Quit => {
                info!(
                    frame_index = self.current_frame_index,
                    "session quit by operator"
                );
                self.state = SessionState::Terminated;
                Ok(())
            }
            Command::Pause => {
                if self.state != SessionState::Running {
                    return Err(SessionError::InvalidState {
                        command: "pause",
                        state: self.state.name(),
                    });
                }
                self.state = SessionState::Paused;
                Ok(())
            }
            Command::Resume => {
                if self.state != SessionState::Paused {
                    return Err(SessionError::InvalidState {
                        command: "resume",
                        state: self.state.name(),
                    });
                }
                self.state = SessionState::Running;
                Ok(())
            }
            Command::Restart { identity, region } => {
                self.restart_one(identity, region)
            }
            Command::RestartAll { regions } => self.restart_all(regions),
            Command::Rewind { frames } => self.rewind(frames),
        }
    }

    /// Reinitialize one tracker at the current frame with an
    /// operator-supplied region, overwriting (not appending) the termite's
    /// most recent record. Fails without side effects when the adapter
    /// cannot initialize, so the operator can simply select again.
    fn restart_one(
        &mut self,
        identity: TermiteId,
        region: Rect<f32>,
    ) -> Result<(), SessionError> {
        let index = self
            .termites
            .iter()
            .position(|t| t.identity() == identity)
            .ok_or(SessionError::UnknownTermite(identity))?;
        // no frame processed yet, nothing to reinitialize against
        let frame = self.last_frame.as_ref().ok_or(
            SessionError::InvalidState {
                command: "restart",
                state: self.state.name(),
            },
        )?;

        let handle = self.adapter.init(frame, &region).map_err(|e| {
            SessionError::TrackerInit {
                identity,
                reason: e.to_string(),
            }
        })?;

        let termite = &mut self.termites[index];
        termite.replace_tracker(handle);
        termite.set_region(region);
        termite.mark_as_tracked();
        info!(identity, "tracker restarted");

        self.overwrite_records(&[index]);
        debug_assert!(self.trails_synchronized());
        Ok(())
    }

    /// Restart every tracker at once. Individual adapter failures mark the
    /// termite lost and move on, mirroring the rewind policy; the remaining
    /// termites still get their corrected regions.
    fn restart_all(
        &mut self,
        regions: Vec<Rect<f32>>,
    ) -> Result<(), SessionError> {
        if regions.len() != self.termites.len() {
            return Err(ConfigError::RegionCountMismatch {
                expected: self.termites.len(),
                got: regions.len(),
            }
            .into());
        }
        let frame = self.last_frame.as_ref().ok_or(
            SessionError::InvalidState {
                command: "restart_all",
                state: self.state.name(),
            },
        )?;

        let mut restarted = Vec::with_capacity(self.termites.len());
        for (termite, region) in self.termites.iter_mut().zip(regions) {
            match self.adapter.init(frame, &region) {
                Ok(handle) => {
                    termite.replace_tracker(handle);
                    termite.set_region(region);
                    termite.mark_as_tracked();
                    restarted.push(true);
                }
                Err(e) => {
                    warn!(
                        identity = termite.identity(),
                        error = %e,
                        "tracker restart failed, termite stays lost"
                    );
                    termite.drop_tracker();
                    termite.mark_as_lost();
                    restarted.push(false);
                }
            }
        }

        let indices: Vec<usize> = restarted
            .iter()
            .enumerate()
            .filter_map(|(i, ok)| ok.then_some(i))
            .collect();
        self.overwrite_records(&indices);
        info!(restarted = indices.len(), "trackers restarted");
        debug_assert!(self.trails_synchronized());
        Ok(())
    }

    /// Recompute both pairwise relations from the (corrected) current
    /// regions and overwrite the last record of the affected termites only.
    /// Trail lengths never change here.
    fn overwrite_records(&mut self, indices: &[usize]) {
        let regions = self.current_regions();
        let interactions = self.detector.detect(&regions);
        let distances = self.distances.pairwise(&regions);
        let frame_index = self.current_frame_index;

        for &i in indices {
            let termite = &mut self.termites[i];
            termite.set_interacting_with(interactions[i].clone());
            termite.set_distances(distances[i].clone());
            let x = termite.region().x();
            let y = termite.region().y();
            termite.trail_mut().overwrite_last(FrameRecord {
                frame_index,
                x,
                y,
                interacting_with: interactions[i].clone(),
                distances: distances[i].clone(),
            });
        }
    }

    /// Session-wide rewind: truncate every trail to the same earlier length,
    /// seek the video and reinitialize every tracker from its last retained
    /// record. Clamped so the first processed frame always survives. The
    /// truncation commits even when a tracker fails to reinitialize; such
    /// termites are marked lost and corrected later via restart.
    fn rewind(&mut self, frames: usize) -> Result<(), SessionError> {
        let len = self
            .termites
            .first()
            .map(|t| t.trail().len())
            .unwrap_or(0);
        if len == 0 {
            warn!("rewind before any processed frame, nothing to do");
            return Ok(());
        }
        let new_len = len.saturating_sub(frames).max(1);
        let rewound_index = new_len - 1;

        for termite in self.termites.iter_mut() {
            termite.trail_mut().truncate(new_len);
        }

        self.video.seek(rewound_index)?;
        let frame = self.video.next_frame().ok_or_else(|| {
            SessionError::Video(format!(
                "no frame at rewound index {rewound_index}"
            ))
        })?;
        self.current_frame_index = rewound_index;
        self.pending_frame = None;

        for termite in self.termites.iter_mut() {
            // new_len >= 1, the record is there
            let Some(record) = termite.trail().last() else {
                continue;
            };
            let region = Rect::square(record.x, record.y, self.box_size);
            let interacting = record.interacting_with.clone();
            let distances = record.distances.clone();
            match self.adapter.init(&frame, &region) {
                Ok(handle) => {
                    termite.replace_tracker(handle);
                    termite.mark_as_tracked();
                }
                Err(e) => {
                    warn!(
                        identity = termite.identity(),
                        error = %e,
                        "tracker reinit failed after rewind, termite lost"
                    );
                    termite.drop_tracker();
                    termite.mark_as_lost();
                }
            }
            termite.set_region(region);
            termite.set_interacting_with(interacting);
            termite.set_distances(distances);
        }

        self.last_frame = Some(frame);
        info!(
            frames,
            frame_index = self.current_frame_index,
            "session rewound"
        );
        debug_assert!(self.trails_synchronized());
        Ok(())
    }

    /// Drive the session to termination: step, then drain operator commands
    /// at the decision point, blocking on the command source while paused.
    /// Trails are flushed to `output_dir` exactly once on any exit path,
    /// including quit and errors.
    pub fn run<C, P>(
        &mut self,
        commands: &mut C,
        output_dir: P,
    ) -> Result<(), SessionError>
    where
        C: CommandSource,
        P: AsRef<Path>,
    {
        let outcome = self.run_loop(commands);
        let flushed = data::write_trails(&self.termites, output_dir);
        outcome.and(flushed)
    }

    fn run_loop<C: CommandSource>(
        &mut self,
        commands: &mut C,
    ) -> Result<(), SessionError> {
        loop {
            match self.state {
                SessionState::Terminated => return Ok(()),
                SessionState::Paused => {
                    let command = commands.wait();
                    self.apply(command)?;
                    continue;
                }
                SessionState::Running => {}
                SessionState::Locating => {
                    return Err(SessionError::InvalidState {
                        command: "run",
                        state: "locating",
                    })
                }
            }

            if let StepOutcome::Finished = self.step()? {
                return Ok(());
            }

            while self.state != SessionState::Terminated {
                match commands.poll() {
                    Some(command) => self.apply(command)?,
                    None => break,
                }
            }
        }
    }

    fn current_regions(&self) -> Vec<(TermiteId, Rect<f32>)> {
        self.termites
            .iter()
            .map(|t| (t.identity(), t.region().clone()))
            .collect()
    }
}
