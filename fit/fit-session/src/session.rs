//! The per-frame fitting session.

use fit_measure::{estimate_with_scale, MeasureError, Measurements, PixelScale, REQUIRED_LANDMARKS};
use pose_types::{PoseError, PoseFrame};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::history::MeasurementLog;
use crate::source::PoseSource;

/// Configuration for a fitting session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Minimum confidence a required landmark must carry.
    ///
    /// Landmarks without a score always pass. The default matches the
    /// detector-side threshold the capture layer typically uses.
    pub min_score: f64,

    /// Pixel-to-centimeter scale for the measurement pass.
    pub scale: PixelScale,

    /// Capacity of the measurement history log.
    pub history_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_score: 0.5,
            scale: PixelScale::assumed(),
            history_capacity: 256,
        }
    }
}

/// Frame counters for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Frames pulled from the source.
    pub frames_seen: u64,

    /// Frames that produced a measurement.
    pub measured: u64,

    /// Frames skipped because a required landmark was below the
    /// confidence threshold.
    pub skipped_low_confidence: u64,

    /// Frames skipped because a required landmark was absent.
    pub skipped_incomplete: u64,

    /// Frames skipped because a required landmark was non-finite.
    pub skipped_invalid: u64,
}

/// Drives the per-frame measure-and-record loop.
///
/// A session pulls frames from a [`PoseSource`], thresholds required
/// landmark confidence, runs the measurement pass, and records successful
/// results in its history log. Frames that cannot be measured are skipped
/// and counted — a per-frame failure is never fatal to the session.
///
/// # Example
///
/// ```
/// use fit_session::{FittingSession, ReplaySource, SessionConfig};
/// use pose_types::{Keypoint, KeypointSet, Landmark, PoseFrame};
///
/// let keypoints: KeypointSet = [
///     (Landmark::LeftShoulder, Keypoint::new(0.0, 0.0)),
///     (Landmark::RightShoulder, Keypoint::new(100.0, 0.0)),
///     (Landmark::LeftHip, Keypoint::new(10.0, 200.0)),
///     (Landmark::RightHip, Keypoint::new(90.0, 200.0)),
///     (Landmark::Nose, Keypoint::new(50.0, -50.0)),
///     (Landmark::LeftAnkle, Keypoint::new(50.0, 600.0)),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut session = FittingSession::new(SessionConfig::default());
/// let mut source = ReplaySource::new(vec![PoseFrame::new(0, 0.0, keypoints)]);
///
/// let stats = session.run(&mut source)?;
/// assert_eq!(stats.measured, 1);
/// assert_eq!(session.history().len(), 1);
/// # Ok::<(), fit_session::SessionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FittingSession {
    config: SessionConfig,
    history: MeasurementLog,
    stats: SessionStats,
}

impl FittingSession {
    /// Creates a session with the given configuration.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            history: MeasurementLog::new(config.history_capacity),
            stats: SessionStats::default(),
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the measurement history.
    #[must_use]
    pub const fn history(&self) -> &MeasurementLog {
        &self.history
    }

    /// Returns the frame counters.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Returns the most recent measurement, if any frame produced one.
    #[must_use]
    pub fn latest(&self) -> Option<Measurements> {
        self.history.latest().map(|r| r.measurements)
    }

    /// Processes one frame, recording the measurement on success.
    ///
    /// Returns `None` when the frame was skipped: a required landmark was
    /// below the confidence threshold, absent, or non-finite. The reason
    /// is counted in [`stats`](Self::stats) and logged at debug level.
    pub fn process_frame(&mut self, frame: &PoseFrame) -> Option<Measurements> {
        self.stats.frames_seen += 1;

        for landmark in REQUIRED_LANDMARKS {
            if let Some(kp) = frame.keypoints.get(landmark) {
                if !kp.is_visible(self.config.min_score) {
                    self.stats.skipped_low_confidence += 1;
                    debug!(frame = frame.id, %landmark, "skipping low-confidence frame");
                    return None;
                }
            }
        }

        match estimate_with_scale(&frame.keypoints, self.config.scale) {
            Ok(measurements) => {
                self.history.record(frame.timestamp, measurements);
                self.stats.measured += 1;
                Some(measurements)
            }
            Err(MeasureError::Pose(PoseError::MissingLandmark { landmark })) => {
                self.stats.skipped_incomplete += 1;
                debug!(frame = frame.id, %landmark, "skipping incomplete frame");
                None
            }
            Err(MeasureError::Pose(PoseError::NonFiniteKeypoint { landmark })) => {
                self.stats.skipped_invalid += 1;
                warn!(frame = frame.id, %landmark, "skipping frame with non-finite keypoint");
                None
            }
            Err(err) => {
                // The scale was validated at construction; nothing else can
                // fail here, but a skipped frame beats a poisoned session.
                self.stats.skipped_invalid += 1;
                warn!(frame = frame.id, %err, "skipping unmeasurable frame");
                None
            }
        }
    }

    /// Drains a source, processing every frame it yields.
    ///
    /// # Errors
    ///
    /// Propagates source failures; per-frame measurement failures are
    /// skipped, not errors.
    pub fn run<S: PoseSource>(&mut self, source: &mut S) -> Result<SessionStats> {
        while let Some(frame) = source.next_frame()? {
            self.process_frame(&frame);
        }
        Ok(self.stats)
    }
}

impl Default for FittingSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
