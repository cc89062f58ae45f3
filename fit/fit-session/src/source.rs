//! Pull-based pose sources.

use std::collections::VecDeque;

use pose_types::PoseFrame;

use crate::error::Result;

/// A pull-based supplier of detected poses.
///
/// The pose detector itself is an external collaborator; a source adapts
/// whatever it produces into per-frame [`PoseFrame`] values. `Ok(None)`
/// means the stream is exhausted. Cancellation is the caller's concern:
/// a consumer simply stops pulling, and no call can be left in flight.
pub trait PoseSource {
    /// Pulls the next detected pose, or `None` when exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Source`](crate::SessionError::Source) when
    /// the underlying supplier fails.
    fn next_frame(&mut self) -> Result<Option<PoseFrame>>;
}

/// A source that replays pre-recorded frames in order.
///
/// Useful for offline runs and tests: feed it the frames a live detector
/// produced and drive a session against them deterministically.
///
/// # Example
///
/// ```
/// use fit_session::{PoseSource, ReplaySource};
/// use pose_types::{KeypointSet, PoseFrame};
///
/// let mut source = ReplaySource::new(vec![
///     PoseFrame::new(0, 0.0, KeypointSet::new()),
///     PoseFrame::new(1, 0.033, KeypointSet::new()),
/// ]);
///
/// assert_eq!(source.next_frame()?.unwrap().id, 0);
/// assert_eq!(source.next_frame()?.unwrap().id, 1);
/// assert!(source.next_frame()?.is_none());
/// # Ok::<(), fit_session::SessionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    frames: VecDeque<PoseFrame>,
}

impl ReplaySource {
    /// Creates a source over recorded frames.
    #[must_use]
    pub fn new(frames: impl Into<VecDeque<PoseFrame>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// Returns the number of frames left to replay.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl PoseSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<PoseFrame>> {
        Ok(self.frames.pop_front())
    }
}
