//! Named anatomical landmarks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An anatomical landmark in the COCO 17-point topology.
///
/// Identity is by name. The serialized form uses the camelCase wire names
/// that pose detectors emit (`"leftShoulder"`, `"rightHip"`, ...), so the
/// enum can key a JSON object directly.
///
/// # Example
///
/// ```
/// use pose_types::Landmark;
///
/// assert_eq!(Landmark::LeftShoulder.name(), "leftShoulder");
/// assert_eq!(Landmark::from_name("rightHip"), Some(Landmark::RightHip));
/// assert_eq!(Landmark::from_name("tail"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Landmark {
    /// Tip of the nose.
    Nose,
    /// Left eye.
    LeftEye,
    /// Right eye.
    RightEye,
    /// Left ear.
    LeftEar,
    /// Right ear.
    RightEar,
    /// Left shoulder.
    LeftShoulder,
    /// Right shoulder.
    RightShoulder,
    /// Left elbow.
    LeftElbow,
    /// Right elbow.
    RightElbow,
    /// Left wrist.
    LeftWrist,
    /// Right wrist.
    RightWrist,
    /// Left hip.
    LeftHip,
    /// Right hip.
    RightHip,
    /// Left knee.
    LeftKnee,
    /// Right knee.
    RightKnee,
    /// Left ankle.
    LeftAnkle,
    /// Right ankle.
    RightAnkle,
}

impl Landmark {
    /// Number of landmarks in the topology.
    pub const COUNT: usize = 17;

    /// All landmarks, in topology order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Returns the detector wire name for this landmark.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "leftEye",
            Self::RightEye => "rightEye",
            Self::LeftEar => "leftEar",
            Self::RightEar => "rightEar",
            Self::LeftShoulder => "leftShoulder",
            Self::RightShoulder => "rightShoulder",
            Self::LeftElbow => "leftElbow",
            Self::RightElbow => "rightElbow",
            Self::LeftWrist => "leftWrist",
            Self::RightWrist => "rightWrist",
            Self::LeftHip => "leftHip",
            Self::RightHip => "rightHip",
            Self::LeftKnee => "leftKnee",
            Self::RightKnee => "rightKnee",
            Self::LeftAnkle => "leftAnkle",
            Self::RightAnkle => "rightAnkle",
        }
    }

    /// Looks up a landmark by its detector wire name.
    ///
    /// Returns `None` for names outside the topology.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.name() == name)
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn landmark_count() {
        assert_eq!(Landmark::ALL.len(), Landmark::COUNT);
    }

    #[test]
    fn landmark_name_roundtrip() {
        for landmark in Landmark::ALL {
            assert_eq!(Landmark::from_name(landmark.name()), Some(landmark));
        }
    }

    #[test]
    fn landmark_from_unknown_name() {
        assert_eq!(Landmark::from_name("chestBaseline"), None);
        assert_eq!(Landmark::from_name(""), None);
    }

    #[test]
    fn landmark_display_matches_name() {
        assert_eq!(Landmark::LeftAnkle.to_string(), "leftAnkle");
    }

    #[test]
    fn landmark_serde_wire_names() {
        let json = serde_json::to_string(&Landmark::RightShoulder).unwrap();
        assert_eq!(json, "\"rightShoulder\"");

        let parsed: Landmark = serde_json::from_str("\"leftHip\"").unwrap();
        assert_eq!(parsed, Landmark::LeftHip);
    }
}
