//! Measurement history log.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use fit_measure::Measurements;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// One saved measurement with its capture timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Capture timestamp in seconds.
    pub timestamp: f64,

    /// The measurements taken at that time.
    pub measurements: Measurements,
}

/// An append-only, capacity-bounded log of measurement records.
///
/// Records are kept in append order; when the log is full the oldest
/// record is dropped. There is no query interface beyond iteration and
/// [`latest`](Self::latest) — history analysis belongs to consumers.
///
/// # Example
///
/// ```
/// use fit_measure::Measurements;
/// use fit_session::MeasurementLog;
///
/// let mut log = MeasurementLog::new(100);
/// log.record(0.033, Measurements::default());
/// log.record(0.066, Measurements::default());
///
/// assert_eq!(log.len(), 2);
/// assert!((log.latest().unwrap().timestamp - 0.066).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementLog {
    capacity: usize,
    records: VecDeque<MeasurementRecord>,
}

impl MeasurementLog {
    /// Creates an empty log holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            records: VecDeque::new(),
        }
    }

    /// Returns the maximum number of records kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of records in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the log holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record, dropping the oldest when at capacity.
    pub fn record(&mut self, timestamp: f64, measurements: Measurements) {
        if self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(MeasurementRecord {
            timestamp,
            measurements,
        });
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn latest(&self) -> Option<&MeasurementRecord> {
        self.records.back()
    }

    /// Iterates the records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MeasurementRecord> {
        self.records.iter()
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Serializes the log to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SessionError::from)
    }

    /// Deserializes a log from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SessionError::from)
    }

    /// Writes the log to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or IO failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?).map_err(SessionError::from)
    }

    /// Reads a log from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error on IO or deserialization failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl Default for MeasurementLog {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Measurements {
        Measurements {
            shoulders: 26.5,
            chest: 31.75,
            waist: 19.05,
            hips: 24.3,
            height: 189.2,
        }
    }

    #[test]
    fn log_records_in_order() {
        let mut log = MeasurementLog::new(10);
        assert!(log.is_empty());

        log.record(0.0, sample());
        log.record(0.1, sample());
        assert_eq!(log.len(), 2);

        let timestamps: Vec<f64> = log.iter().map(|r| r.timestamp).collect();
        assert!(timestamps[0] < timestamps[1]);
        assert!((log.latest().unwrap().timestamp - 0.1).abs() < 1e-12);
    }

    #[test]
    fn log_drops_oldest_at_capacity() {
        let mut log = MeasurementLog::new(2);
        log.record(0.0, sample());
        log.record(0.1, sample());
        log.record(0.2, sample());

        assert_eq!(log.len(), 2);
        let oldest = log.iter().next().unwrap();
        assert!((oldest.timestamp - 0.1).abs() < 1e-12);
    }

    #[test]
    fn log_capacity_floor_is_one() {
        let mut log = MeasurementLog::new(0);
        assert_eq!(log.capacity(), 1);
        log.record(0.0, sample());
        log.record(0.1, sample());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn log_json_roundtrip() {
        let mut log = MeasurementLog::new(8);
        log.record(1.5, sample());

        let json = log.to_json().unwrap();
        let parsed = MeasurementLog::from_json(&json).unwrap();
        assert_eq!(parsed, log);
    }

    #[test]
    fn log_save_and_load() {
        let mut log = MeasurementLog::new(8);
        log.record(2.0, sample());

        let path = std::env::temp_dir().join("fit_session_log_test.json");
        log.save(&path).unwrap();
        let loaded = MeasurementLog::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, log);
    }

    #[test]
    fn log_load_missing_file_is_io_error() {
        let err = MeasurementLog::load("/nonexistent/history.json").unwrap_err();
        assert!(matches!(err, SessionError::Io(_)));
    }
}
