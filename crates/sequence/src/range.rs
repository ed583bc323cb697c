use serde::{Deserialize, Serialize};
use std::fmt;

/// Frame range of a resolved image sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRange {
    /// Template path with the placeholder written as `#` padding
    pub hashed_path: String,

    /// First frame on disk
    pub start: i64,

    /// Last frame on disk
    pub end: i64,

    /// Distance between consecutive frames
    pub step: i64,
}

impl SequenceRange {
    /// Range of a still image: one frame numbered 1
    pub fn single(path: impl Into<String>) -> Self {
        Self {
            hashed_path: path.into(),
            start: 1,
            end: 1,
            step: 1,
        }
    }

    pub fn frame_count(&self) -> i64 {
        (self.end - self.start) / self.step + 1
    }
}

impl fmt::Display for SequenceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} x{}",
            self.hashed_path, self.start, self.end, self.step
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceRange;

    #[test]
    fn frame_count_respects_step() {
        let range = SequenceRange {
            hashed_path: "a.####.exr".to_string(),
            start: 2,
            end: 10,
            step: 2,
        };
        assert_eq!(range.frame_count(), 5);
        assert_eq!(range.to_string(), "a.####.exr 2-10 x2");
        assert_eq!(SequenceRange::single("still.exr").frame_count(), 1);
    }
}
