//! Assessment model

use serde::{Deserialize, Serialize};

/// Outcome of a single assessment
///
/// Serialized as an optional number: a missing or `null` score means the
/// assessment has not been graded yet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Score {
    /// Graded, holding the achieved percentage (0-100)
    Graded(f64),
    /// Not graded yet
    #[default]
    Ungraded,
}

impl Score {
    /// Whether a mark has been recorded
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        matches!(self, Self::Graded(_))
    }

    /// The recorded mark, if any
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Graded(score) => Some(*score),
            Self::Ungraded => None,
        }
    }

    /// The recorded mark, treating an ungraded assessment as zero
    #[must_use]
    pub const fn or_zero(&self) -> f64 {
        match self {
            Self::Graded(score) => *score,
            Self::Ungraded => 0.0,
        }
    }
}

impl From<Option<f64>> for Score {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Ungraded, Self::Graded)
    }
}

impl From<Score> for Option<f64> {
    fn from(score: Score) -> Self {
        score.value()
    }
}

/// One piece of coursework within a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Assessment name (e.g., "Final Exam")
    #[serde(default)]
    pub name: String,

    /// Contribution to the module mark, as a percentage (0-100)
    pub weight: f64,

    /// Achieved score
    #[serde(default)]
    pub score: Score,
}

impl Assessment {
    /// Create a graded assessment
    #[must_use]
    pub fn graded(name: impl Into<String>, weight: f64, score: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            score: Score::Graded(score),
        }
    }

    /// Create an assessment that has not been graded yet
    #[must_use]
    pub fn ungraded(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            score: Score::Ungraded,
        }
    }

    /// Whether the assessment has a score
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.score.is_graded()
    }

    /// Record a score, replacing any previous one
    pub fn set_score(&mut self, score: f64) {
        self.score = Score::Graded(score);
    }

    /// Clear the score, marking the assessment as not graded
    pub fn clear_score(&mut self) {
        self.score = Score::Ungraded;
    }
}
