//! Module marks, GPA banding and degree classification
//!
//! Every function here is a pure computation over the data passed in. Nothing
//! is cached: callers that change a score or weight simply call again.

use crate::core::models::Module;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of any mark
const MAX_MARK: f64 = 100.0;

/// Lower bound of the first-class band
const FIRST_THRESHOLD: f64 = 70.0;
/// Lower bound of the upper-second band
const UPPER_SECOND_THRESHOLD: f64 = 60.0;
/// Lower bound of the lower-second band
const LOWER_SECOND_THRESHOLD: f64 = 50.0;
/// Lower bound of the pass band on the GPA scale
const PASS_THRESHOLD: f64 = 40.0;

/// Degree classification band for a percentage mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Classification {
    /// Below 50
    ThirdOrPass,
    /// 50 to below 60
    LowerSecond,
    /// 60 to below 70
    UpperSecond,
    /// 70 and above
    First,
}

impl Classification {
    /// Short, locale-independent label (e.g., `"2:1"`)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::First => "First",
            Self::UpperSecond => "2:1",
            Self::LowerSecond => "2:2",
            Self::ThirdOrPass => "Third/Pass",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "First Class"),
            Self::UpperSecond => write!(f, "Upper Second"),
            Self::LowerSecond => write!(f, "Lower Second"),
            Self::ThirdOrPass => write!(f, "Third/Pass"),
        }
    }
}

/// Restrict a mark to `[0, 100]`.
fn clamp_mark(mark: f64) -> f64 {
    mark.clamp(0.0, MAX_MARK)
}

/// Compute the current-standing mark of a module.
///
/// Ungraded assessments count as zero and each score is scaled by
/// `weight / 100`. The weights are used literally: a module whose weights
/// sum to less than 100 cannot reach 100 even with perfect scores.
///
/// # Returns
/// A mark in `[0, 100]`, or 0.0 for a module with no assessments.
#[must_use]
pub fn final_mark(module: &Module) -> f64 {
    if module.assessments.is_empty() {
        return 0.0;
    }

    let total: f64 = module
        .assessments
        .iter()
        .map(|a| a.score.or_zero() * (a.weight / MAX_MARK))
        .sum();

    clamp_mark(total)
}

/// Compute the predicted mark of a module from graded work only.
///
/// The weighted average of graded scores, renormalized by the weight graded
/// so far instead of the nominal 100.
///
/// # Returns
/// A mark in `[0, 100]`. 0.0 when nothing is graded or the graded weight is zero.
#[must_use]
pub fn predicted_mark(module: &Module) -> f64 {
    let (weighted, weight) = module
        .assessments
        .iter()
        .filter_map(|a| a.score.value().map(|score| (score, a.weight)))
        .fold((0.0, 0.0), |(sum, total_weight), (score, weight)| {
            (sum + score * weight, total_weight + weight)
        });

    if weight == 0.0 {
        return 0.0;
    }

    clamp_mark(weighted / weight)
}

/// Number of assessments that have a score
#[must_use]
pub fn completed_assessments(module: &Module) -> usize {
    module.assessments.iter().filter(|a| a.is_graded()).count()
}

/// Number of assessments in the module
#[must_use]
pub fn total_assessments(module: &Module) -> usize {
    module.assessments.len()
}

/// Fraction of assessments that have been graded, in `[0, 1]`.
///
/// A module with no assessments has progress 0.0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percentage(module: &Module) -> f64 {
    let total = total_assessments(module);
    if total == 0 {
        return 0.0;
    }
    completed_assessments(module) as f64 / total as f64
}

/// Convert a percentage mark to the 4-point GPA scale.
///
/// Each band includes its lower bound: 70 is 4.0, 69.999 is 3.0. Out-of-range
/// input falls into the nearest band and NaN maps to 0.0.
#[must_use]
pub fn gpa_point(mark: f64) -> f64 {
    if mark >= FIRST_THRESHOLD {
        4.0
    } else if mark >= UPPER_SECOND_THRESHOLD {
        3.0
    } else if mark >= LOWER_SECOND_THRESHOLD {
        2.0
    } else if mark >= PASS_THRESHOLD {
        1.0
    } else {
        0.0
    }
}

/// Compute the credit-weighted GPA across completed modules.
///
/// Only modules that are completed and carry credits take part; each
/// contributes `gpa_point(final_mark)` weighted by its credits. In-progress
/// modules are ignored entirely.
///
/// # Returns
/// The program GPA on the 4-point scale, or 0.0 when no module qualifies.
#[must_use]
pub fn program_gpa<'a, I>(modules: I) -> f64
where
    I: IntoIterator<Item = &'a Module>,
{
    let (points, credits) = modules
        .into_iter()
        .filter(|m| m.is_completed && m.credits > 0)
        .fold((0.0, 0u64), |(points, credits), m| {
            (
                points + gpa_point(final_mark(m)) * f64::from(m.credits),
                credits + u64::from(m.credits),
            )
        });

    if credits == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let credits = credits as f64;
    points / credits
}

/// Map a percentage mark (a module mark or an average) to its classification band.
#[must_use]
pub fn classification(mark: f64) -> Classification {
    if mark >= FIRST_THRESHOLD {
        Classification::First
    } else if mark >= UPPER_SECOND_THRESHOLD {
        Classification::UpperSecond
    } else if mark >= LOWER_SECOND_THRESHOLD {
        Classification::LowerSecond
    } else {
        Classification::ThirdOrPass
    }
}
