//! Module model

use super::Assessment;
use serde::{Deserialize, Serialize};

/// Represents an academic module (course unit) in a student's program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Module name (e.g., "Epidemiology for Health Data Science")
    pub name: String,

    /// Module code (e.g., "HDAT0003")
    pub code: String,

    /// Credit weight of the module in the program GPA
    pub credits: u32,

    /// Whether the module counts toward the final GPA
    #[serde(rename = "completed", default)]
    pub is_completed: bool,

    /// Weighted coursework making up the module mark
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

impl Module {
    /// Create a new in-progress module with no assessments
    ///
    /// # Arguments
    /// * `name` - Full module name
    /// * `code` - Module code
    /// * `credits` - Credit weight
    #[must_use]
    pub const fn new(name: String, code: String, credits: u32) -> Self {
        Self {
            name,
            code,
            credits,
            is_completed: false,
            assessments: Vec::new(),
        }
    }

    /// Builder-style setter for the completion flag
    #[must_use]
    pub const fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Builder-style helper appending an assessment
    #[must_use]
    pub fn with_assessment(mut self, assessment: Assessment) -> Self {
        self.assessments.push(assessment);
        self
    }

    /// Add an assessment
    pub fn add_assessment(&mut self, assessment: Assessment) {
        self.assessments.push(assessment);
    }

    /// Remove the first assessment with the given name
    ///
    /// # Returns
    /// The removed assessment, or `None` if no assessment has that name
    pub fn remove_assessment(&mut self, name: &str) -> Option<Assessment> {
        let pos = self.assessments.iter().position(|a| a.name == name)?;
        Some(self.assessments.remove(pos))
    }

    /// Look up an assessment by name
    #[must_use]
    pub fn get_assessment(&self, name: &str) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.name == name)
    }

    /// Mutable lookup of an assessment by name
    pub fn get_assessment_mut(&mut self, name: &str) -> Option<&mut Assessment> {
        self.assessments.iter_mut().find(|a| a.name == name)
    }

    /// Sum of all assessment weights (not required to be 100)
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.assessments.iter().map(|a| a.weight).sum()
    }
}
