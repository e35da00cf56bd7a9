//! Program record model

use super::Module;
use serde::{Deserialize, Serialize};

/// A student's full set of modules for one program of study
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    /// Student name, if known
    #[serde(default)]
    pub student: Option<String>,

    /// Program title (e.g., "MSc Health Data Science")
    #[serde(default)]
    pub program: String,

    /// Modules in the order they were recorded
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl ProgramRecord {
    /// Create an empty record for a program
    #[must_use]
    pub const fn new(program: String) -> Self {
        Self {
            student: None,
            program,
            modules: Vec::new(),
        }
    }

    /// Add a module. Modules with a code already in the record are rejected.
    ///
    /// # Returns
    /// `true` if the module was added
    pub fn add_module(&mut self, module: Module) -> bool {
        if self.get_module(&module.code).is_some() {
            return false;
        }
        self.modules.push(module);
        true
    }

    /// Remove a module by code
    pub fn remove_module(&mut self, code: &str) -> Option<Module> {
        let pos = self.modules.iter().position(|m| m.code == code)?;
        Some(self.modules.remove(pos))
    }

    /// Look up a module by code
    #[must_use]
    pub fn get_module(&self, code: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.code == code)
    }

    /// Mutable lookup of a module by code
    pub fn get_module_mut(&mut self, code: &str) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.code == code)
    }

    /// Modules that count toward the final GPA
    pub fn completed(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter().filter(|m| m.is_completed)
    }

    /// Modules still in progress
    pub fn in_progress(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter().filter(|m| !m.is_completed)
    }
}
