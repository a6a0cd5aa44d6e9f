//! Read-only host project snapshot
//!
//! The build host constructs these models from its own project state and
//! hands them to the extension store, whose conventions read from them at
//! resolution time. The store never mutates the snapshot.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the source set conventions pick when none is configured
pub const MAIN_SOURCE_SET_NAME: &str = "main";

/// A named set of source and output directories owned by the host build
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceSet {
    /// Source set name, e.g. "main" or "test"
    pub name: String,
    /// Directories containing the plugin sources
    pub source_directories: Vec<PathBuf>,
    /// Directories containing the compiled classes
    pub classes_directories: Vec<PathBuf>,
}

impl SourceSet {
    /// Create an empty source set
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            source_directories: Vec::new(),
            classes_directories: Vec::new(),
        }
    }

    /// Create a source set with its directories
    pub fn with_directories<S: Into<String>>(
        name: S,
        source_directories: Vec<PathBuf>,
        classes_directories: Vec<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            source_directories,
            classes_directories,
        }
    }
}

/// The host project's source sets, looked up by name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSetContainer {
    source_sets: Vec<SourceSet>,
}

impl SourceSetContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source set, replacing any existing one with the same name
    pub fn add(&mut self, source_set: SourceSet) {
        self.source_sets.retain(|s| s.name != source_set.name);
        self.source_sets.push(source_set);
    }

    /// Look up a source set by name
    pub fn get(&self, name: &str) -> Option<&SourceSet> {
        self.source_sets.iter().find(|s| s.name == name)
    }

    /// Names of all registered source sets
    pub fn names(&self) -> Vec<&str> {
        self.source_sets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Snapshot of the host project state conventions read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectModel {
    /// Project group, e.g. "org.example"
    pub group: String,
    /// Project name
    pub name: String,
    /// Project version
    pub version: String,
    /// Project description, absent when the host has none
    pub description: Option<String>,
    /// Source sets registered on the project
    pub source_sets: SourceSetContainer,
}

impl ProjectModel {
    /// Create a project snapshot with the given coordinates
    pub fn new<S: Into<String>>(group: S, name: S, version: S) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            description: None,
            source_sets: SourceSetContainer::new(),
        }
    }

    /// Set the project description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Register a source set on the project
    pub fn with_source_set(mut self, source_set: SourceSet) -> Self {
        self.source_sets.add(source_set);
        self
    }
}
