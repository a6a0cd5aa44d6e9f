//! mojoconf - Maven Plugin Build Configuration
//!
//! A lazy, convention-defaulted configuration store for packaging Maven
//! plugin projects. The build host constructs the store with a snapshot of
//! its project state, overrides cells during its configuration phase, and
//! resolves the finalized values to drive its own packaging and codegen.

pub mod error;
pub mod extension;
pub mod project;
pub mod property;

// Re-export commonly used types
pub use error::{MojoconfError, Result};
pub use extension::{Gav, MavenPluginExtension, PluginDescriptor};
pub use project::{ProjectModel, SourceSet, SourceSetContainer};
pub use property::Property;
