//! Host project models
//!
//! Read-only snapshots of the external build host's project state, used by
//! the extension store's convention suppliers.

pub mod model;

pub use model::*;
