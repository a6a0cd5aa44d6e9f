//! Maven plugin development extension
//!
//! The configuration store the host creates for a Maven plugin project,
//! and the finalized descriptor snapshot it resolves to.

pub mod descriptor;
pub mod store;

pub use descriptor::*;
pub use store::*;
