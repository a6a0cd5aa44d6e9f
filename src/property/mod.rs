//! Configuration property cells
//!
//! This module provides the generic lazy, convention-defaulted property
//! mechanism the extension store is built on: typed cells that resolve to
//! an explicit value when one was assigned, and otherwise fall back to a
//! lazily evaluated convention supplier.

pub mod cell;

pub use cell::*;
