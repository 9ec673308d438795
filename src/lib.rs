//! Workspace placeholder crate.
//!
//! This crate exists to expose the individual workspace crates
//! (`bridge-traits`, `core-spatial`) behind a single dependency. Host
//! applications can depend on `sasc-workspace` and re-export what they need
//! without wiring each crate individually.

pub use bridge_traits;
pub use core_spatial;
