//! Helpers shared by several formats.

pub mod columns;
pub mod escape;
