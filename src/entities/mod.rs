//! Helpers for declaring entity types

pub mod macros;
