// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! `should_exclude` is the path policy the walker applies to every entry.
//! The remaining predicates are the large-file finder's admission filters.
//! All of them are pure and can be used outside of a walk.

mod exclusion;
mod extension;
mod modified;
mod size;

pub use exclusion::{is_hidden_path, should_exclude};
pub use extension::passes_extension_filter;
pub use modified::passes_modified_filter;
pub use size::passes_size_filter;
