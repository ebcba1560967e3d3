//! # Config Crate
//!
//! Centralized configuration constants for the Dart PSI workspace.
//! Every limit and magic string shared between the classification core and
//! the tree importers is defined here, so crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ImportLimits, MAX_TREE_DEPTH};
//!
//! let limits = ImportLimits::default();
//! assert_eq!(limits.max_tree_depth, MAX_TREE_DEPTH);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values, usable from every crate
//! - **Validated Overrides**: Runtime overrides go through `ImportLimits::new`

pub mod constants;

#[cfg(test)]
mod tests;
