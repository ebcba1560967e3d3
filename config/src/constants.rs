//! # Configuration Constants
//!
//! Centralized constants for the Dart PSI workspace.
//!
//! ## Categories
//!
//! - **Classification**: Bounds on the category tree
//! - **Limits**: Nesting limits applied when importing trees
//! - **Stack**: `stacker` growth parameters for recursive importers
//! - **Node Names**: Special node type names produced by external parsers

use std::fmt;

// =============================================================================
// CLASSIFICATION CONSTANTS
// =============================================================================

/// Maximum number of parent hops from any category to the root category.
///
/// The category tree is shallow (kind → category → composite
/// element → element). Chain walks give up after this many steps, which
/// turns an accidental cycle into a detectable failure instead of a hang.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_CATEGORY_DEPTH;
///
/// assert!(MAX_CATEGORY_DEPTH >= 3);
/// ```
pub const MAX_CATEGORY_DEPTH: usize = 8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum nesting depth accepted when importing a tree.
///
/// Serialized trees and tree-sitter output deeper than this are rejected
/// rather than converted.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TREE_DEPTH;
///
/// let depth = 200;
/// assert!(depth < MAX_TREE_DEPTH);
/// ```
pub const MAX_TREE_DEPTH: usize = 4096;

// =============================================================================
// STACK CONSTANTS
// =============================================================================

/// Remaining stack below which recursive importers grow the stack.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
///
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack space allocated each time the stack is grown using the
/// `stacker` crate.
///
/// # Example
///
/// ```rust
/// use config::constants::STACKER_STACK_SIZE_BYTES;
///
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024 * 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 2 * 1024 * 1024;

// =============================================================================
// NODE NAME CONSTANTS
// =============================================================================

/// Node type used by tree-sitter style parsers for error recovery regions.
pub const ERROR_NODE_TYPE: &str = "ERROR";

/// Prefix of node types inserted by error recovery for missing tokens.
pub const MISSING_NODE_PREFIX: &str = "MISSING";

// =============================================================================
// IMPORT LIMITS
// =============================================================================

/// Limits applied by the tree importers.
///
/// # Examples
/// ```
/// use config::constants::ImportLimits;
/// let limits = ImportLimits::default();
/// assert!(limits.max_tree_depth > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportLimits {
    /// Deepest nesting level accepted; the root is at depth 1.
    pub max_tree_depth: usize,
    /// Remaining stack that triggers stack growth.
    pub stack_red_zone: usize,
    /// Size of each newly allocated stack segment.
    pub stack_size: usize,
}

impl ImportLimits {
    /// Builds limits, validating each value.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ImportLimits;
    /// let limits = ImportLimits::new(16, 32 * 1024, 1024 * 1024).expect("valid limits");
    /// assert_eq!(limits.max_tree_depth, 16);
    /// ```
    pub fn new(
        max_tree_depth: usize,
        stack_red_zone: usize,
        stack_size: usize,
    ) -> Result<Self, ConfigError> {
        if max_tree_depth == 0 {
            return Err(ConfigError::ZeroTreeDepth);
        }
        if stack_red_zone >= stack_size {
            return Err(ConfigError::RedZoneTooLarge {
                red_zone: stack_red_zone,
                stack_size,
            });
        }
        Ok(Self {
            max_tree_depth,
            stack_red_zone,
            stack_size,
        })
    }

    /// Returns a copy with a different depth limit.
    pub fn with_max_tree_depth(self, max_tree_depth: usize) -> Result<Self, ConfigError> {
        Self::new(max_tree_depth, self.stack_red_zone, self.stack_size)
    }
}

impl Default for ImportLimits {
    fn default() -> Self {
        Self {
            max_tree_depth: MAX_TREE_DEPTH,
            stack_red_zone: STACKER_RED_ZONE_BYTES,
            stack_size: STACKER_STACK_SIZE_BYTES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the depth limit is zero.
    ZeroTreeDepth,
    /// Raised when the red zone does not fit into a stack segment.
    RedZoneTooLarge {
        /// Requested red zone.
        red_zone: usize,
        /// Requested segment size.
        stack_size: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTreeDepth => write!(f, "max_tree_depth must be positive"),
            ConfigError::RedZoneTooLarge {
                red_zone,
                stack_size,
            } => write!(
                f,
                "stack red zone ({red_zone}) must be smaller than the stack size ({stack_size})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
