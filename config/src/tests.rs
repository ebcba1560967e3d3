//! # Tests for Config Constants
//!
//! Unit tests verifying the configuration constants and the validated
//! `ImportLimits` constructor.

use crate::constants::*;

// =============================================================================
// CLASSIFICATION TESTS
// =============================================================================

#[test]
fn test_category_depth_covers_shallow_tree() {
    // kind → category → composite element → element needs three hops
    assert!(MAX_CATEGORY_DEPTH >= 3);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_tree_depth_reasonable() {
    assert!(MAX_TREE_DEPTH >= 256, "real files nest a few hundred levels");
    assert!(MAX_TREE_DEPTH <= 1 << 16);
}

#[test]
fn test_red_zone_smaller_than_stack() {
    assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
}

#[test]
fn test_special_node_names() {
    assert_eq!(ERROR_NODE_TYPE, "ERROR");
    assert!("MISSING identifier".starts_with(MISSING_NODE_PREFIX));
}

// =============================================================================
// IMPORT LIMITS TESTS
// =============================================================================

#[test]
fn test_default_limits_use_constants() {
    let limits = ImportLimits::default();
    assert_eq!(limits.max_tree_depth, MAX_TREE_DEPTH);
    assert_eq!(limits.stack_red_zone, STACKER_RED_ZONE_BYTES);
    assert_eq!(limits.stack_size, STACKER_STACK_SIZE_BYTES);
}

#[test]
fn test_zero_depth_rejected() {
    assert_eq!(
        ImportLimits::new(0, 1024, 4096),
        Err(ConfigError::ZeroTreeDepth)
    );
}

#[test]
fn test_red_zone_must_fit() {
    let err = ImportLimits::new(10, 4096, 4096).unwrap_err();
    assert_eq!(
        err,
        ConfigError::RedZoneTooLarge {
            red_zone: 4096,
            stack_size: 4096
        }
    );
    assert!(err.to_string().contains("4096"));
}

#[test]
fn test_with_max_tree_depth_keeps_stack_settings() {
    let limits = ImportLimits::default().with_max_tree_depth(3).unwrap();
    assert_eq!(limits.max_tree_depth, 3);
    assert_eq!(limits.stack_size, STACKER_STACK_SIZE_BYTES);
}
