// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Network**: Request timeout bounds
//! - **Display**: Detail panel defaults and thumbnail size

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default timeout for each API request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Record ids that show the detail panel unless configured otherwise.
pub const DEFAULT_DETAIL_PANEL_IDS: [i64; 1] = [1680];

/// Edge length of a row thumbnail, in logical pixels.
pub const THUMBNAIL_SIZE: f32 = 50.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(THUMBNAIL_SIZE > 0.0);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_are_valid() {
        assert_eq!(DEFAULT_REQUEST_TIMEOUT_SECS, 15);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn detail_panel_default_keeps_known_record() {
        assert_eq!(DEFAULT_DETAIL_PANEL_IDS, [1680]);
    }
}
