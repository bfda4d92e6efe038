// crates/reqres-contract/src/timestamp.rs
// ============================================================================
// Module: Timestamp Parsing
// Description: Pure parser for the service's timestamp wire format.
// Purpose: Convert metadata stamps like updatedAt into typed date-times.
// Dependencies: thiserror, time
// ============================================================================

//! ## Overview
//! The service stamps update metadata as RFC 3339 strings in UTC with
//! millisecond precision, for example `2025-07-23T09:42:25.578Z`. Parsing is a
//! pure function over the wire string; anything that does not match the
//! pattern is a [`TimestampParseError`], never a silent default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Timestamp parsing errors.
///
/// # Invariants
/// - `value` carries the offending wire string verbatim for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampParseError {
    /// The value does not match the RFC 3339 wire pattern.
    #[error("invalid timestamp {value:?}: {detail}")]
    InvalidFormat {
        /// Offending wire string.
        value: String,
        /// Parser diagnostic.
        detail: String,
    },
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a service timestamp wire string into an [`OffsetDateTime`].
///
/// # Errors
///
/// Returns [`TimestampParseError::InvalidFormat`] when the value does not
/// match the RFC 3339 pattern.
pub fn parse(value: &str) -> Result<OffsetDateTime, TimestampParseError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|err| TimestampParseError::InvalidFormat {
        value: value.to_owned(),
        detail: err.to_string(),
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
