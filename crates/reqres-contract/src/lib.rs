// crates/reqres-contract/src/lib.rs
// ============================================================================
// Module: Reqres Contract Library
// Description: Wire-format contracts for the reqres.in user-management API.
// Purpose: Provide typed request/response shapes, timestamp parsing, and schema fixtures.
// Dependencies: serde, thiserror, time
// ============================================================================

//! ## Overview
//! This crate defines the wire contracts shared by the reqres-suite client and
//! system tests: request and response records for the registration, login, and
//! user endpoints, a pure parser for the service's timestamp format, and the
//! embedded JSON Schema fixtures validated against live responses.
//!
//! Security posture: response payloads originate from an external service and
//! are untrusted; decoding ignores unknown fields and never panics.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod schemas;
pub mod timestamp;
pub mod types;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use timestamp::TimestampParseError;
pub use types::AuthRequest;
pub use types::AuthResponse;
pub use types::UserData;
pub use types::UserUpdateRequest;
pub use types::UserUpdateResponse;
