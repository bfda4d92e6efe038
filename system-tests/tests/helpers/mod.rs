// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for the live reqres test suites.
// Purpose: Provide client construction, schema fixtures, and artifact utilities.
// Dependencies: reqres-system-tests, reqres-client, reqres-contract
// ============================================================================

//! ## Overview
//! Shared helpers for the live reqres test suites.
//! Purpose: Provide client construction, schema fixtures, and artifact utilities.
//! Invariants:
//! - Suite execution is deterministic and fail-closed.
//! - Service responses are treated as untrusted input.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod client;
pub mod schemas;
