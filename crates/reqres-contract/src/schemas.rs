// crates/reqres-contract/src/schemas.rs
// ============================================================================
// Module: Schema Fixtures
// Description: Embedded JSON Schema documents for response validation.
// Purpose: Ship one static schema per endpoint/outcome pair.
// Dependencies: std
// ============================================================================

//! ## Overview
//! JSON Schema fixtures embedded at compile time, one per endpoint/outcome
//! pair. They are loaded read-only and compiled by the client crate's
//! validator; the catalog keeps the set enumerable for fixture-wide checks.

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Schema for the `POST /register` success body.
pub const REGISTER_SUCCESS: &str = include_str!("../schemas/register_success.schema.json");

/// Schema for the `POST /register` and `POST /login` error body.
pub const AUTH_ERROR: &str = include_str!("../schemas/auth_error.schema.json");

/// Schema for the `GET /users/{id}` single-user body.
pub const USER_SINGLE: &str = include_str!("../schemas/user_single.schema.json");

/// Schema for the `PUT /users/{id}` update body.
pub const USER_UPDATE: &str = include_str!("../schemas/user_update.schema.json");

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Returns every embedded schema fixture with its stable name.
#[must_use]
pub const fn catalog() -> [(&'static str, &'static str); 4] {
    [
        ("register_success", REGISTER_SUCCESS),
        ("auth_error", AUTH_ERROR),
        ("user_single", USER_SINGLE),
        ("user_update", USER_UPDATE),
    ]
}

// ============================================================================
// SECTION: Tests
// ============================================================================
