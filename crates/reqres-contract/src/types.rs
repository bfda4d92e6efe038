// crates/reqres-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Request and response records for the reqres.in API.
// Purpose: Provide canonical wire shapes for registration, login, and user endpoints.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Typed wire containers for the user-management endpoints. Records are flat
//! and immutable after construction; decoding is permissive (unknown fields
//! ignored) while encoding emits only declared fields, omitting absent
//! optionals entirely so negative-path requests genuinely lack the field.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::timestamp;
use crate::timestamp::TimestampParseError;

// ============================================================================
// SECTION: Auth Types
// ============================================================================

/// Request body for `POST /register` and `POST /login`.
///
/// # Invariants
/// - Absent fields are omitted from the serialized body, not sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthRequest {
    /// Account email; omitted to exercise server-side validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Account password; omitted to exercise server-side validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AuthRequest {
    /// Builds a request carrying both credential fields.
    #[must_use]
    pub fn with_credentials(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_owned()),
            password: Some(password.to_owned()),
        }
    }

    /// Builds a request carrying only the email field.
    #[must_use]
    pub fn email_only(email: &str) -> Self {
        Self {
            email: Some(email.to_owned()),
            password: None,
        }
    }
}

/// Response body for `POST /register` and `POST /login`.
///
/// # Invariants
/// - Success responses populate `token` (and `id` for register); failure
///   responses populate `error`. The service never mixes the two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Registered account identifier; absent on login and on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Session token; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Validation error message; absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// SECTION: User Types
// ============================================================================

/// Server-side user record as returned inside the `data` envelope of
/// `GET /users/{id}`.
///
/// # Invariants
/// - Values are untrusted service output; `avatar` is expected to be a URL
///   but is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// User identifier.
    pub id: u64,
    /// Account email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Avatar image URL.
    pub avatar: String,
}

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    /// Display name to store.
    pub name: String,
    /// Job title to store.
    pub job: String,
}

impl UserUpdateRequest {
    /// Builds an update payload from the given name and job.
    #[must_use]
    pub fn new(name: &str, job: &str) -> Self {
        Self {
            name: name.to_owned(),
            job: job.to_owned(),
        }
    }
}

/// Response body for `PUT /users/{id}`.
///
/// The service echoes the submitted fields and stamps metadata; PUT responses
/// carry `updatedAt` only, so identifier and creation metadata stay optional.
///
/// # Invariants
/// - Timestamp fields hold the raw wire strings; conversion happens through
///   [`Self::parsed_created_at`] and [`Self::parsed_updated_at`] and never
///   during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateResponse {
    /// Echoed display name.
    pub name: String,
    /// Echoed job title.
    pub job: String,
    /// Identifier assigned on creation responses; absent on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Creation timestamp wire string; absent on update responses.
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Update timestamp wire string.
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserUpdateResponse {
    /// Parses the `createdAt` wire string when present.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseError`] when the field is present but does not
    /// match the service wire format.
    pub fn parsed_created_at(&self) -> Result<Option<OffsetDateTime>, TimestampParseError> {
        self.created_at.as_deref().map(timestamp::parse).transpose()
    }

    /// Parses the `updatedAt` wire string when present.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseError`] when the field is present but does not
    /// match the service wire format.
    pub fn parsed_updated_at(&self) -> Result<Option<OffsetDateTime>, TimestampParseError> {
        self.updated_at.as_deref().map(timestamp::parse).transpose()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
