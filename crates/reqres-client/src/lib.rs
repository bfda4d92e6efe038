// crates/reqres-client/src/lib.rs
// ============================================================================
// Module: Reqres Client Library
// Description: HTTP client stack for exercising the reqres.in API.
// Purpose: Provide the request wrapper, schema validator, and error-page parser.
// Dependencies: jsonschema, reqres-contract, reqwest, serde, thiserror
// ============================================================================

//! ## Overview
//! This crate wraps the reqres.in user-management endpoints behind a typed
//! async client and supplies the two assertion tools the suites build on: a
//! JSON Schema validator for response shapes and a parser for the HTML error
//! page the service returns on malformed request bodies.
//!
//! Security posture: all response data is untrusted external input; bodies
//! are size-limited before buffering and parsing failures map to errors, not
//! panics.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod html;
pub mod schema;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::ApiClientError;
pub use client::ApiResponse;
pub use client::MAX_RESPONSE_BODY_BYTES;
pub use client::RequestBody;
pub use client::TranscriptEntry;
pub use client::UserApiClient;
pub use html::ErrorPage;
pub use html::HtmlParseError;
pub use html::parse_error_page;
pub use schema::SchemaError;
pub use schema::SchemaValidator;
