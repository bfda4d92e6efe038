// system-tests/tests/helpers/schemas.rs
// ============================================================================
// Module: Suite Schema Fixtures
// Description: Compiled response-shape validators for the live suites.
// Purpose: Share one compilation path for the embedded schema fixtures.
// Dependencies: reqres-client, reqres-contract
// ============================================================================

use reqres_client::SchemaError;
use reqres_client::SchemaValidator;
use reqres_contract::schemas;

/// Compiles the successful-registration response schema.
///
/// # Errors
///
/// Returns an error when the embedded fixture fails to compile.
pub fn register_success() -> Result<SchemaValidator, SchemaError> {
    SchemaValidator::compile_embedded("register_success", schemas::REGISTER_SUCCESS)
}

/// Compiles the authentication-error response schema.
///
/// # Errors
///
/// Returns an error when the embedded fixture fails to compile.
pub fn auth_error() -> Result<SchemaValidator, SchemaError> {
    SchemaValidator::compile_embedded("auth_error", schemas::AUTH_ERROR)
}

/// Compiles the single-user envelope schema.
///
/// # Errors
///
/// Returns an error when the embedded fixture fails to compile.
pub fn user_single() -> Result<SchemaValidator, SchemaError> {
    SchemaValidator::compile_embedded("user_single", schemas::USER_SINGLE)
}

/// Compiles the update-echo response schema.
///
/// # Errors
///
/// Returns an error when the embedded fixture fails to compile.
pub fn user_update() -> Result<SchemaValidator, SchemaError> {
    SchemaValidator::compile_embedded("user_update", schemas::USER_UPDATE)
}
