// system-tests/tests/helpers/client.rs
// ============================================================================
// Module: Suite Client Construction
// Description: Builds the API client the live suites share.
// Purpose: Keep base URL, credential, and timeout handling consistent.
// Dependencies: reqres-system-tests, reqres-client
// ============================================================================

use std::time::Duration;

use reqres_client::UserApiClient;
use reqres_system_tests::config::SystemTestConfig;

/// Default per-request timeout for the live suites. The env override acts as
/// a minimum and never shortens it.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds a client from the environment-backed configuration.
///
/// # Errors
///
/// Returns an error when the configuration fails to load or the base URL is
/// rejected by the client.
pub fn build_client() -> Result<UserApiClient, String> {
    let config = SystemTestConfig::load()?;
    let timeout = config.resolve_timeout(DEFAULT_REQUEST_TIMEOUT);
    let client = UserApiClient::new(&config.base_url, timeout)
        .map_err(|err| format!("client construction failed: {err}"))?;
    Ok(match config.api_key {
        Some(key) => client.with_api_key(&key),
        None => client,
    })
}
