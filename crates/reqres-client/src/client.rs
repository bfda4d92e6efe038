// crates/reqres-client/src/client.rs
// ============================================================================
// Module: User API Client
// Description: Async HTTP wrapper for the reqres.in user-management endpoints.
// Purpose: Issue requests and expose typed accessors over raw response bodies.
// Dependencies: reqres-contract, reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! [`UserApiClient`] wraps the registration, login, and user endpoints behind
//! explicit operations. Every call returns an [`ApiResponse`] carrying the
//! status code, content type, and size-limited raw body; assertions decode
//! from there rather than inside the transport layer, so literal-body checks
//! (`""`, `{}`) and HTML error pages stay reachable.
//!
//! Security posture: response bodies are untrusted; reads enforce a hard byte
//! limit and redirects are disabled so requests only ever hit the configured
//! host.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str;
use std::sync::Mutex;
use std::time::Duration;

use reqres_contract::AuthRequest;
use reqres_contract::UserUpdateRequest;
use reqwest::Client;
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::redirect::Policy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum response body size accepted from the service.
pub const MAX_RESPONSE_BODY_BYTES: usize = 1024 * 1024;

/// Header name carrying the service API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Maximum body bytes preserved per transcript entry.
const TRANSCRIPT_PREVIEW_BYTES: usize = 2048;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// User API client errors.
///
/// # Invariants
/// - Variants are stable for suite error mapping and tests.
/// - String payloads may include untrusted server text.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Configuration error.
    #[error("api client config error: {0}")]
    Config(String),
    /// Transport error.
    #[error("api transport error: {0}")]
    Transport(String),
    /// JSON encoding or decoding error.
    #[error("api json error: {0}")]
    Json(String),
    /// Response status differed from the expected status.
    #[error("unexpected http status: expected {expected}, got {actual} (body: {body})")]
    Status {
        /// Status code the caller required.
        expected: u16,
        /// Status code the service returned.
        actual: u16,
        /// Trimmed response body for diagnostics.
        body: String,
    },
    /// Response size exceeds limits.
    #[error("response exceeds size limit ({actual} > {limit})")]
    ResponseTooLarge {
        /// Actual size in bytes.
        actual: usize,
        /// Maximum size in bytes.
        limit: usize,
    },
}

// ============================================================================
// SECTION: Request Types
// ============================================================================

/// Request body variants accepted by [`UserApiClient::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// No body and no content type.
    Empty,
    /// JSON payload sent as `application/json`.
    Json(Value),
    /// Arbitrary payload with an explicit content type, used for
    /// malformed-body cases.
    Raw {
        /// Content type header value to send.
        content_type: String,
        /// Payload bytes sent verbatim.
        payload: Vec<u8>,
    },
}

/// Recorded request/response pair for artifact capture.
///
/// # Invariants
/// - `body_preview` is truncated to a fixed byte budget and lossily decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    /// HTTP method name.
    pub method: String,
    /// Full request URL.
    pub url: String,
    /// Response status code.
    pub status: u16,
    /// Truncated response body text.
    pub body_preview: String,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Async client for the reqres.in user-management API.
///
/// # Invariants
/// - `base_url` has a validated http(s) scheme and no trailing slash.
/// - Requests never follow redirects.
pub struct UserApiClient {
    /// Underlying HTTP client.
    http: Client,
    /// Normalized base URL.
    base_url: String,
    /// Optional API key sent with every request.
    api_key: Option<String>,
    /// Recorded request/response pairs.
    transcript: Mutex<Vec<TranscriptEntry>>,
}

impl std::fmt::Debug for UserApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl UserApiClient {
    /// Builds a client for the given base URL and request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Config`] when the base URL is not a valid
    /// http(s) URL or the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiClientError> {
        let parsed = Url::parse(base_url).map_err(|err| {
            ApiClientError::Config(format!("invalid base url {base_url:?}: {err}"))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiClientError::Config(format!(
                "unsupported base url scheme {:?}",
                parsed.scheme()
            )));
        }
        let http = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|err| {
                ApiClientError::Config(format!("failed to build http client: {err}"))
            })?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: None,
            transcript: Mutex::new(Vec::new()),
        })
    }

    /// Attaches an API key sent as `x-api-key` with every request.
    #[must_use]
    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_owned());
        self
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the recorded request/response transcript.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Calls `POST /register` with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] when serialization or transport fails.
    pub async fn register(&self, request: &AuthRequest) -> Result<ApiResponse, ApiClientError> {
        self.execute(Method::POST, "register", json_body(request)?).await
    }

    /// Calls `POST /login` with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] when serialization or transport fails.
    pub async fn login(&self, request: &AuthRequest) -> Result<ApiResponse, ApiClientError> {
        self.execute(Method::POST, "login", json_body(request)?).await
    }

    /// Calls `GET /users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] when transport fails.
    pub async fn get_user(&self, id: i64) -> Result<ApiResponse, ApiClientError> {
        self.execute(Method::GET, &format!("users/{id}"), RequestBody::Empty).await
    }

    /// Calls `PUT /users/{id}` with a typed update payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] when serialization or transport fails.
    pub async fn update_user(
        &self,
        id: i64,
        request: &UserUpdateRequest,
    ) -> Result<ApiResponse, ApiClientError> {
        self.execute(Method::PUT, &format!("users/{id}"), json_body(request)?).await
    }

    /// Calls `PUT /users/{id}` with an arbitrary payload and content type.
    ///
    /// Used by negative-path cases that must send bodies the service rejects
    /// before JSON parsing succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] when transport fails.
    pub async fn update_user_raw(
        &self,
        id: i64,
        content_type: &str,
        payload: &[u8],
    ) -> Result<ApiResponse, ApiClientError> {
        let body = RequestBody::Raw {
            content_type: content_type.to_owned(),
            payload: payload.to_vec(),
        };
        self.execute(Method::PUT, &format!("users/{id}"), body).await
    }

    /// Calls `DELETE /users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] when transport fails.
    pub async fn delete_user(&self, id: i64) -> Result<ApiResponse, ApiClientError> {
        self.execute(Method::DELETE, &format!("users/{id}"), RequestBody::Empty).await
    }

    /// Executes a request against a path relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] when serialization, header construction, or
    /// transport fails, or when the response body exceeds the size limit.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<ApiResponse, ApiClientError> {
        let url = self.endpoint_url(path);
        let headers = self.headers(&body)?;
        let mut request = self.http.request(method.clone(), &url).headers(headers);
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => {
                let payload = serde_json::to_vec(&value).map_err(|err| {
                    ApiClientError::Json(format!("request serialization failed: {err}"))
                })?;
                request.body(payload)
            }
            RequestBody::Raw {
                payload, ..
            } => request.body(payload),
        };
        let response = request.send().await.map_err(|err| {
            ApiClientError::Transport(format!("request to {url} failed: {err}"))
        })?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let body_bytes = read_response_body_with_limit(response, MAX_RESPONSE_BODY_BYTES).await?;
        self.record(method.as_str(), &url, status, &body_bytes);
        Ok(ApiResponse {
            status,
            content_type,
            body: body_bytes,
        })
    }

    /// Joins a relative path onto the normalized base URL.
    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Builds request headers for the given body variant.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Config`] when a header value is invalid.
    fn headers(&self, body: &RequestBody) -> Result<HeaderMap, ApiClientError> {
        let mut headers = HeaderMap::new();
        match body {
            RequestBody::Empty => {}
            RequestBody::Json(_) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            RequestBody::Raw {
                content_type, ..
            } => {
                let value = HeaderValue::from_str(content_type).map_err(|_| {
                    ApiClientError::Config(format!("invalid content type {content_type:?}"))
                })?;
                headers.insert(CONTENT_TYPE, value);
            }
        }
        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|_| ApiClientError::Config("invalid api key header".to_owned()))?;
            headers.insert(API_KEY_HEADER, value);
        }
        Ok(headers)
    }

    /// Records a completed round-trip in the transcript.
    fn record(&self, method: &str, url: &str, status: StatusCode, body: &[u8]) {
        let preview_len = body.len().min(TRANSCRIPT_PREVIEW_BYTES);
        let entry = TranscriptEntry {
            method: method.to_owned(),
            url: url.to_owned(),
            status: status.as_u16(),
            body_preview: String::from_utf8_lossy(&body[..preview_len]).into_owned(),
        };
        if let Ok(mut guard) = self.transcript.lock() {
            guard.push(entry);
        }
    }
}

// ============================================================================
// SECTION: Response
// ============================================================================

/// Response captured from a single API round-trip.
///
/// # Invariants
/// - `body` never exceeds [`MAX_RESPONSE_BODY_BYTES`].
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Response status.
    status: StatusCode,
    /// Response content type, when the header was present and readable.
    content_type: Option<String>,
    /// Raw response body.
    body: Vec<u8>,
}

impl ApiResponse {
    /// Assembles a response directly from parts for unit tests.
    #[cfg(test)]
    pub(crate) const fn from_parts(
        status: StatusCode,
        content_type: Option<String>,
        body: Vec<u8>,
    ) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    /// Returns the numeric status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns the response content type when present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the raw response body bytes.
    #[must_use]
    pub fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Returns the response body as text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Json`] when the body is not valid UTF-8.
    pub fn body_text(&self) -> Result<&str, ApiClientError> {
        str::from_utf8(&self.body).map_err(|err| {
            ApiClientError::Json(format!("response body is not valid utf-8: {err}"))
        })
    }

    /// Parses the response body as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Json`] when the body is not valid JSON.
    pub fn json_value(&self) -> Result<Value, ApiClientError> {
        serde_json::from_slice(&self.body)
            .map_err(|err| ApiClientError::Json(format!("response is not valid json: {err}")))
    }

    /// Decodes the whole response body into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Json`] when decoding fails.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiClientError> {
        serde_json::from_slice(&self.body)
            .map_err(|err| ApiClientError::Json(format!("response decode failed: {err}")))
    }

    /// Extracts a top-level envelope field and decodes it into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Json`] when the body is not JSON, the field
    /// is absent, or decoding fails.
    pub fn decode_field<T: DeserializeOwned>(&self, field: &str) -> Result<T, ApiClientError> {
        let value = self.json_value()?;
        let nested = value.get(field).ok_or_else(|| {
            ApiClientError::Json(format!("field {field:?} missing from response body"))
        })?;
        serde_json::from_value(nested.clone()).map_err(|err| {
            ApiClientError::Json(format!("field {field:?} decode failed: {err}"))
        })
    }

    /// Requires the response status to equal `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Status`] carrying expected and actual codes
    /// plus the trimmed body when the status differs.
    pub fn require_status(&self, expected: u16) -> Result<(), ApiClientError> {
        let actual = self.status();
        if actual == expected {
            return Ok(());
        }
        Err(ApiClientError::Status {
            expected,
            actual,
            body: String::from_utf8_lossy(&self.body).trim().to_owned(),
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Serializes a typed payload into a JSON request body.
///
/// # Errors
///
/// Returns [`ApiClientError::Json`] when serialization fails.
fn json_body<T: Serialize>(payload: &T) -> Result<RequestBody, ApiClientError> {
    serde_json::to_value(payload)
        .map(RequestBody::Json)
        .map_err(|err| ApiClientError::Json(format!("request serialization failed: {err}")))
}

/// Buffers a response body, refusing bodies that exceed `limit` bytes.
///
/// The buffer never grows past `limit`, so an oversized response fails before
/// it can exhaust memory.
async fn read_response_body_with_limit(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, ApiClientError> {
    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|err| ApiClientError::Transport(format!("body read failed: {err}")))?
    {
        // body.len() <= limit here, so the subtraction cannot wrap.
        let remaining = limit - body.len();
        if chunk.len() > remaining {
            return Err(ApiClientError::ResponseTooLarge {
                actual: body.len().saturating_add(chunk.len()),
                limit,
            });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
