// system-tests/tests/suites/users.rs
// ============================================================================
// Module: User Resource Tests
// Description: Live validation of user retrieval, update, and delete.
// Purpose: Ensure the user endpoints match the published fixtures and shapes.
// Dependencies: system-tests helpers
// ============================================================================

//! ## Overview
//! Live validation of user retrieval, update, and delete.
//! Purpose: Ensure the user endpoints match the published fixtures and shapes.
//! Invariants:
//! - Suite execution is deterministic and fail-closed.
//! - Service responses are treated as untrusted input.

use helpers::artifacts::TestReporter;
use helpers::client::build_client;
use helpers::schemas;
use reqres_client::parse_error_page;
use reqres_contract::UserData;
use reqres_contract::UserUpdateRequest;
use reqres_contract::UserUpdateResponse;
use url::Url;

use crate::helpers;

/// Identifier of the seeded user every fixture assertion targets.
const KNOWN_USER_ID: i64 = 2;

#[tokio::test(flavor = "multi_thread")]
async fn fetch_known_user_matches_fixture() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("fetch_known_user_matches_fixture")?;
    let client = build_client()?;

    let response = client.get_user(KNOWN_USER_ID).await?;
    response.require_status(200)?;
    schemas::user_single()?.validate(&response.json_value()?)?;
    let user: UserData = response.decode_field("data")?;
    if user.id != 2 {
        return Err(format!("unexpected user id: {}", user.id).into());
    }
    if user.email != "janet.weaver@reqres.in" {
        return Err(format!("unexpected user email: {}", user.email).into());
    }
    if user.first_name != "Janet" || user.last_name != "Weaver" {
        return Err("user name fields did not match the seeded fixture".into());
    }
    if user.avatar != "https://reqres.in/img/faces/2-image.jpg" {
        return Err(format!("unexpected avatar url: {}", user.avatar).into());
    }
    Url::parse(&user.avatar).map_err(|err| format!("avatar url failed to parse: {err}"))?;

    reporter.artifacts().write_json("http_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec![
            "user 2 matched the seeded fixture and schema".to_string(),
        ],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "http_transcript.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_fetch_returns_identical_projection() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("repeated_fetch_returns_identical_projection")?;
    let client = build_client()?;

    let first_response = client.get_user(KNOWN_USER_ID).await?;
    first_response.require_status(200)?;
    let first: UserData = first_response.decode_field("data")?;
    let second_response = client.get_user(KNOWN_USER_ID).await?;
    second_response.require_status(200)?;
    let second: UserData = second_response.decode_field("data")?;
    if first != second {
        return Err(format!("repeated reads diverged: {first:?} vs {second:?}").into());
    }

    reporter.artifacts().write_json("http_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec![
            "two reads of user 2 returned the same projection".to_string(),
        ],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "http_transcript.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_unknown_user_returns_empty_object() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("fetch_unknown_user_returns_empty_object")?;
    let client = build_client()?;

    let response = client.get_user(-1).await?;
    response.require_status(404)?;
    let body = response.body_text()?;
    if body != "{}" {
        return Err(format!("unexpected not-found body: {body:?}").into());
    }

    reporter.artifacts().write_json("http_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec![
            "missing user returned 404 with a literal empty object".to_string(),
        ],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "http_transcript.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn update_user_echoes_request_fields() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("update_user_echoes_request_fields")?;
    let client = build_client()?;
    let request = UserUpdateRequest::new("morpheus", "zion resident");

    let response = client.update_user(KNOWN_USER_ID, &request).await?;
    response.require_status(200)?;
    schemas::user_update()?.validate(&response.json_value()?)?;
    let body: UserUpdateResponse = response.decode()?;
    if body.name != request.name || body.job != request.job {
        return Err("update response did not echo the request fields".into());
    }
    let Some(stamp) = body.parsed_updated_at()? else {
        return Err("update response was missing updatedAt".into());
    };

    reporter.artifacts().write_json("http_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec![
            format!("update echoed both fields and stamped updatedAt at {stamp}"),
        ],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "http_transcript.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_malformed_body_returns_html_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("update_with_malformed_body_returns_html_error")?;
    let client = build_client()?;

    let response = client.update_user_raw(KNOWN_USER_ID, "application/json", b" ").await?;
    response.require_status(400)?;
    let Some(content_type) = response.content_type() else {
        return Err("error response carried no content type".into());
    };
    if !content_type.contains("text/html") {
        return Err(format!("unexpected error content type: {content_type}").into());
    }
    let page = parse_error_page(response.body_text()?)?;
    if page.title != "Error" {
        return Err(format!("unexpected error page title: {}", page.title).into());
    }
    if page.message != "Bad Request" {
        return Err(format!("unexpected error page message: {}", page.message).into());
    }

    reporter.artifacts().write_text("error_page.html", response.body_text()?)?;
    reporter.artifacts().write_json("http_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec![
            "malformed update body produced the framework html error page".to_string(),
        ],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "error_page.html".to_string(),
            "http_transcript.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_user_returns_no_content() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("delete_user_returns_no_content")?;
    let client = build_client()?;

    let response = client.delete_user(KNOWN_USER_ID).await?;
    response.require_status(204)?;
    if !response.body_bytes().is_empty() {
        return Err(
            format!("delete body was not empty: {} bytes", response.body_bytes().len()).into()
        );
    }

    reporter.artifacts().write_json("http_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec![
            "delete returned 204 with an empty body".to_string(),
        ],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "http_transcript.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}
