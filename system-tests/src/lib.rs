// system-tests/src/lib.rs
// ============================================================================
// Module: Reqres System Tests Library
// Description: Shared configuration for live API test scenarios.
// Purpose: Provide common utilities for the reqres system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the shared configuration used by the live test binaries in
//! `system-tests/tests`. The suites target a third-party service, so every
//! environment override is validated strictly and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
