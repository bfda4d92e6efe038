// crates/reqres-client/src/schema.rs
// ============================================================================
// Module: Schema Validation
// Description: JSON Schema compilation and validation for response bodies.
// Purpose: Produce pass/fail verdicts with every violation listed.
// Dependencies: jsonschema, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Wraps the `jsonschema` crate behind a named validator so suite failures
//! identify which fixture rejected a response. Validation collects every
//! violation rather than stopping at the first, keeping diagnostics complete
//! for a single failed case.

// ============================================================================
// SECTION: Imports
// ============================================================================

use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Schema compilation and validation errors.
///
/// # Invariants
/// - `name` always identifies the schema fixture involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The schema document is not valid JSON.
    #[error("schema {name} is not valid json: {detail}")]
    Parse {
        /// Schema fixture name.
        name: String,
        /// Parser diagnostic.
        detail: String,
    },
    /// The schema document failed to compile.
    #[error("schema {name} failed to compile: {detail}")]
    Compile {
        /// Schema fixture name.
        name: String,
        /// Compiler diagnostic.
        detail: String,
    },
    /// The instance violated the schema.
    #[error("response violates schema {name}: {violations}")]
    Violations {
        /// Schema fixture name.
        name: String,
        /// Every violation message, joined with `"; "`.
        violations: String,
    },
}

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Named draft 2020-12 schema validator.
pub struct SchemaValidator {
    /// Fixture name used in diagnostics.
    name: String,
    /// Compiled validator.
    validator: Validator,
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator").field("name", &self.name).finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Compiles a schema document under draft 2020-12.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] when the document is not a valid
    /// schema.
    pub fn compile(name: &str, document: &Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(document)
            .map_err(|err| SchemaError::Compile {
                name: name.to_owned(),
                detail: err.to_string(),
            })?;
        Ok(Self {
            name: name.to_owned(),
            validator,
        })
    }

    /// Parses and compiles an embedded schema fixture.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] when the fixture is not JSON and
    /// [`SchemaError::Compile`] when it is not a valid schema.
    pub fn compile_embedded(name: &str, raw: &str) -> Result<Self, SchemaError> {
        let document: Value = serde_json::from_str(raw).map_err(|err| SchemaError::Parse {
            name: name.to_owned(),
            detail: err.to_string(),
        })?;
        Self::compile(name, &document)
    }

    /// Returns the fixture name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates an instance, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Violations`] listing each violation message when
    /// the instance does not match.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaError> {
        let violations: Vec<String> =
            self.validator.iter_errors(instance).map(|err| err.to_string()).collect();
        if violations.is_empty() {
            return Ok(());
        }
        Err(SchemaError::Violations {
            name: self.name.clone(),
            violations: violations.join("; "),
        })
    }

    /// Returns whether an instance matches the schema.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
