// ABOUTME: Unified error handling for the meal planner with standard error codes
// ABOUTME: Defines ErrorCode, ErrorContext, AppError and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the planner returns [`AppResult`]. Errors carry
//! a machine-readable [`ErrorCode`], a human-readable message and optional
//! context (the resource involved plus free-form JSON details).

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input rejected by validation
    InvalidInput = 3000,
    /// A required field or column is missing
    MissingRequiredField = 3001,
    /// Data could not be parsed into the expected shape
    InvalidFormat = 3002,
    /// Value outside its accepted range
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Requested resource does not exist
    ResourceNotFound = 4000,
    /// A bounded collection is already at capacity
    ResourceLimitExceeded = 4004,

    // Generation (6000-6999)
    /// Balanced-meal sampling hit its iteration cap
    GenerationLimitExceeded = 6000,

    // Configuration (7000-7999)
    /// Configuration is invalid
    ConfigInvalid = 7002,

    // Storage (9000-9999)
    /// Filesystem or reader failure
    StorageError = 9002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceLimitExceeded => "The resource has reached its capacity",
            Self::GenerationLimitExceeded => "Meal generation exceeded its iteration limit",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Resource identifier (file path, column name, food name)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the planner
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed data (non-numeric nutrient cell, broken CSV record)
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Required field missing, e.g. a dataset column absent from the header
    #[must_use]
    pub fn missing_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message).with_resource_id(field)
    }

    /// Bounded collection already full
    #[must_use]
    pub fn limit_exceeded(resource: impl Into<String>, limit: usize) -> Self {
        let resource = resource.into();
        Self::new(
            ErrorCode::ResourceLimitExceeded,
            format!("{resource} is full ({limit} items)"),
        )
        .with_resource_id(resource)
        .with_details(json!({ "limit": limit }))
    }

    /// Balanced-meal sampling did not meet its targets within the cap
    #[must_use]
    pub fn generation_limit(max_iterations: usize) -> Self {
        Self::new(
            ErrorCode::GenerationLimitExceeded,
            format!("targets not reached after {max_iterations} draws"),
        )
        .with_details(json!({ "max_iterations": max_iterations }))
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
