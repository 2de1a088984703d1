// ABOUTME: Configuration module for the meal planner
// ABOUTME: Exposes the planner configuration, its sections and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner configuration
//!
//! Configuration is built from compiled defaults, then environment overrides,
//! then validated. It is passed explicitly to the components that need it.

/// Configuration error types
pub mod error;

/// Planner configuration sections and environment loading
pub mod planner;

pub use error::ConfigError;
pub use planner::{ComparisonConfig, DatasetConfig, GeneratorConfig, PlannerConfig};
