// ABOUTME: Core types and constants for the Pierre meal planner
// ABOUTME: Foundation crate with error handling, food and meal models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Core
//!
//! Foundation crate providing shared types and constants for the meal planner.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Planner defaults (nutrient targets, filter thresholds, dataset headers)
//! - **models**: `FoodItem`, `MacroTotals`, `Day` and `MealType`

/// Unified error handling system with standard error codes
pub mod errors;

/// Planner constants organized by domain
pub mod constants;

/// Core data models (food items, days of the week, meal types)
pub mod models;
