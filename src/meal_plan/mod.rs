// ABOUTME: Weekly meal plan storage, mutation and nutrient summaries
// ABOUTME: Seven days by four meals, each slot an ordered list of identified food entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan
//!
//! - [`plan`]: the 7x4 slot structure and its entries
//! - [`manager`]: add, remove, change and clear operations
//! - [`summary`]: display rows and nutrient totals for a day or the week

/// Plan mutation API used by the presentation layer and the weekly generator
pub mod manager;

/// Slot storage and entry identifiers
pub mod plan;

/// Display rows and nutrient summaries
pub mod summary;

pub use manager::MealPlanManager;
pub use plan::{EntryId, MealPlan, PlanEntry};
pub use summary::{NutrientSummary, PlanRow, PlanScope};
