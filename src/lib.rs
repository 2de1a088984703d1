// ABOUTME: Main library entry point for the Pierre meal planner
// ABOUTME: Dataset loading, food search, comparison and balanced weekly meal planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Meal Planner
//!
//! Headless core of a food-tracking application: search a nutrition dataset,
//! compare foods and build a weekly meal plan with randomly generated
//! balanced meals. A presentation layer drives it through plain calls.
//!
//! ## Architecture
//!
//! Components are wired explicitly; nothing lives in global state:
//! - **Dataset**: CSV loading and schema validation into a read-only `FoodDatabase`
//! - **Search**: name search and macro threshold filters
//! - **Meal plan**: the 7-day by 4-meal plan and its manager
//! - **Intelligence**: balanced-meal sampling and weekly plan generation
//! - **Comparison**: bounded side-by-side food comparison
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_meal_planner::config::PlannerConfig;
//! use pierre_meal_planner::dataset::FoodDatabase;
//! use pierre_meal_planner::intelligence::{entropy_rng, generate_weekly_plan};
//! use pierre_meal_planner::meal_plan::{MealPlanManager, PlanScope};
//! use pierre_meal_planner::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = PlannerConfig::load()?;
//!     let load = FoodDatabase::load_or_empty(&config.dataset)?;
//!     if let Some(error) = &load.error {
//!         eprintln!("Error loading dataset: {error}");
//!     }
//!
//!     let mut manager = MealPlanManager::new();
//!     let mut rng = entropy_rng();
//!     generate_weekly_plan(&mut manager, &load.database, &config.generator, &mut rng)?;
//!
//!     println!("{}", manager.get_meal_plan().summary(PlanScope::Week));
//!     Ok(())
//! }
//! ```

/// Planner configuration with environment overrides
pub mod config;

/// Nutrition dataset loading and schema validation
pub mod dataset;

/// Name search and nutrient threshold filters
pub mod search;

/// Weekly meal plan and its manager
pub mod meal_plan;

/// Balanced-meal and weekly plan generation
pub mod intelligence;

/// Side-by-side food comparison table
pub mod comparison;

/// Structured logging setup
pub mod logging;

/// Unified error handling (re-exported from `planner-core`)
pub use planner_core::errors;

/// Planner constants (re-exported from `planner-core`)
pub use planner_core::constants;

/// Food, day and meal models (re-exported from `planner-core`)
pub use planner_core::models;
