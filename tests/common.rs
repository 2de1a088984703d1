// ABOUTME: Shared test utilities and fixtures for meal planner integration tests
// ABOUTME: Provides quiet logging, CSV dataset fixtures and food builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_meal_planner`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use pierre_meal_planner::dataset::FoodDatabase;
use pierre_meal_planner::models::FoodItem;
use std::env;
use std::io::Write;
use std::sync::Once;
use tempfile::NamedTempFile;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Dataset in the layout of the real nutrition file: name first, nutrient
/// columns interleaved with columns the planner ignores
pub const SAMPLE_DATASET_CSV: &str = "\
food,Caloric Value,Fat,Saturated Fats,Carbohydrates,Sugars,Protein,Dietary Fiber
grilled chicken breast,284,6.2,1.7,0,0,53.4,0
baked salmon,412,22.1,4.4,0,0,49.6,0
apple,95,0.3,0.1,25.1,18.9,0.5,4.4
roasted sweet potato,180,0.3,0.1,41.4,13,4,6.6
fried egg,90,6.8,2,0.4,0.2,6.3,0
cream cheese,51,5,2.9,0.8,0.5,0.9,0
Greek Yogurt,100,0.7,0.1,3.6,3.2,17.3,0
";

/// Write CSV content to a temporary file kept alive by the returned handle
pub fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp dataset");
    file.write_all(contents.as_bytes()).expect("write temp dataset");
    file.flush().expect("flush temp dataset");
    file
}

/// Build a food item
pub fn food(name: &str, calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> FoodItem {
    FoodItem::new(name, calories, protein_g, carbs_g, fat_g)
}

/// In-memory database from food items
pub fn database_of(foods: Vec<FoodItem>) -> FoodDatabase {
    foods.into_iter().collect()
}

/// Three prepared foods where any three draws reach 600 kcal and 30 g protein
pub fn three_prepared_foods() -> FoodDatabase {
    database_of(vec![
        food("Grilled Chicken", 300.0, 20.0, 0.0, 7.0),
        food("Baked Cod", 250.0, 15.0, 0.0, 2.0),
        food("Roasted Lentils", 200.0, 10.0, 35.0, 1.0),
    ])
}
