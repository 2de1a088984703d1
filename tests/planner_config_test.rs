// ABOUTME: Integration tests for planner configuration defaults and environment overrides
// ABOUTME: Serialized because tests mutate process-wide MEAL_PLANNER_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_meal_planner::config::{ConfigError, PlannerConfig};
use pierre_meal_planner::errors::{AppError, ErrorCode};
use pierre_meal_planner::intelligence::TerminationPolicy;
use serial_test::serial;
use std::env;
use std::path::Path;

const PLANNER_VARS: [&str; 14] = [
    "MEAL_PLANNER_DATASET_PATH",
    "MEAL_PLANNER_COLUMN_NAME",
    "MEAL_PLANNER_COLUMN_CALORIES",
    "MEAL_PLANNER_COLUMN_PROTEIN",
    "MEAL_PLANNER_COLUMN_CARBS",
    "MEAL_PLANNER_COLUMN_FAT",
    "MEAL_PLANNER_CALORIE_TARGET",
    "MEAL_PLANNER_PROTEIN_TARGET",
    "MEAL_PLANNER_CARB_TARGET",
    "MEAL_PLANNER_FAT_TARGET",
    "MEAL_PLANNER_MAX_ITERATIONS",
    "MEAL_PLANNER_TERMINATION",
    "MEAL_PLANNER_KEYWORDS",
    "MEAL_PLANNER_COMPARISON_MAX_ITEMS",
];

fn clear_planner_env() {
    for var in PLANNER_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Default Configuration Tests
// ============================================================================

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_planner_env();

    let config = PlannerConfig::load().expect("default config");

    assert_eq!(config.dataset.path, Path::new("Food_Nutrition_Dataset.csv"));
    assert_eq!(config.dataset.columns.name, "food");
    assert_eq!(config.dataset.columns.calories, "Caloric Value");
    assert!((config.generator.calorie_target - 600.0).abs() < f64::EPSILON);
    assert!((config.generator.protein_target_g - 30.0).abs() < f64::EPSILON);
    assert!((config.generator.carb_target_g - 50.0).abs() < f64::EPSILON);
    assert!((config.generator.fat_target_g - 20.0).abs() < f64::EPSILON);
    assert_eq!(config.generator.max_iterations, 1000);
    assert_eq!(config.generator.termination, TerminationPolicy::CaloriesAndProtein);
    assert_eq!(config.generator.keywords.len(), 7);
    assert_eq!(config.comparison.max_items, 3);
    assert!((config.filters.protein_min_g - 20.0).abs() < f64::EPSILON);
}

// ============================================================================
// Environment Override Tests
// ============================================================================

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_planner_env();
    env::set_var("MEAL_PLANNER_DATASET_PATH", "/data/foods.csv");
    env::set_var("MEAL_PLANNER_COLUMN_CALORIES", "kcal");
    env::set_var("MEAL_PLANNER_CALORIE_TARGET", "750");
    env::set_var("MEAL_PLANNER_MAX_ITERATIONS", " 50 ");
    env::set_var("MEAL_PLANNER_TERMINATION", "all_targets");
    env::set_var("MEAL_PLANNER_KEYWORDS", "Grilled, steamed,,");
    env::set_var("MEAL_PLANNER_COMPARISON_MAX_ITEMS", "5");

    let config = PlannerConfig::load().expect("config with overrides");
    clear_planner_env();

    assert_eq!(config.dataset.path, Path::new("/data/foods.csv"));
    assert_eq!(config.dataset.columns.calories, "kcal");
    assert!((config.generator.calorie_target - 750.0).abs() < f64::EPSILON);
    assert_eq!(config.generator.max_iterations, 50);
    assert_eq!(config.generator.termination, TerminationPolicy::AllTargets);
    assert_eq!(config.generator.keywords, vec!["grilled", "steamed"]);
    assert_eq!(config.comparison.max_items, 5);
}

#[test]
#[serial]
fn test_unparseable_number_is_parse_error() {
    clear_planner_env();
    env::set_var("MEAL_PLANNER_PROTEIN_TARGET", "plenty");

    let result = PlannerConfig::load();
    clear_planner_env();

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("MEAL_PLANNER_PROTEIN_TARGET"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_unknown_termination_policy_is_rejected() {
    clear_planner_env();
    env::set_var("MEAL_PLANNER_TERMINATION", "eventually");

    let result = PlannerConfig::load();
    clear_planner_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
#[serial]
fn test_zero_iterations_fails_validation() {
    clear_planner_env();
    env::set_var("MEAL_PLANNER_MAX_ITERATIONS", "0");

    let result = PlannerConfig::load();
    clear_planner_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_negative_target_fails_validation() {
    clear_planner_env();
    env::set_var("MEAL_PLANNER_FAT_TARGET", "-1");

    let result = PlannerConfig::load();
    clear_planner_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_blank_keywords_fail_validation() {
    clear_planner_env();
    env::set_var("MEAL_PLANNER_KEYWORDS", " , ");

    let result = PlannerConfig::load();
    clear_planner_env();

    assert!(matches!(
        result,
        Err(ConfigError::MissingField("generator.keywords"))
    ));
}

#[test]
fn test_blank_column_mapping_fails_validation() {
    let mut config = PlannerConfig::default();
    config.dataset.columns.protein = "   ".to_owned();

    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::Parse("Invalid MEAL_PLANNER_CARB_TARGET: x".into()).into();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("MEAL_PLANNER_CARB_TARGET"));
}

#[test]
fn test_out_of_range_config_maps_to_value_out_of_range() {
    let error: AppError =
        ConfigError::ValueOutOfRange("comparison.max_items must be at least 1").into();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(error.message.contains("comparison.max_items"));
}
