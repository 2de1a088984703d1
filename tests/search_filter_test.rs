// ABOUTME: Integration tests for food name search and nutrient threshold filters
// ABOUTME: Verifies case-insensitive matching and strict AND-combined filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{database_of, food};
use pierre_meal_planner::dataset::{FoodDatabase, FoodRecord};
use pierre_meal_planner::search::{apply_filters, search, FilterThresholds, NutrientFilters};

fn sample_database() -> FoodDatabase {
    database_of(vec![
        food("Grilled Chicken Breast", 284.0, 53.4, 0.0, 6.2),
        food("Chicken Noodle Soup", 160.0, 9.0, 20.0, 5.0),
        food("Egg White", 17.0, 3.6, 0.2, 0.1),
        food("Whey Protein Isolate", 110.0, 25.0, 1.0, 0.5),
        food("White Rice", 200.0, 4.0, 45.0, 0.4),
        food("Tuna In Water", 120.0, 20.0, 0.0, 1.0),
    ])
}

fn names<'a>(records: impl IntoIterator<Item = &'a FoodRecord>) -> Vec<&'a str> {
    records
        .into_iter()
        .map(|record| record.food.name.as_str())
        .collect()
}

// ============================================================================
// Search Tests
// ============================================================================

#[test]
fn test_search_ignores_case() {
    let database = sample_database();

    let results = search(&database, "cHiCkEn");

    assert_eq!(
        names(results),
        vec!["Grilled Chicken Breast", "Chicken Noodle Soup"]
    );
}

#[test]
fn test_search_matches_substring_anywhere() {
    let database = sample_database();
    assert_eq!(names(search(&database, "white")), vec!["Egg White", "White Rice"]);
}

#[test]
fn test_empty_query_returns_every_row() {
    let database = sample_database();
    assert_eq!(search(&database, "").len(), database.len());
}

#[test]
fn test_search_without_match_is_empty() {
    let database = sample_database();
    assert!(search(&database, "quinoa").is_empty());
}

// ============================================================================
// Filter Tests
// ============================================================================

#[test]
fn test_no_filters_returns_every_row() {
    let database = sample_database();
    let filters = NutrientFilters::default();

    assert!(filters.is_empty());
    assert_eq!(
        apply_filters(&database, &filters, &FilterThresholds::default()).len(),
        database.len()
    );
}

#[test]
fn test_high_protein_is_strictly_greater() {
    let database = sample_database();
    let filters = NutrientFilters {
        high_protein: true,
        ..NutrientFilters::default()
    };

    let results = apply_filters(&database, &filters, &FilterThresholds::default());

    // Tuna has exactly 20 g protein and is excluded
    assert_eq!(
        names(results),
        vec!["Grilled Chicken Breast", "Whey Protein Isolate"]
    );
}

#[test]
fn test_low_carb_and_low_fat_are_strict() {
    let database = sample_database();
    let filters = NutrientFilters {
        low_carb: true,
        low_fat: true,
        ..NutrientFilters::default()
    };

    let results = apply_filters(&database, &filters, &FilterThresholds::default());

    // Soup (20 g carbs, 5 g fat) sits on both boundaries
    assert_eq!(
        names(results),
        vec!["Egg White", "Whey Protein Isolate", "Tuna In Water"]
    );
}

#[test]
fn test_filters_combine_with_and() {
    let database = sample_database();
    let filters = NutrientFilters {
        high_protein: true,
        low_carb: true,
        low_fat: true,
    };

    let results = apply_filters(&database, &filters, &FilterThresholds::default());

    for record in &results {
        assert!(record.food.protein_g > 20.0);
        assert!(record.food.carbs_g < 20.0);
        assert!(record.food.fat_g < 5.0);
    }
    assert_eq!(names(results), vec!["Whey Protein Isolate"]);
}

#[test]
fn test_custom_thresholds() {
    let database = sample_database();
    let filters = NutrientFilters {
        high_protein: true,
        ..NutrientFilters::default()
    };
    let thresholds = FilterThresholds {
        protein_min_g: 10.0,
        ..FilterThresholds::default()
    };

    let results = apply_filters(&database, &filters, &thresholds);

    assert_eq!(
        names(results),
        vec!["Grilled Chicken Breast", "Whey Protein Isolate", "Tuna In Water"]
    );
}

#[test]
fn test_protein_filter_keeps_only_rows_above_threshold() {
    let database = database_of(vec![
        food("Protein Bar", 200.0, 25.0, 22.0, 7.0),
        food("Granola", 200.0, 10.0, 30.0, 6.0),
    ]);
    let filters = NutrientFilters {
        high_protein: true,
        ..NutrientFilters::default()
    };

    let results = apply_filters(&database, &filters, &FilterThresholds::default());

    assert_eq!(names(results), vec!["Protein Bar"]);
}
