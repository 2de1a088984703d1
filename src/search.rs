// ABOUTME: Food search by name substring and macro threshold filters over the food database
// ABOUTME: High-protein, low-carb and low-fat filters combine with logical AND
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Search and Filters
//!
//! Both operations return borrowed records in dataset order so callers can
//! display every raw column.

use crate::dataset::{FoodDatabase, FoodRecord};
use planner_core::constants::filters;
use planner_core::models::FoodItem;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Threshold values behind the nutrient filters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterThresholds {
    /// High-protein keeps `protein_g > protein_min_g`
    pub protein_min_g: f64,
    /// Low-carb keeps `carbs_g < carbs_max_g`
    pub carbs_max_g: f64,
    /// Low-fat keeps `fat_g < fat_max_g`
    pub fat_max_g: f64,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            protein_min_g: filters::HIGH_PROTEIN_MIN_G,
            carbs_max_g: filters::LOW_CARB_MAX_G,
            fat_max_g: filters::LOW_FAT_MAX_G,
        }
    }
}

/// Independently toggleable nutrient filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientFilters {
    /// Keep only high-protein foods
    pub high_protein: bool,
    /// Keep only low-carb foods
    pub low_carb: bool,
    /// Keep only low-fat foods
    pub low_fat: bool,
}

impl NutrientFilters {
    /// True when no filter is enabled
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.high_protein || self.low_carb || self.low_fat)
    }

    /// Whether a food passes every enabled filter
    #[must_use]
    pub fn matches(&self, food: &FoodItem, thresholds: &FilterThresholds) -> bool {
        (!self.high_protein || food.protein_g > thresholds.protein_min_g)
            && (!self.low_carb || food.carbs_g < thresholds.carbs_max_g)
            && (!self.low_fat || food.fat_g < thresholds.fat_max_g)
    }
}

/// Records whose name contains `query`, ignoring case
///
/// An empty query matches every record.
#[must_use]
pub fn search<'a>(database: &'a FoodDatabase, query: &str) -> Vec<&'a FoodRecord> {
    let needle = query.to_lowercase();
    let results: Vec<&FoodRecord> = database
        .records()
        .iter()
        .filter(|record| record.food.name_contains(&needle))
        .collect();
    debug!(query = %needle, matches = results.len(), "Food search");
    results
}

/// Records satisfying every enabled filter
///
/// With no filter enabled every record is returned.
#[must_use]
pub fn apply_filters<'a>(
    database: &'a FoodDatabase,
    filters: &NutrientFilters,
    thresholds: &FilterThresholds,
) -> Vec<&'a FoodRecord> {
    let results: Vec<&FoodRecord> = database
        .records()
        .iter()
        .filter(|record| filters.matches(&record.food, thresholds))
        .collect();
    debug!(?filters, matches = results.len(), "Nutrient filters applied");
    results
}
