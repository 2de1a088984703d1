// ABOUTME: Planner constants for nutrient targets, filter thresholds and dataset layout
// ABOUTME: Default values consumed by configuration, search filters and the meal generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner-wide constants organized by domain.

/// Balanced-meal generation defaults
pub mod generation {
    /// Calories a generated meal must reach (kcal)
    pub const CALORIE_TARGET: f64 = 600.0;
    /// Protein a generated meal must reach (grams)
    pub const PROTEIN_TARGET_G: f64 = 30.0;
    /// Carbohydrate target (grams); reported, gates only under `AllTargets`
    pub const CARB_TARGET_G: f64 = 50.0;
    /// Fat target (grams); reported, gates only under `AllTargets`
    pub const FAT_TARGET_G: f64 = 20.0;
    /// Upper bound on draws for a single meal
    pub const MAX_ITERATIONS: usize = 1000;
    /// Name keywords that mark a food as a prepared dish
    pub const PREPARED_FOOD_KEYWORDS: [&str; 7] = [
        "cooked", "baked", "grilled", "roasted", "fried", "stewed", "braised",
    ];
}

/// Search filter thresholds (strict comparisons)
pub mod filters {
    /// "High protein" keeps foods with more than this many grams of protein
    pub const HIGH_PROTEIN_MIN_G: f64 = 20.0;
    /// "Low carb" keeps foods with fewer than this many grams of carbohydrates
    pub const LOW_CARB_MAX_G: f64 = 20.0;
    /// "Low fat" keeps foods with fewer than this many grams of fat
    pub const LOW_FAT_MAX_G: f64 = 5.0;
}

/// Nutrition dataset layout
pub mod dataset {
    /// Dataset file read when no path is configured
    pub const DEFAULT_PATH: &str = "Food_Nutrition_Dataset.csv";
    /// Header of the food name column
    pub const NAME_COLUMN: &str = "food";
    /// Header of the calories column
    pub const CALORIES_COLUMN: &str = "Caloric Value";
    /// Header of the protein column
    pub const PROTEIN_COLUMN: &str = "Protein";
    /// Header of the carbohydrates column
    pub const CARBS_COLUMN: &str = "Carbohydrates";
    /// Header of the fat column
    pub const FAT_COLUMN: &str = "Fat";
}

/// Food comparison table
pub mod comparison {
    /// Maximum number of foods compared side by side
    pub const MAX_ITEMS: usize = 3;
}

/// Service names used in structured logging
pub mod service_names {
    /// Name reported by the planner library
    pub const MEAL_PLANNER: &str = "pierre-meal-planner";
}
