// ABOUTME: Balanced-meal generator sampling prepared foods until nutrient targets are met
// ABOUTME: Uniform draws with replacement, configurable stop policy and a hard iteration cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Balanced Meal Generator
//!
//! # Algorithm
//!
//! 1. Keep foods whose name contains any configured keyword ("grilled",
//!    "baked", ...), ignoring case. No eligible food yields an empty meal.
//! 2. Draw one eligible food uniformly at random (with replacement), add its
//!    nutrients to the running totals and append it to the meal.
//! 3. Stop as soon as the [`TerminationPolicy`] is satisfied.
//!
//! Under the default policy only the calorie and protein targets end
//! sampling. The carbohydrate and fat targets are still part of the
//! configuration and can be made binding with [`TerminationPolicy::AllTargets`].
//!
//! Sampling is capped at `max_iterations` draws; hitting the cap without
//! satisfying the policy is a `GenerationLimitExceeded` error.

use crate::config::GeneratorConfig;
use crate::dataset::FoodDatabase;
use planner_core::errors::{AppError, AppResult};
use planner_core::models::{FoodItem, MacroTotals};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Which targets must be reached before sampling stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationPolicy {
    /// Calories and protein targets reached; carb and fat targets ignored
    #[default]
    CaloriesAndProtein,
    /// All four targets reached
    AllTargets,
    /// Calorie target reached
    CaloriesOnly,
}

impl TerminationPolicy {
    /// Whether `totals` end sampling under this policy
    #[must_use]
    pub fn is_satisfied(self, totals: &MacroTotals, config: &GeneratorConfig) -> bool {
        let calories = totals.calories >= config.calorie_target;
        let protein = totals.protein_g >= config.protein_target_g;
        match self {
            Self::CaloriesOnly => calories,
            Self::CaloriesAndProtein => calories && protein,
            Self::AllTargets => {
                calories
                    && protein
                    && totals.carbs_g >= config.carb_target_g
                    && totals.fat_g >= config.fat_target_g
            }
        }
    }
}

impl FromStr for TerminationPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calories_and_protein" => Ok(Self::CaloriesAndProtein),
            "all_targets" => Ok(Self::AllTargets),
            "calories_only" => Ok(Self::CaloriesOnly),
            other => Err(AppError::invalid_input(format!(
                "unknown termination policy '{other}'"
            ))),
        }
    }
}

/// A generated meal
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BalancedMeal {
    /// Drawn foods in draw order
    pub foods: Vec<FoodItem>,
    /// Summed nutrients of `foods`
    pub totals: MacroTotals,
    /// Number of draws made
    pub iterations: usize,
}

impl BalancedMeal {
    /// True when no eligible food existed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Whether a food name contains any of the (lowercase) keywords
#[must_use]
pub fn is_prepared_food(name: &str, keywords: &[String]) -> bool {
    let name = name.to_lowercase();
    keywords.iter().any(|keyword| name.contains(keyword.as_str()))
}

/// Generator bound to one database and configuration
///
/// Eligible foods are selected once, so repeated generation (one meal per slot
/// of a weekly plan) does not rescan the dataset.
#[derive(Debug, Clone)]
pub struct BalancedMealGenerator<'a> {
    eligible: Vec<&'a FoodItem>,
    config: &'a GeneratorConfig,
}

impl<'a> BalancedMealGenerator<'a> {
    /// Select eligible foods from the database
    #[must_use]
    pub fn new(database: &'a FoodDatabase, config: &'a GeneratorConfig) -> Self {
        let keywords: Vec<String> = config
            .keywords
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        let eligible: Vec<&FoodItem> = database
            .foods()
            .filter(|food| is_prepared_food(&food.name, &keywords))
            .collect();

        if eligible.is_empty() {
            warn!(
                dataset_rows = database.len(),
                "No prepared foods found in the dataset"
            );
        } else {
            debug!(
                eligible = eligible.len(),
                dataset_rows = database.len(),
                "Balanced meal candidates selected"
            );
        }

        Self { eligible, config }
    }

    /// Number of foods that can be drawn
    #[must_use]
    pub fn eligible_count(&self) -> usize {
        self.eligible.len()
    }

    /// Draw foods until the configured policy is satisfied
    ///
    /// # Errors
    ///
    /// Returns `GenerationLimitExceeded` when `max_iterations` draws do not
    /// satisfy the termination policy
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> AppResult<BalancedMeal> {
        let mut meal = BalancedMeal::default();
        if self.eligible.is_empty() {
            return Ok(meal);
        }

        while meal.iterations < self.config.max_iterations {
            let Some(&food) = self.eligible.choose(rng) else {
                break;
            };

            meal.totals.add(food);
            meal.foods.push(food.clone());
            meal.iterations += 1;

            if self.config.termination.is_satisfied(&meal.totals, self.config) {
                debug!(
                    iterations = meal.iterations,
                    calories = meal.totals.calories,
                    protein_g = meal.totals.protein_g,
                    carbs_g = meal.totals.carbs_g,
                    fat_g = meal.totals.fat_g,
                    carb_target_met = meal.totals.carbs_g >= self.config.carb_target_g,
                    fat_target_met = meal.totals.fat_g >= self.config.fat_target_g,
                    "Balanced meal generated"
                );
                return Ok(meal);
            }
        }

        warn!(
            max_iterations = self.config.max_iterations,
            calories = meal.totals.calories,
            protein_g = meal.totals.protein_g,
            "Balanced meal targets not reached"
        );
        Err(AppError::generation_limit(self.config.max_iterations))
    }
}

/// Generate one balanced meal from the database
///
/// # Errors
///
/// Returns `GenerationLimitExceeded` when the iteration cap is reached
pub fn generate_balanced_meal<R: Rng + ?Sized>(
    database: &FoodDatabase,
    config: &GeneratorConfig,
    rng: &mut R,
) -> AppResult<BalancedMeal> {
    BalancedMealGenerator::new(database, config).generate(rng)
}
