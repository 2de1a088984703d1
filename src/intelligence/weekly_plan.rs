// ABOUTME: Weekly plan generation filling every day and meal with a generated balanced meal
// ABOUTME: Generates all 28 meals first and replaces the plan only when every slot succeeded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::balanced_meal::{BalancedMeal, BalancedMealGenerator};
use crate::config::GeneratorConfig;
use crate::dataset::FoodDatabase;
use crate::meal_plan::MealPlanManager;
use planner_core::errors::AppResult;
use planner_core::models::{Day, MealType};
use rand::Rng;
use tracing::{info, warn};

/// Replace the whole plan with one generated meal per slot
///
/// Returns the number of entries added. With no eligible foods the plan ends
/// up empty and zero is returned.
///
/// # Errors
///
/// Returns `GenerationLimitExceeded` if any slot's meal hits the iteration
/// cap; the existing plan is left unchanged
pub fn generate_weekly_plan<R: Rng + ?Sized>(
    manager: &mut MealPlanManager,
    database: &FoodDatabase,
    config: &GeneratorConfig,
    rng: &mut R,
) -> AppResult<usize> {
    let generator = BalancedMealGenerator::new(database, config);

    let mut meals: Vec<(Day, MealType, BalancedMeal)> =
        Vec::with_capacity(Day::ALL.len() * MealType::ALL.len());
    for day in Day::ALL {
        for meal in MealType::ALL {
            let generated = generator.generate(rng).inspect_err(|err| {
                warn!(
                    %day,
                    %meal,
                    error = %err,
                    "Weekly plan generation aborted, plan unchanged"
                );
            })?;
            meals.push((day, meal, generated));
        }
    }

    manager.clear_meal_plan();
    let mut added = 0;
    for (day, meal, generated) in meals {
        added += generated.foods.len();
        for food in generated.foods {
            manager.add_food(day, meal, food);
        }
    }

    info!(entries = added, "Weekly meal plan generated");
    Ok(added)
}
