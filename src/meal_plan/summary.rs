// ABOUTME: Daily and weekly views over the meal plan with aggregated nutrient totals
// ABOUTME: Produces display rows and the one-line nutrient summary shown under the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::plan::{EntryId, MealPlan};
use planner_core::models::{Day, FoodItem, MacroTotals, MealType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the plan a view covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanScope {
    /// A single day
    Day(Day),
    /// All seven days
    Week,
}

impl PlanScope {
    /// Daily scope for the local calendar day, the default plan view
    #[must_use]
    pub fn today() -> Self {
        Self::Day(Day::today())
    }

    /// Whether `day` falls inside this scope
    #[must_use]
    pub fn includes(self, day: Day) -> bool {
        match self {
            Self::Day(selected) => selected == day,
            Self::Week => true,
        }
    }
}

/// One displayed plan line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanRow<'a> {
    /// Day of the entry
    pub day: Day,
    /// Meal of the entry
    pub meal: MealType,
    /// Entry identifier, for remove/change by selection
    pub id: EntryId,
    /// The food
    pub food: &'a FoodItem,
}

/// Nutrient totals for a scope
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientSummary {
    /// Covered scope
    pub scope: PlanScope,
    /// Summed nutrients
    pub totals: MacroTotals,
}

impl fmt::Display for NutrientSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let period = match self.scope {
            PlanScope::Day(_) => "day",
            PlanScope::Week => "week",
        };
        let MacroTotals {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        } = self.totals;
        write!(
            f,
            "Total for the {period}: Calories: {calories:.0}, Protein: {protein_g:.1}g, \
             Carbs: {carbs_g:.1}g, Fat: {fat_g:.1}g"
        )
    }
}

impl MealPlan {
    /// Entries in scope, ordered by day, meal, then insertion
    pub fn rows(&self, scope: PlanScope) -> impl Iterator<Item = PlanRow<'_>> {
        self.slots()
            .filter(move |(day, _, _)| scope.includes(*day))
            .flat_map(|(day, meal, entries)| {
                entries.iter().map(move |entry| PlanRow {
                    day,
                    meal,
                    id: entry.id,
                    food: &entry.food,
                })
            })
    }

    /// Summed nutrients of every entry in scope
    #[must_use]
    pub fn totals(&self, scope: PlanScope) -> MacroTotals {
        self.rows(scope).map(|row| row.food).sum()
    }

    /// Totals packaged with their scope for display
    #[must_use]
    pub fn summary(&self, scope: PlanScope) -> NutrientSummary {
        NutrientSummary {
            scope,
            totals: self.totals(scope),
        }
    }
}
