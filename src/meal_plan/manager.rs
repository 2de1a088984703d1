// ABOUTME: Meal plan manager implementing add, remove, change and clear operations
// ABOUTME: Name-based operations act on the first match; id-based variants are exact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::plan::{EntryId, MealPlan, PlanEntry};
use planner_core::models::{Day, FoodItem, MealType};
use tracing::debug;

/// Owns the in-memory weekly meal plan
///
/// Holds no references to the dataset or the presentation layer; callers pass
/// the manager explicitly to whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct MealPlanManager {
    plan: MealPlan,
}

impl MealPlanManager {
    /// Manager with an empty plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a food to a slot; duplicates are allowed
    pub fn add_food(&mut self, day: Day, meal: MealType, food: FoodItem) -> EntryId {
        let id = EntryId::new();
        debug!(%day, %meal, food = %food.name, %id, "Food added to meal plan");
        self.plan.slot_mut(day, meal).push(PlanEntry { id, food });
        id
    }

    /// Remove the first entry in the slot named `food_name`
    ///
    /// Returns the removed entry, or `None` (plan unchanged) when no entry matches.
    pub fn remove_food(
        &mut self,
        day: Day,
        meal: MealType,
        food_name: &str,
    ) -> Option<PlanEntry> {
        let slot = self.plan.slot_mut(day, meal);
        let position = slot.iter().position(|entry| entry.food.name == food_name)?;
        let removed = slot.remove(position);
        debug!(%day, %meal, food = %removed.food.name, "Food removed from meal plan");
        Some(removed)
    }

    /// Remove the entry with the given id
    pub fn remove_entry(&mut self, day: Day, meal: MealType, id: EntryId) -> Option<PlanEntry> {
        let slot = self.plan.slot_mut(day, meal);
        let position = slot.iter().position(|entry| entry.id == id)?;
        Some(slot.remove(position))
    }

    /// Replace the first entry named `old_name` with `new_food`
    ///
    /// The replacement keeps the entry's position and id. Returns that id, or
    /// `None` (plan unchanged) when no entry matches.
    pub fn change_food(
        &mut self,
        day: Day,
        meal: MealType,
        old_name: &str,
        new_food: FoodItem,
    ) -> Option<EntryId> {
        let entry = self
            .plan
            .slot_mut(day, meal)
            .iter_mut()
            .find(|entry| entry.food.name == old_name)?;
        debug!(%day, %meal, old = %old_name, new = %new_food.name, "Food changed in meal plan");
        entry.food = new_food;
        Some(entry.id)
    }

    /// Replace the food of the entry with the given id
    ///
    /// Returns `false` when the slot has no such entry.
    pub fn change_entry(
        &mut self,
        day: Day,
        meal: MealType,
        id: EntryId,
        new_food: FoodItem,
    ) -> bool {
        self.plan
            .slot_mut(day, meal)
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| entry.food = new_food)
            .is_some()
    }

    /// Empty every slot
    pub fn clear_meal_plan(&mut self) {
        self.plan.clear();
        debug!("Meal plan cleared");
    }

    /// Read view of the whole plan
    #[must_use]
    pub const fn get_meal_plan(&self) -> &MealPlan {
        &self.plan
    }

    /// Total entries across every slot
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.plan.entry_count()
    }
}
