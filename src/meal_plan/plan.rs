// ABOUTME: Meal plan slot storage keyed by day and meal type
// ABOUTME: Every one of the 28 slots always exists; entries carry stable identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::models::{Day, FoodItem, MealType};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of one plan entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Fresh random identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A food placed in a meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Identifier assigned when the entry was added
    pub id: EntryId,
    /// Owned copy of the food
    pub food: FoodItem,
}

type DaySlots = [Vec<PlanEntry>; 4];

/// Weekly plan: day -> meal -> ordered entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    days: [DaySlots; 7],
}

impl MealPlan {
    /// Plan with all 28 slots empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in one slot, in insertion order
    #[must_use]
    pub fn slot(&self, day: Day, meal: MealType) -> &[PlanEntry] {
        &self.days[day.index()][meal.index()]
    }

    pub(crate) fn slot_mut(&mut self, day: Day, meal: MealType) -> &mut Vec<PlanEntry> {
        &mut self.days[day.index()][meal.index()]
    }

    /// Meals of one day with their entries, in meal order
    pub fn day(&self, day: Day) -> impl Iterator<Item = (MealType, &[PlanEntry])> {
        let slots = &self.days[day.index()];
        MealType::ALL
            .into_iter()
            .map(move |meal| (meal, slots[meal.index()].as_slice()))
    }

    /// Every slot in day then meal order, including empty ones
    pub fn slots(&self) -> impl Iterator<Item = (Day, MealType, &[PlanEntry])> {
        Day::ALL.into_iter().flat_map(move |day| {
            self.day(day)
                .map(move |(meal, entries)| (day, meal, entries))
        })
    }

    /// Total entries across the week
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.slots().map(|(_, _, entries)| entries.len()).sum()
    }

    /// True when every slot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots().all(|(_, _, entries)| entries.is_empty())
    }

    /// Empty every slot, keeping all 28 slots present
    pub fn clear(&mut self) {
        self.days
            .iter_mut()
            .flat_map(|slots| slots.iter_mut())
            .for_each(Vec::clear);
    }
}
