// ABOUTME: Core data models for food items, macro totals, days and meal types
// ABOUTME: Re-exports the food and meal modules for ergonomic imports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food items and aggregated macro totals
pub mod food;

/// Days of the week and meal types that address a meal slot
pub mod meal;

pub use food::{FoodItem, MacroTotals};
pub use meal::{Day, MealType, ParseSlotError};
