// ABOUTME: Food item model and macro totals shared by search, comparison and meal planning
// ABOUTME: FoodItem is an owned nutrition record; MacroTotals accumulates calories and macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::AddAssign;

/// A single nutrition record read from the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name as it appears in the dataset
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
}

impl FoodItem {
    /// Create a food item from its name and nutrient values
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Case-insensitive substring match on the food name
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// Running or aggregated nutrient totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
}

impl MacroTotals {
    /// Add one food's nutrients to the totals
    pub fn add(&mut self, food: &FoodItem) {
        self.calories += food.calories;
        self.protein_g += food.protein_g;
        self.carbs_g += food.carbs_g;
        self.fat_g += food.fat_g;
    }
}

impl AddAssign<&FoodItem> for MacroTotals {
    fn add_assign(&mut self, food: &FoodItem) {
        self.add(food);
    }
}

impl<'a> Sum<&'a FoodItem> for MacroTotals {
    fn sum<I: Iterator<Item = &'a FoodItem>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut totals, food| {
            totals.add(food);
            totals
        })
    }
}
