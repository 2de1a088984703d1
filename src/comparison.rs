// ABOUTME: Side-by-side food comparison table with a fixed capacity
// ABOUTME: Holds owned food copies for nutrient comparison; rejects additions once full
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ComparisonConfig;
use planner_core::errors::{AppError, AppResult};
use planner_core::models::FoodItem;
use serde_json::json;
use tracing::debug;

/// Foods selected for comparison, in selection order
#[derive(Debug, Clone)]
pub struct ComparisonTable {
    items: Vec<FoodItem>,
    max_items: usize,
}

impl ComparisonTable {
    /// Empty table holding at most `max_items` foods
    #[must_use]
    pub fn with_capacity(max_items: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_items),
            max_items,
        }
    }

    /// Empty table sized from configuration
    #[must_use]
    pub fn from_config(config: &ComparisonConfig) -> Self {
        Self::with_capacity(config.max_items)
    }

    /// Add a food to the table
    ///
    /// # Errors
    ///
    /// Returns `ResourceLimitExceeded` when the table is already full
    pub fn add(&mut self, food: FoodItem) -> AppResult<()> {
        if self.is_full() {
            return Err(AppError::limit_exceeded("comparison table", self.max_items)
                .with_details(json!({
                    "limit": self.max_items,
                    "rejected": food.name,
                })));
        }
        debug!(food = %food.name, "Food added to comparison table");
        self.items.push(food);
        Ok(())
    }

    /// Remove every food
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Foods in selection order
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Configured capacity
    #[must_use]
    pub const fn max_items(&self) -> usize {
        self.max_items
    }

    /// Number of foods in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the table holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when no more foods can be added
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_items
    }
}

impl Default for ComparisonTable {
    fn default() -> Self {
        Self::from_config(&ComparisonConfig::default())
    }
}
