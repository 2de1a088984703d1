// ABOUTME: Meal intelligence: balanced-meal sampling and weekly plan generation
// ABOUTME: Randomness is always injected so callers can seed runs for reproducibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! - [`balanced_meal`]: samples prepared foods until nutrient targets are met
//! - [`weekly_plan`]: fills all 28 meal slots with generated meals
//!
//! Every generator takes a `rand::Rng`. Use [`seeded_rng`] for reproducible
//! output and [`entropy_rng`] for everyday use.

/// Balanced-meal sampling
pub mod balanced_meal;

/// Whole-week plan generation
pub mod weekly_plan;

pub use balanced_meal::{
    generate_balanced_meal, is_prepared_food, BalancedMeal, BalancedMealGenerator,
    TerminationPolicy,
};
pub use weekly_plan::generate_weekly_plan;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic random source for reproducible meal generation
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random source seeded from the operating system
#[must_use]
pub fn entropy_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}
