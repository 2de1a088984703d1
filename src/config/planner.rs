// ABOUTME: Planner configuration for the dataset, search filters, meal generator and comparison table
// ABOUTME: Loads defaults, applies MEAL_PLANNER_* environment overrides and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use crate::dataset::ColumnMapping;
use crate::intelligence::TerminationPolicy;
use crate::search::FilterThresholds;
use planner_core::constants::{comparison, dataset, generation};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Complete planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Where the nutrition dataset lives and how its columns are named
    pub dataset: DatasetConfig,
    /// Search filter thresholds (fixed, not environment-configurable)
    pub filters: FilterThresholds,
    /// Balanced-meal generator targets and limits
    pub generator: GeneratorConfig,
    /// Food comparison table settings
    pub comparison: ComparisonConfig,
}

/// Dataset location and schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path of the CSV dataset
    pub path: PathBuf,
    /// Header names for each semantic field
    pub columns: ColumnMapping,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(dataset::DEFAULT_PATH),
            columns: ColumnMapping::default(),
        }
    }
}

/// Balanced-meal generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Calories a meal must reach (kcal)
    pub calorie_target: f64,
    /// Protein a meal must reach (grams)
    pub protein_target_g: f64,
    /// Carbohydrate target (grams)
    pub carb_target_g: f64,
    /// Fat target (grams)
    pub fat_target_g: f64,
    /// Maximum draws per meal before giving up
    pub max_iterations: usize,
    /// Which targets end sampling
    pub termination: TerminationPolicy,
    /// Name keywords that make a food eligible
    pub keywords: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            calorie_target: generation::CALORIE_TARGET,
            protein_target_g: generation::PROTEIN_TARGET_G,
            carb_target_g: generation::CARB_TARGET_G,
            fat_target_g: generation::FAT_TARGET_G,
            max_iterations: generation::MAX_ITERATIONS,
            termination: TerminationPolicy::default(),
            keywords: generation::PREPARED_FOOD_KEYWORDS
                .iter()
                .map(|&keyword| keyword.to_owned())
                .collect(),
        }
    }
}

impl GeneratorConfig {
    /// Validate targets, iteration cap and keywords
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-positive targets or a zero
    /// iteration cap, and `ConfigError::MissingField` when no usable keyword remains
    pub fn validate(&self) -> Result<(), ConfigError> {
        let targets = [
            ("calorie target must be positive", self.calorie_target),
            ("protein target must be positive", self.protein_target_g),
            ("carb target must be positive", self.carb_target_g),
            ("fat target must be positive", self.fat_target_g),
        ];
        for (message, value) in targets {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_iterations must be at least 1",
            ));
        }

        if self.keywords.iter().all(|keyword| keyword.trim().is_empty()) {
            return Err(ConfigError::MissingField("generator.keywords"));
        }

        Ok(())
    }
}

/// Food comparison table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Maximum number of foods compared side by side
    pub max_items: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            max_items: comparison::MAX_ITEMS,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            dataset = %config.dataset.path.display(),
            termination = ?config.generator.termination,
            max_iterations = config.generator.max_iterations,
            "Planner configuration loaded"
        );
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("dataset.path"));
        }
        self.dataset.columns.validate()?;
        self.generator.validate()?;
        if self.comparison.max_items == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "comparison.max_items must be at least 1",
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Dataset overrides
        if let Some(path) = env_string("MEAL_PLANNER_DATASET_PATH")? {
            self.dataset.path = PathBuf::from(path);
        }

        let columns = &mut self.dataset.columns;
        let column_vars = [
            ("MEAL_PLANNER_COLUMN_NAME", &mut columns.name),
            ("MEAL_PLANNER_COLUMN_CALORIES", &mut columns.calories),
            ("MEAL_PLANNER_COLUMN_PROTEIN", &mut columns.protein),
            ("MEAL_PLANNER_COLUMN_CARBS", &mut columns.carbs),
            ("MEAL_PLANNER_COLUMN_FAT", &mut columns.fat),
        ];
        for (var, field) in column_vars {
            if let Some(header) = env_string(var)? {
                *field = header;
            }
        }

        // Generator overrides
        let generator = &mut self.generator;
        if let Some(value) = env_parse("MEAL_PLANNER_CALORIE_TARGET")? {
            generator.calorie_target = value;
        }
        if let Some(value) = env_parse("MEAL_PLANNER_PROTEIN_TARGET")? {
            generator.protein_target_g = value;
        }
        if let Some(value) = env_parse("MEAL_PLANNER_CARB_TARGET")? {
            generator.carb_target_g = value;
        }
        if let Some(value) = env_parse("MEAL_PLANNER_FAT_TARGET")? {
            generator.fat_target_g = value;
        }
        if let Some(value) = env_parse("MEAL_PLANNER_MAX_ITERATIONS")? {
            generator.max_iterations = value;
        }
        if let Some(value) = env_parse("MEAL_PLANNER_TERMINATION")? {
            generator.termination = value;
        }
        if let Some(value) = env_string("MEAL_PLANNER_KEYWORDS")? {
            generator.keywords = value
                .split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(str::to_lowercase)
                .collect();
        }

        // Comparison overrides
        if let Some(value) = env_parse("MEAL_PLANNER_COMPARISON_MAX_ITEMS")? {
            self.comparison.max_items = value;
        }

        Ok(self)
    }
}

/// Read an environment variable, treating "not set" as `None`
fn env_string(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(ConfigError::EnvVar(err)),
    }
}

/// Read and parse an environment variable
fn env_parse<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    env_string(name)?
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {raw}")))
        })
        .transpose()
}
