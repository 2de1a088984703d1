// ABOUTME: Typed, read-only food database built from a schema-validated dataset table
// ABOUTME: Supports empty fallback when the dataset file cannot be read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::loader::load_table;
use super::schema::{ColumnMapping, NutritionSchema};
use super::table::{CellValue, DatasetRow, DatasetTable};
use crate::config::DatasetConfig;
use planner_core::errors::{AppError, AppResult};
use planner_core::models::FoodItem;
use tracing::{debug, error};

/// One dataset row with its typed nutrition view
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRecord {
    /// Typed nutrition values
    pub food: FoodItem,
    /// Raw cells, for callers that display every column
    pub row: DatasetRow,
}

/// Read-only collection of food records
#[derive(Debug, Clone, Default)]
pub struct FoodDatabase {
    headers: Vec<String>,
    records: Vec<FoodRecord>,
}

/// Result of a load that tolerates an unreadable dataset
#[derive(Debug)]
pub struct DatasetLoad {
    /// Loaded database, or an empty one when the file could not be read
    pub database: FoodDatabase,
    /// The read failure, reported once to the caller
    pub error: Option<AppError>,
}

impl FoodDatabase {
    /// Database with no columns and no rows
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate a table against the column mapping and convert every row
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when a mapped column is absent and
    /// `InvalidFormat` when a nutrient cell is not numeric
    pub fn from_table(table: DatasetTable, mapping: &ColumnMapping) -> AppResult<Self> {
        let schema = NutritionSchema::resolve(&table, mapping)?;
        let (headers, rows) = table.into_parts();

        let records = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let food = schema.food_from_row(&row, index + 1)?;
                Ok(FoodRecord { food, row })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { headers, records })
    }

    /// Load and validate the configured dataset
    ///
    /// # Errors
    ///
    /// Returns any read, schema or format error
    pub fn load(config: &DatasetConfig) -> AppResult<Self> {
        let table = load_table(&config.path)?;
        Self::from_table(table, &config.columns)
    }

    /// Load the configured dataset, falling back to an empty database when the
    /// file cannot be read
    ///
    /// # Errors
    ///
    /// Schema and format errors still propagate; only read failures fall back
    pub fn load_or_empty(config: &DatasetConfig) -> AppResult<DatasetLoad> {
        match load_table(&config.path) {
            Ok(table) => Ok(DatasetLoad {
                database: Self::from_table(table, &config.columns)?,
                error: None,
            }),
            Err(err) => {
                error!(
                    path = %config.path.display(),
                    error = %err,
                    "Error loading dataset, continuing with an empty food database"
                );
                Ok(DatasetLoad {
                    database: Self::empty(),
                    error: Some(err),
                })
            }
        }
    }

    /// Column headers of the source table
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All records in dataset order
    #[must_use]
    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    /// Typed foods in dataset order
    pub fn foods(&self) -> impl Iterator<Item = &FoodItem> {
        self.records.iter().map(|record| &record.food)
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<FoodItem> for FoodDatabase {
    /// Build an in-memory database from foods, synthesizing rows for the
    /// default column layout
    fn from_iter<I: IntoIterator<Item = FoodItem>>(iter: I) -> Self {
        let mapping = ColumnMapping::default();
        let headers = vec![
            mapping.name,
            mapping.calories,
            mapping.protein,
            mapping.carbs,
            mapping.fat,
        ];
        let records: Vec<FoodRecord> = iter
            .into_iter()
            .map(|food| {
                let row = DatasetRow::new(vec![
                    CellValue::Text(food.name.clone()),
                    CellValue::Number(food.calories),
                    CellValue::Number(food.protein_g),
                    CellValue::Number(food.carbs_g),
                    CellValue::Number(food.fat_g),
                ]);
                FoodRecord { food, row }
            })
            .collect();
        debug!(rows = records.len(), "In-memory food database built");
        Self { headers, records }
    }
}
