// ABOUTME: Explicit mapping from dataset headers to the semantic nutrient fields
// ABOUTME: Resolves column positions once at load and converts rows into FoodItem values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::table::{CellValue, DatasetRow, DatasetTable};
use crate::config::ConfigError;
use planner_core::constants::dataset;
use planner_core::errors::{AppError, AppResult};
use planner_core::models::FoodItem;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Semantic fields every dataset must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutrientField {
    /// Food name
    Name,
    /// Energy (kcal)
    Calories,
    /// Protein (grams)
    Protein,
    /// Carbohydrates (grams)
    Carbs,
    /// Fat (grams)
    Fat,
}

impl NutrientField {
    /// All fields in mapping order
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
    ];

    /// Field name used in error messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }
}

impl fmt::Display for NutrientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header name for each semantic field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Food name column
    pub name: String,
    /// Calories column
    pub calories: String,
    /// Protein column
    pub protein: String,
    /// Carbohydrates column
    pub carbs: String,
    /// Fat column
    pub fat: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name: dataset::NAME_COLUMN.to_owned(),
            calories: dataset::CALORIES_COLUMN.to_owned(),
            protein: dataset::PROTEIN_COLUMN.to_owned(),
            carbs: dataset::CARBS_COLUMN.to_owned(),
            fat: dataset::FAT_COLUMN.to_owned(),
        }
    }
}

impl ColumnMapping {
    /// Header configured for a field
    #[must_use]
    pub fn header(&self, field: NutrientField) -> &str {
        match field {
            NutrientField::Name => &self.name,
            NutrientField::Calories => &self.calories,
            NutrientField::Protein => &self.protein,
            NutrientField::Carbs => &self.carbs,
            NutrientField::Fat => &self.fat,
        }
    }

    /// Reject blank header names
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` naming the first blank entry
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("dataset.columns.name", &self.name),
            ("dataset.columns.calories", &self.calories),
            ("dataset.columns.protein", &self.protein),
            ("dataset.columns.carbs", &self.carbs),
            ("dataset.columns.fat", &self.fat),
        ];
        for (field, header) in fields {
            if header.trim().is_empty() {
                return Err(ConfigError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// Column positions resolved against one table's header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutritionSchema {
    name: usize,
    calories: usize,
    protein: usize,
    carbs: usize,
    fat: usize,
}

impl NutritionSchema {
    /// Resolve every mapped header against the table
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for the first field whose header is absent,
    /// with the expected header and the available headers in the error details
    pub fn resolve(table: &DatasetTable, mapping: &ColumnMapping) -> AppResult<Self> {
        let find = |field: NutrientField| {
            let header = mapping.header(field);
            table.column_index(header).ok_or_else(|| {
                AppError::missing_field(
                    field.as_str(),
                    format!("dataset has no '{header}' column for the {field} field"),
                )
                .with_details(json!({
                    "expected": header,
                    "available": table.headers(),
                }))
            })
        };

        Ok(Self {
            name: find(NutrientField::Name)?,
            calories: find(NutrientField::Calories)?,
            protein: find(NutrientField::Protein)?,
            carbs: find(NutrientField::Carbs)?,
            fat: find(NutrientField::Fat)?,
        })
    }

    /// Column index of a field
    #[must_use]
    pub const fn column(&self, field: NutrientField) -> usize {
        match field {
            NutrientField::Name => self.name,
            NutrientField::Calories => self.calories,
            NutrientField::Protein => self.protein,
            NutrientField::Carbs => self.carbs,
            NutrientField::Fat => self.fat,
        }
    }

    /// Build the typed food view of a row
    ///
    /// `line` is the one-based data row number used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when a nutrient cell is blank or non-numeric
    pub fn food_from_row(&self, row: &DatasetRow, line: usize) -> AppResult<FoodItem> {
        let name = row
            .get(self.name)
            .map(ToString::to_string)
            .unwrap_or_default();

        let number = |field: NutrientField| {
            let cell = row.get(self.column(field)).unwrap_or(&CellValue::Empty);
            cell.as_number().ok_or_else(|| {
                AppError::invalid_format(format!(
                    "row {line}: {field} value '{cell}' for '{name}' is not a number"
                ))
                .with_resource_id(field.as_str())
            })
        };

        Ok(FoodItem {
            calories: number(NutrientField::Calories)?,
            protein_g: number(NutrientField::Protein)?,
            carbs_g: number(NutrientField::Carbs)?,
            fat_g: number(NutrientField::Fat)?,
            name,
        })
    }
}
