// ABOUTME: Nutrition dataset loading, schema validation and the typed food database
// ABOUTME: Reads the CSV table once and exposes read-only food records to search and generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Dataset
//!
//! Loading happens in three steps:
//!
//! 1. [`loader`] reads the delimited file into a raw [`DatasetTable`]
//! 2. [`schema`] resolves the configured [`ColumnMapping`] against the header row,
//!    failing fast when a required column is absent
//! 3. [`database`] converts every row into a [`FoodRecord`] holding the typed
//!    `FoodItem` alongside the raw cells
//!
//! The resulting [`FoodDatabase`] is read-only for the rest of the process.

/// Typed food database built from a validated table
pub mod database;

/// CSV reader producing raw tables
pub mod loader;

/// Column mapping and schema resolution
pub mod schema;

/// Raw table, row and cell types
pub mod table;

pub use database::{DatasetLoad, FoodDatabase, FoodRecord};
pub use loader::{load_table, read_table};
pub use schema::{ColumnMapping, NutrientField, NutritionSchema};
pub use table::{CellValue, DatasetRow, DatasetTable};
