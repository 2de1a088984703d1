// ABOUTME: CSV reader that turns the nutrition dataset file into a raw table
// ABOUTME: Trims fields, requires a header row and maps reader failures onto AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::table::{CellValue, DatasetRow, DatasetTable};
use csv::{Position, ReaderBuilder, Trim};
use planner_core::errors::{AppError, AppResult};
use serde_json::json;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Read a dataset file from disk
///
/// # Errors
///
/// Returns `ResourceNotFound`/`StorageError` when the file cannot be opened and
/// `InvalidFormat` when the content is not a well-formed delimited table
pub fn load_table(path: &Path) -> AppResult<DatasetTable> {
    let file = File::open(path).map_err(|err| {
        AppError::from(err).with_resource_id(path.display().to_string())
    })?;
    let table = read_table(file)
        .map_err(|err| err.with_resource_id(path.display().to_string()))?;

    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers().len(),
        "Nutrition dataset loaded"
    );
    debug!(headers = ?table.headers(), "Dataset columns");

    Ok(table)
}

/// Read a dataset from any reader
///
/// # Errors
///
/// Returns `InvalidFormat` when the header row is missing or a record is malformed
pub fn read_table<R: Read>(reader: R) -> AppResult<DatasetTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_owned)
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(AppError::invalid_format("dataset has no header row"));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(DatasetRow::new(record.iter().map(CellValue::parse).collect()));
    }

    Ok(DatasetTable::new(headers, rows))
}

fn csv_error(err: csv::Error) -> AppError {
    let line = err.position().map(Position::line);
    AppError::invalid_format(format!("malformed dataset: {err}"))
        .with_details(json!({ "line": line }))
        .with_source(err)
}
