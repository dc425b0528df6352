//! Comma-separated text reader and writer.
//!
//! One line per row. Values are written with Rust's shortest round-trip
//! float formatting, so writing a matrix and reading it back reproduces
//! every element bit for bit, NaN and infinities included. A matrix with no
//! columns has no fields to write and reads back as `0x0`.
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::Trim;
use log::debug;

use crate::config::CsvConfig;
use crate::math::{Element, Matrix};

/// Read a comma-separated file into a matrix.
pub fn read_csv<T: Element, P: AsRef<Path>>(path: P) -> Result<Matrix<T>> {
    read_csv_with_config(path, &CsvConfig::default())
}

pub fn read_csv_with_config<T: Element, P: AsRef<Path>>(
    path: P,
    config: &CsvConfig,
) -> Result<Matrix<T>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {}", path.as_ref().display()))?;
    from_reader(file, config)
        .with_context(|| format!("Failed to parse CSV file: {}", path.as_ref().display()))
}

/// Parse delimited text from any reader. Every row must have the same
/// number of fields.
pub fn from_reader<T: Element, R: Read>(reader: R, config: &CsvConfig) -> Result<Matrix<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(config.has_headers)
        .trim(if config.trim { Trim::All } else { Trim::None })
        .flexible(true)
        .from_reader(reader);

    let mut data: Vec<T> = Vec::new();
    let mut rows = 0usize;
    let mut cols: Option<usize> = None;

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        match cols {
            None => cols = Some(record.len()),
            Some(expected) if expected != record.len() => {
                return Err(anyhow!(
                    "Row {} has {} values, expected {}",
                    row_idx + 1,
                    record.len(),
                    expected
                ));
            }
            Some(_) => {}
        }

        for (col_idx, field) in record.iter().enumerate() {
            let value = field.parse::<T>().with_context(|| {
                format!(
                    "Invalid value '{}' at row {}, column {}",
                    field,
                    row_idx + 1,
                    col_idx + 1
                )
            })?;
            data.push(value);
        }
        rows += 1;
    }

    let cols = cols.unwrap_or(0);
    if cols == 0 {
        rows = 0;
    }
    debug!("Read {}x{} {} matrix from CSV", rows, cols, T::NAME);
    Ok(Matrix::from_parts(rows, cols, data))
}

/// Write a matrix as a comma-separated file, one row per line.
///
/// A matrix with rows but no columns writes no lines, so it reads back as
/// `0x0` rather than `r x 0`.
pub fn write_csv<T: Element, P: AsRef<Path>>(matrix: &Matrix<T>, path: P) -> Result<()> {
    write_csv_with_config(matrix, path, &CsvConfig::default())
}

pub fn write_csv_with_config<T: Element, P: AsRef<Path>>(
    matrix: &Matrix<T>,
    path: P,
    config: &CsvConfig,
) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create CSV file: {}", path.as_ref().display()))?;
    to_writer(matrix, file, config)
}

pub fn to_writer<T: Element, W: Write>(
    matrix: &Matrix<T>,
    writer: W,
    config: &CsvConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(false)
        .from_writer(writer);

    let (rows, cols) = matrix.shape();
    if config.has_headers {
        writer
            .write_record((0..cols).map(|c| format!("c{}", c)))
            .context("Failed to write CSV header")?;
    }
    if cols > 0 {
        for row in 0..rows {
            writer
                .write_record(matrix.row_slice(row).iter().map(|v| v.to_string()))
                .with_context(|| format!("Failed to write row {}", row + 1))?;
        }
    }
    writer.flush().context("Failed to flush CSV writer")?;
    debug!("Wrote {}x{} {} matrix as CSV", rows, cols, T::NAME);
    Ok(())
}

impl<T: Element> Matrix<T> {
    /// Read a matrix from a comma-separated file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_csv(path)
    }

    /// Write the matrix to a comma-separated file.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_csv(self, path)
    }
}
