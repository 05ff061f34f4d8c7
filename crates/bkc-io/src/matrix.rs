//! Point-matrix ingestion: one point per line, features separated by
//! comma or whitespace, no header. Ragged-row detection is left to
//! `bkc_core`'s own boundary validation; this module only parses floats.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{IoError, IoResult};

pub fn read_points(path: impl AsRef<Path>) -> IoResult<Vec<Vec<f64>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut points = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let normalized = trimmed.replace(',', " ");
        let mut row = Vec::new();
        for field in normalized.split_whitespace() {
            let value: f64 = field.parse().map_err(|_| {
                IoError::MalformedMatrix(format!("line {}: cannot parse '{field}' as f64", lineno + 1))
            })?;
            row.push(value);
        }
        points.push(row);
    }
    Ok(points)
}
