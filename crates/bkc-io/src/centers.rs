//! Cluster-center output: one line per cluster, features comma-separated.

use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::IoResult;

pub fn write_centers(path: impl AsRef<Path>, centers: &[Vec<f64>]) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    for center in centers {
        let fields: Vec<String> = center.iter().map(|v| v.to_string()).collect();
        writer.write_record(&fields)?;
    }
    writer.flush()?;
    Ok(())
}
