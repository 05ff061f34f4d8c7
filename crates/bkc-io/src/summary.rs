//! Append-only run summary: `type,file,k,init,warm_start,threads,seed,lambda,SSE,elapsed_seconds`.

use std::fs::OpenOptions;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::IoResult;

pub struct SummaryRecord<'a> {
    pub run_type: &'a str,
    pub file: &'a str,
    pub k: usize,
    pub init: &'a str,
    pub warm_start: bool,
    pub threads: usize,
    pub seed: u64,
    pub lambda: f64,
    pub sse: f64,
    pub elapsed_seconds: f64,
}

pub fn append_summary(path: impl AsRef<Path>, record: &SummaryRecord) -> IoResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(&[
        record.run_type.to_string(),
        record.file.to_string(),
        record.k.to_string(),
        record.init.to_string(),
        record.warm_start.to_string(),
        record.threads.to_string(),
        record.seed.to_string(),
        record.lambda.to_string(),
        record.sse.to_string(),
        record.elapsed_seconds.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}
