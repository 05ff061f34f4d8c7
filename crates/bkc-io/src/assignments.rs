//! Assignment-vector output: one integer per line, line i (1-based) = A[i-1].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::IoResult;

pub fn write_assignments(path: impl AsRef<Path>, assignments: &[usize]) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for &a in assignments {
        writeln!(writer, "{a}")?;
    }
    writer.flush()?;
    Ok(())
}
