use crate::error::{IsingError, Result};
use crate::scan::driver::{DataPoint, ScanResults};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

const SEPARATOR: &str = ", ";

/// Format a point as `temperature, value, error`.
///
/// Reals use the shortest representation which reads back exactly and always shows a decimal
/// point, e.g. `2.0` rather than `2`.
pub fn format_record(point: &DataPoint) -> String {
    format!(
        "{:?}{}{:?}{}{:?}",
        point.temperature, SEPARATOR, point.value, SEPARATOR, point.error
    )
}

/// Write one line per point.
pub fn write_results<W: Write>(mut writer: W, points: &[DataPoint]) -> Result<()> {
    for p in points {
        writeln!(writer, "{}", format_record(p))?;
    }
    writer.flush()?;
    Ok(())
}

/// Create or truncate `path` and write the points to it.
pub fn write_results_to_file<P: AsRef<Path>>(path: P, points: &[DataPoint]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_results(BufWriter::new(file), points)?;
    log::info!("Wrote {} results to {}", points.len(), path.display());
    Ok(())
}

/// Parse lines written by [`write_results`]. Blank lines are skipped.
pub fn read_results<B: BufRead>(reader: B) -> Result<Vec<DataPoint>> {
    let mut points = vec![];
    for (indx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let malformed = || IsingError::MalformedRecord {
            line: indx + 1,
            content: line.clone(),
        };
        let fields = line
            .split(SEPARATOR)
            .map(|f| f.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;
        match fields.as_slice() {
            [temperature, value, error] => points.push(DataPoint {
                temperature: *temperature,
                value: *value,
                error: *error,
            }),
            _ => return Err(malformed()),
        }
    }
    Ok(points)
}

impl ScanResults {
    /// Write the results to `path`, see [`write_results_to_file`].
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_results_to_file(path, self.points())
    }
}
