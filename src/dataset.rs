//! Loading points from delimited numeric text.
//!
//! Every record becomes one point. There is no header row, fields are separated by commas and
//! surrounding whitespace is ignored. All records have to hold the same amount of fields.
//!
//! ```rust
//! let points: Vec<Vec<f64>> = lloyd_kmeans::dataset::read_csv("0,0\n0,1\n10,0\n10,1\n".as_bytes()).unwrap();
//! assert_eq!(points[2], vec![10.0, 0.0]);
//! ```

use crate::{KMeansError, Primitive, Result};
use std::{fs::File, io::Read, path::Path};

/// Parse all records from **reader** into points.
pub fn read_csv<T: Primitive, R: Read>(reader: R) -> Result<Vec<Vec<T>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points: Vec<Vec<T>> = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let line = record.position().map_or(idx + 1, |p| p.line() as usize);
        let point = record.iter().enumerate()
            .map(|(column, field)| field.parse::<T>().map_err(|_| KMeansError::Parse {
                line, column: column + 1, value: field.to_string()
            }))
            .collect::<Result<Vec<T>>>()?;
        if let Some(first) = points.first() {
            if first.len() != point.len() {
                return Err(KMeansError::invalid(format!(
                    "line {} has {} fields, expected {}", line, point.len(), first.len())));
            }
        }
        points.push(point);
    }
    log::debug!("read {} points of dimension {}", points.len(), points.first().map_or(0, |p| p.len()));
    Ok(points)
}

/// Open the file at **path** and parse it with [`read_csv`].
pub fn load_csv<T: Primitive, P: AsRef<Path>>(path: P) -> Result<Vec<Vec<T>>> {
    let file = File::open(path.as_ref())?;
    read_csv(file)
}
