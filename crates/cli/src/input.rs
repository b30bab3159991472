//! Point-set readers: CSV with `x`,`y` columns (polars) or JSON arrays.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// A JSON point: `[x, y]` or `{"x": .., "y": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Xy { x: f64, y: f64 },
}

/// Read points from `path`, dispatching on the file extension.
pub fn read_points(path: &Path) -> Result<Vec<[f64; 2]>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            parse_json(&bytes).with_context(|| format!("parsing {}", path.display()))
        }
        _ => bail!(
            "unsupported input {} (expected .csv or .json)",
            path.display()
        ),
    }
}

pub fn parse_json(bytes: &[u8]) -> Result<Vec<[f64; 2]>> {
    let raw: Vec<RawPoint> = serde_json::from_slice(bytes)?;
    Ok(raw
        .into_iter()
        .map(|p| match p {
            RawPoint::Pair(xy) => xy,
            RawPoint::Xy { x, y } => [x, y],
        })
        .collect())
}

fn read_csv(path: &Path) -> Result<Vec<[f64; 2]>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok([x, y]),
            _ => bail!("row {}: missing x or y", row),
        })
        .collect()
}
