// src/ingest/csv.rs
//! Delimited-text edge lists: `source,target,weight`.
//!
//! With headers enabled, columns are found by name (case-insensitive), so
//! reordered files and files carrying extra columns load unchanged. Without
//! headers, rows must be exactly `source,target,weight`.

use crate::error::{Result, RouteError};
use crate::graph::EdgeSpec;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

const HEADER: [&str; 3] = ["Source", "Target", "Weight"];

/// Parsing options for edge files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub has_headers: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

/// Field positions of the three edge columns, plus the row width they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    source: usize,
    target: usize,
    weight: usize,
    width: usize,
}

impl Columns {
    const POSITIONAL: Self = Self {
        source: 0,
        target: 1,
        weight: 2,
        width: 3,
    };

    fn from_header(header: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|field| field.eq_ignore_ascii_case(name))
                .ok_or_else(|| RouteError::MalformedRow {
                    line: 1,
                    reason: format!(
                        "header '{}' has no '{name}' column",
                        header.iter().collect::<Vec<_>>().join(",")
                    ),
                })
        };
        let [source, target, weight] = HEADER;
        Ok(Self {
            source: find(source)?,
            target: find(target)?,
            weight: find(weight)?,
            width: header.len(),
        })
    }
}

/// Reads every edge row from `reader`.
///
/// # Errors
/// Returns `MalformedRow` for rows with the wrong column count, a header
/// missing one of the edge columns, or a weight that is not a finite
/// non-negative number.
pub fn read_edges<R: Read>(reader: R, opts: &CsvOptions) -> Result<Vec<EdgeSpec>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(opts.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = if opts.has_headers {
        Columns::from_header(reader.headers()?)?
    } else {
        Columns::POSITIONAL
    };

    let mut edges = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        // Whitespace-only lines trim down to a single empty field.
        if record.len() == 1 && record.iter().all(str::is_empty) {
            continue;
        }
        edges.push(parse_record(&record, columns, line)?);
    }

    tracing::debug!(edges = edges.len(), "read edge list");
    Ok(edges)
}

/// Opens `path` and reads its edges.
///
/// # Errors
/// Returns `Io` with the path if the file cannot be opened, otherwise as
/// [`read_edges`].
pub fn load_edges(path: &Path, opts: &CsvOptions) -> Result<Vec<EdgeSpec>> {
    let file = File::open(path).map_err(|source| RouteError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    read_edges(file, opts)
}

/// Appends one validated edge row to `path`, creating the file (and its
/// header, if enabled) when missing.
///
/// # Errors
/// Returns `Validation` for a bad weight, or `Io`/`Csv` on write failure.
pub fn append_edge(path: &Path, edge: &EdgeSpec, opts: &CsvOptions) -> Result<()> {
    edge.validate()?;
    let io_err = |source| RouteError::Io {
        source,
        path: path.to_path_buf(),
    };

    let mut file = OpenOptions::new()
        .read(true)
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;

    let fresh = file.metadata().map_err(io_err)?.len() == 0;
    if !fresh && !ends_with_newline(&mut file).map_err(io_err)? {
        file.write_all(b"\n").map_err(io_err)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(opts.delimiter)
        .from_writer(file);
    if fresh && opts.has_headers {
        writer.write_record(HEADER)?;
    }
    let weight = edge.weight.to_string();
    writer.write_record([edge.source.as_str(), edge.target.as_str(), weight.as_str()])?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), source = %edge.source, target = %edge.target, "appended edge");
    Ok(())
}

fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn parse_record(record: &csv::StringRecord, columns: Columns, line: u64) -> Result<EdgeSpec> {
    let fields = (
        record.get(columns.source),
        record.get(columns.target),
        record.get(columns.weight),
        record.len() == columns.width,
    );
    let (Some(source), Some(target), Some(weight), true) = fields else {
        return Err(RouteError::MalformedRow {
            line,
            reason: format!("expected {} fields, got {}", columns.width, record.len()),
        });
    };
    if source.is_empty() || target.is_empty() {
        return Err(RouteError::MalformedRow {
            line,
            reason: "empty node label".to_string(),
        });
    }
    let weight: f64 = weight.parse().map_err(|_| RouteError::MalformedRow {
        line,
        reason: format!("weight '{weight}' is not a number"),
    })?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(RouteError::MalformedRow {
            line,
            reason: format!("weight {weight} must be finite and non-negative"),
        });
    }
    Ok(EdgeSpec::new(source, target, weight))
}
