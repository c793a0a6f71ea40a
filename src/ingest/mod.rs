// src/ingest/mod.rs
//! Edge-list ingestion.

pub mod csv;

pub use self::csv::{append_edge, load_edges, read_edges, CsvOptions};
