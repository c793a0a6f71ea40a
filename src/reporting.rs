//! Console and JSON output for routes, graph listings and distance tables.
//!
//! The `render_*` functions return plain strings so they can be tested; the
//! `print_*` wrappers pick text or JSON and write to stdout. Colors come from
//! `colored` and switch off automatically when stdout is not a terminal.

use crate::config::OutputFormat;
use crate::engine::ShortestPathResult;
use crate::graph::{BlockSet, Graph};
use crate::query::Route;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Serialize)]
pub struct RouteReport<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub reachable: bool,
    pub path: Option<&'a [String]>,
    pub cost: Option<f64>,
    pub blocked: Vec<[&'a str; 2]>,
}

impl<'a> RouteReport<'a> {
    #[must_use]
    pub fn new(source: &'a str, target: &'a str, route: Option<&'a Route>, blocked: &'a BlockSet) -> Self {
        Self {
            source,
            target,
            reachable: route.is_some(),
            path: route.map(|r| r.nodes.as_slice()),
            cost: route.map(|r| r.cost),
            blocked: blocked.iter().map(|(s, t)| [s, t]).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EdgeReport<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct GraphReport<'a> {
    pub directed: bool,
    pub nodes: &'a [String],
    pub edges: Vec<EdgeReport<'a>>,
}

impl<'a> GraphReport<'a> {
    #[must_use]
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            directed: graph.is_directed(),
            nodes: graph.nodes(),
            edges: graph
                .edges()
                .map(|e| EdgeReport {
                    source: graph.label(e.source),
                    target: graph.label(e.target),
                    weight: e.weight,
                })
                .collect(),
        }
    }
}

/// Distance table; `None` marks unreachable pairs (JSON has no infinity).
#[derive(Debug, Serialize)]
pub struct MatrixReport<'a> {
    pub nodes: &'a [String],
    pub distances: Vec<Vec<Option<f64>>>,
}

impl<'a> MatrixReport<'a> {
    #[must_use]
    pub fn new(result: &'a ShortestPathResult) -> Self {
        let nodes = result.nodes();
        let distances = nodes
            .ids()
            .map(|i| {
                result
                    .distances()
                    .row(i)
                    .iter()
                    .map(|d| d.is_finite().then_some(*d))
                    .collect()
            })
            .collect();
        Self {
            nodes: nodes.labels(),
            distances,
        }
    }
}

/// Formats a weight with `precision` decimals, or `∞`.
#[must_use]
pub fn format_weight(weight: f64, precision: usize) -> String {
    if weight.is_finite() {
        format!("{weight:.precision$}")
    } else {
        "∞".to_string()
    }
}

#[must_use]
pub fn format_path(route: &Route) -> String {
    route.nodes.join(" -> ")
}

#[must_use]
pub fn render_route(
    source: &str,
    target: &str,
    route: Option<&Route>,
    blocked: &BlockSet,
    precision: usize,
) -> String {
    let mut out = String::new();
    if !blocked.is_empty() {
        let listed: Vec<String> = blocked.iter().map(|(s, t)| format!("{s} -> {t}")).collect();
        let _ = writeln!(out, "{} {}", "Blocked:".dimmed(), listed.join(", ").dimmed());
    }
    match route {
        Some(route) => {
            let _ = writeln!(
                out,
                "Shortest path from {} to {}: {}",
                source.bold(),
                target.bold(),
                format_path(route).green().bold()
            );
            let _ = writeln!(
                out,
                "Total weight: {} ({} hops)",
                format_weight(route.cost, precision).cyan(),
                route.hops()
            );
        }
        None => {
            let _ = writeln!(
                out,
                "{}",
                format!("No path exists from {source} to {target}.").yellow()
            );
        }
    }
    out
}

#[must_use]
pub fn render_graph(graph: &Graph, precision: usize) -> String {
    let mut out = String::new();
    let kind = if graph.is_directed() { "directed" } else { "undirected" };
    let _ = writeln!(out, "{}", format!("--- Graph Nodes ({}) ---", graph.len()).bold());
    let _ = writeln!(out, "{}", graph.nodes().join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", format!("--- Graph Edges ({kind}) ---").bold());
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "{} -> {} ({})",
            graph.label(edge.source),
            graph.label(edge.target),
            format_weight(edge.weight, precision).cyan()
        );
    }
    out
}

#[must_use]
pub fn render_matrix(result: &ShortestPathResult, precision: usize) -> String {
    let nodes = result.nodes();
    let cells: Vec<Vec<String>> = nodes
        .ids()
        .map(|i| {
            result
                .distances()
                .row(i)
                .iter()
                .map(|&d| format_weight(d, precision))
                .collect()
        })
        .collect();

    let label_width = nodes.labels().iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let cell_width = cells
        .iter()
        .flatten()
        .map(|c| c.chars().count())
        .chain(nodes.labels().iter().map(|l| l.chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "{:label_width$}", "");
    for label in nodes.labels() {
        let _ = write!(out, "  {label:>cell_width$}");
    }
    let _ = writeln!(out);
    for (label, row) in nodes.labels().iter().zip(&cells) {
        let _ = write!(out, "{label:<label_width$}");
        for cell in row {
            let _ = write!(out, "  {cell:>cell_width$}");
        }
        let _ = writeln!(out);
    }
    out
}

/// Prints a route (or the "no path" message).
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_route(
    source: &str,
    target: &str,
    route: Option<&Route>,
    blocked: &BlockSet,
    format: OutputFormat,
    precision: usize,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_route(source, target, route, blocked, precision)),
        OutputFormat::Json => {
            let report = RouteReport::new(source, target, route, blocked);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Prints the node and edge listing.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_graph(graph: &Graph, format: OutputFormat, precision: usize) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_graph(graph, precision)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&GraphReport::new(graph))?),
    }
    Ok(())
}

/// Prints the all-pairs distance table.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_matrix(result: &ShortestPathResult, format: OutputFormat, precision: usize) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_matrix(result, precision)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&MatrixReport::new(result))?);
        }
    }
    Ok(())
}
