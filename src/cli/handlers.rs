// src/cli/handlers.rs
use crate::cli::args::GraphArgs;
use crate::config::Config;
use crate::engine;
use crate::exit::RouteExit;
use crate::graph::{BlockSet, BlockedPair, EdgeSpec, Graph};
use crate::ingest;
use crate::query;
use crate::reporting;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Loads the edge file named by `args` and builds the graph.
///
/// # Errors
/// Returns error if the file cannot be read or contains invalid rows.
pub fn load_graph(args: &GraphArgs, config: &Config) -> Result<Graph> {
    let edges = ingest::load_edges(&args.file, &config.csv.options())
        .with_context(|| format!("failed to load edges from {}", args.file.display()))?;
    let directed = config.graph.directed && !args.undirected;
    Ok(Graph::build(edges, directed)?)
}

/// Handles the route command.
///
/// # Errors
/// Returns error if loading fails or a node is unknown.
pub fn handle_route(
    args: &GraphArgs,
    source: &str,
    target: &str,
    block: &[BlockedPair],
) -> Result<RouteExit> {
    let config = Config::load();
    let graph = load_graph(args, &config)?;
    let blocked: BlockSet = block.iter().cloned().collect();

    let result = engine::compute(&graph, &blocked)?;
    let route = query::reconstruct_path(&result, source, target)?;

    reporting::print_route(
        source,
        target,
        route.as_ref(),
        &blocked,
        args.format.unwrap_or(config.output.format),
        config.output.precision,
    )?;

    Ok(if route.is_some() {
        RouteExit::Success
    } else {
        RouteExit::NoPath
    })
}

/// Handles the matrix command.
///
/// # Errors
/// Returns error if loading fails or a blocked node is unknown.
pub fn handle_matrix(args: &GraphArgs, block: &[BlockedPair]) -> Result<RouteExit> {
    let config = Config::load();
    let graph = load_graph(args, &config)?;
    let blocked: BlockSet = block.iter().cloned().collect();
    let result = engine::compute(&graph, &blocked)?;

    reporting::print_matrix(
        &result,
        args.format.unwrap_or(config.output.format),
        config.output.precision,
    )?;
    Ok(RouteExit::Success)
}

/// Handles the show command.
///
/// # Errors
/// Returns error if loading fails.
pub fn handle_show(args: &GraphArgs) -> Result<RouteExit> {
    let config = Config::load();
    let graph = load_graph(args, &config)?;
    reporting::print_graph(
        &graph,
        args.format.unwrap_or(config.output.format),
        config.output.precision,
    )?;
    Ok(RouteExit::Success)
}

/// Handles the add-edge command.
///
/// # Errors
/// Returns error if the weight is invalid or the file cannot be written.
pub fn handle_add_edge(file: &Path, source: &str, target: &str, weight: f64) -> Result<RouteExit> {
    let config = Config::load();
    let edge = EdgeSpec::new(source, target, weight);
    ingest::append_edge(file, &edge, &config.csv.options())?;
    println!(
        "{} {source} -> {target} with weight {weight}",
        "Edge added:".green().bold()
    );
    Ok(RouteExit::Success)
}
