// src/bin/routegraph.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use routegraph_core::cli::{self, Cli, Commands};
use routegraph_core::exit::RouteExit;

fn main() -> RouteExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match dispatch(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            RouteExit::for_error(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(cli: &Cli) -> Result<RouteExit> {
    match &cli.command {
        Commands::Route {
            graph,
            source,
            target,
            block,
        } => cli::handle_route(graph, source, target, block),
        Commands::Matrix { graph, block } => cli::handle_matrix(graph, block),
        Commands::Show { graph } => cli::handle_show(graph),
        Commands::AddEdge {
            file,
            source,
            target,
            weight,
        } => cli::handle_add_edge(file, source, target, *weight),
    }
}
