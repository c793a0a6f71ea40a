use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::graph::BlockedPair;

#[derive(Parser)]
#[command(name = "routegraph", version, about = "Shortest routes over weighted edge lists")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Options shared by every command that loads an edge file.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Edge list with source, target and weight columns
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Mirror every edge in the reverse direction
    #[arg(long)]
    pub undirected: bool,
    /// Output format (defaults to routegraph.toml, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the shortest route and its cost between two nodes
    Route {
        #[command(flatten)]
        graph: GraphArgs,
        source: String,
        target: String,
        /// Leave out a directed edge, e.g. --block B:C (repeatable)
        #[arg(long, short, value_name = "SRC:DST")]
        block: Vec<BlockedPair>,
    },
    /// Print the all-pairs distance table
    Matrix {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long, short, value_name = "SRC:DST")]
        block: Vec<BlockedPair>,
    },
    /// List the nodes and weighted edges of an edge file
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Append one edge row to an edge file, creating it if needed
    AddEdge {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        source: String,
        target: String,
        #[arg(allow_hyphen_values = true)]
        weight: f64,
    },
}
