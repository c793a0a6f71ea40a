// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, GraphArgs};
pub use handlers::{handle_add_edge, handle_matrix, handle_route, handle_show, load_graph};
