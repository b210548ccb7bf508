use clap::Parser;

use common::constants::{DEFAULT_MAX_SIZE, DEFAULT_SIZE};

/// Serves a randomly generated perfect maze over HTTP.
///
/// Every flag except `--print` can also be set from the environment or a
/// `.env` file. The listening address comes from `IP` and `PORT`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Width and height, in cells, of the maze served at `/`
    #[arg(long, env = "MAZE_SIZE", default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Seed for the maze served at `/`; random when omitted
    #[arg(long, env = "MAZE_SEED")]
    pub seed: Option<u64>,

    /// Largest size accepted by `/maze` and `/api/maze`
    #[arg(long, env = "MAZE_MAX_SIZE", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: usize,

    /// List every corridor under the rendered maze
    #[arg(long, env = "MAZE_EDGE_LIST")]
    pub edge_list: bool,

    /// Print the maze to the terminal on startup
    #[arg(long)]
    pub print: bool,
}
