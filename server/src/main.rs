use std::{io, net::SocketAddr, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use common::{maze::Maze, net};
use server::{AppState, config::Args};

#[tokio::main]
async fn main() {
    ctrlc::set_handler(move || {
        println!("Server forced to shut down.");
        std::process::exit(0);
    })
    .expect("error setting Ctrl-C handler");

    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let server_addr = match net::server_address() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("Error: Invalid IP or PORT.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    let state = match AppState::new(&args) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: Failed to set up the startup maze.");
            eprintln!("Details: {}", e);
            process::exit(1);
        }
    };

    if args.print {
        println!("\n{}\n", state.maze);
    }

    let listener = match net::bind_listener(server_addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Error: Failed to bind socket.");
            eprintln!("Details: {}.", e);
            if e.kind() == io::ErrorKind::AddrInUse {
                eprintln!("Is another instance of the server already running?");
            }
            process::exit(1);
        }
    };

    print_server_banner(server_addr, &state.maze);

    if let Err(e) = server::run_server(listener, state).await {
        eprintln!("Error: Server stopped unexpectedly.");
        eprintln!("Details: {}.", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_server_banner(server_addr: SocketAddr, maze: &Maze) {
    println!("  Server address: http://{}", server_addr);
    println!("  Maze size:      {}x{}", maze.size(), maze.size());
    if let Some(seed) = maze.seed {
        println!("  Maze seed:      {}", seed);
    }
    println!("  Start cell:     {}", maze.start);
}
