pub mod config;
pub mod handlers;
pub mod run;
pub mod state;

#[cfg(test)]
mod test_helpers;

pub use run::{build_router, run_server};
pub use state::{AppState, StateError};
