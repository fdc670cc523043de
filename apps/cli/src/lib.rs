pub mod commands;
pub mod config;
pub mod main_lib;

pub use commands::{execute, Cli, Command};
pub use main_lib::{build_state, init_tracing, AppState};
