pub mod config;
pub mod core;
pub mod utils;

pub use config::CliConfig;
pub use core::{engine::CalcEngine, ops};
pub use utils::error::{CalcError, Result};
