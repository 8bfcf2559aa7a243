pub mod engine;
pub mod ops;

pub use crate::utils::error::Result;
