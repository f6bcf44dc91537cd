// src/output/mod.rs

pub mod paths;
pub mod write;

pub use paths::{derive_paths, OutputPaths};
pub use write::write_table;
