//! Input and output adapters for the CLI: CSV seed files in, JSON out.

pub mod csv;
pub mod json;
