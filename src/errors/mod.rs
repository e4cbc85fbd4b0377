//! Error types for the front end.
//!
//! This module defines the diagnostics the parser records. It includes:
//!
//! - Specific variants for each kind of syntactic problem
//! - Stable error names and display messages
//! - Helpful suggestions for the interactive front end

pub mod errors;

#[cfg(test)]
mod tests;
