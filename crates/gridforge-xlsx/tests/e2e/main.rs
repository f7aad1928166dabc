//! End-to-end tests for gridforge-xlsx.
//!
//! Each test builds a workbook in memory, writes it to a temp file with
//! `XlsxWriter`, then opens the archive and asserts on the XML parts the
//! writer produced.

mod common;
mod writing;

// Re-export common utilities for submodules
pub use common::*;
