//! Writing tests, grouped by feature area.

mod document;
mod sheet_data;
mod validation;
