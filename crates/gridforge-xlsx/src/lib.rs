//! # gridforge-xlsx
//!
//! XLSX (Office Open XML) writer for gridforge.
//!
//! [`XlsxWriter`] packages a [`gridforge_core::Workbook`] into a
//! complete .xlsx archive; [`WorksheetSerializer`] renders a single
//! worksheet part (and its relationship part) and can be used on its
//! own when only the worksheet XML is needed.

pub mod cell;
pub mod error;
pub mod password;
pub mod styles;
pub mod worksheet;
pub mod writer;

mod xml;

pub use error::{XlsxError, XlsxResult};
pub use worksheet::{WorksheetParts, WorksheetSerializer};
pub use writer::XlsxWriter;
