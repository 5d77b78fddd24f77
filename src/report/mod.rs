mod format;
mod table;

pub use format::{DEFAULT_ERROR_PRECISION, DEFAULT_PRECISION, ReportFormat, render};
pub use table::{Cell, Table, TableFormat};
