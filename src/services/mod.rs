pub mod csv_export;

pub use csv_export::{CsvExportService, render_csv};
