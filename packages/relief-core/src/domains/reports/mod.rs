pub mod export;
pub mod filter;
pub mod form;
pub mod models;

pub use export::{
    export_file_name, export_file_name_today, reports_to_csv, write_csv, CSV_HEADERS,
};
pub use filter::ReportFilter;
pub use form::ReportForm;
pub use models::{
    Coordinates, MapRegion, NewReport, Report, ReportKind, ReportStatus, Severity, NEED_OPTIONS,
};
