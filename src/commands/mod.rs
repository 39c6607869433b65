pub mod report;

pub use report::{ReportRun, generate_report, run_report, run_report_impl};
