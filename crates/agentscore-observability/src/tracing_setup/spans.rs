//! Span definitions per operation: scoring, composite, report.

/// Create a scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($network:expr) => {
        tracing::info_span!("agentscore.scoring", network = ?$network)
    };
}

/// Create a composite scoring span.
#[macro_export]
macro_rules! composite_span {
    ($signal_count:expr) => {
        tracing::info_span!("agentscore.composite", signal_count = $signal_count)
    };
}

/// Create a report span.
#[macro_export]
macro_rules! report_span {
    ($signal_count:expr) => {
        tracing::info_span!("agentscore.report", signal_count = $signal_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "agentscore.scoring";
    pub const COMPOSITE: &str = "agentscore.composite";
    pub const REPORT: &str = "agentscore.report";
}
