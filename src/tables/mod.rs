//! Reference tables: delimited-text parsing, average curves and
//! radiative-transfer grids.
//!
//! Bundled tables are compiled into the crate and parsed once on first use;
//! after that they are shared read-only (`Arc`) by every model instance.

pub mod average;
pub mod bundled;
pub mod delimited;
pub mod grid;

pub use average::AverageTable;
pub use delimited::DelimitedTable;
pub use grid::AttenuationGrid;

/// Failures while reading or interpreting a reference table.
///
/// `Clone` so that a failed one-time load can be reported to every caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("failed to read table {path}: {message}")]
    Io { path: String, message: String },

    #[error("{table}, line {line}: {message}")]
    Parse {
        table: String,
        line: usize,
        message: String,
    },

    #[error("{table}: missing column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("{table}: {message}")]
    Shape { table: String, message: String },
}
