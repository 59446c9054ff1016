//! Presentational rendering: text tables for list pages and the error boundary
//! wrapping every render pass.

pub mod boundary;
pub mod rows;
pub mod table;

pub use boundary::{
    ErrorBoundary, ErrorReporter, LogReporter, RecoveryAction, RecoveryScreen, RenderError,
    Rendered,
};
pub use rows::TableRow;
pub use table::{Assets, TableView, NO_DATA, PLACEHOLDER};
