//! sheetdesk - a single-table, spreadsheet-backed data-entry backend
//!
//! Serves the first sheet of one spreadsheet as JSON over HTTP with
//! create / update / delete / duplicate writes serialized by one lock.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod sheet;
pub mod store;
