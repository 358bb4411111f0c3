//! # Sheet Module
//!
//! The CRUD contract over the backing table:
//!
//! - `serializer`: table → `{headers, rows, uniqueValues}`
//! - `dispatcher`: create / update / delete / duplicate
//! - `lock`: the single write lock
//! - `service`: read and write entry points returning `SheetResponse`

mod config;
mod dispatcher;
mod errors;
mod lock;
mod record;
mod response;
mod serializer;
mod service;

pub use config::SheetConfig;
pub use dispatcher::{apply, Action, Params, ROW_INDEX_PARAM};
pub use errors::{SheetError, SheetResult};
pub use lock::{WriteGuard, WriteLock};
pub use record::Record;
pub use response::{SheetResponse, Status};
pub use serializer::{serialize_table, TableSnapshot, UniqueValues};
pub use service::{SheetService, ACTION_PARAM};
