//! Observability subsystem for sheetdesk
//!
//! - Structured logging (JSON lines)
//! - Request counters
//!
//! ```ignore
//! use sheetdesk::observability::{Event, Logger};
//!
//! Logger::event(Event::SheetOpened, &[("sheet", "Entries")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
