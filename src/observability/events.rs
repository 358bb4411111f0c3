//! Observable events for sheetdesk
//!
//! Events are explicit and typed; each carries its own severity.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Spreadsheet created by `init`
    SpreadsheetCreated,
    /// HTTP server starting
    ServerStart,
    /// HTTP server bound and serving
    Serving,

    // Store access
    /// First sheet opened
    SheetOpened,
    /// Spreadsheet or sheet could not be opened
    SheetOpenFailed,

    // Reads
    /// Snapshot served
    ReadComplete,
    /// Snapshot could not be produced
    ReadFailed,

    // Writes
    /// Write request accepted, lock held
    WriteBegin,
    /// Mutation committed
    WriteCommit,
    /// Write rejected by validation
    WriteRejected,
    /// Store failed during a write
    WriteFailed,
    /// Write lock not acquired in time
    LockTimeout,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SpreadsheetCreated => "SPREADSHEET_CREATED",
            Event::ServerStart => "SERVER_START",
            Event::Serving => "SERVER_SERVING",

            Event::SheetOpened => "SHEET_OPENED",
            Event::SheetOpenFailed => "SHEET_OPEN_FAILED",

            Event::ReadComplete => "READ_COMPLETE",
            Event::ReadFailed => "READ_FAILED",

            Event::WriteBegin => "WRITE_BEGIN",
            Event::WriteCommit => "WRITE_COMMIT",
            Event::WriteRejected => "WRITE_REJECTED",
            Event::WriteFailed => "WRITE_FAILED",
            Event::LockTimeout => "LOCK_TIMEOUT",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::SheetOpened | Event::ReadComplete | Event::WriteBegin => Severity::Trace,
            Event::WriteRejected => Severity::Warn,
            Event::SheetOpenFailed | Event::ReadFailed | Event::WriteFailed | Event::LockTimeout => {
                Severity::Error
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::SheetOpened.as_str(), "SHEET_OPENED");
        assert_eq!(Event::LockTimeout.to_string(), "LOCK_TIMEOUT");
    }

    #[test]
    fn test_failures_log_as_errors() {
        assert_eq!(Event::SheetOpenFailed.severity(), Severity::Error);
        assert_eq!(Event::WriteFailed.severity(), Severity::Error);
        assert_eq!(Event::WriteRejected.severity(), Severity::Warn);
        assert_eq!(Event::WriteCommit.severity(), Severity::Info);
    }
}
