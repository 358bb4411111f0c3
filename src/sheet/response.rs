//! Response bodies
//!
//! Every response carries `status`; failures carry only a message, successes
//! carry the table snapshot flattened alongside it.

use serde::Serialize;

use super::errors::SheetError;
use super::serializer::TableSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetResponse {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten)]
    pub snapshot: Option<TableSnapshot>,
}

impl SheetResponse {
    /// Read response: snapshot without a message
    pub fn snapshot(snapshot: TableSnapshot) -> Self {
        Self {
            status: Status::Success,
            message: None,
            snapshot: Some(snapshot),
        }
    }

    /// Write response: message plus the refreshed snapshot
    pub fn success(message: impl Into<String>, snapshot: TableSnapshot) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            snapshot: Some(snapshot),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            snapshot: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

impl From<SheetError> for SheetResponse {
    fn from(err: SheetError) -> Self {
        Self::error(err.to_string())
    }
}
