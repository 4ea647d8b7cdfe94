//! Completion events for in-flight REST calls.
//!
//! Screens spawn their network calls on the tokio runtime; each task reports
//! back through this channel, which the main event loop drains between
//! terminal polls. Events carry the record identifier they belong to so a
//! screen can ignore stale completions from a previous activation.

use roster_api::ApiError;
use roster_common::types::{Student, StudentId};
use tokio::sync::mpsc;

/// Completion of an asynchronous REST call.
#[derive(Debug)]
pub enum ApiEvent {
    /// A single-record fetch finished.
    Fetched {
        /// Identifier the fetch was issued for.
        id: StudentId,
        /// Fetched record or the failure reason.
        result: Result<Student, ApiError>,
    },
    /// A list fetch finished.
    Listed {
        /// Listed records or the failure reason.
        result: Result<Vec<Student>, ApiError>,
    },
    /// A delete finished.
    Deleted {
        /// Identifier the delete was issued for.
        id: StudentId,
        /// Outcome of the delete.
        result: Result<(), ApiError>,
    },
}

/// Sending half handed to spawned REST tasks.
pub type ApiEventSender = mpsc::UnboundedSender<ApiEvent>;

/// Receiving half drained by the event loop.
pub type ApiEventReceiver = mpsc::UnboundedReceiver<ApiEvent>;

/// Creates the event channel shared by all screens of one session.
#[must_use]
pub fn channel() -> (ApiEventSender, ApiEventReceiver) {
    mpsc::unbounded_channel()
}
