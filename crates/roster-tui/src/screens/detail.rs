//! Read-only detail screen for a single student record.
//!
//! On activation the screen issues one fetch for its record; the task's
//! abort handle is kept so teardown cancels a still-running request. The
//! action-menu overlay offers edit (navigate to the form destination) and
//! delete (confirmation dialog, then one delete request followed by
//! navigation back to the index).

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use roster_api::StudentDirectory;
use roster_common::types::{Student, StudentId};
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use crate::event::{ApiEvent, ApiEventSender};
use crate::router::{Destination, NavParams, Navigator};
use crate::screens::LoadState;

/// Action-menu overlay state, orthogonal to the loading lifecycle.
///
/// The menu key alternates `Hidden` and `Visible` with no intermediate
/// state; `Confirming` is the ephemeral delete-confirmation sub-dialog
/// reachable only from `Visible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// No overlay shown.
    Hidden,
    /// Action menu visible (edit / delete).
    Visible,
    /// Delete-confirmation dialog shown over the menu.
    Confirming,
}

/// State of one detail-screen instance.
#[derive(Debug)]
pub struct DetailScreen {
    id: StudentId,
    /// Loading lifecycle of the record.
    pub load: LoadState<Student>,
    /// Current overlay state.
    pub overlay: Overlay,
    /// Transient status-line message (delete failures, rejected navigation).
    pub status: Option<String>,
    directory: Arc<dyn StudentDirectory>,
    events: ApiEventSender,
    runtime: Handle,
    fetch: Option<AbortHandle>,
    delete_pending: bool,
}

impl DetailScreen {
    /// Mounts the screen and spawns the fetch for its record.
    #[must_use]
    pub fn mount(
        id: StudentId,
        directory: Arc<dyn StudentDirectory>,
        events: ApiEventSender,
        runtime: Handle,
    ) -> Self {
        let task_directory = Arc::clone(&directory);
        let tx = events.clone();
        let task = runtime.spawn(async move {
            let result = task_directory.fetch(id).await;
            if tx.send(ApiEvent::Fetched { id, result }).is_err() {
                tracing::debug!(%id, "event channel closed before fetch completed");
            }
        });
        Self {
            id,
            load: LoadState::Loading,
            overlay: Overlay::Hidden,
            status: None,
            directory,
            events,
            runtime,
            fetch: Some(task.abort_handle()),
            delete_pending: false,
        }
    }

    /// Identifier of the record this screen shows.
    #[must_use]
    pub const fn id(&self) -> StudentId {
        self.id
    }

    /// Dispatches a key press against the current state.
    pub fn handle_key(&mut self, key: KeyEvent, nav: &mut Navigator) {
        // Overlay actions only make sense once the record is on screen.
        if self.load.loaded().is_none() {
            return;
        }
        match (self.overlay, key.code) {
            (Overlay::Hidden, KeyCode::Char('m')) => self.overlay = Overlay::Visible,
            (Overlay::Visible | Overlay::Confirming, KeyCode::Char('m')) => {
                self.overlay = Overlay::Hidden;
            }
            (Overlay::Visible, KeyCode::Char('e')) => self.edit(nav),
            (Overlay::Visible, KeyCode::Char('d')) => self.overlay = Overlay::Confirming,
            (Overlay::Visible, KeyCode::Esc) => self.overlay = Overlay::Hidden,
            (Overlay::Confirming, KeyCode::Char('y')) => self.confirm_delete(),
            (Overlay::Confirming, KeyCode::Char('n') | KeyCode::Esc) => {
                // Decline: dismiss the overlay, touch nothing.
                self.overlay = Overlay::Hidden;
            }
            _ => {}
        }
    }

    /// Applies a REST completion event.
    pub fn on_api_event(&mut self, event: ApiEvent, nav: &mut Navigator) {
        match event {
            ApiEvent::Fetched { id, result } if id == self.id => match result {
                Ok(student) => {
                    self.fetch = None;
                    self.load = LoadState::Loaded(student);
                }
                Err(err) => {
                    tracing::warn!(%id, error = %err, "student fetch failed");
                    self.fetch = None;
                    self.load = LoadState::Failed(err.to_string());
                }
            },
            ApiEvent::Deleted { id, result } if id == self.id => match result {
                Ok(()) => {
                    if let Err(err) = nav.go_to(Destination::Index, NavParams::default()) {
                        tracing::warn!(error = %err, "index navigation rejected");
                    }
                }
                Err(err) => {
                    tracing::warn!(%id, error = %err, "student delete failed");
                    self.delete_pending = false;
                    self.status = Some(format!("delete failed: {err}"));
                }
            },
            // Stale completion from a previous screen instance.
            other => tracing::debug!(event = ?other, "ignoring stale api event"),
        }
    }

    fn edit(&mut self, nav: &mut Navigator) {
        match nav.go_to(Destination::Form, NavParams::for_id(self.id)) {
            Ok(()) => self.overlay = Overlay::Hidden,
            Err(err) => {
                tracing::warn!(error = %err, "edit navigation rejected");
                self.status = Some(err.to_string());
            }
        }
    }

    fn confirm_delete(&mut self) {
        self.overlay = Overlay::Hidden;
        if self.delete_pending {
            return;
        }
        self.delete_pending = true;
        self.status = Some("deleting...".to_string());
        let id = self.id;
        let directory = Arc::clone(&self.directory);
        let tx = self.events.clone();
        // Deliberately not abortable: the completion event drives the
        // transition back to the index destination.
        drop(self.runtime.spawn(async move {
            let result = directory.remove(id).await;
            if tx.send(ApiEvent::Deleted { id, result }).is_err() {
                tracing::debug!(%id, "event channel closed before delete completed");
            }
        }));
    }
}

impl Drop for DetailScreen {
    fn drop(&mut self) {
        // Cancel an in-flight fetch when the screen is torn down.
        if let Some(fetch) = self.fetch.take() {
            fetch.abort();
        }
    }
}
