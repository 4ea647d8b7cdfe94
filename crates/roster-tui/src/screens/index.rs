//! Index screen listing all student records.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use roster_api::StudentDirectory;
use roster_common::types::Student;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use crate::event::{ApiEvent, ApiEventSender};
use crate::router::{Destination, NavParams, Navigator};
use crate::screens::LoadState;

/// State of the index screen.
#[derive(Debug)]
pub struct IndexScreen {
    /// Loading lifecycle of the student list.
    pub load: LoadState<Vec<Student>>,
    /// Index of the highlighted row.
    pub selected: usize,
    /// Transient status-line message.
    pub status: Option<String>,
    fetch: Option<AbortHandle>,
}

impl IndexScreen {
    /// Mounts the screen and spawns the list fetch.
    #[must_use]
    pub fn mount(
        directory: Arc<dyn StudentDirectory>,
        events: ApiEventSender,
        runtime: Handle,
    ) -> Self {
        let tx = events;
        let task = runtime.spawn(async move {
            let result = directory.list().await;
            if tx.send(ApiEvent::Listed { result }).is_err() {
                tracing::debug!("event channel closed before list completed");
            }
        });
        Self {
            load: LoadState::Loading,
            selected: 0,
            status: None,
            fetch: Some(task.abort_handle()),
        }
    }

    /// Returns the highlighted student, if the list is loaded and non-empty.
    #[must_use]
    pub fn selected_student(&self) -> Option<&Student> {
        self.load.loaded().and_then(|students| students.get(self.selected))
    }

    /// Dispatches a key press against the current state.
    pub fn handle_key(&mut self, key: KeyEvent, nav: &mut Navigator) {
        let Some(students) = self.load.loaded() else {
            return;
        };
        let count = students.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 && self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(student) = self.selected_student() {
                    if let Err(err) = nav.go_to(Destination::Detail, NavParams::for_id(student.id))
                    {
                        tracing::warn!(error = %err, "detail navigation rejected");
                        self.status = Some(err.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    /// Applies a REST completion event.
    pub fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Listed { result } => match result {
                Ok(students) => {
                    self.fetch = None;
                    self.selected = 0;
                    self.load = LoadState::Loaded(students);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "student list failed");
                    self.fetch = None;
                    self.load = LoadState::Failed(err.to_string());
                }
            },
            other => tracing::debug!(event = ?other, "ignoring stale api event"),
        }
    }
}

impl Drop for IndexScreen {
    fn drop(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            fetch.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use roster_common::types::StudentId;

    use super::*;
    use crate::router::RouteTable;

    fn student(id: u64, name: &str) -> Student {
        Student {
            id: StudentId::new(id),
            name: name.to_string(),
            profile_img: None,
            zipcode: "01001000".to_string(),
            state: "SP".to_string(),
            city: "Sao Paulo".to_string(),
            neighborhood: "Se".to_string(),
            street: "Praca da Se".to_string(),
            number: "1".to_string(),
            complement: None,
        }
    }

    fn loaded_screen(students: Vec<Student>) -> IndexScreen {
        let mut screen = IndexScreen {
            load: LoadState::Loading,
            selected: 0,
            status: None,
            fetch: None,
        };
        screen.on_api_event(ApiEvent::Listed {
            result: Ok(students),
        });
        screen
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut nav = Navigator::new(RouteTable::standard());
        let mut screen = loaded_screen(vec![student(1, "Ana"), student(2, "Bruno")]);

        screen.handle_key(key(KeyCode::Down), &mut nav);
        assert_eq!(screen.selected, 1);
        screen.handle_key(key(KeyCode::Down), &mut nav);
        assert_eq!(screen.selected, 1);
        screen.handle_key(key(KeyCode::Up), &mut nav);
        assert_eq!(screen.selected, 0);
        screen.handle_key(key(KeyCode::Up), &mut nav);
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn enter_navigates_to_detail_with_selected_id() {
        let mut nav = Navigator::new(RouteTable::standard());
        let mut screen = loaded_screen(vec![student(1, "Ana"), student(2, "Bruno")]);

        screen.handle_key(key(KeyCode::Down), &mut nav);
        screen.handle_key(key(KeyCode::Enter), &mut nav);

        let request = nav.take_pending().expect("navigation queued");
        assert_eq!(request.destination, Destination::Detail);
        assert_eq!(request.params.id, Some(StudentId::new(2)));
    }

    #[test]
    fn enter_on_empty_list_does_nothing() {
        let mut nav = Navigator::new(RouteTable::standard());
        let mut screen = loaded_screen(Vec::new());

        screen.handle_key(key(KeyCode::Enter), &mut nav);
        assert_eq!(nav.take_pending(), None);
    }

    #[test]
    fn list_failure_is_an_explicit_state() {
        let mut screen = IndexScreen {
            load: LoadState::Loading,
            selected: 0,
            status: None,
            fetch: None,
        };
        screen.on_api_event(ApiEvent::Listed {
            result: Err(roster_api::ApiError::Status { code: 502 }),
        });
        assert!(matches!(screen.load, LoadState::Failed(_)));
    }
}
