//! TUI application state machine.
//!
//! Owns the navigator and the active screen, dispatches terminal and REST
//! completion events, and executes queued navigation requests by swapping
//! screens. Swapping drops the old screen, which aborts its in-flight fetch.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_api::StudentDirectory;
use roster_common::types::StudentId;
use tokio::runtime::Handle;

use crate::event::{ApiEvent, ApiEventSender};
use crate::router::{Destination, HeaderConfig, NavRequest, Navigator, RouteTable};
use crate::screens::detail::DetailScreen;
use crate::screens::index::IndexScreen;

/// Destination the session starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// Start at the student list.
    Index,
    /// Start at the detail screen for one record.
    Detail(StudentId),
}

/// The active screen and its state.
#[derive(Debug)]
pub enum ActiveScreen {
    /// Student list.
    Index(IndexScreen),
    /// Single-record detail view.
    Detail(DetailScreen),
}

/// Root application state for one TUI session.
#[derive(Debug)]
pub struct App {
    running: bool,
    navigator: Navigator,
    screen: ActiveScreen,
    directory: Arc<dyn StudentDirectory>,
    events: ApiEventSender,
    runtime: Handle,
}

impl App {
    /// Creates the app and mounts the entry screen.
    #[must_use]
    pub fn new(
        entry: Entry,
        directory: Arc<dyn StudentDirectory>,
        events: ApiEventSender,
        runtime: Handle,
    ) -> Self {
        let screen = match entry {
            Entry::Index => ActiveScreen::Index(IndexScreen::mount(
                Arc::clone(&directory),
                events.clone(),
                runtime.clone(),
            )),
            Entry::Detail(id) => ActiveScreen::Detail(DetailScreen::mount(
                id,
                Arc::clone(&directory),
                events.clone(),
                runtime.clone(),
            )),
        };
        Self {
            running: true,
            navigator: Navigator::new(RouteTable::standard()),
            screen,
            directory,
            events,
            runtime,
        }
    }

    /// Whether the session should keep running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Signals the session to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// The active screen, for rendering.
    #[must_use]
    pub const fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    /// Header configuration of the active destination.
    #[must_use]
    pub fn header(&self) -> Option<&HeaderConfig> {
        let destination = match self.screen {
            ActiveScreen::Index(_) => Destination::Index,
            ActiveScreen::Detail(_) => Destination::Detail,
        };
        self.navigator.table().header(destination)
    }

    /// Dispatches a key press: global quit keys first, then the screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
                self.quit();
                return;
            }
            _ => {}
        }
        match &mut self.screen {
            ActiveScreen::Index(screen) => screen.handle_key(key, &mut self.navigator),
            ActiveScreen::Detail(screen) => screen.handle_key(key, &mut self.navigator),
        }
        self.apply_navigation();
    }

    /// Dispatches a REST completion event to the active screen.
    pub fn on_api_event(&mut self, event: ApiEvent) {
        match &mut self.screen {
            ActiveScreen::Index(screen) => screen.on_api_event(event),
            ActiveScreen::Detail(screen) => screen.on_api_event(event, &mut self.navigator),
        }
        self.apply_navigation();
    }

    /// Executes a queued navigation request by swapping the active screen.
    fn apply_navigation(&mut self) {
        while let Some(request) = self.navigator.take_pending() {
            match self.mount_for(request) {
                Some(screen) => self.screen = screen,
                None => tracing::warn!(?request, "navigation request without required params"),
            }
        }
    }

    fn mount_for(&self, request: NavRequest) -> Option<ActiveScreen> {
        match request.destination {
            Destination::Index => Some(ActiveScreen::Index(IndexScreen::mount(
                Arc::clone(&self.directory),
                self.events.clone(),
                self.runtime.clone(),
            ))),
            Destination::Detail => {
                let id = request.params.id?;
                Some(ActiveScreen::Detail(DetailScreen::mount(
                    id,
                    Arc::clone(&self.directory),
                    self.events.clone(),
                    self.runtime.clone(),
                )))
            }
            // Unregistered destinations never reach the queue.
            Destination::Form => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use crossterm::event::KeyModifiers;
    use roster_api::{ApiError, Result as ApiResult};
    use roster_common::types::Student;

    use super::*;
    use crate::event;

    #[derive(Debug)]
    struct FakeDirectory {
        students: Vec<Student>,
    }

    #[async_trait]
    impl StudentDirectory for FakeDirectory {
        async fn fetch(&self, id: StudentId) -> ApiResult<Student> {
            self.students
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or(ApiError::NotFound { id })
        }

        async fn list(&self) -> ApiResult<Vec<Student>> {
            Ok(self.students.clone())
        }

        async fn remove(&self, _id: StudentId) -> ApiResult<()> {
            Ok(())
        }
    }

    fn ana() -> Student {
        Student {
            id: StudentId::new(42),
            name: "Ana".to_string(),
            profile_img: None,
            zipcode: "01001000".to_string(),
            state: "SP".to_string(),
            city: "Sao Paulo".to_string(),
            neighborhood: "Se".to_string(),
            street: "Praca da Se".to_string(),
            number: "100".to_string(),
            complement: None,
        }
    }

    #[tokio::test]
    async fn quit_keys_stop_the_session() {
        let directory = Arc::new(FakeDirectory { students: vec![] });
        let (tx, _rx) = event::channel();
        let mut app = App::new(Entry::Index, directory, tx, Handle::current());

        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.is_running());
    }

    #[tokio::test]
    async fn delete_completion_swaps_back_to_the_index_screen() {
        let directory = Arc::new(FakeDirectory {
            students: vec![ana()],
        });
        let (tx, mut rx) = event::channel();
        let mut app = App::new(
            Entry::Detail(StudentId::new(42)),
            directory,
            tx,
            Handle::current(),
        );

        let fetched = rx.recv().await.expect("fetch completion");
        app.on_api_event(fetched);
        app.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE));

        let deleted = rx.recv().await.expect("delete completion");
        app.on_api_event(deleted);

        assert!(matches!(app.screen(), ActiveScreen::Index(_)));
        assert_eq!(
            app.header().map(|h| h.title),
            Some("Students")
        );
    }

    #[tokio::test]
    async fn entry_screens_carry_their_header_variant() {
        let directory = Arc::new(FakeDirectory { students: vec![] });
        let (tx, _rx) = event::channel();
        let index_directory: Arc<dyn StudentDirectory> = directory.clone();
        let app = App::new(Entry::Index, index_directory, tx, Handle::current());
        assert_eq!(
            app.header().map(|h| h.kind),
            Some(crate::router::HeaderKind::Menu)
        );

        let (tx, _rx) = event::channel();
        let app = App::new(
            Entry::Detail(StudentId::new(1)),
            directory,
            tx,
            Handle::current(),
        );
        assert_eq!(
            app.header().map(|h| h.kind),
            Some(crate::router::HeaderKind::Detail)
        );
    }
}
