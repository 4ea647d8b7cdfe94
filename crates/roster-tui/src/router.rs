//! Static route table and the navigation capability.
//!
//! The route table declares the reachable destinations and their header
//! presentation. Screens never navigate through a global object; they are
//! handed a mutable [`Navigator`] and request transitions with
//! [`Navigator::go_to`]. Requests to destinations absent from the table are
//! rejected with an explicit error instead of being silently dropped.

use roster_common::types::StudentId;
use thiserror::Error;

/// Named navigable screen targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The list/menu screen.
    Index,
    /// The read-only single-record screen.
    Detail,
    /// The edit/create form. Owned by an external collaborator; this client
    /// addresses it by name but does not implement it.
    Form,
}

impl Destination {
    /// Returns the wire name of the destination.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Detail => "detail",
            Self::Form => "form",
        }
    }
}

/// Which header variant a destination uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// Menu header: title only, no overlay trigger.
    Menu,
    /// Detail header: title plus the action-menu trigger.
    Detail,
}

/// Per-destination header presentation.
#[derive(Debug, Clone, Copy)]
pub struct HeaderConfig {
    /// Title text shown in the header bar.
    pub title: &'static str,
    /// Header variant.
    pub kind: HeaderKind,
}

/// Static declaration of the reachable destinations.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<(Destination, HeaderConfig)>,
}

impl RouteTable {
    /// The standard two-destination table: index (menu header) and detail
    /// (detail header with the overlay trigger).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            routes: vec![
                (
                    Destination::Index,
                    HeaderConfig {
                        title: "Students",
                        kind: HeaderKind::Menu,
                    },
                ),
                (
                    Destination::Detail,
                    HeaderConfig {
                        title: "Student",
                        kind: HeaderKind::Detail,
                    },
                ),
            ],
        }
    }

    /// Returns the header configuration for a registered destination.
    #[must_use]
    pub fn header(&self, destination: Destination) -> Option<&HeaderConfig> {
        self.routes
            .iter()
            .find(|(dest, _)| *dest == destination)
            .map(|(_, header)| header)
    }

    /// Whether the destination is declared in this table.
    #[must_use]
    pub fn is_registered(&self, destination: Destination) -> bool {
        self.header(destination).is_some()
    }
}

/// Parameters carried by a navigation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavParams {
    /// Record identifier for destinations that address a single record.
    pub id: Option<StudentId>,
}

impl NavParams {
    /// Parameters addressing a single record.
    #[must_use]
    pub const fn for_id(id: StudentId) -> Self {
        Self { id: Some(id) }
    }
}

/// A resolved navigation request awaiting execution by the app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRequest {
    /// Target destination.
    pub destination: Destination,
    /// Parameters for the target.
    pub params: NavParams,
}

/// Navigation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// The destination is not declared in the route table.
    #[error("destination not registered: {name}")]
    Unregistered {
        /// Wire name of the rejected destination.
        name: &'static str,
    },
}

/// Navigation capability handed to screens.
///
/// `go_to` validates the target against the route table and queues at most
/// one pending request; the app loop drains it with [`Navigator::take_pending`]
/// after each dispatched event.
#[derive(Debug)]
pub struct Navigator {
    table: RouteTable,
    pending: Option<NavRequest>,
}

impl Navigator {
    /// Creates a navigator over the given route table.
    #[must_use]
    pub const fn new(table: RouteTable) -> Self {
        Self {
            table,
            pending: None,
        }
    }

    /// Requests a transition to `destination` with `params`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Unregistered`] when the destination is not
    /// declared in the route table.
    pub fn go_to(&mut self, destination: Destination, params: NavParams) -> Result<(), NavError> {
        if !self.table.is_registered(destination) {
            return Err(NavError::Unregistered {
                name: destination.name(),
            });
        }
        tracing::debug!(destination = destination.name(), ?params, "navigation requested");
        self.pending = Some(NavRequest {
            destination,
            params,
        });
        Ok(())
    }

    /// Takes the queued navigation request, if any.
    pub fn take_pending(&mut self) -> Option<NavRequest> {
        self.pending.take()
    }

    /// Returns the route table backing this navigator.
    #[must_use]
    pub const fn table(&self) -> &RouteTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_registers_index_and_detail() {
        let table = RouteTable::standard();
        assert!(table.is_registered(Destination::Index));
        assert!(table.is_registered(Destination::Detail));
        assert!(!table.is_registered(Destination::Form));
    }

    #[test]
    fn menu_header_has_no_overlay_trigger() {
        let table = RouteTable::standard();
        let header = table.header(Destination::Index).expect("registered");
        assert_eq!(header.kind, HeaderKind::Menu);
        let header = table.header(Destination::Detail).expect("registered");
        assert_eq!(header.kind, HeaderKind::Detail);
    }

    #[test]
    fn go_to_queues_registered_destination() {
        let mut nav = Navigator::new(RouteTable::standard());
        nav.go_to(Destination::Detail, NavParams::for_id(StudentId::new(42)))
            .expect("registered destination");

        let request = nav.take_pending().expect("queued");
        assert_eq!(request.destination, Destination::Detail);
        assert_eq!(request.params.id, Some(StudentId::new(42)));
        assert_eq!(nav.take_pending(), None);
    }

    #[test]
    fn go_to_rejects_unregistered_destination() {
        let mut nav = Navigator::new(RouteTable::standard());
        let err = nav
            .go_to(Destination::Form, NavParams::for_id(StudentId::new(42)))
            .unwrap_err();
        assert_eq!(err, NavError::Unregistered { name: "form" });
        assert_eq!(nav.take_pending(), None);
    }
}
