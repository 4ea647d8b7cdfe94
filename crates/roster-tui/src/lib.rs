//! # roster-tui
//!
//! Interactive terminal client for browsing and managing student records.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - An index screen listing all students.
//! - A read-only detail screen for a single record.
//! - An action-menu overlay (edit / delete) with delete confirmation.
//!
//! Navigation between screens goes through an explicitly passed
//! [`router::Navigator`] capability; there is no global navigation object.

pub mod app;
pub mod event;
pub mod router;
pub mod runner;
pub mod screens;
pub mod ui;

pub use app::Entry;
pub use runner::run;
