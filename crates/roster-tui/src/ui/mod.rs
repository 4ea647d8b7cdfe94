//! Frame composition for the TUI session.
//!
//! Layout: header bar, screen body, status line. The detail screen's
//! action-menu overlay and confirmation dialog are drawn last so they sit
//! on top of the body.

pub mod detail;
pub mod header;
pub mod index;
pub mod overlay;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{ActiveScreen, App};
use crate::screens::detail::Overlay;

/// Renders one frame of the session.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    if let Some(config) = app.header() {
        header::render_header(frame, layout[0], config);
    }

    match app.screen() {
        ActiveScreen::Index(screen) => index::render_index(frame, layout[1], screen),
        ActiveScreen::Detail(screen) => detail::render_detail(frame, layout[1], &screen.load),
    }

    let status = Paragraph::new(status_text(app))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if let ActiveScreen::Detail(screen) = app.screen() {
        if screen.overlay != Overlay::Hidden {
            overlay::render_overlay(frame, screen.overlay);
        }
    }
}

fn status_text(app: &App) -> String {
    let (hints, message) = match app.screen() {
        ActiveScreen::Index(screen) => ("up/down select | enter open | q quit", &screen.status),
        ActiveScreen::Detail(screen) => {
            let hints = match screen.overlay {
                Overlay::Hidden => "m menu | q quit",
                Overlay::Visible => "e edit | d delete | esc close",
                Overlay::Confirming => "y confirm | n cancel",
            };
            (hints, &screen.status)
        }
    };
    match message {
        Some(message) => format!("{message} | {hints}"),
        None => hints.to_string(),
    }
}

/// Returns a rectangle centered in `area` covering the given percentages.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
