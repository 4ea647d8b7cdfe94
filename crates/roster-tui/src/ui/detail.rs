//! Read-only rendering of a single student record.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use roster_common::types::Student;

use crate::screens::LoadState;

/// Renders the detail body for the current loading state.
pub fn render_detail(frame: &mut Frame<'_>, area: Rect, load: &LoadState<Student>) {
    match load {
        LoadState::Loading => {
            // Full-screen blocking indicator while the fetch is in flight.
            let loading = Paragraph::new("Loading student record...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Green))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(loading, area);
        }
        LoadState::Failed(reason) => {
            let failed = Paragraph::new(format!("Could not load student: {reason}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(failed, area);
        }
        LoadState::Loaded(student) => {
            let mut lines = vec![profile_line(student), Line::default()];
            for (label, value) in field_rows(student) {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label:<13}"), Style::default().fg(Color::Green)),
                    Span::raw(value),
                ]));
            }
            let body = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(body, area);
        }
    }
}

fn profile_line(student: &Student) -> Line<'_> {
    student.profile_image().map_or_else(
        || {
            Line::from(Span::styled(
                "[ no profile image ]",
                Style::default().fg(Color::DarkGray),
            ))
        },
        |uri| {
            Line::from(vec![
                Span::styled("Profile      ", Style::default().fg(Color::Green)),
                Span::raw(uri),
            ])
        },
    )
}

/// Label/value rows for every record field, in display order.
///
/// An absent complement renders as the empty string.
pub fn field_rows(student: &Student) -> Vec<(&'static str, String)> {
    vec![
        ("Name", student.name.clone()),
        ("Zipcode", student.zipcode.clone()),
        ("State", student.state.clone()),
        ("City", student.city.clone()),
        ("Neighborhood", student.neighborhood.clone()),
        ("Street", student.street.clone()),
        ("Number", student.number.clone()),
        ("Complement", student.complement_or_empty().to_string()),
    ]
}
