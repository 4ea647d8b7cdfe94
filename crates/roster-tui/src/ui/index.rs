//! Student list rendering for the index screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::screens::LoadState;
use crate::screens::index::IndexScreen;

/// Renders the index body for the current loading state.
pub fn render_index(frame: &mut Frame<'_>, area: Rect, screen: &IndexScreen) {
    match &screen.load {
        LoadState::Loading => {
            let loading = Paragraph::new("Loading students...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Green))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(loading, area);
        }
        LoadState::Failed(reason) => {
            let failed = Paragraph::new(format!("Could not load students: {reason}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(failed, area);
        }
        LoadState::Loaded(students) => {
            if students.is_empty() {
                let empty = Paragraph::new("No students registered.")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(empty, area);
                return;
            }
            let items: Vec<ListItem<'_>> = students
                .iter()
                .map(|student| ListItem::new(format!("{}  ({})", student.name, student.city)))
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL))
                .highlight_style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            let mut state = ListState::default();
            state.select(Some(screen.selected));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}
