//! Header bar, one variant per destination.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::router::{HeaderConfig, HeaderKind};

/// Renders the header bar for the active destination.
///
/// The menu variant shows the title only; the detail variant adds the
/// action-menu trigger hint.
pub fn render_header(frame: &mut Frame<'_>, area: Rect, config: &HeaderConfig) {
    let mut spans = vec![Span::styled(
        config.title,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];
    if config.kind == HeaderKind::Detail {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "[m] menu",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}
