//! Action-menu overlay and delete-confirmation dialog.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::screens::detail::Overlay;
use crate::ui::centered_rect;

/// Renders the overlay surface over the detail view.
pub fn render_overlay(frame: &mut Frame<'_>, overlay: Overlay) {
    let area = frame.area();
    match overlay {
        Overlay::Hidden => {}
        Overlay::Visible => render_menu(frame, area),
        Overlay::Confirming => {
            render_menu(frame, area);
            render_confirm(frame, area);
        }
    }
}

fn render_menu(frame: &mut Frame<'_>, area: Rect) {
    let menu_area = top_right_rect(22, 4, area);
    frame.render_widget(Clear, menu_area);
    let menu = Paragraph::new(vec![
        Line::styled("[e] Edit", Style::default().fg(Color::Yellow)),
        Line::styled("[d] Delete", Style::default().fg(Color::Red)),
    ])
    .block(Block::default().title("Actions").borders(Borders::ALL));
    frame.render_widget(menu, menu_area);
}

fn render_confirm(frame: &mut Frame<'_>, area: Rect) {
    let dialog_area = centered_rect(44, 24, area);
    frame.render_widget(Clear, dialog_area);
    let dialog = Paragraph::new(vec![
        Line::from("Delete this student?"),
        Line::default(),
        Line::from("[y] yes    [n] no"),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title("Delete")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(dialog, dialog_area);
}

/// Rectangle anchored below the header at the right edge of `area`.
fn top_right_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y.saturating_add(3).min(area.bottom().saturating_sub(height)),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_right_rect_stays_inside_the_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = top_right_rect(22, 4, area);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
    }

    #[test]
    fn top_right_rect_clamps_on_tiny_terminals() {
        let area = Rect::new(0, 0, 10, 3);
        let rect = top_right_rect(22, 4, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
        assert!(rect.bottom() <= area.bottom());
    }
}
