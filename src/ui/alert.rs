use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Blocking popup for the one failure the user must acknowledge.
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 6).max(40).min(area.width);
    let popup = centered_rect_by_size(area, width, 5);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Aviso ", Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    let lines = vec![
        Line::from(format!(" {message}")),
        Line::from(""),
        Line::from(Span::styled(
            " Pulsa cualquier tecla para continuar",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
