//! Small render helpers shared by the resource screens.

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Delete-confirmation popup centered over the list body.
pub fn render_delete_confirm(frame: &mut Frame, area: Rect, question: &str) {
    let width = (question.chars().count() as u16 + 6).max(30);
    let popup = centered_rect_by_size(area, width, 5);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Confirmar ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let lines = vec![
        Line::from(format!(" {question}")),
        Line::from(""),
        Line::from(Span::styled(
            " y: Eliminar   n/Esc: Cancelar",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// A labelled form field row; the focused field gets an accent label and a
/// cursor mark.
pub fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let value_style = if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
    };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("  {label:<12} "), label_style),
        Span::styled(format!("{value}{cursor}"), value_style),
    ])
}
