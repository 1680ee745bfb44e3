use crate::ui::app::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, screen: Screen) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let products_active = matches!(
            screen,
            Screen::Products | Screen::ProductCreate | Screen::ProductEdit(_)
        );
        let line = Line::from(vec![
            Span::styled("  Inventario", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(
                "Productos",
                if products_active { active } else { text_style },
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                "Categorías",
                if products_active { text_style } else { active },
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
