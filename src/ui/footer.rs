use crate::ui::app::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, screen: Screen, notice: Option<&str>) -> Paragraph<'static> {
        let hints = if screen.is_list() {
            " ↑/↓: Mover │ n: Nuevo │ e/Enter: Editar │ d: Eliminar │ p/c: Sección │ r: Recargar │ Ctrl+Q: Salir"
        } else {
            " Tab/↑/↓: Campo │ Enter: Guardar │ Esc: Volver │ Ctrl+Q: Salir"
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count; the hints carry non-ASCII.
        let left = match notice {
            Some(notice) => format!("{hints} │ {notice}"),
            None => hints.to_string(),
        };
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let notice_style = Style::default().fg(STATUS_ERROR);

        let mut spans = vec![Span::styled(hints.to_string(), text_style)];
        if let Some(notice) = notice {
            spans.push(Span::styled(" │ ", text_style));
            spans.push(Span::styled(notice.to_string(), notice_style));
        }
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
