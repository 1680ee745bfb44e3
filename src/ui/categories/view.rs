use crate::api::resolve_image_url;
use crate::ui::categories::state::{
    CategoryField, CategoryFormState, CategoryListState, PreviewState,
};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
};
use crate::ui::widgets::{field_line, render_delete_confirm};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_category_list(frame: &mut Frame, area: Rect, state: &CategoryListState, host: &str) {
    let block = Block::default()
        .title(Span::styled(" Categorías ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let lines = match state {
        CategoryListState::Loading => {
            vec![Line::from(""), Line::from("  Cargando categorías...")]
        }
        CategoryListState::Loaded { rows, selected, .. } => {
            if rows.is_empty() {
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "  No hay categorías",
                        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                    )),
                    Line::from("  Pulsa n para crear la primera"),
                ]
            } else {
                let mut lines = Vec::with_capacity(rows.len() * 2);
                for (idx, category) in rows.iter().enumerate() {
                    let focused = idx == *selected;
                    let mut name_line = Line::from(vec![
                        Span::styled(
                            format!("  {:<28.28}", category.name),
                            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(" {:<40.40}", category.description),
                            Style::default().fg(HEADER_TEXT),
                        ),
                    ]);
                    let image_text = match &category.image {
                        Some(reference) => resolve_image_url(host, reference),
                        None => "(sin imagen)".to_string(),
                    };
                    let mut image_line = Line::from(Span::styled(
                        format!("    {image_text}"),
                        Style::default().fg(HEADER_SEPARATOR),
                    ));
                    if focused {
                        let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
                        name_line = name_line.style(highlight);
                        image_line = image_line.style(highlight);
                    }
                    lines.push(name_line);
                    lines.push(image_line);
                }
                lines
            }
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);

    if state.is_confirming() {
        render_delete_confirm(frame, area, "¿Estás seguro de eliminar esta categoría?");
    }
}

pub fn render_category_form(frame: &mut Frame, area: Rect, state: &CategoryFormState, host: &str) {
    let title = if state.editing.is_some() {
        " Editar Categoría "
    } else {
        " Nueva Categoría "
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.loading {
        let lines = vec![Line::from(""), Line::from("  Cargando categoría...")];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let mut lines = vec![Line::from("")];
    lines.push(field_line("Nombre", &state.name, state.focus == CategoryField::Name));
    lines.push(field_line(
        "Descripción",
        &state.description,
        state.focus == CategoryField::Description,
    ));
    lines.push(field_line(
        "Imagen",
        &state.image_path,
        state.focus == CategoryField::ImagePath,
    ));
    lines.push(Line::from(Span::styled(
        "               Enter en Imagen adjunta el archivo",
        Style::default().fg(HEADER_SEPARATOR),
    )));
    lines.push(Line::from(""));

    // Existing server-side image, shown until a new file is chosen.
    if state.image.is_none() {
        if let Some(reference) = &state.current_image {
            lines.push(Line::from(vec![
                Span::styled("  Imagen actual: ", Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    resolve_image_url(host, reference),
                    Style::default().fg(HEADER_SEPARATOR),
                ),
            ]));
            lines.push(Line::from(""));
        }
    }

    match &state.preview {
        PreviewState::Empty => {}
        PreviewState::Loading => {
            lines.push(Line::from(Span::styled(
                "  Generando vista previa...",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            )));
        }
        PreviewState::Ready(preview) => {
            lines.push(Line::from(Span::styled(
                format!("  Vista previa: {}", preview.caption()),
                Style::default().fg(HEADER_TEXT),
            )));
            for row in &preview.thumbnail {
                lines.push(Line::from(Span::styled(
                    format!("  {row}"),
                    Style::default().fg(HEADER_TEXT),
                )));
            }
        }
        PreviewState::Failed(message) => {
            lines.push(Line::from(Span::styled(
                format!("  Sin vista previa: {message}"),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::DIM),
            )));
        }
    }

    lines.push(Line::from(""));
    if state.submitting {
        lines.push(Line::from(Span::styled(
            "  Guardando...",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )));
    }
    if let Some(notice) = &state.notice {
        lines.push(Line::from(Span::styled(
            format!("  {notice}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
