use crate::ui::products::state::{
    stock_band, ProductField, ProductFormState, ProductListState, StockBand,
};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use crate::ui::widgets::{field_line, render_delete_confirm};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_product_list(frame: &mut Frame, area: Rect, state: &ProductListState) {
    let block = Block::default()
        .title(Span::styled(
            " Gestión de Productos ",
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let lines = match state {
        ProductListState::Loading => vec![Line::from(""), Line::from("  Cargando productos...")],
        ProductListState::Loaded { rows, selected, .. } => {
            if rows.is_empty() {
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "  No hay productos",
                        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                    )),
                    Line::from("  Pulsa n para crear el primero"),
                ]
            } else {
                let mut lines = Vec::with_capacity(rows.len() + 1);
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {:<24} {:<14} {:>9} {:>12} {:>13}",
                        "NOMBRE", "MARCA", "CATEGORÍA", "PRECIO", "STOCK"
                    ),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                )));
                for (idx, product) in rows.iter().enumerate() {
                    let stock_style = match stock_band(product.stock) {
                        StockBand::Healthy => Style::default().fg(STATUS_OK),
                        StockBand::Low => Style::default().fg(STATUS_WARN),
                        StockBand::Out => Style::default().fg(STATUS_ERROR),
                    };
                    let mut line = Line::from(vec![
                        Span::styled(
                            format!(
                                "  {:<24.24} {:<14.14} {:>9} {:>12}",
                                product.name,
                                product.brand,
                                product.category,
                                format!("S/{}", product.price),
                            ),
                            Style::default().fg(HEADER_TEXT),
                        ),
                        Span::styled(format!("{:>8} uds.", product.stock), stock_style),
                    ]);
                    if idx == *selected {
                        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
                    }
                    lines.push(line);
                }
                lines
            }
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);

    if state.is_confirming() {
        render_delete_confirm(frame, area, "¿Estás seguro de eliminar este producto?");
    }
}

pub fn render_product_form(frame: &mut Frame, area: Rect, state: &ProductFormState) {
    let title = if state.editing.is_some() {
        " Editar Producto "
    } else {
        " Crear Nuevo Producto "
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.loading {
        let lines = vec![Line::from(""), Line::from("  Cargando producto...")];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let category_value = match state.selected_category_name() {
        Some(name) => name.to_string(),
        None if state.categories.is_empty() => "(sin categorías)".to_string(),
        None => "Selecciona una categoría (←/→)".to_string(),
    };

    let mut lines = vec![Line::from("")];
    lines.push(field_line("Nombre", &state.name, state.focus == ProductField::Name));
    lines.push(field_line("Marca", &state.brand, state.focus == ProductField::Brand));
    lines.push(field_line(
        "Categoría",
        &category_value,
        state.focus == ProductField::Category,
    ));
    lines.push(field_line("Precio S/", &state.price, state.focus == ProductField::Price));
    lines.push(field_line("Stock", &state.stock, state.focus == ProductField::Stock));
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
