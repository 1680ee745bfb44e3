use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route one key press. The alert popup swallows everything; Ctrl+Q
/// quits from any screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.alert().is_some() {
        app.dismiss_alert();
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
    {
        app.request_quit();
        return;
    }

    if app.screen().is_list() {
        handle_list_key(app, key);
    } else {
        handle_form_key(app, key);
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if app.is_confirming_delete() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Char('n') => {
            if app.screen() == Screen::Categories {
                app.open_category_create();
            } else {
                app.open_product_create();
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('p') => app.open_products(),
        KeyCode::Char('c') => app.open_categories(),
        KeyCode::Char('r') => {
            if app.screen() == Screen::Categories {
                app.open_categories();
            } else {
                app.open_products();
            }
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.back(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.category_prev(),
        KeyCode::Right => app.category_next(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => app.submit(),
        KeyCode::Char(ch) => app.input_char(ch),
        _ => {}
    }
}
