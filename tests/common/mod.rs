//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use inventario::ui::app::App;
use inventario::ui::input::handle_key;
use inventario::ui::worker::{ApiCommand, ApiWorker};
use tokio::sync::mpsc::Receiver;

/// Build an `App` whose worker channel is drained by the test instead of
/// a runtime, so flows can assert on the commands they produce.
pub fn make_app() -> (App, Receiver<ApiCommand>) {
    let (worker, rx) = ApiWorker::detached();
    let app = App::new("http://127.0.0.1:1".to_string(), worker);
    (app, rx)
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn press_ctrl(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}
