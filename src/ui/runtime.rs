use crate::api::ApiClient;
use crate::config::ConfigStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::ApiWorker;
use std::io;
use std::time::Duration;

pub fn run(config: ConfigStore) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    let snapshot = config.get();
    let tick_rate = Duration::from_millis(snapshot.terminal.tick_ms);
    let host = snapshot.api.host.clone();

    let events = EventHandler::new(tick_rate);
    let client = ApiClient::new(&host);
    let worker = ApiWorker::spawn(client, events.sender());
    let mut app = App::new(host, worker);
    app.boot();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Api(outcome)) => app.on_api(outcome),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
