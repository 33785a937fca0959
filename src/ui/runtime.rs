use crate::api::HttpPostsApi;
use crate::config::Config;
use crate::controller::spawn_worker;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
///
/// Backend calls run on `runtime`; the UI loop itself stays on the calling
/// thread and only blocks on the event channel.
pub fn run(config: &Config, runtime: &Handle) -> io::Result<()> {
    let api = HttpPostsApi::new(&config.api).map_err(io::Error::other)?;
    let endpoint = api.posts_url().to_string();

    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let completions = events.sender();
    let requests = spawn_worker(runtime, api, move |completion| {
        completions.send(AppEvent::Completed(completion)).is_ok()
    });

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(endpoint);
    app.set_request_sender(requests);
    app.request_list();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Completed(completion)) => app.on_completion(completion),
            Ok(AppEvent::InputClosed(reason)) => return Err(io::Error::other(reason)),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
