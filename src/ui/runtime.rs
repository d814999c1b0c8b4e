use crate::config::Config;
use crate::content::SlideSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse, InputAction};
use crate::ui::link::SystemBrowser;
use crate::ui::listeners::{InputListeners, MouseCaptureHost};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

pub fn run(config: &Config, source: SlideSource, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut listeners = InputListeners::new(MouseCaptureHost);
    listeners.attach()?;
    guard.release_pointer_capture();

    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(config, Box::new(SystemBrowser));
    let events = EventHandler::new(tick_rate);
    let source = Arc::new(source);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    if app.request_load() {
        spawn_load(&runtime, Arc::clone(&source), events.sender());
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::Reload {
                    spawn_load(&runtime, Arc::clone(&source), events.sender());
                }
            }
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::SlidesLoaded(slides)) => app.on_slides_loaded(slides),
            Ok(AppEvent::SlidesFailed(reason)) => app.on_load_failed(reason),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Release pointer capture before leaving the alternate screen.
    drop(listeners);
    drop(guard);
    Ok(())
}

/// Runs one load on the async runtime and reports back through the event
/// channel.
fn spawn_load(runtime: &Handle, source: Arc<SlideSource>, tx: Sender<AppEvent>) {
    tracing::info!(source = %source.describe(), "Loading digest");
    runtime.spawn(async move {
        let event = match source.load().await {
            Ok(slides) => AppEvent::SlidesLoaded(slides),
            Err(err) => {
                tracing::error!(source = %source.describe(), error = %err, "Failed to load digest");
                AppEvent::SlidesFailed(err.to_string())
            }
        };
        // Receiver is gone only if the UI already exited.
        let _ = tx.send(event);
    });
}
