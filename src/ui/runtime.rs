use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::browser::CoinBrowser;
use crate::config::UiConfig;
use crate::fetch::PageFetcher;
use crate::store::{DatasetStore, PendingFetch};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::map_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the coin list screen until the user quits.
///
/// Must be called inside a tokio runtime. All state lives on the task that
/// awaits this future; page requests are spawned and report back through
/// the event queue.
pub async fn run(ui: &UiConfig, fetcher: Arc<dyn PageFetcher>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(ui.tick_rate_ms);
    let mut app = App::new(CoinBrowser::new(DatasetStore::new(fetcher)), ui.end_threshold);
    let mut events = EventHandler::new(tick_rate);
    let sender = events.sender();

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    spawn_fetch(app.initial_load(), &sender);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => {
                if let Some(action) = map_key(key) {
                    spawn_fetch(app.apply(action), &sender);
                }
            }
            Some(AppEvent::Paste(text)) => app.on_paste(&text),
            Some(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Some(AppEvent::Tick) => {}
            Some(AppEvent::PageFetched(completion)) => {
                spawn_fetch(app.on_page_fetched(completion), &sender);
            }
            None => break,
        }
    }

    drop(guard);
    Ok(())
}

fn spawn_fetch(pending: Option<PendingFetch>, sender: &UnboundedSender<AppEvent>) {
    let Some(pending) = pending else {
        return;
    };
    let sender = sender.clone();
    tokio::spawn(async move {
        let completion = pending.run().await;
        let _ = sender.send(AppEvent::PageFetched(completion));
    });
}
