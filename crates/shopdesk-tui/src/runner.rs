//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use shopdesk_api::{HttpUserApi, UserApi};
use shopdesk_app::config::Settings;
use shopdesk_app::message::Message;
use shopdesk_app::process::process_message;
use shopdesk_app::session::SessionContext;
use shopdesk_app::signals;
use shopdesk_app::state::AppState;
use shopdesk_app::store::FileStore;
use shopdesk_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI against the API at `settings.api.base_url`
pub async fn run(settings: Settings) -> Result<()> {
    let session_path = settings.storage.session_path()?;
    let store = FileStore::open(&session_path)?;
    let session = SessionContext::new(Box::new(store));
    info!("Session file: {}", session_path.display());

    let base_url = settings.api.parsed_base_url()?;
    info!("API base URL: {}", base_url);
    let api = Arc::new(HttpUserApi::new(base_url, settings.api.request_timeout())?);

    let mut state = AppState::with_session(settings, session);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let mut term = terminal::init()?;
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, api);
    terminal::restore();

    info!("shopdesk exiting");
    result
}

/// Main event loop: drain task results, draw, then wait briefly for input.
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
) -> Result<()>
where
    A: UserApi + Send + Sync + 'static,
{
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &api);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &api);
        }
    }

    Ok(())
}
