use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

use folio::adapters::ReqwestHttpClient;
use folio::app::{App, AppMessage};
use folio::auth::SessionStore;
use folio::cli::{parse_args, run_cli_command, run_local_command, CliCommand};
use folio::config::FolioConfig;
use folio::logging::{init_cli_logging, init_tui_logging};
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::traits::HttpClient;
use folio::ui;

/// Frame interval; also how quickly carousel state changes show up.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    // --version and --help must work even with a broken environment.
    if let Some(result) = run_local_command(&command) {
        return result;
    }

    let mut config = FolioConfig::from_env()?;
    if let CliCommand::RunTui {
        folder: Some(folder),
    } = &command
    {
        config = config.with_folder(folder.clone());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());

    if !matches!(command, CliCommand::RunTui { .. }) {
        init_cli_logging(&config);
    }
    if let Some(result) = runtime.block_on(run_cli_command(&command, &config, Arc::clone(&http))) {
        return result;
    }

    config.validate()?;
    init_tui_logging(&config)?;
    setup_panic_hook();

    let session = config
        .session_path()
        .map(SessionStore::with_path)
        .and_then(|store| store.load());
    tracing::info!(
        api = %config.api_url,
        folder = %config.folder,
        logged_in = session.is_some(),
        "starting folio"
    );

    runtime.block_on(run_tui(config, http, session))
}

async fn run_tui(
    config: FolioConfig,
    http: Arc<dyn HttpClient>,
    session: Option<folio::auth::Session>,
) -> Result<()> {
    let mut app = App::new(config, http, session)?;
    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(FRAME);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
