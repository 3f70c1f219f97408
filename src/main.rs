use std::sync::Arc;
use std::time::Duration;

use anitui::adapters::ReqwestHttpClient;
use anitui::api::ApiClient;
use anitui::app::{App, AppEvent, AppMessage};
use anitui::cli::{parse_args, run_cli_command};
use anitui::config::Config;
use anitui::logging::init_logging;
use anitui::terminal::{setup_panic_hook, TerminalSession};
use anitui::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

/// Spinner and other animations advance once per tick.
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    if run_cli_command(parse_args(std::env::args())) {
        return Ok(());
    }

    color_eyre::install()?;
    let log_path = init_logging();

    // Configuration problems are reported on the normal screen, before raw mode.
    let config = Config::from_env()?;
    tracing::info!(
        base_url = %config.base_url,
        ranking_type = %config.ranking_type,
        page_size = config.page_size,
        log = ?log_path,
        "starting"
    );

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let http = Arc::new(ReqwestHttpClient::new());
    let api = ApiClient::from_config(&config, http);

    let mut session = TerminalSession::new()?;
    let size = session.dimensions()?;

    let result = runtime.block_on(async {
        let mut app = App::new(&config, api);
        let commands = app.handle_event(AppEvent::Resize(size));
        app.dispatch(commands);
        let commands = app.init();
        app.dispatch(commands);
        run_app(session.terminal(), &mut app).await
    });

    session.restore()?;
    tracing::info!("exiting");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    while !app.should_quit {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK_RATE);

        let event = tokio::select! {
            _ = timeout => Some(AppEvent::Tick),

            event_result = event_stream.next() => match event_result {
                Some(Ok(event)) => AppEvent::from_terminal(event),
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal event error");
                    None
                }
                None => {
                    tracing::info!("terminal event stream closed");
                    break;
                }
            },

            message = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => message.map(AppEvent::Message),
        };

        if let Some(event) = event {
            let commands = app.handle_event(event);
            app.dispatch(commands);
        }
    }

    Ok(())
}
