use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use folio_core::contact::{ContactClient, SubmitNotice};
use folio_core::document::parser::{load_page, parse_page};
use folio_core::AppConfig;
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key, Action},
    widgets::{HeaderWidget, PageWidget, PopupWidget, StatusBarWidget},
};

/// Page shown when no document is given
const SAMPLE_PAGE: &str = include_str!("../../assets/sample_page.toml");

pub async fn run(config: Arc<AppConfig>, page_path: Option<PathBuf>) -> Result<()> {
    let page = match page_path {
        Some(ref path) => load_page(path)?,
        None => parse_page(SAMPLE_PAGE)?,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(page.title.as_str()))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(page, config.clone());
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    // Channel for async form submission results
    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel::<SubmitNotice>();

    // Main loop
    loop {
        // Surface any finished submission as a blocking notice
        while let Ok(notice) = notice_rx.try_recv() {
            app.is_sending = false;
            app.mode = Mode::Notice(notice);
        }

        // Advance scrolling and the motion engine
        app.on_tick();

        terminal.draw(|frame| draw(frame, &mut app))?;

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key(key, &app.mode);
                    handle_action(&mut app, action, &config, notice_tx.clone());
                }
                AppEvent::Resize(_, _) => {
                    // Layout recomputes on the next draw
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // The header gives its rows back to the page while hidden
    let header_rows: u16 = if app.engine.header_hidden() { 0 } else { 2 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_rows),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    if header_rows > 0 {
        HeaderWidget::render(frame, chunks[0], app);
    }

    app.recompute_layout(chunks[1].width, chunks[1].height);
    PageWidget::render(frame, chunks[1], app);
    StatusBarWidget::render(frame, chunks[2], app);

    // Popups draw on top
    match &app.mode {
        Mode::Compose(draft) => PopupWidget::render_compose(frame, draft),
        Mode::Notice(notice) => PopupWidget::render_notice(frame, *notice),
        Mode::Normal => {}
    }
}

fn handle_action(
    app: &mut App,
    action: Action,
    config: &Arc<AppConfig>,
    notice_tx: mpsc::UnboundedSender<SubmitNotice>,
) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::HalfPageDown => app.half_page_down(),
        Action::HalfPageUp => app.half_page_up(),
        Action::JumpTop => app.jump_to_top(),
        Action::JumpBottom => app.jump_to_bottom(),
        Action::NavJump(index) => app.nav_jump(index),
        Action::Compose => app.open_compose(),
        Action::ComposeInput(c) => {
            if let Mode::Compose(ref mut draft) = app.mode {
                draft.active_field_mut().push(c);
            }
        }
        Action::ComposeBackspace => {
            if let Mode::Compose(ref mut draft) = app.mode {
                draft.active_field_mut().pop();
            }
        }
        Action::ComposeNextField => {
            if let Mode::Compose(ref mut draft) = app.mode {
                draft.field = draft.field.next();
            }
        }
        Action::ComposeSubmit => submit(app, config, notice_tx),
        Action::Cancel => app.mode = Mode::Normal,
        Action::None => {}
    }
}

/// Kick off the form submission and return to the page; the result arrives
/// later through the notice channel
fn submit(app: &mut App, config: &Arc<AppConfig>, notice_tx: mpsc::UnboundedSender<SubmitNotice>) {
    let Mode::Compose(draft) = std::mem::replace(&mut app.mode, Mode::Normal) else {
        return;
    };

    match ContactClient::new(&config.contact) {
        Ok(client) => {
            let message = draft.into_message();
            app.is_sending = true;
            tokio::spawn(async move {
                let result = client.submit(&message).await;
                if let Err(ref e) = result {
                    tracing::warn!("Contact submission failed: {}", e);
                }
                let _ = notice_tx.send(SubmitNotice::from_result(&result));
            });
        }
        Err(e) => {
            tracing::warn!("Contact form unavailable: {}", e);
            app.set_status(format!("Contact form unavailable: {}", e));
        }
    }
}
