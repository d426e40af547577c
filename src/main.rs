//! Clicker TUI - a terminal rendition of the clicker page
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - page controller processing one event at a time
//! - Ticker (Tokio) - periodic timer feeding the app layer

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use clicker_tui::app::{AppActor, AppState, Ticker};
use clicker_tui::config::Config;
use clicker_tui::constants::{APP_NAME, APP_VERSION};
use clicker_tui::dom::Document;
use clicker_tui::messages::{UiEvent, RenderState};
use clicker_tui::messages::ui_events::{key_to_ui_event, InputMode};
use clicker_tui::ui::{button_span, centered_rect, counter_color, render_input, render_lines, visible_tail};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(
        tick_interval_ms = config.tick_interval_ms,
        restart_button = config.restart_button,
        "Starting {} {}",
        APP_NAME,
        APP_VERSION
    );

    // Mount before touching the terminal so a bad page fails cleanly
    let state = AppState::new(Document::page(config.restart_button))?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn timer and app actor
    let ticker = Ticker::spawn(config.tick_interval(), ui_tx.clone());
    let app_actor = AppActor::new(state, render_tx).with_ticker(ticker);
    let app_handle = tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    let _ = app_handle.await;
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.alert.is_some(),
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Seconds + counter
            Constraint::Length(1),  // Buttons
            Constraint::Min(5),     // Likes + comments
            Constraint::Length(3),  // Comment input
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_header(f, state, chunks[0]);
    draw_buttons(f, state, chunks[1]);
    draw_feeds(f, state, chunks[2]);
    draw_comment_input(f, state, chunks[3]);
    draw_status_bar(f, state, chunks[4]);

    if state.show_help {
        draw_help_popup(f, area);
    }

    if let Some(message) = &state.alert {
        draw_alert_popup(f, message, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(state.seconds.as_str(), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled(
            state.counter.as_str(),
            Style::default().fg(counter_color(&state.counter)).bold(),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", APP_NAME));
    f.render_widget(Paragraph::new(line).block(block).alignment(Alignment::Center), area);
}

fn draw_buttons(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut spans = vec![
        button_span(&state.minus, "-"),
        Span::raw(" "),
        button_span(&state.plus, "+"),
        Span::raw(" "),
        button_span(&state.heart, "l"),
        Span::raw(" "),
        button_span(&state.pause, "p"),
    ];
    if let Some(restart) = &state.restart {
        spans.push(Span::raw(" "));
        spans.push(button_span(restart, "r"));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn draw_feeds(f: &mut Frame, state: &RenderState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let likes = render_lines(
        visible_tail(&state.likes, columns[0].height),
        " Likes ",
        "No likes yet.",
    );
    f.render_widget(likes, columns[0]);

    let comments = render_lines(
        visible_tail(&state.comments, columns[1].height),
        " Comments ",
        "No comments yet.",
    );
    f.render_widget(comments, columns[1]);
}

fn draw_comment_input(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_editing = state.input_mode == InputMode::Editing;
    let title = if is_editing {
        " Comment (Enter:submit Esc:stop) "
    } else {
        " Comment (e:edit) "
    };

    f.render_widget(render_input(&state.comment_input, title, is_editing), area);

    if is_editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let typed = state.comment_input[..state.cursor_position.min(state.comment_input.len())]
            .chars()
            .count() as u16;
        let cursor_x = (area.x + typed + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move | Enter:submit "
    } else {
        " +/-:count | l:like | p:pause | r:restart | e:comment | ?:help | q:quit "
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 CLICKER TUI - Keyboard Shortcuts

 COUNTER
   + / =              Increase count
   -                  Decrease count
   l                  Like the current number

 GAME
   p                  Pause / resume
   r                  Restart timer and count

 COMMENTS
   e                  Edit comment
   Enter              Submit comment
   Esc                Stop editing

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_alert_popup(f: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(50, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Alert (any key to close) ")
        .style(Style::default().bg(Color::Black));

    let alert = Paragraph::new(message)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(alert, popup_area);
}
