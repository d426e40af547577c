//! App actor - message loop serializing ticks and UI events

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::app::ticker::Ticker;
use crate::messages::{RenderState, UiEvent};

/// App actor that owns the page and processes one event at a time
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
    ticker: Option<Ticker>,
}

impl AppActor {
    pub fn new(state: AppState, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor {
            state,
            render_tx,
            ticker: None,
        }
    }

    /// Attach the timer task so it is cancelled when the actor quits
    pub fn with_ticker(mut self, ticker: Ticker) -> Self {
        self.ticker = Some(ticker);
        self
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) -> AppState {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        tracing::info!(
            seconds = self.state.page.seconds(),
            count = self.state.page.count(),
            comments = self.state.page.comments().len(),
            "App actor stopped"
        );
        self.state
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        // Blocking notification: nothing but dismiss, quit and ticks get through
        if self.state.alert_open()
            && !matches!(event, UiEvent::DismissAlert | UiEvent::Quit | UiEvent::Tick)
        {
            return false;
        }

        match event {
            UiEvent::Tick => self.state.page.tick(),

            // Page buttons
            UiEvent::Increment => self.state.page.increment(),
            UiEvent::Decrement => self.state.page.decrement(),
            UiEvent::Like => self.state.page.like(),
            UiEvent::TogglePause => self.state.page.toggle_pause(),
            UiEvent::Restart => {
                self.state.page.restart();
            }

            // Comment input
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::SubmitComment => self.state.submit_comment(),

            // Popups
            UiEvent::DismissAlert => self.state.dismiss_alert(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn actor() -> (AppActor, mpsc::UnboundedReceiver<RenderState>) {
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let state = AppState::new(Document::page(true)).unwrap();
        (AppActor::new(state, render_tx), render_rx)
    }

    #[tokio::test]
    async fn test_events_processed_in_order() {
        let (actor, mut render_rx) = actor();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();

        for event in [
            UiEvent::Increment,
            UiEvent::Tick,
            UiEvent::Like,
            UiEvent::TogglePause,
            UiEvent::Tick,
            UiEvent::Increment,
            UiEvent::Quit,
        ] {
            ui_tx.send(event).unwrap();
        }

        let state = actor.run(ui_rx).await;
        assert_eq!(state.page.count(), 1);
        assert_eq!(state.page.seconds(), 1);
        assert!(state.page.is_paused());

        let mut last = None;
        while let Ok(render) = render_rx.try_recv() {
            last = Some(render);
        }
        let last = last.unwrap();
        assert_eq!(last.seconds, "Seconds: 1");
        assert_eq!(last.counter, "1");
        assert_eq!(last.likes, vec!["Number 1 has 1 like(s)".to_string()]);
        assert_eq!(last.pause.label, "Resume");
    }

    #[tokio::test]
    async fn test_alert_blocks_buttons_until_dismissed() {
        let (actor, _render_rx) = actor();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();

        for event in [
            UiEvent::SubmitComment,
            UiEvent::Increment,
            UiEvent::DismissAlert,
            UiEvent::Increment,
            UiEvent::Quit,
        ] {
            ui_tx.send(event).unwrap();
        }

        let state = actor.run(ui_rx).await;
        assert_eq!(state.page.count(), 1);
        assert!(!state.alert_open());
    }

    #[tokio::test]
    async fn test_stops_when_senders_dropped() {
        let (actor, _render_rx) = actor();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        ui_tx.send(UiEvent::Decrement).unwrap();
        drop(ui_tx);

        let state = actor.run(ui_rx).await;
        assert_eq!(state.page.count(), -1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_drives_seconds() {
        let (actor, _render_rx) = actor();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(std::time::Duration::from_secs(1), ui_tx.clone());
        let handle = tokio::spawn(actor.with_ticker(ticker).run(ui_rx));

        tokio::time::sleep(std::time::Duration::from_millis(2500)).await;
        ui_tx.send(UiEvent::Quit).unwrap();

        let state = handle.await.unwrap();
        assert_eq!(state.page.seconds(), 2);
    }
}
