//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use parking_lot::Mutex;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info};

use crate::application::{BeginSubmit, NotificationManager, SubmitMembershipUseCase};
use crate::domain::errors::SubmissionError;
use crate::domain::ports::NotificationPort;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{MembershipAction, MembershipScreen};
use crate::presentation::widgets::Toast;

const TOAST_TICK_RATE: Duration = Duration::from_millis(250);

/// Work reported back to the event loop by spawned tasks.
#[derive(Debug)]
enum Action {
    SubmissionFinished(Result<(), SubmissionError>),
}

/// Terminal application hosting the membership screen and its toasts.
pub struct App {
    running: bool,
    screen: MembershipScreen,
    submit_use_case: SubmitMembershipUseCase,
    notifier: Arc<dyn NotificationPort>,
    toasts: Arc<Mutex<NotificationManager>>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    #[must_use]
    pub fn new(
        submit_use_case: SubmitMembershipUseCase,
        notifier: Arc<dyn NotificationPort>,
        toasts: Arc<Mutex<NotificationManager>>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            screen: MembershipScreen::new(),
            submit_use_case,
            notifier,
            toasts,
            action_tx,
            action_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut toast_interval = interval(TOAST_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = toast_interval.tick() => {
                    if self.toasts.lock().tick() {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.running = false;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        if self.screen.handle_key(key) == MembershipAction::Submit {
            self.start_submission();
        }

        EventResult::Continue
    }

    fn start_submission(&mut self) {
        let form = match self.screen.begin_submit() {
            BeginSubmit::Ready(form) => form,
            BeginSubmit::InFlight => {
                debug!("Submission already in flight");
                return;
            }
            BeginSubmit::Invalid => {
                debug!(
                    failing = self.screen.controller().errors().len(),
                    "Form has validation errors"
                );
                return;
            }
        };

        let use_case = self.submit_use_case.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let delivery = tokio::spawn(async move { use_case.execute(&form).await });
            let result = delivery.await.unwrap_or_else(|e| {
                error!(error = %e, "Submission task aborted");
                Err(SubmissionError::unexpected(e.to_string()))
            });
            let _ = tx.send(Action::SubmissionFinished(result));
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SubmissionFinished(result) => {
                let outcome = self.screen.finish_submit(&result, self.notifier.as_ref());
                debug!(?outcome, "Submission finished");
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_widget(&self.screen, frame.area());

        let toasts = self.toasts.lock();
        if let Some(notification) = toasts.current_notification() {
            frame.render_widget(Toast::new(notification), frame.area());
        }
    }
}
