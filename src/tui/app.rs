use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::sheet::{Record, RecordStore, SheetError, export_to_dir, import_file};
use crate::submit::{Notification, ServerReply, SubmitError, Submitter};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    HelpState, IMPORT_FAILED, RecordsState, RegisterState, draw_help, draw_records, draw_register,
    import_succeeded,
};
use super::widgets::{Toast, draw_alert, draw_toast};

/// How long the event loop waits for input before checking background work.
const TICK: Duration = Duration::from_millis(100);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Fill in and submit a registration.
    Register,
    /// Import, view and export the records list.
    Records,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label for titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Records => "Records",
            Self::Help => "Help",
        }
    }
}

/// Result of background work, delivered back to the event loop.
#[derive(Debug)]
pub enum Completion {
    /// The backend answered (or failed to answer) a registration.
    Submitted(Result<ServerReply, SubmitError>),
    /// A workbook import finished.
    Imported(Result<Vec<Record>, SheetError>),
}

/// Top-level application state.
pub struct App<S: Submitter> {
    screen: Screen,
    register: RegisterState,
    records: RecordsState,
    help: HelpState,
    store: RecordStore,
    config: Config,
    submitter: Arc<S>,
    runtime: Handle,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
    toast: Option<Toast>,
    alert: Option<String>,
    should_quit: bool,
}

impl<S: Submitter> App<S> {
    /// Creates a new `App` on the [`Screen::Register`] screen.
    ///
    /// Submissions and imports are spawned onto `runtime`.
    pub fn new(config: Config, submitter: S, runtime: Handle) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Register,
            register: RegisterState::new(),
            records: RecordsState::new(),
            help: HelpState::new(),
            store: RecordStore::new(),
            config,
            submitter: Arc::new(submitter),
            runtime,
            completions_tx,
            completions_rx,
            toast: None,
            alert: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → apply finished work → poll input → expire toast.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.drain_completions();
            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
            self.expire_toast(Instant::now());
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, toast_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Register => draw_register(&self.register, frame, main_area),
            Screen::Records => draw_records(&self.records, &self.store, frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }
        draw_toast(self.toast.as_ref(), frame, toast_area);

        if let Some(message) = &self.alert {
            draw_alert(message, frame, frame.area());
        }
    }

    /// Handles a key event: alert dismissal, then global keys, then the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.alert.take().is_some() {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = match key.code {
            KeyCode::F(1) => {
                if self.screen != Screen::Help {
                    self.help.open_from(self.screen);
                    self.screen = Screen::Help;
                }
                Action::None
            }
            KeyCode::F(2) => Action::Navigate(Screen::Register),
            KeyCode::F(3) => Action::Navigate(Screen::Records),
            _ => match self.screen {
                Screen::Register => self.register.handle_key(key),
                Screen::Records => self.records.handle_key(key, self.store.len()),
                Screen::Help => self.help.handle_key(key),
            },
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit(registration) => {
                let submitter = Arc::clone(&self.submitter);
                let tx = self.completions_tx.clone();
                self.runtime.spawn(async move {
                    let result = submitter.submit(&registration).await;
                    // The receiver lives as long as the app.
                    let _ = tx.send(Completion::Submitted(result));
                });
            }
            Action::ExportRecords => self.export(),
            Action::ImportRecords(path) => self.import(path),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Exports under today's UTC date.
    fn export(&mut self) {
        self.export_dated(Utc::now().date_naive());
    }

    fn export_dated(&mut self, date: NaiveDate) {
        let message = match export_to_dir(self.store.records(), &self.config.export_dir, date) {
            Ok(path) => format!(
                "Exported {} records to {}",
                self.store.len(),
                path.display()
            ),
            Err(SheetError::NoData) => SheetError::NoData.to_string(),
            Err(e) => {
                warn!(error = %e, "export failed");
                format!("Export failed: {e}")
            }
        };
        self.alert = Some(message);
    }

    fn import(&mut self, path: PathBuf) {
        info!(path = %path.display(), "starting import");
        let tx = self.completions_tx.clone();
        self.runtime.spawn(async move {
            let result = import_file(&path).await;
            let _ = tx.send(Completion::Imported(result));
        });
    }

    /// Applies the result of finished background work.
    pub fn apply_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Submitted(result) => {
                let notification = Notification::from_result(&result);
                debug!(success = notification.is_success(), "submission finished");
                self.register.form_mut().finish(notification.is_success());
                self.toast = Some(Toast::new(notification, Instant::now()));
            }
            Completion::Imported(result) => {
                let message = match self.store.apply_import(result) {
                    Ok(count) => import_succeeded(count),
                    Err(_) => IMPORT_FAILED.to_string(),
                };
                self.alert = Some(message);
            }
        }
    }

    /// Applies every completion that has already arrived, without waiting.
    pub fn drain_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply_completion(completion);
        }
    }

    /// Waits for the next completion.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.recv().await
    }

    /// Drops the toast once it has been visible for its full duration.
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Returns the open alert message, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn register(&self) -> &RegisterState {
        &self.register
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }
}
