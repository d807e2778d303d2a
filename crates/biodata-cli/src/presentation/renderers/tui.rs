//! TUI Renderer for the interactive biodata editor
//!
//! ## Design:
//! - Renderer owns the app and all UI state (focused input, status line)
//! - Every frame is drawn from fresh ViewModels built by the presenters
//! - Keys become [`Action`]s which are applied to the app in one place
//! - A store subscription reports successful commits in the status bar

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use biodata_core::{BiodataApp, Error};
use biodata_types::{BiodataRecord, DraftRecord, ViewName};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::presenters::{present_screen, present_status_bar};
use crate::presentation::view_models::{ScreenBody, StatusBadge};
use crate::presentation::views::tui::components::{Action, EditFormComponent};
use crate::presentation::views::tui::{
    EditFormView, HomeView, NavBarView, ProfileView, StatusBarView,
};

pub struct TuiRenderer {
    app: BiodataApp,

    /// UI State: focused input on the Edit view
    edit_form: EditFormComponent,

    /// UI State: last status message, shared with the store subscription
    status: Rc<RefCell<Option<StatusBadge>>>,

    /// UI State: Should quit flag
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(mut app: BiodataApp) -> Self {
        let status = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&status);
        app.store_mut().subscribe(move |_: &BiodataRecord| {
            *sink.borrow_mut() = Some(StatusBadge::success("Saved"));
        });

        Self {
            app,
            edit_form: EditFormComponent::new(),
            status,
            should_quit: false,
        }
    }

    pub fn app(&self) -> &BiodataApp {
        &self.app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main event loop
    ///
    /// Sets up the terminal, draws and handles keys until quit, then restores
    /// the terminal even when the loop failed.
    pub fn run(mut self) -> Result<()> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, &interrupted);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        interrupted: &AtomicBool,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.should_quit || interrupted.load(Ordering::SeqCst) {
                break;
            }
        }

        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Raw mode swallows SIGINT, so ^C arrives as a key
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.apply(Action::Quit);
            return;
        }

        let action = match self.app.edit_session() {
            Some(session) if self.app.active_view() == ViewName::Edit => {
                self.edit_form.handle_input(key, session.draft())
            }
            _ => self.browse_action(key),
        };

        if let Some(action) = action {
            self.apply(action);
        }
    }

    /// Keys on the read-only views
    fn browse_action(&self, key: KeyEvent) -> Option<Action> {
        let active = self.app.active_view();
        match key.code {
            KeyCode::Char('1') | KeyCode::Char('h') => Some(Action::Navigate(ViewName::Home)),
            KeyCode::Char('2') | KeyCode::Char('p') => Some(Action::Navigate(ViewName::Profile)),
            KeyCode::Char('3') | KeyCode::Char('e') => Some(Action::Navigate(ViewName::Edit)),
            KeyCode::Right | KeyCode::Tab => Some(Action::Navigate(active.next())),
            KeyCode::Left | KeyCode::BackTab => Some(Action::Navigate(active.previous())),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Navigate(view) => {
                if view != self.app.active_view() {
                    let discarding = self.app.edit_session().is_some_and(|session| {
                        *session.draft() != DraftRecord::from(self.app.store().record())
                    });
                    *self.status.borrow_mut() =
                        discarding.then(|| StatusBadge::info("Changes discarded"));
                }
                if view == ViewName::Edit && self.app.active_view() != ViewName::Edit {
                    self.edit_form.reset();
                }
                self.app.navigate(view);
            }
            Action::ChangeField(field, value) => {
                if let Err(e) = self.app.change_field(field, value) {
                    tracing::warn!("field change ignored: {}", e);
                }
            }
            Action::Submit => match self.app.submit() {
                Ok(record) => tracing::info!(name = %record.name, "biodata saved"),
                Err(Error::Validation(errors)) => {
                    *self.status.borrow_mut() = Some(StatusBadge::error(format!(
                        "{} field(s) need attention",
                        errors.len()
                    )));
                }
                Err(e) => tracing::warn!("submit ignored: {}", e),
            },
        }
    }

    /// Layout: [Nav bar | Active view | Status bar]
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

        let screen = present_screen(&self.app, Some(self.edit_form.focus()));
        f.render_widget(NavBarView::new(&screen.nav), chunks[0]);

        match &screen.body {
            ScreenBody::Home(home) => f.render_widget(HomeView::new(home), chunks[1]),
            ScreenBody::Profile(profile) => {
                f.render_widget(ProfileView::new(profile), chunks[1])
            }
            ScreenBody::Edit(form) => f.render_widget(EditFormView::new(form), chunks[1]),
        }

        let status_bar =
            present_status_bar(self.app.active_view(), self.status.borrow().clone());
        f.render_widget(StatusBarView::new(&status_bar), chunks[2]);
    }
}
