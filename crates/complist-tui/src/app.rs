//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The terminal is drawn on
//! stderr so stdout stays free for the accepted row.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        completion_list::{CompletionList, CompletionListState},
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
    },
};
use complist_core::{config::Config, Category, CategoryError, Row, RowId};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    /// `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub category: Category,
    pub query: QueryBarState,
    pub list: CompletionListState,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_secondary: bool,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
    /// Row picked with `Enter`, handed back by [`App::run`].
    pub accepted: Option<Row>,
}

impl AppState {
    /// Identity of the highlighted row, if the view is not empty.
    pub fn selected_id(&self) -> Option<RowId> {
        self.category
            .visible_at(self.list.selected)
            .map(|(id, _)| id)
    }

    /// Delete the highlighted row. An empty view is a no-op.
    pub fn delete_selected(&mut self) -> Result<(), CategoryError> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        self.category.delete(id)?;
        self.list.clamp(self.category.visible_len());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(category: Category, config: Config) -> Self {
        let theme = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
            Theme::load_default()
        });

        let state = AppState {
            query: QueryBarState::with_query(category.query()),
            category,
            list: CompletionListState::default(),
            focus: Focus::Query,
            theme,
            show_secondary: config.ui.show_secondary_columns,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
            accepted: None,
        };

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on
    /// exit. Returns the accepted row, or `None` when the user quit.
    pub fn run(mut self) -> anyhow::Result<Option<Row>> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stderr(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stderr());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result.map(|()| self.state.accepted)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind != crossterm::event::KeyEventKind::Press => {}
                    raw => {
                        if let Some(ev) = event::to_app_event(raw) {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply one event to the state. Public so the shell can be driven
    /// without a terminal.
    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Help | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = Focus::Query;
                }
                AppEvent::Quit => s.quit = true,
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = Focus::Query;
                            if let Err(msg) = execute_command(s, cmd) {
                                tracing::debug!(error = %msg, "command failed");
                                s.command_bar.error = Some(msg);
                            }
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = Focus::Query;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        // A leftover error line disappears on the next key.
        s.command_bar.error = None;

        match event {
            AppEvent::Quit | AppEvent::Escape => {
                tracing::debug!("quit");
                s.quit = true;
            }
            AppEvent::Help => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }
            AppEvent::CommandMode => {
                tracing::debug!("entering command mode");
                s.command_bar.clear();
                s.focus = Focus::Command;
            }
            AppEvent::Enter => {
                if let Some((id, row)) = s.category.visible_at(s.list.selected) {
                    tracing::debug!(%id, "row accepted");
                    s.accepted = Some(row.clone());
                    s.quit = true;
                }
            }
            AppEvent::DeleteSelected => {
                if let Err(err) = s.delete_selected() {
                    tracing::debug!(error = %err, "delete refused");
                    s.command_bar.error = Some(err.to_string());
                }
            }
            AppEvent::SelectNext | AppEvent::SelectPrev | AppEvent::PageDown | AppEvent::PageUp => {
                s.list.handle(&event, s.category.visible_len());
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => {
                if s.query.handle(&other) {
                    s.category.set_query(&s.query.query);
                    s.list.reset();
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line query bar | list | 1-line command/status row
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let counts = (state.category.visible_len(), state.category.len());
    let query_bar = QueryBar::new(
        &state.query,
        state.category.name(),
        counts,
        state.focus == Focus::Query,
        &state.theme,
    );
    let (cx, cy) = query_bar.cursor_position(vert[0]);
    frame.render_widget(query_bar, vert[0]);

    frame.render_widget(
        CompletionList::new(&state.category, &state.list, &state.theme)
            .show_secondary(state.show_secondary)
            .primary_width_pct(state.config.ui.primary_column_width_pct),
        vert[1],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
    if state.focus == Focus::Command || state.command_bar.error.is_some() {
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
    }

    if state.focus == Focus::Command {
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    } else {
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
