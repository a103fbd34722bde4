// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! A species list (the browse context) and an evolution view driven by the
//! [`Navigator`](crate::nav::Navigator). Input is read one key per tick.

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use crate::model::{Chain, SpeciesId};
use crate::nav::{Action, Effect, NavConfig, NavigationStack, Navigator, ViewState, ViewTab};
use crate::store::Catalog;

mod theme;

pub use theme::{Theme, ThemeError};

/// Input poll timeout; keeps the loop above 30 ticks per second.
pub const TICK: Duration = Duration::from_millis(33);

const TOAST_TTL: Duration = Duration::from_secs(2);

/// Startup options for [`run`].
#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    pub theme: Theme,
    pub nav_config: NavConfig,
    /// Open this species directly instead of starting on the species list.
    pub initial_species: Option<SpeciesId>,
}

/// Runs the interactive terminal UI until the user quits.
pub fn run(catalog: Catalog, options: TuiOptions) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(Arc::new(catalog), options.theme, options.nav_config);
    if let Some(species) = options.initial_species {
        app.select_species(species);
        app.open_species(species);
    }

    let mut terminal = TerminalSession::new()?;
    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key_code(key.code) {
                        app.should_quit = true;
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

// Extracted title/footer/help/body rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Browse,
    Detail,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    catalog: Arc<Catalog>,
    species: Vec<SpeciesId>,
    theme: Theme,
    nav_config: NavConfig,
    browse_state: ListState,
    navigator: Option<Navigator<Arc<Catalog>>>,
    show_help: bool,
    help_scroll: u16,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(catalog: Arc<Catalog>, theme: Theme, nav_config: NavConfig) -> Self {
        let species: Vec<SpeciesId> = catalog.species().map(|entry| entry.id()).collect();
        let mut browse_state = ListState::default();
        if !species.is_empty() {
            browse_state.select(Some(0));
        }

        Self {
            catalog,
            species,
            theme,
            nav_config,
            browse_state,
            navigator: None,
            show_help: false,
            help_scroll: 0,
            toast: None,
            should_quit: false,
        }
    }

    fn screen(&self) -> Screen {
        if self.navigator.is_some() {
            Screen::Detail
        } else {
            Screen::Browse
        }
    }

    fn selected_species(&self) -> Option<SpeciesId> {
        self.browse_state.selected().and_then(|idx| self.species.get(idx).copied())
    }

    /// Moves the browse selection to `id` if it is listed.
    fn select_species(&mut self, id: SpeciesId) {
        if let Some(idx) = self.species.iter().position(|candidate| *candidate == id) {
            self.browse_state.select(Some(idx));
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => {
                self.show_help = true;
                self.help_scroll = 0;
            }
            _ => match self.screen() {
                Screen::Browse => self.handle_browse_key(code),
                Screen::Detail => {
                    if let Some(action) = action_for_key(code) {
                        self.apply_action(action);
                    }
                }
            },
        }

        false
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.browse_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.browse_next(),
            KeyCode::Home => self.browse_first(),
            KeyCode::End => self.browse_last(),
            KeyCode::Enter | KeyCode::Char(' ') => self.open_selected_species(),
            _ => {}
        }
    }

    fn browse_prev(&mut self) {
        let len = self.species.len();
        if len == 0 {
            self.browse_state.select(None);
            return;
        }
        let idx = self.browse_state.selected().unwrap_or(0).min(len - 1);
        self.browse_state.select(Some(idx.saturating_sub(1)));
    }

    fn browse_next(&mut self) {
        let len = self.species.len();
        if len == 0 {
            self.browse_state.select(None);
            return;
        }
        let idx = self.browse_state.selected().unwrap_or(0).min(len - 1);
        self.browse_state.select(Some((idx + 1).min(len - 1)));
    }

    fn browse_first(&mut self) {
        if self.species.is_empty() {
            self.browse_state.select(None);
            return;
        }
        self.browse_state.select(Some(0));
    }

    fn browse_last(&mut self) {
        if self.species.is_empty() {
            self.browse_state.select(None);
            return;
        }
        self.browse_state.select(Some(self.species.len() - 1));
    }

    /// Hands the selected species over to a fresh navigation session.
    fn open_selected_species(&mut self) {
        let Some(species) = self.selected_species() else {
            self.set_toast("No species selected");
            return;
        };
        self.open_species(species);
    }

    fn open_species(&mut self, species: SpeciesId) {
        match Navigator::enter(self.catalog.clone(), species, ViewTab::default(), self.nav_config) {
            Ok(navigator) => self.navigator = Some(navigator),
            Err(err) => {
                tracing::warn!(species = %species, error = %err, "cannot open species");
                self.set_toast(format!("Cannot open {species}: {err}"));
            }
        }
    }

    fn apply_action(&mut self, action: Action) {
        let Some(navigator) = self.navigator.as_mut() else {
            return;
        };

        match navigator.handle_action(action) {
            Effect::ExitToBrowse => {
                let target = navigator.stack().peek().target();
                self.navigator = None;
                self.select_species(target);
            }
            // Failed drill-ins keep the current view; the navigator already logged why.
            Effect::Aborted(_) => {}
            Effect::None
            | Effect::Moved { .. }
            | Effect::Opened { .. }
            | Effect::Restored { .. }
            | Effect::TabChanged(_)
            | Effect::Scrolled { .. } => {}
        }
    }
}

/// Maps a key on the evolution view to a navigation action.
fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            Some(Action::MovePrev)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            Some(Action::MoveNext)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::ScrollDown),
        _ => None,
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    match app.screen() {
        Screen::Browse => render_browse(frame, app, main_area),
        Screen::Detail => render_detail(frame, app, main_area),
    }

    frame.render_widget(Paragraph::new(footer_line(app)), status_area);

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

fn render_browse(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let items = app
        .catalog
        .species()
        .map(|entry| ListItem::new(format!("{}  {}", entry.id(), entry.name())))
        .collect::<Vec<_>>();
    let count = format!("({})", items.len());

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Species", Some(&count)))
                .border_style(theme.panel_border_style(true)),
        )
        .highlight_style(theme.focus_style());
    frame.render_stateful_widget(list, area, &mut app.browse_state);
}

fn render_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(navigator) = app.navigator.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let view = navigator.current();

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let tabs = Tabs::new(ViewTab::ALL.iter().map(|tab| tab.title()).collect::<Vec<_>>())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(breadcrumb_title(&app.catalog, navigator.stack()))
                .border_style(theme.panel_border_style(false)),
        )
        .style(theme.base_style())
        .highlight_style(theme.target_style())
        .select(view.tab().index());
    frame.render_widget(tabs, panes[0]);

    let selectable = view.cursor().selectable_count();
    let tail = match view.cursor().index() {
        Some(idx) if selectable > 0 => format!("{}/{}", idx + 1, selectable),
        _ => String::new(),
    };
    let body = Paragraph::new(Text::from(detail_lines(view, &app.catalog, theme)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title(view.tab().title(), Some(&tail)))
                .border_style(theme.panel_border_style(true)),
        )
        .wrap(Wrap { trim: false })
        .scroll((view.aux().scroll(), 0));
    frame.render_widget(body, panes[1]);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{draw, App, Navigator, Screen, Theme};
    use crate::nav::{NavConfig, ViewState};
    use crate::store::Catalog;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    pub(crate) struct HeadlessTui {
        app: App,
    }

    impl HeadlessTui {
        pub(crate) fn new(catalog: Catalog) -> Self {
            Self::with_config(catalog, NavConfig::default())
        }

        pub(crate) fn with_config(catalog: Catalog, nav_config: NavConfig) -> Self {
            Self { app: App::new(Arc::new(catalog), Theme::default(), nav_config) }
        }

        pub(crate) fn press(&mut self, code: KeyCode) -> bool {
            self.app.handle_key_code(code)
        }

        pub(crate) fn press_all(&mut self, codes: &[KeyCode]) {
            for &code in codes {
                self.press(code);
            }
        }

        pub(crate) fn in_detail(&self) -> bool {
            self.app.screen() == Screen::Detail
        }

        pub(crate) fn current_view(&self) -> Option<&ViewState> {
            self.app.navigator.as_ref().map(Navigator::current)
        }

        pub(crate) fn stack_depth(&self) -> Option<usize> {
            self.app.navigator.as_ref().map(|navigator| navigator.stack().depth())
        }

        pub(crate) fn selected_species(&self) -> Option<crate::model::SpeciesId> {
            self.app.selected_species()
        }

        pub(crate) fn select_species(&mut self, id: crate::model::SpeciesId) {
            self.app.select_species(id);
        }

        pub(crate) fn render(&mut self, width: u16, height: u16) -> String {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
            terminal.draw(|frame| draw(frame, &mut self.app)).expect("draw");
            let buffer = terminal.backend().buffer();
            (0..buffer.area.height)
                .map(|y| {
                    (0..buffer.area.width)
                        .map(|x| buffer.get(x, y).symbol().to_owned())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}
