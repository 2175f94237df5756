// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm): sidebar, split editor/preview
//! with a draggable divider, reading mode, and the settings overlay.

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::editor::EditorBuffer;
use crate::model::{
    fixtures, Notebook, Settings, SettingsUpdate, ThemeId, FONT_SIZE_MAX, FONT_SIZE_MIN,
};
use crate::render::{PreviewCache, PreviewKey};
use crate::scroll::{ScrollMetrics, ScrollRegion, ScrollSync};
use crate::split::{split_columns, SplitPane};
use crate::store::{load_notebook, save_notebook, KvStore, SETTINGS_KEY, THEME_KEY};
use crate::ui::{ViewMode, ViewState};

mod theme;

use theme::ThemePalette;

const SIDEBAR_WIDTH: u16 = 26;
const WHEEL_STEP: i64 = 3;
const TOAST_TTL: Duration = Duration::from_secs(2);

/// Runs the TUI against a notes folder, loading persisted state first.
pub fn run_with_store(store: KvStore) -> Result<(), Box<dyn Error>> {
    let notebook = load_notebook(&store);
    let settings = store.read_or(SETTINGS_KEY, Settings::default);
    let theme_name = store.read_or(THEME_KEY, || ThemeId::default().name().to_owned());
    let mut app = App::new(notebook, Some(store), settings, theme_name);
    // reconciliation at load may have synthesized or repaired state
    app.persist_notebook();
    run_app(app)
}

/// Runs the TUI on an in-memory demo notebook; nothing is persisted.
pub fn run_demo() -> Result<(), Box<dyn Error>> {
    let app = App::new(
        fixtures::demo_notebook(),
        None,
        Settings::default(),
        ThemeId::default().name().to_owned(),
    );
    run_app(app)
}

fn run_app(mut app: App) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;
        app.end_frame();

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

include!("chrome.rs");

struct Toast {
    message: String,
    expires_at: Instant,
}

/// Scroll state of the preview pane; content and viewport heights are
/// refreshed every frame before scrolling math runs.
#[derive(Debug, Default)]
struct PreviewPane {
    scroll_top: usize,
    content_height: usize,
    viewport_height: usize,
}

impl PreviewPane {
    fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn clamp(&mut self) {
        let max = self.max_scroll();
        if self.scroll_top > max {
            self.scroll_top = max;
        }
    }

    fn scroll_by(&mut self, delta: i64) {
        let top = self.scroll_top as i64 + delta;
        self.scroll_top = top.clamp(0, self.max_scroll() as i64) as usize;
    }
}

impl ScrollRegion for PreviewPane {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            self.scroll_top as f64,
            self.content_height as f64,
            self.viewport_height as f64,
        )
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        let top = scroll_top.round().max(0.0) as usize;
        self.scroll_top = top.min(self.max_scroll());
    }
}

/// Pixel-free layout of the last drawn frame, for mouse routing.
#[derive(Debug, Default, Clone, Copy)]
struct FrameLayout {
    container: Rect,
    sidebar: Rect,
    editor: Rect,
    divider: Rect,
    preview: Rect,
}

struct App {
    notebook: Notebook,
    store: Option<KvStore>,
    settings: Settings,
    theme_name: String,
    view: ViewState,
    split: SplitPane,
    scroll_sync: ScrollSync,
    editor: EditorBuffer,
    preview: PreviewPane,
    preview_cache: PreviewCache,
    focus: Focus,
    sidebar_visible: bool,
    sidebar_state: ListState,
    rename_buffer: Option<String>,
    pending_delete: bool,
    settings_cursor: usize,
    layout: FrameLayout,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(notebook: Notebook, store: Option<KvStore>, mut settings: Settings, theme_name: String) -> Self {
        settings.font_size = settings.font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);

        let editor = notebook
            .active_document()
            .map(|doc| EditorBuffer::from_text(doc.content()))
            .unwrap_or_default();

        let mut sidebar_state = ListState::default();
        let active_index = notebook
            .active_id()
            .and_then(|id| notebook.documents().iter().position(|doc| doc.document_id() == id));
        sidebar_state.select(active_index);

        Self {
            notebook,
            store,
            settings,
            theme_name,
            view: ViewState::default(),
            split: SplitPane::default(),
            scroll_sync: ScrollSync::new(true),
            editor,
            preview: PreviewPane::default(),
            preview_cache: PreviewCache::default(),
            focus: Focus::Editor,
            sidebar_visible: true,
            sidebar_state,
            rename_buffer: None,
            pending_delete: false,
            settings_cursor: 0,
            layout: FrameLayout::default(),
            toast: None,
            should_quit: false,
        }
    }

    fn theme(&self) -> ThemeId {
        ThemeId::from_name(&self.theme_name)
    }

    fn active_index(&self) -> Option<usize> {
        let active = self.notebook.active_id()?;
        self.notebook
            .documents()
            .iter()
            .position(|doc| doc.document_id() == active)
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    /// Per-frame housekeeping after rendering: the scroll sync reentrancy
    /// flag clears here, and stale toasts expire.
    fn end_frame(&mut self) {
        self.scroll_sync.end_frame();
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| Instant::now() >= toast.expires_at)
        {
            self.toast = None;
        }
    }

    // ---- persistence -----------------------------------------------------

    fn persist_notebook(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = save_notebook(store, &self.notebook) {
            self.set_toast(format!("persist failed: {err}"));
        }
    }

    fn persist_settings(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = store.write(SETTINGS_KEY, &self.settings) {
            self.set_toast(format!("persist failed: {err}"));
        }
    }

    fn persist_theme(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = store.write(THEME_KEY, &self.theme_name) {
            self.set_toast(format!("persist failed: {err}"));
        }
    }

    // ---- document operations ---------------------------------------------

    fn load_active_into_editor(&mut self) {
        let content = self
            .notebook
            .active_document()
            .map(|doc| doc.content().to_owned())
            .unwrap_or_default();
        self.editor.set_text(&content);
        self.preview.scroll_top = 0;
        self.view.bump_rev();
        self.sidebar_state.select(self.active_index());
    }

    fn after_active_changed(&mut self) {
        self.load_active_into_editor();
        self.persist_notebook();
    }

    fn create_document(&mut self) {
        self.notebook.create_document();
        self.view.exit_reading();
        self.scroll_sync.set_enabled(true);
        self.focus = Focus::Editor;
        self.after_active_changed();
    }

    fn delete_active_document(&mut self) {
        let Some(id) = self.notebook.active_id().cloned() else {
            return;
        };
        let name = self
            .notebook
            .active_document()
            .map(|doc| doc.name().to_owned())
            .unwrap_or_default();
        self.notebook.delete_document(&id);
        self.after_active_changed();
        self.set_toast(format!("Deleted {name}"));
    }

    fn select_index(&mut self, index: usize) {
        let Some(document) = self.notebook.documents().get(index) else {
            return;
        };
        let id = document.document_id().clone();
        if self.notebook.active_id() == Some(&id) {
            self.sidebar_state.select(Some(index));
            return;
        }
        self.notebook.select_document(id);
        self.after_active_changed();
    }

    fn select_offset(&mut self, delta: i64) {
        if self.notebook.is_empty() {
            return;
        }
        let last = self.notebook.len() - 1;
        let current = self.active_index().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, last as i64) as usize;
        self.select_index(next);
    }

    /// Pushes the edited buffer into the model and persists it.
    fn content_changed(&mut self) {
        let text = self.editor.text();
        self.notebook.update_active_content(text);
        self.view.bump_rev();
        self.persist_notebook();
    }

    // ---- scroll synchronization ------------------------------------------

    fn mirror_from_editor(&mut self) {
        if self.view.mode() != ViewMode::Split {
            return;
        }
        self.scroll_sync.on_scroll(&self.editor, &mut self.preview);
    }

    fn mirror_from_preview(&mut self) {
        if self.view.mode() != ViewMode::Split {
            return;
        }
        self.scroll_sync.on_scroll(&self.preview, &mut self.editor);
    }

    fn toggle_reading_mode(&mut self) {
        self.view.toggle_mode();
        // the pairing only exists while both panes are on screen
        self.scroll_sync
            .set_enabled(self.view.mode() == ViewMode::Split);
    }

    // ---- keys ------------------------------------------------------------

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }
        if self.view.settings_open() {
            self.handle_settings_key(key);
            return;
        }
        if self.rename_buffer.is_some() {
            self.handle_rename_key(key);
            return;
        }
        if self.pending_delete {
            self.pending_delete = false;
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('d')) {
                self.delete_active_document();
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('p') => self.toggle_reading_mode(),
                KeyCode::Char('t') => self.view.set_settings_open(true),
                KeyCode::Char('n') => self.create_document(),
                KeyCode::Char('b') => self.sidebar_visible = !self.sidebar_visible,
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::Tab {
            self.focus = match self.focus {
                Focus::Sidebar => Focus::Editor,
                Focus::Editor if self.sidebar_visible => Focus::Sidebar,
                Focus::Editor => Focus::Editor,
            };
            return;
        }

        if self.view.mode() == ViewMode::Reading {
            self.handle_reading_key(key.code);
            return;
        }

        match self.focus {
            Focus::Sidebar => self.handle_sidebar_key(key.code),
            Focus::Editor => self.handle_editor_key(key),
        }
    }

    fn handle_reading_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.preview.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.preview.scroll_by(1),
            KeyCode::PageUp => self.preview.scroll_by(-(self.preview.viewport_height as i64)),
            KeyCode::PageDown => self.preview.scroll_by(self.preview.viewport_height as i64),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_sidebar_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.select_offset(-1),
            KeyCode::Down | KeyCode::Char('j') => self.select_offset(1),
            KeyCode::Char('n') => self.create_document(),
            KeyCode::Char('r') => {
                let name = self
                    .notebook
                    .active_document()
                    .map(|doc| doc.name().to_owned())
                    .unwrap_or_default();
                self.rename_buffer = Some(name);
            }
            KeyCode::Char('d') => self.pending_delete = true,
            KeyCode::Enter => self.focus = Focus::Editor,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_rename_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.rename_buffer = None;
            }
            KeyCode::Enter => self.commit_rename(),
            KeyCode::Backspace => {
                if let Some(buffer) = self.rename_buffer.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                if let Some(buffer) = self.rename_buffer.as_mut() {
                    buffer.push(ch);
                }
            }
            _ => {}
        }
    }

    fn commit_rename(&mut self) {
        let Some(buffer) = self.rename_buffer.take() else {
            return;
        };
        let name = buffer.trim().to_owned();
        if name.is_empty() {
            self.set_toast("Name cannot be empty");
            return;
        }
        let Some(id) = self.notebook.active_id().cloned() else {
            return;
        };
        self.notebook.rename_document(&id, name);
        self.persist_notebook();
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return;
        }
        let scroll_before = self.editor.scroll_top();
        match key.code {
            KeyCode::Esc => {
                if self.sidebar_visible {
                    self.focus = Focus::Sidebar;
                }
                return;
            }
            KeyCode::Char(ch) => {
                self.editor.insert_char(ch);
                self.content_changed();
            }
            KeyCode::Enter => {
                self.editor.insert_newline();
                self.content_changed();
            }
            KeyCode::Backspace => {
                self.editor.backspace();
                self.content_changed();
            }
            KeyCode::Delete => {
                self.editor.delete();
                self.content_changed();
            }
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            KeyCode::PageUp => self.editor.page_up(),
            KeyCode::PageDown => self.editor.page_down(),
            _ => return,
        }
        if self.editor.scroll_top() != scroll_before {
            self.mirror_from_editor();
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        let rows = SettingsRow::ALL;
        match key.code {
            KeyCode::Esc => self.view.set_settings_open(false),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.view.set_settings_open(false);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.settings_cursor = (self.settings_cursor + rows.len() - 1) % rows.len();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.settings_cursor = (self.settings_cursor + 1) % rows.len();
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                self.adjust_setting(rows[self.settings_cursor], -1);
            }
            KeyCode::Right
            | KeyCode::Char('l')
            | KeyCode::Char('+')
            | KeyCode::Enter
            | KeyCode::Char(' ') => {
                self.adjust_setting(rows[self.settings_cursor], 1);
            }
            _ => {}
        }
    }

    fn adjust_setting(&mut self, row: SettingsRow, direction: i8) {
        match row {
            SettingsRow::Theme => {
                let themes = ThemeId::ALL;
                let current = themes
                    .iter()
                    .position(|theme| *theme == self.theme())
                    .unwrap_or(0);
                let next = if direction < 0 {
                    (current + themes.len() - 1) % themes.len()
                } else {
                    (current + 1) % themes.len()
                };
                self.theme_name = themes[next].name().to_owned();
                self.persist_theme();
            }
            SettingsRow::FontFamily => {
                self.apply_settings_update(SettingsUpdate::FontFamily(
                    self.settings.font_family.next(),
                ));
            }
            SettingsRow::FontSize => {
                let size = if direction < 0 {
                    self.settings.font_size.saturating_sub(1).max(FONT_SIZE_MIN)
                } else {
                    self.settings.font_size.saturating_add(1).min(FONT_SIZE_MAX)
                };
                self.apply_settings_update(SettingsUpdate::FontSize(size));
            }
            SettingsRow::LineHeight => {
                self.apply_settings_update(SettingsUpdate::LineHeight(
                    self.settings.line_height.next(),
                ));
            }
            SettingsRow::AutoSave => {
                self.apply_settings_update(SettingsUpdate::AutoSave(!self.settings.auto_save));
            }
            SettingsRow::SmoothAnimations => {
                self.apply_settings_update(SettingsUpdate::SmoothAnimations(
                    !self.settings.smooth_animations,
                ));
            }
            SettingsRow::ShowFooter => {
                self.apply_settings_update(SettingsUpdate::ShowFooter(!self.settings.show_footer));
            }
        }
    }

    fn apply_settings_update(&mut self, update: SettingsUpdate) {
        self.settings.apply(update);
        self.persist_settings();
    }

    // ---- mouse -----------------------------------------------------------

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if rect_contains(self.layout.divider, col, row) {
                    self.split.begin_drag();
                } else if rect_contains(self.layout.sidebar, col, row) {
                    self.focus = Focus::Sidebar;
                    self.sidebar_click(row);
                } else if rect_contains(self.layout.editor, col, row) {
                    self.focus = Focus::Editor;
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.split.is_dragging() {
                    self.split.drag_to(col, self.layout.container);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // a stray release outside a drag is a no-op
                self.split.end_drag();
            }
            MouseEventKind::ScrollDown => self.wheel(col, row, WHEEL_STEP),
            MouseEventKind::ScrollUp => self.wheel(col, row, -WHEEL_STEP),
            _ => {}
        }
    }

    fn sidebar_click(&mut self, row: u16) {
        // rows inside the borders; the list may be scrolled past the top
        let top = self.layout.sidebar.y.saturating_add(1);
        let bottom = self
            .layout
            .sidebar
            .y
            .saturating_add(self.layout.sidebar.height.saturating_sub(1));
        if row < top || row >= bottom {
            return;
        }
        self.select_index(usize::from(row - top) + self.sidebar_state.offset());
    }

    fn wheel(&mut self, col: u16, row: u16, delta: i64) {
        if rect_contains(self.layout.editor, col, row) {
            self.editor.scroll_by(delta);
            self.mirror_from_editor();
        } else if rect_contains(self.layout.preview, col, row) {
            self.preview.scroll_by(delta);
            self.mirror_from_preview();
        }
    }
}

// ---- rendering -----------------------------------------------------------

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let palette = ThemePalette::for_theme(app.theme());
    frame.render_widget(Block::default().style(palette.base_style()), area);

    let footer_height = u16::from(app.settings.show_footer);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    let header_area = layout[0];
    let main_area = layout[1];
    let footer_area = layout[2];

    draw_header(frame, app, header_area, &palette);

    let (sidebar_area, container) = if app.sidebar_visible {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(main_area);
        (Some(panes[0]), panes[1])
    } else {
        (None, main_area)
    };

    app.layout = FrameLayout {
        container,
        sidebar: sidebar_area.unwrap_or_default(),
        ..FrameLayout::default()
    };

    if let Some(sidebar_area) = sidebar_area {
        draw_sidebar(frame, app, sidebar_area, &palette);
    }

    match app.view.mode() {
        ViewMode::Reading => {
            app.layout.preview = container;
            draw_preview(frame, app, container, &palette);
        }
        ViewMode::Split => {
            let (editor_width, preview_width) = split_columns(container, app.split.live());
            let editor_area = Rect::new(container.x, container.y, editor_width, container.height);
            let divider_area = Rect::new(
                container.x + editor_width,
                container.y,
                u16::from(container.width > editor_width),
                container.height,
            );
            let preview_area = Rect::new(
                divider_area.x + divider_area.width,
                container.y,
                preview_width,
                container.height,
            );
            app.layout.editor = editor_area;
            app.layout.divider = divider_area;
            app.layout.preview = preview_area;

            draw_editor(frame, app, editor_area, &palette);
            draw_divider(frame, app, divider_area, &palette);
            draw_preview(frame, app, preview_area, &palette);
        }
    }

    if app.settings.show_footer {
        draw_footer(frame, app, footer_area, &palette);
    }

    if app.view.settings_open() {
        draw_settings_overlay(frame, app, area, &palette);
    }
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect, palette: &ThemePalette) {
    let name = app
        .notebook
        .active_document()
        .map(|doc| doc.name().to_owned())
        .unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(" Notemark ", palette.accent_style().add_modifier(Modifier::BOLD)),
        Span::styled(name, palette.base_style()),
        Span::styled(
            format!("  {}", mode_label(app.view.mode())),
            palette.muted_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(palette.base_style()), area);
}

fn draw_sidebar(frame: &mut Frame<'_>, app: &mut App, area: Rect, palette: &ThemePalette) {
    let focused = app.focus == Focus::Sidebar;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Notes ({}) ", app.notebook.len()))
        .border_style(palette.panel_border_style(focused));

    let items: Vec<ListItem<'static>> = app
        .notebook
        .documents()
        .iter()
        .enumerate()
        .map(|(index, doc)| {
            let is_active = Some(index) == app.active_index();
            let label = match (&app.rename_buffer, is_active) {
                (Some(buffer), true) => format!("{buffer}\u{258f}"),
                _ => doc.name().to_owned(),
            };
            ListItem::new(label).style(palette.base_style())
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(palette.base_style())
        .highlight_style(palette.selection_style());
    frame.render_stateful_widget(list, area, &mut app.sidebar_state);
}

fn draw_editor(frame: &mut Frame<'_>, app: &mut App, area: Rect, palette: &ThemePalette) {
    if area.width == 0 {
        return;
    }
    let focused = app.focus == Focus::Editor;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Editor ")
        .border_style(palette.panel_border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.editor.set_viewport_height(usize::from(inner.height));
    let top = app.editor.scroll_top();
    let bottom = (top + usize::from(inner.height)).min(app.editor.line_count());
    let lines: Vec<Line<'_>> = app.editor.lines()[top..bottom]
        .iter()
        .map(|line| Line::raw(line.clone()))
        .collect();
    frame.render_widget(Paragraph::new(lines).style(palette.base_style()), inner);

    if focused && !app.view.settings_open() {
        let (row, col) = app.editor.cursor();
        if row >= top && row < top + usize::from(inner.height) {
            let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
            let y = inner.y + (row - top) as u16;
            frame.set_cursor(x, y);
        }
    }
}

fn draw_divider(frame: &mut Frame<'_>, app: &App, area: Rect, palette: &ThemePalette) {
    if area.width == 0 {
        return;
    }
    let style = if app.split.is_dragging() {
        palette.accent_style()
    } else {
        palette.muted_style()
    };
    let lines: Vec<Line<'_>> = (0..area.height)
        .map(|_| Line::styled("\u{2502}", style))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_preview(frame: &mut Frame<'_>, app: &mut App, area: Rect, palette: &ThemePalette) {
    if area.width == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .border_style(palette.panel_border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key = PreviewKey {
        rev: app.view.rev(),
        width: inner.width,
        block_gap: app.settings.line_height.block_gap(),
        theme: app.theme(),
    };
    let content = app
        .notebook
        .active_document()
        .map(|doc| doc.content().to_owned())
        .unwrap_or_default();
    let styles = palette.markdown_styles();
    let lines = app.preview_cache.lines(key, &content, &styles).to_vec();

    app.preview.content_height = lines.len();
    app.preview.viewport_height = usize::from(inner.height);
    app.preview.clamp();

    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(app.preview.scroll_top)
        .take(usize::from(inner.height))
        .collect();
    frame.render_widget(
        Paragraph::new(Text::from(visible)).style(palette.base_style()),
        inner,
    );
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect, palette: &ThemePalette) {
    let line = footer_line(app, palette);
    frame.render_widget(Paragraph::new(line).style(palette.base_style()), area);
}

fn draw_settings_overlay(frame: &mut Frame<'_>, app: &App, area: Rect, palette: &ThemePalette) {
    let height = SettingsRow::ALL.len() as u16 + 2;
    let overlay = centered_rect(area, 44, height);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Settings ")
        .border_style(palette.panel_border_style(true))
        .style(palette.base_style());
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines: Vec<Line<'_>> = SettingsRow::ALL
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let style = if index == app.settings_cursor {
                palette.selection_style()
            } else {
                palette.base_style()
            };
            Line::styled(
                format!(" {:<18} {:>20} ", row.label(), settings_row_value(app, *row)),
                style,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
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
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
