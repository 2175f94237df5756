// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use rstest::{fixture, rstest};

use crate::model::{fixtures, Document, DocumentId, Notebook, Settings, ThemeId};
use crate::ui::ViewMode;

use super::{App, Focus, FrameLayout};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[fixture]
fn app() -> App {
    App::new(
        fixtures::demo_notebook(),
        None,
        Settings::default(),
        ThemeId::default().name().to_owned(),
    )
}

/// An app with pane geometry as if one frame had been drawn.
#[fixture]
fn laid_out_app(mut app: App) -> App {
    app.layout = FrameLayout {
        container: Rect::new(26, 1, 101, 40),
        sidebar: Rect::new(0, 1, 26, 40),
        editor: Rect::new(26, 1, 50, 40),
        divider: Rect::new(76, 1, 1, 40),
        preview: Rect::new(77, 1, 50, 40),
    };
    app.editor.set_viewport_height(10);
    app.preview.content_height = 60;
    app.preview.viewport_height = 10;
    app
}

#[rstest]
fn starts_in_split_mode_with_the_active_note_loaded(app: App) {
    assert_eq!(app.view.mode(), ViewMode::Split);
    let active = app.notebook.active_document().expect("active note");
    assert_eq!(app.editor.text(), active.content());
    assert_eq!(app.sidebar_state.selected(), Some(0));
}

#[rstest]
fn ctrl_p_toggles_reading_mode_and_detaches_scroll_sync(mut app: App) {
    app.handle_key(ctrl('p'));
    assert_eq!(app.view.mode(), ViewMode::Reading);
    assert!(!app.scroll_sync.is_enabled());

    app.handle_key(ctrl('p'));
    assert_eq!(app.view.mode(), ViewMode::Split);
    assert!(app.scroll_sync.is_enabled());
}

#[rstest]
fn reading_mode_leaves_the_committed_ratio_alone(mut app: App) {
    app.split.begin_drag();
    app.split.drag_to(35, Rect::new(0, 0, 100, 40));
    app.split.end_drag();

    app.handle_key(ctrl('p'));
    app.handle_key(ctrl('p'));
    assert_eq!(app.split.committed(), 35.0);
}

#[rstest]
fn creating_a_note_exits_reading_mode(mut app: App) {
    app.handle_key(ctrl('p'));
    app.handle_key(ctrl('n'));

    assert_eq!(app.view.mode(), ViewMode::Split);
    assert!(app.scroll_sync.is_enabled());
    let active = app.notebook.active_document().expect("active note");
    assert_eq!(active.name(), "Untitled.md");
    assert_eq!(app.editor.text(), "");
    assert_eq!(app.focus, Focus::Editor);
}

#[rstest]
fn tab_moves_focus_between_sidebar_and_editor(mut app: App) {
    assert_eq!(app.focus, Focus::Editor);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Sidebar);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Editor);
}

#[rstest]
fn sidebar_selection_loads_the_selected_note(mut app: App) {
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('j')));

    let active = app.notebook.active_document().expect("active note");
    assert_eq!(active.name(), "Cheatsheet.md");
    assert_eq!(app.editor.text(), active.content());
    assert_eq!(app.sidebar_state.selected(), Some(1));
}

#[rstest]
fn sidebar_selection_clamps_at_the_ends(mut app: App) {
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('k')));
    assert_eq!(app.sidebar_state.selected(), Some(0));

    for _ in 0..10 {
        app.handle_key(key(KeyCode::Char('j')));
    }
    assert_eq!(app.sidebar_state.selected(), Some(app.notebook.len() - 1));
}

#[rstest]
fn typing_updates_the_model_and_bumps_the_preview_rev(mut app: App) {
    let rev_before = app.view.rev();
    app.handle_key(key(KeyCode::Char('x')));

    let active = app.notebook.active_document().expect("active note");
    assert_eq!(active.content(), app.editor.text());
    assert!(active.content().starts_with('x'));
    assert!(app.view.rev() > rev_before);
}

#[rstest]
fn rename_commits_a_trimmed_name(mut app: App) {
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('r')));
    assert!(app.rename_buffer.is_some());

    app.rename_buffer = Some("  Journal.md  ".to_owned());
    app.handle_key(key(KeyCode::Enter));

    let active = app.notebook.active_document().expect("active note");
    assert_eq!(active.name(), "Journal.md");
    assert!(app.rename_buffer.is_none());
}

#[rstest]
fn rename_rejects_an_empty_name(mut app: App) {
    let original = app
        .notebook
        .active_document()
        .expect("active note")
        .name()
        .to_owned();

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('r')));
    app.rename_buffer = Some("   ".to_owned());
    app.handle_key(key(KeyCode::Enter));

    let active = app.notebook.active_document().expect("active note");
    assert_eq!(active.name(), original);
    assert!(app.toast.is_some());
}

#[rstest]
fn rename_can_be_cancelled(mut app: App) {
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('r')));
    app.handle_key(key(KeyCode::Esc));
    assert!(app.rename_buffer.is_none());
}

#[rstest]
fn delete_requires_a_confirmation(mut app: App) {
    let len_before = app.notebook.len();

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('d')));
    app.handle_key(key(KeyCode::Char('x')));
    assert_eq!(app.notebook.len(), len_before);

    app.handle_key(key(KeyCode::Char('d')));
    app.handle_key(key(KeyCode::Char('y')));
    assert_eq!(app.notebook.len(), len_before - 1);
}

#[rstest]
fn deleting_the_last_note_resynthesizes_a_welcome_note() {
    let only = Document::new(DocumentId::generate(), "Only.md", "body");
    let only_id = only.document_id().clone();
    let mut app = App::new(
        Notebook::from_parts(vec![only], None),
        None,
        Settings::default(),
        ThemeId::default().name().to_owned(),
    );

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('d')));
    app.handle_key(key(KeyCode::Char('y')));

    assert_eq!(app.notebook.len(), 1);
    let active = app.notebook.active_document().expect("active note");
    assert_eq!(active.name(), "Welcome.md");
    assert_ne!(active.document_id(), &only_id);
}

#[rstest]
fn wheel_over_the_editor_mirrors_to_the_preview(mut laid_out_app: App) {
    let app = &mut laid_out_app;
    app.editor
        .set_text(&vec!["line"; 30].join("\n"));
    app.editor.set_viewport_height(10);

    app.handle_mouse(mouse(MouseEventKind::ScrollDown, 30, 5));

    // editor range 20 at 3/20, preview range 50 → 7.5 rounds up
    assert_eq!(app.editor.scroll_top(), 3);
    assert_eq!(app.preview.scroll_top, 8);
}

#[rstest]
fn mirror_writes_do_not_echo_within_one_frame(mut laid_out_app: App) {
    let app = &mut laid_out_app;
    app.editor
        .set_text(&vec!["line"; 30].join("\n"));
    app.editor.set_viewport_height(10);

    app.handle_mouse(mouse(MouseEventKind::ScrollDown, 30, 5));
    let editor_top = app.editor.scroll_top();

    // a preview wheel in the same frame scrolls locally but is not mirrored
    app.handle_mouse(mouse(MouseEventKind::ScrollDown, 80, 5));
    assert_eq!(app.editor.scroll_top(), editor_top);

    app.end_frame();
    app.handle_mouse(mouse(MouseEventKind::ScrollDown, 80, 5));
    assert_ne!(app.editor.scroll_top(), editor_top);
}

#[rstest]
fn reading_mode_drops_scroll_mirroring(mut laid_out_app: App) {
    let app = &mut laid_out_app;
    app.editor
        .set_text(&vec!["line"; 30].join("\n"));
    app.editor.set_viewport_height(10);
    app.handle_key(ctrl('p'));

    app.handle_mouse(mouse(MouseEventKind::ScrollDown, 30, 5));
    assert_eq!(app.preview.scroll_top, 0);
}

#[rstest]
fn divider_drag_commits_on_release(mut laid_out_app: App) {
    let app = &mut laid_out_app;

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 76, 5));
    assert!(app.split.is_dragging());

    // container starts at x=26 and is 101 wide; column 76 sits at ~49.5%
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 56, 5));
    let live = app.split.live();
    assert!((live - 29.7).abs() < 0.1, "live ratio was {live}");

    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 56, 5));
    assert!(!app.split.is_dragging());
    assert_eq!(app.split.committed(), live);
}

#[rstest]
fn out_of_bounds_drag_keeps_the_last_accepted_ratio(mut laid_out_app: App) {
    let app = &mut laid_out_app;

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 76, 5));
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 56, 5));
    let live = app.split.live();

    // column 27 is ~1% into the container and must be ignored
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 27, 5));
    assert_eq!(app.split.live(), live);
}

#[rstest]
fn stray_mouse_release_is_harmless(mut laid_out_app: App) {
    let app = &mut laid_out_app;
    let committed = app.split.committed();
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 10));
    assert_eq!(app.split.committed(), committed);
}

#[rstest]
fn sidebar_click_selects_the_row(mut laid_out_app: App) {
    let app = &mut laid_out_app;
    // sidebar top border is at y=1; first row at y=2
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));

    assert_eq!(app.focus, Focus::Sidebar);
    let active = app.notebook.active_document().expect("active note");
    assert_eq!(active.name(), "Cheatsheet.md");
}

#[rstest]
fn sidebar_click_accounts_for_the_list_scroll_offset() {
    let documents = (0..50)
        .map(|n| Document::new(DocumentId::generate(), format!("note-{n:02}.md"), ""))
        .collect();
    let mut app = App::new(
        Notebook::from_parts(documents, None),
        None,
        Settings::default(),
        ThemeId::default().name().to_owned(),
    );
    app.layout = FrameLayout {
        container: Rect::new(26, 1, 101, 40),
        sidebar: Rect::new(0, 1, 26, 40),
        editor: Rect::new(26, 1, 50, 40),
        divider: Rect::new(76, 1, 1, 40),
        preview: Rect::new(77, 1, 50, 40),
    };
    *app.sidebar_state.offset_mut() = 30;

    // first visible row sits below the top border at y=1
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 2));
    let active = app.notebook.active_document().expect("active note");
    assert_eq!(active.name(), "note-30.md");
}

#[rstest]
fn sidebar_border_rows_do_not_select(mut laid_out_app: App) {
    let app = &mut laid_out_app;
    let active_before = app.notebook.active_id().cloned();

    // top border at y=1, bottom border at y=40
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 1));
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 40));
    assert_eq!(app.notebook.active_id().cloned(), active_before);
}

#[rstest]
fn settings_overlay_adjusts_the_font_size_within_bounds(mut app: App) {
    app.handle_key(ctrl('t'));
    assert!(app.view.settings_open());

    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    for _ in 0..20 {
        app.handle_key(key(KeyCode::Right));
    }
    assert_eq!(app.settings.font_size, 24);

    for _ in 0..30 {
        app.handle_key(key(KeyCode::Left));
    }
    assert_eq!(app.settings.font_size, 12);
}

#[rstest]
fn settings_overlay_cycles_every_theme(mut app: App) {
    app.handle_key(ctrl('t'));
    let start = app.theme();
    let mut seen = vec![start];
    for _ in 0..(ThemeId::ALL.len() - 1) {
        app.handle_key(key(KeyCode::Right));
        seen.push(app.theme());
    }
    app.handle_key(key(KeyCode::Right));

    assert_eq!(app.theme(), start);
    seen.sort_by_key(|theme| theme.name());
    seen.dedup();
    assert_eq!(seen.len(), ThemeId::ALL.len());
}

#[rstest]
fn settings_overlay_toggles_the_footer(mut app: App) {
    app.handle_key(ctrl('t'));
    for _ in 0..(super::SettingsRow::ALL.len() - 1) {
        app.handle_key(key(KeyCode::Down));
    }
    app.handle_key(key(KeyCode::Enter));
    assert!(!app.settings.show_footer);
}

#[rstest]
fn settings_overlay_blocks_editor_input(mut app: App) {
    let content_before = app.editor.text();
    app.handle_key(ctrl('t'));
    app.handle_key(key(KeyCode::Char('z')));
    assert_eq!(app.editor.text(), content_before);

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.view.settings_open());
}

#[rstest]
fn unrecognized_theme_falls_back_without_rewriting_the_raw_value(mut app: App) {
    app.theme_name = "sepia".to_owned();
    assert_eq!(app.theme(), ThemeId::Light);
    assert_eq!(app.theme_name, "sepia");
}

#[rstest]
fn ctrl_q_quits_from_any_state(mut app: App) {
    app.handle_key(ctrl('t'));
    app.handle_key(ctrl('q'));
    assert!(app.should_quit);
}

#[rstest]
fn reading_mode_keys_scroll_the_preview(mut laid_out_app: App) {
    let app = &mut laid_out_app;
    app.handle_key(ctrl('p'));
    app.handle_key(key(KeyCode::Char('j')));
    app.handle_key(key(KeyCode::Char('j')));
    app.handle_key(key(KeyCode::Char('k')));
    assert_eq!(app.preview.scroll_top, 1);
}

#[rstest]
fn toast_expires_after_its_ttl(mut app: App) {
    app.set_toast("hello");
    app.toast.as_mut().expect("toast").expires_at = std::time::Instant::now();
    app.end_frame();
    assert!(app.toast.is_none());
}
