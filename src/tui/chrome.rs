// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, footer, and settings-overlay helpers used by TUI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Sidebar,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsRow {
    Theme,
    FontFamily,
    FontSize,
    LineHeight,
    AutoSave,
    SmoothAnimations,
    ShowFooter,
}

impl SettingsRow {
    const ALL: [SettingsRow; 7] = [
        SettingsRow::Theme,
        SettingsRow::FontFamily,
        SettingsRow::FontSize,
        SettingsRow::LineHeight,
        SettingsRow::AutoSave,
        SettingsRow::SmoothAnimations,
        SettingsRow::ShowFooter,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Theme => "Theme",
            Self::FontFamily => "Font family",
            Self::FontSize => "Font size",
            Self::LineHeight => "Line height",
            Self::AutoSave => "Auto save",
            Self::SmoothAnimations => "Smooth animations",
            Self::ShowFooter => "Show footer",
        }
    }
}

fn settings_row_value(app: &App, row: SettingsRow) -> String {
    fn on_off(value: bool) -> String {
        if value { "On" } else { "Off" }.to_owned()
    }

    match row {
        SettingsRow::Theme => app.theme().label().to_owned(),
        SettingsRow::FontFamily => app.settings.font_family.label().to_owned(),
        SettingsRow::FontSize => format!("{}px", app.settings.font_size),
        SettingsRow::LineHeight => app.settings.line_height.label().to_owned(),
        SettingsRow::AutoSave => on_off(app.settings.auto_save),
        SettingsRow::SmoothAnimations => on_off(app.settings.smooth_animations),
        SettingsRow::ShowFooter => on_off(app.settings.show_footer),
    }
}

fn mode_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Split => "split",
        ViewMode::Reading => "reading",
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn footer_line(app: &App, palette: &ThemePalette) -> Line<'static> {
    if let Some(toast) = &app.toast {
        return Line::styled(format!(" {}", toast.message), palette.toast_style());
    }
    if app.pending_delete {
        let name = app
            .notebook
            .active_document()
            .map(|doc| doc.name().to_owned())
            .unwrap_or_default();
        return Line::styled(
            format!(" Delete {name}? press y to confirm"),
            palette.toast_style(),
        );
    }
    if app.rename_buffer.is_some() {
        return hints_line(&[("Enter", "save name"), ("Esc", "cancel")], palette);
    }
    if app.view.settings_open() {
        return hints_line(
            &[("j/k", "row"), ("h/l", "change"), ("Esc", "close")],
            palette,
        );
    }
    match (app.view.mode(), app.focus) {
        (ViewMode::Reading, _) => hints_line(
            &[
                ("j/k", "scroll"),
                ("Ctrl+P", "split"),
                ("Ctrl+T", "settings"),
                ("Ctrl+Q", "quit"),
            ],
            palette,
        ),
        (ViewMode::Split, Focus::Sidebar) => hints_line(
            &[
                ("j/k", "select"),
                ("n", "new"),
                ("r", "rename"),
                ("d", "delete"),
                ("Enter", "edit"),
                ("Ctrl+P", "read"),
                ("Ctrl+T", "settings"),
                ("Ctrl+Q", "quit"),
            ],
            palette,
        ),
        (ViewMode::Split, Focus::Editor) => hints_line(
            &[
                ("Esc", "notes"),
                ("Ctrl+N", "new"),
                ("Ctrl+P", "read"),
                ("Ctrl+T", "settings"),
                ("Ctrl+B", "sidebar"),
                ("Ctrl+Q", "quit"),
            ],
            palette,
        ),
    }
}

fn hints_line(hints: &[(&'static str, &'static str)], palette: &ThemePalette) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3 + 1);
    spans.push(Span::raw(" "));
    for (index, (key, label)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", palette.muted_style()));
        }
        spans.push(Span::styled(*key, palette.accent_style()));
        spans.push(Span::styled(format!(" {label}"), palette.muted_style()));
    }
    Line::from(spans)
}
