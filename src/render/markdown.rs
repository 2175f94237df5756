// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Markdown to styled terminal lines.
//!
//! The preview is rendered to pre-wrapped [`Line`]s at a fixed column width,
//! so the preview pane can scroll by plain line offset and report honest
//! scroll metrics. Code blocks are never wrapped.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const QUOTE_GUTTER: &str = "\u{258c} ";

/// Style hooks the preview renderer needs; filled in from the active theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownStyles {
    pub text: Style,
    pub heading: Style,
    pub code: Style,
    pub code_block: Style,
    pub blockquote: Style,
    pub list_marker: Style,
    pub link: Style,
    pub rule: Style,
}

/// Renders `content` into wrapped lines of at most `width` columns, with
/// `block_gap` blank lines between top-level blocks.
pub fn render_markdown(
    content: &str,
    width: u16,
    block_gap: usize,
    styles: &MarkdownStyles,
) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(content, options);

    let mut renderer = Renderer::new(width, block_gap, styles);
    for event in parser {
        renderer.event(event);
    }
    renderer.finish()
}

struct Renderer<'s> {
    styles: &'s MarkdownStyles,
    width: usize,
    block_gap: usize,
    out: Vec<Line<'static>>,
    inline: Vec<Span<'static>>,
    line_open: bool,
    line_width: usize,
    line_start_width: usize,
    pending_space: bool,
    style_stack: Vec<Style>,
    quote_depth: usize,
    // ordered-list counters, `None` for bullet lists
    list_stack: Vec<Option<u64>>,
    // hanging indent of the innermost open list item
    hang_stack: Vec<usize>,
    code_block: Option<String>,
}

impl<'s> Renderer<'s> {
    fn new(width: u16, block_gap: usize, styles: &'s MarkdownStyles) -> Self {
        Self {
            styles,
            width: usize::from(width.max(1)),
            block_gap,
            out: Vec::new(),
            inline: Vec::new(),
            line_open: false,
            line_width: 0,
            line_start_width: 0,
            pending_space: false,
            style_stack: vec![styles.text],
            quote_depth: 0,
            list_stack: Vec::new(),
            hang_stack: Vec::new(),
            code_block: None,
        }
    }

    fn style(&self) -> Style {
        *self.style_stack.last().unwrap_or(&self.styles.text)
    }

    fn pop_style(&mut self) {
        if self.style_stack.len() > 1 {
            self.style_stack.pop();
        }
    }

    fn ensure_line(&mut self) {
        if self.line_open {
            return;
        }
        self.line_open = true;
        self.line_width = 0;
        self.pending_space = false;
        for _ in 0..self.quote_depth {
            self.inline
                .push(Span::styled(QUOTE_GUTTER, self.styles.blockquote));
            self.line_width += QUOTE_GUTTER.chars().count();
        }
        let hanging = self.hang_stack.last().copied().unwrap_or(0);
        if hanging > 0 {
            self.inline.push(Span::raw(" ".repeat(hanging)));
            self.line_width += hanging;
        }
        self.line_start_width = self.line_width;
    }

    fn flush(&mut self) {
        if !self.line_open {
            return;
        }
        self.out.push(Line::from(std::mem::take(&mut self.inline)));
        self.line_open = false;
        self.line_width = 0;
        self.pending_space = false;
    }

    /// Separates the upcoming block from what came before.
    fn begin_block(&mut self) {
        self.flush();
        if self.out.is_empty() {
            return;
        }
        for _ in 0..self.block_gap {
            if self.quote_depth > 0 {
                self.ensure_line();
                self.flush();
            } else {
                self.out.push(Line::default());
            }
        }
    }

    /// Places one unbreakable chunk, wrapping beforehand when it will not fit.
    fn push_word(&mut self, word: &str, style: Style) {
        self.ensure_line();
        let word_width = word.chars().count();
        let has_content = self.line_width > self.line_start_width;
        let sep = usize::from(self.pending_space && has_content);
        if has_content && self.line_width + sep + word_width > self.width {
            self.flush();
            self.ensure_line();
        } else if sep == 1 {
            self.inline.push(Span::raw(" "));
            self.line_width += 1;
        }
        self.inline.push(Span::styled(word.to_owned(), style));
        self.line_width += word_width;
        self.pending_space = false;
    }

    fn push_text(&mut self, text: &str, style: Style) {
        if text.starts_with(char::is_whitespace) {
            self.pending_space = true;
        }
        for word in text.split_whitespace() {
            self.push_word(word, style);
            self.pending_space = true;
        }
        if !text.ends_with(char::is_whitespace) {
            self.pending_space = false;
        }
    }

    fn start_item(&mut self) {
        self.flush();
        let marker = match self.list_stack.last_mut() {
            Some(Some(number)) => {
                let marker = format!("{number}. ");
                *number += 1;
                marker
            }
            _ => "- ".to_owned(),
        };
        // the marker line itself is indented by the parent item's hanging
        // indent; continuations hang past the marker as well
        self.ensure_line();
        let marker_width = marker.chars().count();
        self.inline
            .push(Span::styled(marker, self.styles.list_marker));
        self.line_width += marker_width;
        let hanging = self.hang_stack.last().copied().unwrap_or(0) + marker_width;
        self.hang_stack.push(hanging);
    }

    fn end_code_block(&mut self) {
        let Some(buffer) = self.code_block.take() else {
            return;
        };
        for code_line in buffer.lines() {
            self.ensure_line();
            self.inline
                .push(Span::styled(code_line.to_owned(), self.styles.code_block));
            self.flush();
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => {
                if let Some(buffer) = self.code_block.as_mut() {
                    buffer.push_str(&text);
                } else {
                    self.push_text(&text, self.style());
                }
            }
            Event::Code(code) => self.push_word(&code, self.styles.code),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.push_text(&html, self.style());
            }
            Event::SoftBreak => self.pending_space = true,
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.begin_block();
                self.out.push(Line::styled(
                    "\u{2500}".repeat(self.width),
                    self.styles.rule,
                ));
            }
            Event::TaskListMarker(checked) => {
                self.ensure_line();
                let marker = if checked { "[x] " } else { "[ ] " };
                self.inline
                    .push(Span::styled(marker, self.styles.list_marker));
                self.line_width += marker.chars().count();
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                // inside a list item the text continues after the marker
                if self.hang_stack.is_empty() {
                    self.begin_block();
                }
            }
            Tag::Heading { level, .. } => {
                self.begin_block();
                let mut style = self.styles.heading.add_modifier(Modifier::BOLD);
                if level == HeadingLevel::H1 {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                self.style_stack.push(style);
            }
            Tag::BlockQuote(_) => {
                self.begin_block();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(_) => {
                self.begin_block();
                self.code_block = Some(String::new());
            }
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.begin_block();
                } else {
                    // a nested list starts below the current item text
                    self.flush();
                }
                self.list_stack.push(start);
            }
            Tag::Item => self.start_item(),
            Tag::Emphasis => {
                let style = self.style().add_modifier(Modifier::ITALIC);
                self.style_stack.push(style);
            }
            Tag::Strong => {
                let style = self.style().add_modifier(Modifier::BOLD);
                self.style_stack.push(style);
            }
            Tag::Strikethrough => {
                let style = self.style().add_modifier(Modifier::CROSSED_OUT);
                self.style_stack.push(style);
            }
            Tag::Link { .. } | Tag::Image { .. } => {
                let style = self
                    .style()
                    .patch(self.styles.link)
                    .add_modifier(Modifier::UNDERLINED);
                self.style_stack.push(style);
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.flush(),
            TagEnd::Heading(_) => {
                self.flush();
                self.pop_style();
            }
            TagEnd::BlockQuote(_) => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            TagEnd::CodeBlock => self.end_code_block(),
            TagEnd::List(_) => {
                self.flush();
                self.list_stack.pop();
            }
            TagEnd::Item => {
                self.flush();
                self.hang_stack.pop();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link | TagEnd::Image => self.pop_style(),
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        self.out
    }
}
