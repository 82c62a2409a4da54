//! Completion list widget — the ranked, filtered rows of the category.
//!
//! # Navigation
//!
//! | Key | Action |
//! |-----|--------|
//! | `↓` / `Tab` / `Ctrl+n` | Select next row (wraps to the top) |
//! | `↑` / `Shift+Tab` / `Ctrl+p` | Select previous row (wraps to the bottom) |
//! | `PageDown` / `PageUp` | Move the selection by one page |
//!
//! # Highlighting
//!
//! Query tokens found inside a column the category highlights are patched
//! with `list_match`; a primary field that starts with the query keeps the
//! `list_prefix_match` base style underneath.
//!
//! # Selection semantics
//!
//! `selected` is a display position in the category's ranked view. The app
//! shell turns it into a [`RowId`](complist_core::RowId) before deleting or
//! accepting, so the category is always addressed by identity. After any
//! change to the view the shell calls [`CompletionListState::reset`] (new
//! query) or [`CompletionListState::clamp`] (deletion).

use std::cell::Cell;
use std::ops::Range;

use crate::event::AppEvent;
use crate::theme::Theme;
use complist_core::{Category, Row};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct CompletionListState {
    /// Display position of the highlighted row.
    pub selected: usize,
    /// Display position of the first row on screen.
    pub offset: usize,
    /// Cached from the last render so `handle()` can page by screenfuls.
    last_height: Cell<usize>,
}

impl Default for CompletionListState {
    fn default() -> Self {
        Self {
            selected: 0,
            offset: 0,
            last_height: Cell::new(20),
        }
    }
}

impl CompletionListState {
    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Back to the top, for a fresh ranking.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Keep the selection inside a view of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.scroll_into_view();
    }

    fn scroll_into_view(&mut self) {
        let height = self.height();
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
    }

    /// Handle a navigation event over a view of `len` rows.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        let last = len - 1;

        match event {
            AppEvent::SelectNext => {
                self.selected = if self.selected >= last { 0 } else { self.selected + 1 };
            }
            AppEvent::SelectPrev => {
                self.selected = if self.selected == 0 { last } else { self.selected - 1 };
            }
            AppEvent::PageDown => {
                self.selected = (self.selected + self.height()).min(last);
            }
            AppEvent::PageUp => {
                self.selected = self.selected.saturating_sub(self.height());
            }
            _ => return,
        }
        self.scroll_into_view();
        tracing::debug!(selected = self.selected, offset = self.offset, "list: selection moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct CompletionList<'a> {
    category: &'a Category,
    state: &'a CompletionListState,
    show_secondary: bool,
    primary_width_pct: u16,
    theme: &'a Theme,
}

impl<'a> CompletionList<'a> {
    pub fn new(category: &'a Category, state: &'a CompletionListState, theme: &'a Theme) -> Self {
        Self {
            category,
            state,
            show_secondary: true,
            primary_width_pct: 40,
            theme,
        }
    }

    pub fn show_secondary(mut self, show: bool) -> Self {
        self.show_secondary = show;
        self
    }

    pub fn primary_width_pct(mut self, pct: u16) -> Self {
        self.primary_width_pct = pct.clamp(10, 100);
        self
    }
}

impl Widget for CompletionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle() — draw always runs before handle()
        self.state.last_height.set(height);

        let total = self.category.visible_len();
        if total == 0 {
            Paragraph::new(Line::from(Span::styled(
                "no matches",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        }

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let primary_width = if self.show_secondary {
            (text_area.width as usize * self.primary_width_pct as usize / 100).max(1)
        } else {
            text_area.width as usize
        };

        let lines: Vec<Line<'static>> = self
            .category
            .visible_rows()
            .enumerate()
            .skip(self.state.offset)
            .take(height)
            .map(|(pos, (_, row))| {
                let line = render_row(
                    self.category,
                    row,
                    primary_width,
                    self.show_secondary,
                    self.theme,
                );
                if pos == self.state.selected {
                    line.patch_style(self.theme.list_selected)
                } else {
                    line
                }
            })
            .collect();

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(self.state.offset)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn render_row(
    category: &Category,
    row: &Row,
    primary_width: usize,
    show_secondary: bool,
    theme: &Theme,
) -> Line<'static> {
    let query = category.query();
    let primary_style = if !query.is_empty() && row.primary().starts_with(query) {
        theme.list_prefix_match
    } else {
        theme.list_primary
    };

    let mut spans = styled_field(
        row.primary(),
        &category.match_spans(row, 0),
        Some(primary_width),
        primary_style,
        theme.list_match,
    );

    if show_secondary {
        for (column, field) in row.fields().iter().enumerate().skip(1) {
            let gap = if column == 1 { " " } else { "  " };
            spans.push(Span::styled(gap, theme.list_secondary));
            spans.extend(styled_field(
                field,
                &category.match_spans(row, column),
                None,
                theme.list_secondary,
                theme.list_match,
            ));
        }
    }

    Line::from(spans)
}

/// Split `text` into `base` runs and `matched` runs over `matches`. With a
/// `width`, the text is first truncated (with `…`) or padded to exactly that
/// many characters; matches past the cut are dropped.
fn styled_field(
    text: &str,
    matches: &[Range<usize>],
    width: Option<usize>,
    base: Style,
    matched: Style,
) -> Vec<Span<'static>> {
    let (kept, tail) = match width {
        Some(width) => {
            let count = text.chars().count();
            if count > width {
                let end = text
                    .char_indices()
                    .nth(width.saturating_sub(1))
                    .map_or(text.len(), |(i, _)| i);
                (&text[..end], "…".to_string())
            } else {
                (text, " ".repeat(width - count))
            }
        }
        None => (text, String::new()),
    };

    let mut spans = Vec::new();
    let mut at = 0;
    for range in matches {
        let start = range.start.max(at).min(kept.len());
        let end = range.end.min(kept.len());
        if start >= end {
            continue;
        }
        if at < start {
            spans.push(Span::styled(kept[at..start].to_string(), base));
        }
        spans.push(Span::styled(kept[start..end].to_string(), base.patch(matched)));
        at = end;
    }
    if at < kept.len() {
        spans.push(Span::styled(kept[at..].to_string(), base));
    }
    if !tail.is_empty() {
        spans.push(Span::styled(tail, base));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
