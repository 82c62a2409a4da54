//! Help popup — centred floating overlay listing keybindings and commands.
//!
//! Toggle with `F1` or `:help`; close with `F1` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("type", "Filter the list (space separates ordered tokens)"),
    ("↓  Tab  Ctrl+n", "Select next row"),
    ("↑  S-Tab  Ctrl+p", "Select previous row"),
    ("PageDown / PageUp", "Move selection by a page"),
    ("Enter", "Accept the selected row"),
    ("Ctrl+d", "Delete the selected row"),
    ("Ctrl+x", "Open the command bar"),
    ("Esc  /  Ctrl+c", "Quit without accepting"),
    ("F1", "Toggle this help popup"),
    ("", ""),
    (":q", "Quit"),
    (":delete", "Delete the selected row"),
    (":columns", "Show / hide secondary columns"),
    (":theme <name>", "Switch theme (default, gruvbox)"),
    (":help", "Toggle this help popup"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(72, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" complist — keys (F1 to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
