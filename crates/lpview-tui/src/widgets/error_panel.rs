//! Inline error panel with retry and back hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use lpview_core::Error;

use crate::layout::centered;
use crate::theme::{icons::IconSet, palette, styles};

use super::wrap_text;

const PANEL_WIDTH: u16 = 60;

/// Failure of the screen's fetch, shown in place of its content
pub struct ErrorPanel<'a> {
    error: &'a Error,
    icons: IconSet,
    can_go_back: bool,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(error: &'a Error, icons: IconSet) -> Self {
        Self {
            error,
            icons,
            can_go_back: false,
        }
    }

    /// Also offer `[Esc] Back`
    pub fn can_go_back(mut self, can_go_back: bool) -> Self {
        self.can_go_back = can_go_back;
        self
    }

    /// Key hints, or `None` when there is nothing to offer
    fn hint_line(&self) -> Option<Line<'static>> {
        let mut spans = Vec::new();
        if self.error.is_retryable() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled("r", styles::keybinding()));
            spans.push(Span::styled("] Retry", styles::text_muted()));
        }
        if self.can_go_back {
            let open = if spans.is_empty() { "[" } else { "   [" };
            spans.push(Span::styled(open, styles::text_muted()));
            spans.push(Span::styled("Esc", styles::keybinding()));
            spans.push(Span::styled("] Back", styles::text_muted()));
        }
        (!spans.is_empty()).then(|| Line::from(spans))
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = PANEL_WIDTH.min(area.width);
        let text_width = usize::from(width.saturating_sub(4)).max(1);
        let message = wrap_text(&self.error.to_string(), text_width);

        let hint = self.hint_line();

        // Borders and message, plus a blank line and the hint
        let hint_rows = if hint.is_some() { 2 } else { 0 };
        let height = message.len() as u16 + 2 + hint_rows;
        let panel = centered(area, width, height);

        let block = styles::glass_block(false)
            .border_style(styles::status_red())
            .title(Span::styled(
                format!(" {} {} ", self.icons.alert(), self.error.kind_label()),
                styles::status_red(),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let mut lines: Vec<Line> = message
            .into_iter()
            .map(|text| Line::styled(text, styles::text_primary()))
            .collect();
        if let Some(hint) = hint {
            lines.push(Line::default());
            lines.push(hint);
        }

        Clear.render(panel, buf);
        Paragraph::new(lines)
            .centered()
            .block(block)
            .render(panel, buf);
    }
}
