//! Launch detail panel: Name, Details, Date and Reused rows

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use lpview_core::Launch;

use crate::theme::{icons::IconSet, palette, styles};

use super::wrap_text;

/// Width of the label column, `Details:` plus two spaces
const LABEL_WIDTH: usize = 10;

pub struct LaunchDetail<'a> {
    launch: &'a Launch,
    icons: IconSet,
}

impl<'a> LaunchDetail<'a> {
    pub fn new(launch: &'a Launch, icons: IconSet) -> Self {
        Self { launch, icons }
    }

    /// Label + value, continuation lines indented under the value
    fn field(label: &'static str, value: &str, value_style: Style, width: usize) -> Vec<Line<'static>> {
        let value_width = width.saturating_sub(LABEL_WIDTH).max(1);
        let mut wrapped = wrap_text(value, value_width);
        if wrapped.is_empty() {
            wrapped.push(String::new());
        }

        wrapped
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let label = if i == 0 {
                    format!("{label:<LABEL_WIDTH$}")
                } else {
                    " ".repeat(LABEL_WIDTH)
                };
                Line::from(vec![
                    Span::styled(label, styles::text_muted()),
                    Span::styled(text, value_style),
                ])
            })
            .collect()
    }

    fn reused_style(&self) -> Style {
        match self.launch.first_core_reused() {
            Some(true) => styles::status_green(),
            Some(false) => styles::text_primary(),
            None => styles::text_muted(),
        }
    }
}

impl Widget for LaunchDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(
                format!(" {} {} ", self.icons.rocket(), self.launch.name),
                styles::text_bright_bold(),
            ))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        // One column of padding on each side
        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };
        let width = usize::from(content.width);

        let mut lines = Vec::new();
        lines.extend(Self::field("Name:", &self.launch.name, styles::text_bright_bold(), width));
        lines.extend(Self::field(
            "Details:",
            self.launch.details_display(),
            styles::text_primary(),
            width,
        ));
        lines.extend(Self::field(
            "Date:",
            self.launch.date_display(),
            styles::text_primary(),
            width,
        ));
        lines.extend(Self::field(
            "Reused:",
            self.launch.reused_display(),
            self.reused_style(),
            width,
        ));

        Paragraph::new(lines).render(content, buf);
    }
}
