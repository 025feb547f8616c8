//! Launchpad cards and the scrolling list that stacks them
//!
//! A card shows the launchpad name as its title, the details text, the
//! status, and either the top launches (raw identifiers, one selectable row
//! each) or `No Launch Available`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use lpview_app::state::LaunchRow;
use lpview_core::{Launchpad, NO_LAUNCHES_MESSAGE};

use crate::theme::{icons::IconSet, palette, styles};

use super::wrap_text;

/// Borders above and below the card content
const CARD_CHROME: u16 = 2;

/// One launchpad card
pub struct LaunchpadCard<'a> {
    pad: &'a Launchpad,
    /// Index into the pad's top launches that is selected, if any
    selected_launch: Option<usize>,
    icons: IconSet,
}

impl<'a> LaunchpadCard<'a> {
    pub fn new(pad: &'a Launchpad, icons: IconSet) -> Self {
        Self {
            pad,
            selected_launch: None,
            icons,
        }
    }

    pub fn selected_launch(mut self, launch_index: Option<usize>) -> Self {
        self.selected_launch = launch_index;
        self
    }

    /// Full height of the card at `width`, borders included
    pub fn height(&self, width: u16) -> u16 {
        let lines = self.content_lines(width.saturating_sub(CARD_CHROME)).len();
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_add(CARD_CHROME)
    }

    fn content_lines(&self, inner_width: u16) -> Vec<Line<'a>> {
        let inner_width = usize::from(inner_width);
        let mut lines: Vec<Line<'a>> = wrap_text(self.pad.details_text(), inner_width)
            .into_iter()
            .map(|line| Line::styled(line, styles::text_secondary()))
            .collect();

        lines.push(Line::from(vec![
            Span::styled("Status: ", styles::text_muted()),
            Span::styled(self.pad.status.as_str(), styles::text_primary()),
        ]));

        if !self.pad.has_launches() {
            lines.push(Line::styled(NO_LAUNCHES_MESSAGE, styles::text_muted()));
            return lines;
        }

        lines.push(Line::styled("Top Launches:", styles::text_muted()));
        for (index, id) in self.pad.top_launches().iter().enumerate() {
            lines.push(self.launch_row(id.as_str(), inner_width, self.selected_launch == Some(index)));
        }
        lines
    }

    /// `  <id> ... →`, padded so the arrow sits at the right edge
    fn launch_row(&self, id: &'a str, width: usize, selected: bool) -> Line<'a> {
        let arrow = self.icons.arrow_right();
        let used = 2 + id.width() + 1 + arrow.width();
        let gap = width.saturating_sub(used).max(1);

        let style = if selected {
            styles::selected_row()
        } else {
            styles::text_primary()
        };
        let marker = if selected { "▸ " } else { "  " };

        Line::from(vec![
            Span::styled(marker, style),
            Span::styled(id, style),
            Span::styled(" ".repeat(gap), style),
            Span::styled(arrow, if selected { style } else { styles::accent() }),
        ])
    }
}

impl Widget for LaunchpadCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.selected_launch.is_some();
        let block = styles::glass_block(focused)
            .title(Span::styled(
                format!(" {} ", self.pad.name),
                styles::text_bright_bold(),
            ))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        let lines = self.content_lines(inner.width);

        block.render(area, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Vertical stack of launchpad cards, scrolled by whole cards
pub struct LaunchpadList<'a> {
    pads: &'a [Launchpad],
    selected: Option<LaunchRow>,
    first_visible: usize,
    icons: IconSet,
}

impl<'a> LaunchpadList<'a> {
    pub fn new(pads: &'a [Launchpad], icons: IconSet) -> Self {
        Self {
            pads,
            selected: None,
            first_visible: 0,
            icons,
        }
    }

    pub fn selected(mut self, row: Option<LaunchRow>) -> Self {
        self.selected = row;
        self
    }

    pub fn first_visible(mut self, index: usize) -> Self {
        self.first_visible = index;
        self
    }

    fn card(&self, index: usize) -> LaunchpadCard<'a> {
        let selected_launch = self
            .selected
            .filter(|row| row.pad_index == index)
            .map(|row| row.launch_index);
        LaunchpadCard::new(&self.pads[index], self.icons).selected_launch(selected_launch)
    }

    /// First card to draw so that the selected card is fully visible
    ///
    /// Keeps `previous` when possible so the list does not jump on every
    /// keypress. A selected card taller than the area is drawn from its top.
    pub fn scroll_for(&self, previous: usize, area: Rect) -> usize {
        if self.pads.is_empty() {
            return 0;
        }
        let last = self.pads.len() - 1;
        let Some(selected) = self.selected.map(|row| row.pad_index.min(last)) else {
            return previous.min(last);
        };

        let mut first = previous.min(selected);
        while first < selected {
            let needed: u32 = (first..=selected)
                .map(|index| u32::from(self.card(index).height(area.width)))
                .sum();
            if needed <= u32::from(area.height) {
                break;
            }
            first += 1;
        }
        first
    }
}

impl Widget for LaunchpadList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.pads.is_empty() {
            Paragraph::new(Line::styled("No launchpads", styles::text_muted()))
                .centered()
                .render(area, buf);
            return;
        }

        let mut y = area.y;
        let bottom = area.y + area.height;
        for index in self.first_visible..self.pads.len() {
            if y >= bottom {
                break;
            }
            let card = self.card(index);
            let height = card.height(area.width).min(bottom - y);
            card.render(Rect::new(area.x, y, area.width, height), buf);
            y += height;
        }
    }
}
