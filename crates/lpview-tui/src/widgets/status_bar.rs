//! Bottom status bar
//!
//! Left: load state of the current screen. Right: where the data came from.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use chrono::{DateTime, Local};
use lpview_app::{AppState, LoadState, Screen};

use crate::theme::{icons::IconSet, palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn left_line(&self) -> Line<'static> {
        let (dot_style, label, summary) = match self.state.current_screen() {
            Screen::Home => {
                let home = &self.state.home;
                let summary = match &home.load {
                    LoadState::Loaded(pads) => format!("{} launchpads", pads.len()),
                    _ => String::new(),
                };
                (styles::load_state_style(&home.load), home.load.label(), summary)
            }
            Screen::Second => match &self.state.detail {
                Some(detail) => {
                    let summary = detail
                        .params
                        .launch_id
                        .clone()
                        .map(|id| format!("launch {id}"))
                        .unwrap_or_default();
                    (
                        styles::load_state_style(&detail.load),
                        detail.load.label(),
                        summary,
                    )
                }
                None => (styles::text_muted(), "idle", String::new()),
            },
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.icons.dot(), dot_style),
            Span::raw(" "),
            Span::styled(label, styles::text_secondary()),
        ];
        if !summary.is_empty() {
            spans.push(Span::styled("  ", styles::text_muted()));
            spans.push(Span::styled(summary, styles::text_muted()));
        }
        Line::from(spans)
    }

    fn right_line(&self) -> Line<'static> {
        let (fetched_at, from_cache) = match self.state.current_screen() {
            Screen::Home => (self.state.home.fetched_at, self.state.home.from_cache),
            Screen::Second => self
                .state
                .detail
                .as_ref()
                .map(|detail| (detail.fetched_at, detail.from_cache))
                .unwrap_or((None, false)),
        };

        let mut spans = Vec::new();
        if let Some(source) = source_label(fetched_at, from_cache) {
            spans.push(Span::styled(
                format!("{} ", self.icons.refresh()),
                styles::text_muted(),
            ));
            spans.push(Span::styled(source, styles::text_secondary()));
        }
        if !self.state.cache.is_enabled() {
            spans.push(Span::styled("  cache off", styles::status_yellow()));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

fn source_label(fetched_at: Option<DateTime<Local>>, from_cache: bool) -> Option<String> {
    match (fetched_at, from_cache) {
        (Some(at), true) => Some(format!("cached {}", at.format("%H:%M:%S"))),
        (Some(at), false) => Some(format!("fetched {}", at.format("%H:%M:%S"))),
        (None, _) => None,
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let left = self.left_line();
        buf.set_line(area.x, area.y, &left, area.width);

        let right = self.right_line();
        let right_width = right.width() as u16;
        let left_width = left.width() as u16;
        if left_width + right_width < area.width {
            let x = area.x + area.width - right_width;
            buf.set_line(x, area.y, &right, right_width);
        }
    }
}
