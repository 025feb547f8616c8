//! Header bar widget
//!
//! Shows the app name, the title of the screen on top, and key hints for it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use lpview_app::Screen;

use crate::theme::{icons::IconSet, palette, styles};

/// Main header with screen title and keybindings
pub struct MainHeader {
    screen: Screen,
    status_style: Style,
    icons: IconSet,
}

impl MainHeader {
    pub fn new(screen: Screen, icons: IconSet) -> Self {
        Self {
            screen,
            status_style: styles::text_muted(),
            icons,
        }
    }

    /// Color of the status dot (follows the screen's load state)
    pub fn status_style(mut self, style: Style) -> Self {
        self.status_style = style;
        self
    }

    fn title_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.dot(), self.status_style),
            Span::raw(" "),
            Span::styled("Launchpad Viewer", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.screen.title(), styles::text_bright_bold()),
        ])
    }

    fn shortcuts_line(&self) -> Line<'static> {
        let hints: &[(&str, &str)] = match self.screen {
            Screen::Home => &[("Enter", "Open"), ("r", "Refresh"), ("q", "Quit")],
            Screen::Second => &[("Esc", "Back"), ("r", "Refresh"), ("q", "Quit")],
        };

        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (i, (key, label)) in hints.iter().enumerate() {
            let sep = if i + 1 < hints.len() { "  " } else { " " };
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {label}{sep}"), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = self.title_line();
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Right-align the hints when they fit beside the title
        let shortcuts = self.shortcuts_line();
        let shortcuts_width = shortcuts.width() as u16;
        if title_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }
    }
}
