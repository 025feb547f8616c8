//! Loading indicator

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::layout::centered;
use crate::theme::{icons::IconSet, styles};

/// Centered spinner followed by "Loading"
pub struct Loading {
    frame: usize,
    icons: IconSet,
}

impl Loading {
    pub fn new(frame: usize, icons: IconSet) -> Self {
        Self { frame, icons }
    }
}

impl Widget for Loading {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.icons.spinner(self.frame), styles::accent()),
            Span::raw(" "),
            Span::styled("Loading", styles::text_secondary()),
        ]);
        let width = line.width() as u16;
        let target = centered(area, width, 1);
        buf.set_line(target.x, target.y, &line, target.width);
    }
}
