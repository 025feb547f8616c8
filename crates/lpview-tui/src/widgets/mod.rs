//! Custom widget components

mod error_panel;
mod header;
mod launch_detail;
mod launchpad_list;
mod loading;
mod status_bar;

pub use error_panel::ErrorPanel;
pub use header::MainHeader;
pub use launch_detail::LaunchDetail;
pub use launchpad_list::{LaunchpadCard, LaunchpadList};
pub use loading::Loading;
pub use status_bar::StatusBar;

use unicode_width::UnicodeWidthStr;

/// Greedy word wrap by display width
///
/// Words wider than `width` are split across lines. Empty input yields no
/// lines.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_width = word.width();
        let current_width = current.width();

        if !current.is_empty() && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if word_width <= width {
            current.push_str(word);
            continue;
        }

        // Hard-split an over-long word
        for ch in word.chars() {
            let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if current.width() + ch_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
