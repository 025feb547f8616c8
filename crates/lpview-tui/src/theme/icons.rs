//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use lpview_app::config::IconMode;

/// Braille spinner frames, shared by both modes
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Trailing marker on each launch row
    pub fn arrow_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{2192}",   // →
        }
    }

    pub fn rocket(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f135}", // nf-fa-rocket
            IconMode::Unicode => "\u{25b2}",   // ▲
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn refresh(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f021}", // nf-fa-refresh
            IconMode::Unicode => "\u{21bb}",   // ↻
        }
    }

    /// Spinner glyph for animation frame `frame`
    pub fn spinner(&self, frame: usize) -> &'static str {
        SPINNER[frame % SPINNER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_arrow() {
        assert_eq!(IconSet::new(IconMode::Unicode).arrow_right(), "→");
    }

    #[test]
    fn test_nerd_fonts_differ_from_unicode() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.arrow_right(), nerd.arrow_right());
        assert_ne!(unicode.dot(), nerd.dot());
    }

    #[test]
    fn test_spinner_wraps() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.spinner(0), icons.spinner(SPINNER.len()));
        assert_ne!(icons.spinner(0), icons.spinner(1));
    }
}
