//! Terminal capability detection and colouring

use owo_colors::{colors::css, OwoColorize};

/// Detects whether colored output should be enabled on stdout
#[must_use]
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Decorates text for the terminal.
///
/// Colour is decided once, when the palette is built, so output written to a
/// buffer or a pipe stays plain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that never emits colour codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// A palette that colours output if stdout supports it.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            enabled: supports_color(),
        }
    }

    /// Color as success (green)
    #[must_use]
    pub fn success(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Green>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as warning (amber)
    #[must_use]
    pub fn warning(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Orange>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as info (blue)
    #[must_use]
    pub fn info(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::LightBlue>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dim the text
    #[must_use]
    pub fn dim(self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.success("ok"), "ok");
        assert_eq!(palette.warning("careful"), "careful");
        assert_eq!(palette.info("note"), "note");
        assert_eq!(palette.dim("quiet"), "quiet");
    }

    #[test]
    fn enabled_palette_adds_escape_codes() {
        let palette = Palette { enabled: true };
        for coloured in [palette.warning("careful"), palette.success("careful")] {
            assert!(coloured.contains("careful"));
            assert!(coloured.starts_with('\u{1b}'));
        }
        assert_ne!(palette.success("careful"), palette.warning("careful"));
    }
}
