//! Layout direction, theme and width for one render pass
//!
//! Direction comes from the active catalog entry: right-to-left entries are
//! right-aligned within the render width and bars grow from the right.

use cardiacheck_domain::{Band, Direction};
use colored::{ColoredString, Colorize};

/// Minimum render width
pub const MIN_WIDTH: usize = 40;

/// Default render width
pub const DEFAULT_WIDTH: usize = 72;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
}

impl Theme {
    pub fn heading(&self, text: &str) -> ColoredString {
        match self {
            Theme::Dark => text.cyan().bold(),
        }
    }

    pub fn label(&self, text: &str) -> ColoredString {
        match self {
            Theme::Dark => text.bold(),
        }
    }

    pub fn muted(&self, text: &str) -> ColoredString {
        match self {
            Theme::Dark => text.dimmed(),
        }
    }

    pub fn highlight(&self, text: &str) -> ColoredString {
        match self {
            Theme::Dark => text.magenta().bold(),
        }
    }

    pub fn bar(&self, text: &str) -> ColoredString {
        match self {
            Theme::Dark => text.blue(),
        }
    }

    /// Paint text in the color of a probability band
    pub fn band(&self, band: Band, text: &str) -> ColoredString {
        match band {
            Band::Danger => text.red().bold(),
            Band::Warning => text.yellow().bold(),
            Band::Safe => text.green().bold(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub direction: Direction,
    pub theme: Theme,
    pub width: usize,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            direction: Direction::LeftToRight,
            theme: Theme::Dark,
            width: DEFAULT_WIDTH,
        }
    }
}

impl RenderContext {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }

    // ==================== Layout ====================

    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }

    /// Leading padding that places `plain` according to the direction.
    ///
    /// `plain` must be the uncolored text; ANSI codes would skew the count.
    pub fn indent_for(&self, plain: &str) -> String {
        if self.is_rtl() {
            " ".repeat(self.width.saturating_sub(display_width(plain)))
        } else {
            String::new()
        }
    }

    /// One aligned line: padding computed from `plain`, followed by `styled`
    pub fn line(&self, plain: &str, styled: impl std::fmt::Display) -> String {
        format!("{}{}\n", self.indent_for(plain), styled)
    }

    /// One aligned uncolored line
    pub fn plain_line(&self, text: &str) -> String {
        self.line(text, text)
    }

    /// Horizontal bar of `cells` cells, `filled` of them solid.
    ///
    /// Left-to-right bars fill from the left, right-to-left bars from the right.
    pub fn bar(&self, filled: usize, cells: usize) -> (String, String) {
        let filled = filled.min(cells);
        let solid = "█".repeat(filled);
        let empty = "░".repeat(cells - filled);
        if self.is_rtl() {
            (empty, solid)
        } else {
            (solid, empty)
        }
    }

    /// Greedy word wrap to the render width, each line aligned
    pub fn paragraph(&self, text: &str) -> String {
        wrap(text, self.width)
            .iter()
            .map(|line| self.plain_line(line))
            .collect()
    }
}

/// Number of terminal cells a string occupies (one per char)
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && display_width(&current) + 1 + display_width(word) > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
