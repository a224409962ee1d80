use std::path::PathBuf;
use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::config::APP_DIR;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the active theme (loaded once on first call).
pub fn current() -> &'static Theme {
    THEME.get_or_init(|| Theme::load().unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct Theme {
    #[allow(dead_code)]
    pub name: String,
    /// Today's cell in the calendar grid.
    pub today: Style,
    /// The picked day and the current select value.
    pub selected: Style,
    /// Keyboard cursor: focused control, calendar cursor, dropdown highlight.
    pub focus: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub button: Style,
    pub success: Style,
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(
            "default",
            Palette {
                fg: Color::White,
                accent: Color::Cyan,
                today: Color::Yellow,
                dim: Color::DarkGray,
                surface: Color::DarkGray,
                border: Color::Gray,
                good: Color::Green,
                bad: Color::Red,
            },
        )
    }
}

struct Palette {
    fg: Color,
    accent: Color,
    today: Color,
    dim: Color,
    surface: Color,
    border: Color,
    good: Color,
    bad: Color,
}

impl Theme {
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(&path).ok()?;
        Self::from_toml(&content)
    }

    fn from_toml(content: &str) -> Option<Self> {
        match toml::from_str::<ThemeConfig>(content) {
            Ok(config) => Some(config.into_theme()),
            Err(e) => {
                tracing::warn!("ignoring theme.toml: {}", e);
                None
            }
        }
    }

    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::from_palette(
                "dracula",
                Palette {
                    fg: Color::Rgb(248, 248, 242),
                    accent: Color::Rgb(139, 233, 253),
                    today: Color::Rgb(189, 147, 249),
                    dim: Color::Rgb(98, 114, 164),
                    surface: Color::Rgb(68, 71, 90),
                    border: Color::Rgb(68, 71, 90),
                    good: Color::Rgb(80, 250, 123),
                    bad: Color::Rgb(255, 85, 85),
                },
            ),
            "gruvbox" => Self::from_palette(
                "gruvbox",
                Palette {
                    fg: Color::Rgb(235, 219, 178),
                    accent: Color::Rgb(131, 165, 152),
                    today: Color::Rgb(250, 189, 47),
                    dim: Color::Rgb(146, 131, 116),
                    surface: Color::Rgb(80, 73, 69),
                    border: Color::Rgb(102, 92, 84),
                    good: Color::Rgb(184, 187, 38),
                    bad: Color::Rgb(251, 73, 52),
                },
            ),
            "nord" => Self::from_palette(
                "nord",
                Palette {
                    fg: Color::Rgb(229, 233, 240),
                    accent: Color::Rgb(136, 192, 208),
                    today: Color::Rgb(235, 203, 139),
                    dim: Color::Rgb(76, 86, 106),
                    surface: Color::Rgb(67, 76, 94),
                    border: Color::Rgb(67, 76, 94),
                    good: Color::Rgb(163, 190, 140),
                    bad: Color::Rgb(191, 97, 106),
                },
            ),
            _ => Self::default(),
        }
    }

    fn from_palette(name: &str, p: Palette) -> Self {
        Self {
            name: name.to_string(),
            today: Style::default().fg(Color::Black).bg(p.today),
            selected: Style::default()
                .fg(Color::Black)
                .bg(p.accent)
                .add_modifier(Modifier::BOLD),
            focus: Style::default()
                .fg(p.fg)
                .bg(p.surface)
                .add_modifier(Modifier::BOLD),
            header: Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(p.dim),
            border: Style::default().fg(p.border),
            status: Style::default().fg(p.fg).bg(p.surface),
            button: Style::default().fg(Color::Black).bg(p.fg),
            success: Style::default().fg(Color::Black).bg(p.good),
            error: Style::default().fg(Color::White).bg(p.bad),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("theme.toml"))
}

// ── TOML config types ──

#[derive(Debug, Deserialize, Default)]
struct ThemeConfig {
    preset: Option<String>,
    today_bg: Option<String>,
    selected_bg: Option<String>,
    focus_bg: Option<String>,
    header_fg: Option<String>,
    dim_fg: Option<String>,
    border_fg: Option<String>,
    status_fg: Option<String>,
    status_bg: Option<String>,
    success_bg: Option<String>,
    error_bg: Option<String>,
}

impl ThemeConfig {
    fn into_theme(self) -> Theme {
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        let color = |s: &Option<String>| s.as_deref().and_then(parse_color);

        if let Some(c) = color(&self.today_bg) {
            theme.today = theme.today.bg(c);
        }
        if let Some(c) = color(&self.selected_bg) {
            theme.selected = theme.selected.bg(c);
        }
        if let Some(c) = color(&self.focus_bg) {
            theme.focus = theme.focus.bg(c);
        }
        if let Some(c) = color(&self.header_fg) {
            theme.header = theme.header.fg(c);
        }
        if let Some(c) = color(&self.dim_fg) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = color(&self.border_fg) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = color(&self.status_fg) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = color(&self.status_bg) {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = color(&self.success_bg) {
            theme.success = theme.success.bg(c);
        }
        if let Some(c) = color(&self.error_bg) {
            theme.error = theme.error.bg(c);
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let hex = s
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()));
    if let Some(hex) = hex {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        _ => None,
    }
}
