//! Theme colours and icon glyphs shared by every view.

use ratatui::style::Color;
use tp_core::Theme;

pub struct ThemeStyle {
    pub color: Color,
    pub glyph: &'static str,
}

/// The single theme → presentation table.
pub fn theme_style(theme: Theme) -> ThemeStyle {
    let (color, glyph) = match theme {
        Theme::Communication => (Color::Blue, "\u{25c6}"),
        Theme::Sales => (Color::Green, "\u{25b2}"),
        Theme::Culture => (Color::Magenta, "\u{2605}"),
        Theme::Retention => (Color::LightRed, "\u{2665}"),
        Theme::Product => (Color::Yellow, "\u{25cf}"),
        Theme::Operations => (Color::Gray, "\u{25a0}"),
        Theme::Marketing => (Color::LightYellow, "\u{25ce}"),
        Theme::Other => (Color::DarkGray, "\u{00b7}"),
    };
    ThemeStyle { color, glyph }
}

pub fn theme_color(theme: Theme) -> Color {
    theme_style(theme).color
}

/// Icon registry keyed by the session's `icon` field. Unknown keys get a bullet.
pub fn icon_glyph(key: &str) -> &'static str {
    match key {
        "award" => "\u{272a}",
        "message" => "\u{2709}",
        "heart" => "\u{2665}",
        "clock" => "\u{25f7}",
        "users" => "\u{263a}",
        "trending" => "\u{2197}",
        "star" => "\u{2605}",
        "shield" => "\u{25c8}",
        "target" => "\u{25ce}",
        "play" => "\u{25b6}",
        "megaphone" => "\u{2706}",
        _ => "\u{2022}",
    }
}

/// Marker for completed sessions.
pub const DONE_GLYPH: &str = "\u{2713}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_a_distinct_colour() {
        let mut colors: Vec<Color> = Theme::ALL.iter().map(|t| theme_color(*t)).collect();
        colors.push(theme_color(Theme::Other));
        for (i, a) in colors.iter().enumerate() {
            assert!(!colors[i + 1..].contains(a), "{a:?} used twice");
        }
    }

    #[test]
    fn unknown_icon_falls_back() {
        assert_eq!(icon_glyph("does-not-exist"), "\u{2022}");
        assert_ne!(icon_glyph("award"), icon_glyph("does-not-exist"));
    }
}
