use predprey_plot::{Rgb, Style};
use serde::{Deserialize, Serialize};

use crate::i18n::Strings;

/// Light or dark presentation of the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used to draw one set of charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub prey: Rgb,
    pub predator: Rgb,
}

const LIGHT: Palette = Palette {
    background: Rgb::WHITE,
    foreground: Rgb::BLACK,
    prey: Rgb::new(0x00, 0x00, 0xFF),
    predator: Rgb::new(0xFF, 0x00, 0x00),
};

const DARK: Palette = Palette {
    background: Rgb::new(0x22, 0x22, 0x22),
    foreground: Rgb::WHITE,
    prey: Rgb::new(0x00, 0xFF, 0xFF),
    predator: Rgb::new(0xFF, 0xA5, 0x00),
};

impl Theme {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }

    /// Returns the display name of the theme in the given language.
    #[must_use]
    pub fn label(self, strings: &Strings) -> &'static str {
        match self {
            Self::Light => strings.light,
            Self::Dark => strings.dark,
        }
    }
}

impl Palette {
    /// Page colors for the chart window.
    #[must_use]
    pub fn style(&self) -> Style {
        Style {
            background: self.background,
            foreground: self.foreground,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::i18n::Language;

    #[test]
    fn light_palette() {
        let palette = Theme::Light.palette();

        assert_eq!(palette.background.to_string(), "#FFFFFF");
        assert_eq!(palette.foreground.to_string(), "#000000");
        assert_eq!(palette.prey.to_string(), "#0000FF");
        assert_eq!(palette.predator.to_string(), "#FF0000");
    }

    #[test]
    fn dark_palette() {
        let palette = Theme::Dark.palette();

        assert_eq!(palette.background.to_string(), "#222222");
        assert_eq!(palette.foreground.to_string(), "#FFFFFF");
        assert_eq!(palette.prey.to_string(), "#00FFFF");
        assert_eq!(palette.predator.to_string(), "#FFA500");
    }

    #[test]
    fn style_darkness_follows_theme() {
        assert!(!Theme::Light.palette().style().is_dark());
        assert!(Theme::Dark.palette().style().is_dark());
    }

    #[test]
    fn labels_follow_language() {
        let labels: Vec<_> = Theme::ALL
            .iter()
            .map(|theme| theme.label(Language::Ru.strings()))
            .collect();

        assert_eq!(labels, vec!["Светлая", "Тёмная"]);
    }
}
