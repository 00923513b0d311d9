use ratatui::style::Color;

/// Color roles every theme may define.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColorRole {
    Background,
    Logo,
    Snake,
    Wall,
    Food,
    Explosion,
    ButtonBorder,
    ButtonNumber,
}

/// A named color table.
///
/// Lookup is a pure mapping with a defined fallback: a role missing from
/// a theme resolves to the default (first) theme's color for that role.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    colors: &'static [(ColorRole, Color)],
}

impl Theme {
    /// Resolves `role`, falling back to the default theme's value.
    #[must_use]
    pub fn color(&self, role: ColorRole) -> Color {
        self.lookup(role)
            .or_else(|| THEMES[0].lookup(role))
            .unwrap_or(Color::White)
    }

    fn lookup(&self, role: ColorRole) -> Option<Color> {
        self.colors
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, color)| *color)
    }
}

/// Sky blue with yellow walls. The default.
pub const THEME_STANDARD: Theme = Theme {
    name: "Standard",
    colors: &[
        (ColorRole::Background, Color::Rgb(115, 186, 255)),
        (ColorRole::Logo, Color::White),
        (ColorRole::Snake, Color::White),
        (ColorRole::Wall, Color::Rgb(255, 242, 102)),
        (ColorRole::Food, Color::White),
        (ColorRole::Explosion, Color::White),
        (ColorRole::ButtonBorder, Color::Rgb(255, 242, 102)),
        (ColorRole::ButtonNumber, Color::White),
    ],
};

pub const THEME_GRAYSCALE: Theme = Theme {
    name: "Grayscale",
    colors: &[
        (ColorRole::Background, Color::Rgb(102, 102, 102)),
        (ColorRole::Logo, Color::Rgb(230, 230, 230)),
        (ColorRole::Snake, Color::Rgb(230, 230, 230)),
        (ColorRole::Wall, Color::Rgb(179, 179, 179)),
        (ColorRole::Food, Color::Rgb(230, 230, 230)),
        (ColorRole::Explosion, Color::Rgb(255, 255, 255)),
        (ColorRole::ButtonBorder, Color::Rgb(204, 204, 204)),
        (ColorRole::ButtonNumber, Color::Rgb(179, 179, 179)),
    ],
};

pub const THEME_SPACE_CADET: Theme = Theme {
    name: "Space Cadet",
    colors: &[
        (ColorRole::Background, Color::Rgb(23, 33, 51)),
        (ColorRole::Logo, Color::Rgb(33, 92, 133)),
        (ColorRole::Snake, Color::Rgb(245, 179, 112)),
        (ColorRole::Wall, Color::Rgb(33, 92, 133)),
        (ColorRole::Food, Color::Rgb(242, 97, 102)),
        (ColorRole::Explosion, Color::Rgb(204, 204, 191)),
        (ColorRole::ButtonBorder, Color::Rgb(242, 97, 102)),
        (ColorRole::ButtonNumber, Color::Rgb(153, 153, 128)),
    ],
};

pub const THEME_OLD_PHONE: Theme = Theme {
    name: "Old Phone",
    colors: &[
        (ColorRole::Background, Color::Rgb(186, 219, 153)),
        (ColorRole::Logo, Color::Rgb(54, 64, 51)),
        (ColorRole::Snake, Color::Rgb(54, 64, 51)),
        (ColorRole::Wall, Color::Rgb(99, 117, 94)),
        (ColorRole::Food, Color::Rgb(54, 64, 51)),
        (ColorRole::Explosion, Color::Rgb(54, 64, 51)),
        (ColorRole::ButtonBorder, Color::Rgb(54, 64, 51)),
        (ColorRole::ButtonNumber, Color::Rgb(92, 122, 89)),
    ],
};

/// All themes in cycle order. Index 0 is the default.
pub const THEMES: &[Theme] = &[
    THEME_STANDARD,
    THEME_GRAYSCALE,
    THEME_SPACE_CADET,
    THEME_OLD_PHONE,
];

/// Resolves a persisted theme name; unknown or empty names fall back to
/// the default theme.
#[must_use]
pub fn theme_by_name(name: &str) -> &'static Theme {
    THEMES
        .iter()
        .find(|theme| theme.name == name)
        .unwrap_or(&THEMES[0])
}

/// Returns the theme after `current` in cycle order.
#[must_use]
pub fn next_theme(current: &Theme) -> &'static Theme {
    let idx = THEMES
        .iter()
        .position(|theme| theme.name == current.name)
        .unwrap_or(0);
    &THEMES[(idx + 1) % THEMES.len()]
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::{next_theme, theme_by_name, ColorRole, Theme, THEMES};

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(theme_by_name("No Such Theme").name, "Standard");
        assert_eq!(theme_by_name("").name, "Standard");
        assert_eq!(theme_by_name("Old Phone").name, "Old Phone");
    }

    #[test]
    fn missing_role_falls_back_to_default_theme_color() {
        let sparse = Theme {
            name: "Sparse",
            colors: &[(ColorRole::Snake, Color::Rgb(1, 2, 3))],
        };

        assert_eq!(sparse.color(ColorRole::Snake), Color::Rgb(1, 2, 3));
        assert_eq!(
            sparse.color(ColorRole::Wall),
            THEMES[0].color(ColorRole::Wall)
        );
    }

    #[test]
    fn theme_cycle_wraps_around() {
        let mut theme = &THEMES[0];
        for _ in 0..THEMES.len() {
            theme = next_theme(theme);
        }
        assert_eq!(theme.name, THEMES[0].name);
    }
}
