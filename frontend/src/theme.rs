use leptos::*;

/// Color palette used by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub white: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub gray_700: &'static str,
    pub gray_900: &'static str,
}

/// Font weight scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

/// Immutable style configuration injected at the application root.
///
/// Components read it through [`use_theme`] instead of module-level
/// constants, so a storefront can swap the palette without touching
/// component code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub colors: Palette,
    pub weights: Weights,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Palette {
                white: "hsl(0deg 0% 100%)",
                primary: "hsl(340deg 65% 47%)",
                secondary: "hsl(240deg 60% 63%)",
                gray_700: "hsl(0deg 0% 40%)",
                gray_900: "hsl(0deg 0% 14%)",
            },
            weights: Weights {
                normal: 500,
                medium: 600,
                bold: 800,
            },
        }
    }
}

/// Provide the theme to the application
pub fn provide_theme(theme: Theme) {
    provide_context(theme);
}

/// Use the theme from within a component
pub fn use_theme() -> Theme {
    expect_context::<Theme>()
}
