use leptos::*;

use crate::theme::{use_theme, Theme};

#[derive(Default, Clone, Copy, PartialEq)]
pub enum LinkVariant {
    /// Inherit the surrounding text color; used to wrap whole cards.
    #[default]
    Inherit,
    Primary,
    Muted,
}

/// Color for a link variant under the given theme.
pub fn link_color(variant: LinkVariant, theme: &Theme) -> &'static str {
    match variant {
        LinkVariant::Inherit => "inherit",
        LinkVariant::Primary => theme.colors.primary,
        LinkVariant::Muted => theme.colors.gray_700,
    }
}

/// Styled link component. Never underlined.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional)] variant: LinkVariant,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();

    let style = format!(
        "text-decoration: none; color: {};",
        link_color(variant, &theme)
    );

    let full_class = class.unwrap_or_default();

    view! {
        <a href=href class=full_class style=style>
            {children()}
        </a>
    }
}
