use leptos::*;

use crate::components::shoe_card::ShoeGrid;
use crate::data::demo_catalog;
use crate::theme::use_theme;

/// Catalog index page showing every listing as a card.
#[component]
pub fn ShoesPage() -> impl IntoView {
    let theme = use_theme();

    let heading_style = format!(
        "font-weight: {}; color: {}; margin: 0 0 24px;",
        theme.weights.bold, theme.colors.gray_900
    );

    view! {
        <div class="shoes-page">
            <h1 style=heading_style>"Shoes"</h1>
            <ShoeGrid listings=demo_catalog() />
        </div>
    }
}
