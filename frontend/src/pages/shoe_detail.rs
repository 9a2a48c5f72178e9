use leptos::*;
use leptos_router::*;

use crate::components::empty_state::EmptyState;
use crate::components::link::{Link, LinkVariant};
use crate::components::shoe_card::{resolve_variant, CardVariant};
use crate::components::spacer::Spacer;
use crate::data::find_listing;
use crate::theme::use_theme;
use crate::utils::{format_price, pluralize, today};
use shared::ShoeListing;

/// Detail page for a single listing, reached from a card's link.
#[component]
pub fn ShoeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").cloned().unwrap_or_default());

    view! {
        <div class="shoe-detail-page">
            <Link href="/" variant=LinkVariant::Muted>"← Back to all shoes"</Link>
            <Spacer size=24 />
            {move || match find_listing(&slug()) {
                Some(listing) => view! { <ShoeDetail listing=listing /> }.into_view(),
                None => view! {
                    <EmptyState>
                        <p>"We could not find that shoe."</p>
                    </EmptyState>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ShoeDetail(listing: ShoeListing) -> impl IntoView {
    let theme = use_theme();
    let variant = resolve_variant(listing.sale_price, listing.release_date, today());

    let name_style = format!(
        "font-weight: {}; color: {}; margin: 0;",
        theme.weights.bold, theme.colors.gray_900
    );
    let price_style = format!(
        "color: {}; text-decoration: {};",
        variant.price_color(&theme),
        variant.price_decoration()
    );
    let sale_price_style = format!(
        "font-weight: {}; color: {};",
        theme.weights.medium, theme.colors.primary
    );
    let color_info_style = format!("color: {}; margin: 0;", theme.colors.gray_700);

    let sale_price_label = match variant {
        CardVariant::OnSale => listing.sale_price.map(format_price),
        CardVariant::NewRelease | CardVariant::Default => None,
    };

    view! {
        <article class="shoe-detail" style="max-width: 560px;">
            <img alt="" src=listing.image_src.clone() style="display: block; width: 100%; border-radius: 16px;" />
            <Spacer size=16 />
            <h1 style=name_style>{listing.name.clone()}</h1>
            <Spacer size=8 />
            <div style="display: flex; gap: 12px; align-items: baseline;">
                <span style=price_style>{format_price(listing.price)}</span>
                {sale_price_label.map(|label| view! {
                    <span style=sale_price_style>{label}</span>
                })}
            </div>
            <Spacer size=8 />
            <p style=color_info_style>{pluralize("Color", listing.num_of_colors)}</p>
        </article>
    }
}
