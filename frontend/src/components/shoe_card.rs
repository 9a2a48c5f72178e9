use chrono::NaiveDate;
use leptos::*;
use shared::ShoeListing;

use crate::components::empty_state::EmptyState;
use crate::components::link::Link;
use crate::components::spacer::Spacer;
use crate::theme::{use_theme, Theme};
use crate::utils::{format_price, is_new_release, pluralize, today};

/// Display mode of a card. Exactly one is active per render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    /// Listing has a sale price; wins over `NewRelease`.
    OnSale,
    /// Released within the recency window.
    NewRelease,
    #[default]
    Default,
}

/// Resolve the display variant for a listing.
///
/// A sale price always wins. Otherwise a release date inside the recency
/// window marks the listing as newly released; absent dates fall through to
/// the default variant.
pub fn resolve_variant(
    sale_price: Option<i64>,
    release_date: Option<NaiveDate>,
    today: NaiveDate,
) -> CardVariant {
    if sale_price.is_some() {
        CardVariant::OnSale
    } else if release_date.map_or(false, |date| is_new_release(date, today)) {
        CardVariant::NewRelease
    } else {
        CardVariant::Default
    }
}

/// Label and background of the flag shown over the card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagStyle {
    pub label: &'static str,
    pub background: &'static str,
}

impl CardVariant {
    /// Flag for this variant; `None` means no flag is rendered.
    pub fn flag(self, theme: &Theme) -> Option<FlagStyle> {
        match self {
            CardVariant::OnSale => Some(FlagStyle {
                label: "Sale",
                background: theme.colors.primary,
            }),
            CardVariant::NewRelease => Some(FlagStyle {
                label: "Just Released",
                background: theme.colors.secondary,
            }),
            CardVariant::Default => None,
        }
    }

    /// Color of the main price figure.
    pub fn price_color(self, theme: &Theme) -> &'static str {
        match self {
            CardVariant::OnSale => theme.colors.gray_700,
            CardVariant::NewRelease | CardVariant::Default => "inherit",
        }
    }

    /// Text decoration of the main price figure.
    pub fn price_decoration(self) -> &'static str {
        match self {
            CardVariant::OnSale => "line-through",
            CardVariant::NewRelease | CardVariant::Default => "none",
        }
    }
}

/// A single product card linking to the listing's detail page.
#[component]
pub fn ShoeCard(listing: ShoeListing) -> impl IntoView {
    let theme = use_theme();
    let variant = resolve_variant(listing.sale_price, listing.release_date, today());

    let flag = variant.flag(&theme);

    // Secondary sale price is only shown on the on-sale variant
    let sale_price_label = match variant {
        CardVariant::OnSale => listing.sale_price.map(format_price),
        CardVariant::NewRelease | CardVariant::Default => None,
    };

    let row_style = "font-size: 1rem; display: flex; justify-content: space-between; align-items: flex-start;";
    let name_style = format!(
        "font-weight: {}; color: {}; margin: 0;",
        theme.weights.medium, theme.colors.gray_900
    );
    let price_style = format!(
        "color: {}; text-decoration: {};",
        variant.price_color(&theme),
        variant.price_decoration()
    );
    let color_info_style = format!("color: {}; margin: 0;", theme.colors.gray_700);
    let sale_price_style = format!(
        "font-weight: {}; color: {};",
        theme.weights.medium, theme.colors.primary
    );

    view! {
        <Link href=listing.detail_path()>
            <article class="shoe-card">
                <div class="shoe-card-image" style="position: relative;">
                    {flag.map(|f| {
                        let flag_style = format!(
                            "position: absolute; top: 8px; right: -8px; height: 32px; line-height: 32px; padding: 0 9px; border-radius: 2px; font-size: 0.875rem; font-weight: {}; background-color: {}; color: {};",
                            theme.weights.bold, f.background, theme.colors.white
                        );
                        view! { <span class="shoe-card-flag" style=flag_style>{f.label}</span> }
                    })}
                    <img alt="" src=listing.image_src.clone() style="display: block; width: 100%; border-radius: 16px 16px 4px 4px;" />
                </div>
                <Spacer size=12 />
                <div class="shoe-card-row" style=row_style>
                    <h3 style=name_style>{listing.name.clone()}</h3>
                    <span style=price_style>{format_price(listing.price)}</span>
                </div>
                <div class="shoe-card-row" style=row_style>
                    <p style=color_info_style>{pluralize("Color", listing.num_of_colors)}</p>
                    {sale_price_label.map(|label| view! {
                        <span style=sale_price_style>{label}</span>
                    })}
                </div>
            </article>
        </Link>
    }
}

/// Flex-wrapped grid of shoe cards.
#[component]
pub fn ShoeGrid(listings: Vec<ShoeListing>) -> impl IntoView {
    if listings.is_empty() {
        view! {
            <EmptyState>
                <p>"No shoes to show."</p>
            </EmptyState>
        }
        .into_view()
    } else {
        view! {
            <div class="shoe-grid" style="display: flex; flex-wrap: wrap; gap: 32px;">
                {listings.into_iter().map(|listing| view! {
                    <div style="flex: 1 1 340px;">
                        <ShoeCard listing=listing />
                    </div>
                }).collect_view()}
            </div>
        }
        .into_view()
    }
}
