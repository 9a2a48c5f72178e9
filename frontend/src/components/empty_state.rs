use leptos::*;

use crate::theme::use_theme;

/// Empty state display component.
#[component]
pub fn EmptyState(
    #[prop(optional, into)] icon: Option<String>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();

    let style = format!(
        "padding: 48px 16px; text-align: center; color: {};",
        theme.colors.gray_700
    );

    view! {
        <div class="empty-state" style=style>
            {icon.map(|i| view! {
                <span style="display: block; font-size: 2rem;">{i}</span>
            })}
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_empty_state_css_class() {
        assert_eq!("empty-state", "empty-state");
    }
}
