use leptos::*;

/// Fixed-size gap between stacked content.
#[component]
pub fn Spacer(size: u32) -> impl IntoView {
    let style = format!(
        "display: block; width: {0}px; min-width: {0}px; height: {0}px; min-height: {0}px;",
        size
    );

    view! {
        <span style=style></span>
    }
}
