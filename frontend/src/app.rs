use leptos::*;
use leptos_router::*;

use crate::pages::shoe_detail::ShoeDetailPage;
use crate::pages::shoes::ShoesPage;
use crate::theme::{provide_theme, Theme};

#[component]
pub fn App() -> impl IntoView {
    // Style configuration is provided once at the root; components read it
    // through use_theme instead of global constants
    provide_theme(Theme::default());

    view! {
        <Router>
            <main style="max-width: 1100px; margin: 0 auto; padding: 32px 16px;">
                <Routes>
                    <Route path="/" view=ShoesPage />
                    <Route path="/shoe/:slug" view=ShoeDetailPage />
                </Routes>
            </main>
        </Router>
    }
}
