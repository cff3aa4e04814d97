//! Landing page: hero, rooms, menu, concierge, booking, footer.

use leptos::prelude::*;

use crate::components::concierge_panel::ConciergePanel;
use crate::components::hero::Hero;
use crate::components::menu_panel::MenuPanel;
use crate::components::quote_panel::QuotePanel;
use crate::components::rooms_panel::RoomsPanel;

/// One scrollable document of independent panels.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Hero/>
            <RoomsPanel/>
            <MenuPanel/>
            <ConciergePanel/>
            <QuotePanel/>
            <footer class="page__footer">
                "© AR-Infused Hotel Universe — Futuristic hospitality reimagined."
            </footer>
        </div>
    }
}
