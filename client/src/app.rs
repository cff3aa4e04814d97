//! Root application component with routing and the render-surface context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::surfaces::Surfaces;
use crate::pages::home::HomePage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Panels keep their own state; the only context provided here is the
/// capability used to render the external 3D and AR elements.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Surfaces::embedded());

    view! {
        <Stylesheet id="leptos" href="/pkg/hotel-universe.css"/>
        <Title text="AR-Infused Hotel Universe"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
