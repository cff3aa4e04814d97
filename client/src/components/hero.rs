//! Landing hero with the 3D scene backdrop.

use leptos::prelude::*;

use super::ar_overlay::ArOverlay;
use super::surfaces::{ModelDescriptor, SceneDescriptor, Surfaces};
use crate::state::overlay::OverlayState;
use crate::util::script_loader::{SCENE_VIEWER_SCRIPT, ensure_module_script};

/// Headline, calls to action, and the full-bleed scene embed.
#[component]
pub fn Hero() -> impl IntoView {
    let status = ensure_module_script(SCENE_VIEWER_SCRIPT);
    log::debug!("scene viewer script: {status:?}");

    let scene = Surfaces::from_context().scene(&SceneDescriptor::default());
    let overlay = RwSignal::new(OverlayState::default());
    let close = Callback::new(move |()| overlay.update(OverlayState::close));

    view! {
        <section id="ar" class="hero">
            <div class="hero__scene" inner_html=scene></div>
            <div class="hero__veil">
                <div class="hero__content">
                    <h1 class="hero__title">"AR-Infused Hotel Universe"</h1>
                    <p class="hero__tagline">
                        "A futuristic sanctuary with immersive AR menus, 3D concierge, and spatial room exploration."
                    </p>
                    <div class="hero__actions">
                        <button
                            class="btn btn--primary"
                            on:click=move |_| overlay.update(|o| o.open(ModelDescriptor::default()))
                        >
                            "Enter the Experience"
                        </button>
                        <a href="#menu" class="btn btn--ghost">"Try AR Menu"</a>
                    </div>
                </div>
            </div>
            {move || overlay.get().model.map(|model| view! { <ArOverlay model=model on_close=close/> })}
        </section>
    }
}
