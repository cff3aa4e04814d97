//! AR smart menu panel.
//!
//! Same load lifecycle as the room selector, against `/menu`. Each dish can
//! be placed in AR through an overlay owned by this panel.

use leptos::prelude::*;

use super::ar_overlay::ArOverlay;
use super::surfaces::ModelDescriptor;
use crate::net::types::{Dish, format_price};
use crate::state::overlay::OverlayState;
use crate::state::resource::{ListView, ResourceState};

#[component]
pub fn MenuPanel() -> impl IntoView {
    let dishes = RwSignal::new(ResourceState::<Dish>::default());
    let overlay = RwSignal::new(OverlayState::default());
    let close = Callback::new(move |()| overlay.update(OverlayState::close));
    let place = Callback::new(move |model: ModelDescriptor| overlay.update(|o| o.open(model)));

    #[cfg(feature = "hydrate")]
    {
        let lifetime = crate::util::lifetime::PanelLifetime::bind();
        leptos::task::spawn_local(async move {
            let api = crate::net::api::browser_api();
            let outcome = crate::net::seed_retry::load_with_seed::<Dish, _>(&api).await;
            lifetime.run_if_alive(|| dishes.update(|s| s.settle(outcome)));
        });
    }

    view! {
        <section id="menu" class="panel panel--menu">
            <div class="panel__inner">
                <h2 class="panel__title">"AR Smart Menu"</h2>
                <p class="panel__subtitle">
                    "Place dishes on your table in AR, inspect layers, and hear from the chef."
                </p>
                <div class="panel__grid panel__grid--three">
                    {move || {
                        let state = dishes.get();
                        match state.view() {
                            ListView::Loading => {
                                view! { <div class="panel__placeholder">"Loading menu…"</div> }.into_any()
                            }
                            ListView::Empty => {
                                view! { <div class="panel__placeholder">"The menu is empty."</div> }.into_any()
                            }
                            ListView::Items => {
                                state
                                    .items
                                    .into_iter()
                                    .map(|dish| view! { <DishCard dish=dish on_place=place/> })
                                    .collect_view()
                                    .into_any()
                            }
                        }
                    }}
                </div>
            </div>
            {move || overlay.get().model.map(|model| view! { <ArOverlay model=model on_close=close/> })}
        </section>
    }
}

#[component]
fn DishCard(dish: Dish, on_place: Callback<ModelDescriptor>) -> impl IntoView {
    let price = format_price(dish.price);

    view! {
        <article class="card card--dish">
            <div class="card__preview card__preview--square"></div>
            <h3 class="card__title">{dish.name}</h3>
            <p class="card__meta">{dish.description}</p>
            <div class="card__row">
                <span class="card__price">{price}</span>
                <button class="btn btn--accent" on:click=move |_| on_place.run(ModelDescriptor::default())>
                    "Place in AR"
                </button>
            </div>
        </article>
    }
}
