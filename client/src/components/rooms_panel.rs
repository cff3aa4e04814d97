//! Room selector panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `/rooms` once on mount through the seed-retry fallback. Server
//! rendering emits the loading placeholder; the fetch runs after hydration.

#[cfg(test)]
#[path = "rooms_panel_test.rs"]
mod rooms_panel_test;

use leptos::prelude::*;

use crate::net::types::{Room, format_price};
use crate::state::resource::{ListView, ResourceState};

/// "`view` • up to `capacity` guests".
fn room_meta(room: &Room) -> String {
    format!("{} • up to {} guests", room.view, room.capacity)
}

fn nightly_price(room: &Room) -> String {
    format!("{}/night", format_price(room.price_per_night))
}

#[component]
pub fn RoomsPanel() -> impl IntoView {
    let rooms = RwSignal::new(ResourceState::<Room>::default());

    #[cfg(feature = "hydrate")]
    {
        let lifetime = crate::util::lifetime::PanelLifetime::bind();
        leptos::task::spawn_local(async move {
            let api = crate::net::api::browser_api();
            let outcome = crate::net::seed_retry::load_with_seed::<Room, _>(&api).await;
            lifetime.run_if_alive(|| rooms.update(|s| s.settle(outcome)));
        });
    }

    view! {
        <section id="rooms" class="panel panel--rooms">
            <div class="panel__inner">
                <h2 class="panel__title">"Immersive Room Selector"</h2>
                <p class="panel__subtitle">"Explore suites with sunrise/sunset previews and 360° vibes."</p>
                <div class="panel__grid panel__grid--two">
                    {move || {
                        let state = rooms.get();
                        match state.view() {
                            ListView::Loading => {
                                view! { <div class="panel__placeholder">"Loading rooms…"</div> }.into_any()
                            }
                            ListView::Empty => {
                                view! { <div class="panel__placeholder">"No rooms yet."</div> }.into_any()
                            }
                            ListView::Items => {
                                state
                                    .items
                                    .into_iter()
                                    .map(|room| view! { <RoomCard room=room/> })
                                    .collect_view()
                                    .into_any()
                            }
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn RoomCard(room: Room) -> impl IntoView {
    let meta = room_meta(&room);
    let price = nightly_price(&room);

    view! {
        <article class="card card--room">
            <div class="card__preview"></div>
            <div class="card__row">
                <div>
                    <h3 class="card__title">{room.name}</h3>
                    <p class="card__meta">{meta}</p>
                </div>
                <div class="card__aside">
                    <div class="card__price">{price}</div>
                    <button class="btn btn--primary">"Preview 360°"</button>
                </div>
            </div>
        </article>
    }
}
