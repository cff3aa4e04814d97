//! Concierge panel: one request per "Ask Concierge" click.

#[cfg(test)]
#[path = "concierge_panel_test.rs"]
mod concierge_panel_test;

use leptos::prelude::*;

use crate::net::types::{ConciergeResponse, SuggestionItem};
use crate::state::concierge::ConciergeState;

#[component]
pub fn ConciergePanel() -> impl IntoView {
    let state = RwSignal::new(ConciergeState::default());

    #[cfg(feature = "hydrate")]
    let lifetime = crate::util::lifetime::PanelLifetime::bind();

    let on_ask = move |_| {
        let Some(ticket) = state.try_update(ConciergeState::begin) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let lifetime = lifetime.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::ConciergeRequest::default();
                let outcome = crate::net::api::browser_api().ask_concierge(&request).await;
                if let Err(e) = &outcome {
                    log::warn!("concierge request failed: {e}");
                }
                lifetime.run_if_alive(|| {
                    state.update(|s| {
                        if !s.settle(ticket, outcome) {
                            log::debug!("dropped stale concierge reply {ticket}");
                        }
                    });
                });
            });
        }
        // Clicks only exist once hydrated.
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };

    let notice = move || {
        let s = state.get();
        if s.busy { None } else { s.error.map(|e| e.guest_message()) }
    };

    view! {
        <section id="concierge" class="panel panel--concierge">
            <div class="panel__inner panel__inner--narrow">
                <h2 class="panel__title">"3D Concierge"</h2>
                <p class="panel__subtitle">"Tell us your vibe and we’ll craft a personalized plan."</p>
                <div class="panel__actions">
                    <button class="btn btn--teal" on:click=on_ask>"Ask Concierge"</button>
                </div>
                <Show when=move || state.get().busy>
                    <p class="panel__placeholder">"Thinking…"</p>
                </Show>
                {move || notice().map(|text| view! { <p class="panel__notice">{text}</p> })}
                {move || state.get().response.map(|response| view! { <ConciergeReply response=response/> })}
            </div>
        </section>
    }
}

#[component]
fn ConciergeReply(response: ConciergeResponse) -> impl IntoView {
    let ConciergeResponse { greeting, suggestions } = response;

    view! {
        <div class="concierge__reply">
            <div class="concierge__greeting">{greeting}</div>
            <div class="concierge__groups">
                {suggestions
                    .into_iter()
                    .map(|group| {
                        let labels = item_labels(&group.items);
                        view! {
                            <div class="concierge__group">
                                <div class="concierge__group-type">{group.kind}</div>
                                <ul class="concierge__items">
                                    {labels.into_iter().map(|label| view! { <li>{label}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One label per item, in reply order. Duplicates and blanks are kept.
fn item_labels(items: &[SuggestionItem]) -> Vec<String> {
    items.iter().map(|item| item.label().to_owned()).collect()
}
