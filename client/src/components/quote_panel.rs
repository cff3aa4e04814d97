//! Smart booking panel: one quote request on mount.

#[cfg(test)]
#[path = "quote_panel_test.rs"]
mod quote_panel_test;

use leptos::prelude::*;

use crate::net::types::{BookingQuote, QuoteAddon, format_price};
use crate::state::quote::{QuoteState, QuoteView};

fn addon_line(addon: &QuoteAddon) -> String {
    format!("{}: {}", addon.name, format_price(addon.price))
}

#[component]
pub fn QuotePanel() -> impl IntoView {
    let state = RwSignal::new(QuoteState::default());

    #[cfg(feature = "hydrate")]
    {
        let lifetime = crate::util::lifetime::PanelLifetime::bind();
        let request = crate::net::types::QuoteRequest::one_night_from(time::OffsetDateTime::now_utc());
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::browser_api().quote(&request).await;
            if let Err(e) = &outcome {
                log::warn!("quote request failed: {e}");
            }
            lifetime.run_if_alive(|| state.update(|s| s.settle(outcome)));
        });
    }

    view! {
        <section id="booking" class="panel panel--booking">
            <div class="panel__inner panel__inner--narrow">
                <h2 class="panel__title">"Smart Booking"</h2>
                <p class="panel__subtitle">"AI-optimized suggestions for the best time and add-ons."</p>
                <div class="quote">
                    {move || {
                        let current = state.get();
                        match (current.view(), current.quote) {
                            (QuoteView::Ready, Some(quote)) => view! { <QuoteBreakdown quote=quote/> }.into_any(),
                            (QuoteView::Unavailable, _) => {
                                view! { <div class="panel__placeholder">"Quote unavailable right now."</div> }
                                    .into_any()
                            }
                            _ => view! { <div class="panel__placeholder">"Calculating…"</div> }.into_any(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn QuoteBreakdown(quote: BookingQuote) -> impl IntoView {
    let BookingQuote { nightly_rate, nights, suggestion, addons, total } = quote;

    view! {
        <div class="quote__grid">
            <div>
                <div>"Nightly rate: " <span class="quote__value">{format_price(nightly_rate)}</span></div>
                <div>"Nights: " <span class="quote__value">{nights}</span></div>
                {suggestion.map(|text| view! { <div class="quote__suggestion">{text}</div> })}
            </div>
            <div>
                <div class="quote__heading">"Add-ons"</div>
                <ul class="quote__addons">
                    {addons.iter().map(|addon| view! { <li>{addon_line(addon)}</li> }).collect_view()}
                </ul>
                <div class="quote__total">"Total: " <span class="quote__value">{format_price(total)}</span></div>
            </div>
        </div>
    }
}
