//! Full-viewport AR model viewer overlay.
//!
//! The caller owns open/close: the overlay only dismisses through `on_close`.

use leptos::prelude::*;

use super::surfaces::{ModelDescriptor, Surfaces};
use crate::util::script_loader::{MODEL_VIEWER_SCRIPT, ensure_module_script};

/// Dimmed modal hosting the external `<model-viewer>` element.
#[component]
pub fn ArOverlay(model: ModelDescriptor, on_close: Callback<()>) -> impl IntoView {
    let status = ensure_module_script(MODEL_VIEWER_SCRIPT);
    log::debug!("model viewer script: {status:?}");

    let markup = Surfaces::from_context().model(&model);

    view! {
        <div class="ar-overlay" role="dialog" aria-modal="true">
            <div class="ar-overlay__frame">
                <button class="btn ar-overlay__close" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
                <div class="ar-overlay__stage" inner_html=markup></div>
                <div class="ar-overlay__tip">
                    "Tip: On compatible devices, tap \"View in AR\" to place the object in your space."
                </div>
            </div>
        </div>
    }
}
