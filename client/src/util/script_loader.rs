//! One-shot loader for third-party module scripts (model viewer, scene viewer).
//!
//! A URL is claimed in a per-thread registry before touching the DOM, so two
//! panels mounting in the same tick never insert the same tag twice. An
//! existing `<script src=...>` in the document counts as loaded. Load failures
//! are silent; the host element keeps showing its fallback markup.

#[cfg(test)]
#[path = "script_loader_test.rs"]
mod script_loader_test;

use std::cell::RefCell;
use std::collections::HashMap;

pub const MODEL_VIEWER_SCRIPT: &str = "https://unpkg.com/@google/model-viewer/dist/model-viewer.min.js";
pub const SCENE_VIEWER_SCRIPT: &str = "https://unpkg.com/@splinetool/viewer/build/spline-viewer.js";

/// Result of asking for a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptStatus {
    /// A tag for this URL was already requested or present.
    AlreadyPresent,
    /// A new tag was appended to `<head>`.
    Inserted,
    /// No document to attach to (server rendering, native tests).
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptState {
    Requested,
    Loaded,
}

/// Session bookkeeping of script URLs.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    scripts: HashMap<String, ScriptState>,
}

impl ScriptRegistry {
    /// Reserve `src`. Returns `false` when it was already reserved.
    pub fn claim(&mut self, src: &str) -> bool {
        if self.scripts.contains_key(src) {
            return false;
        }
        self.scripts.insert(src.to_owned(), ScriptState::Requested);
        true
    }

    pub fn mark_loaded(&mut self, src: &str) {
        self.scripts.insert(src.to_owned(), ScriptState::Loaded);
    }

    /// Forget a reservation whose insertion never happened.
    pub fn release(&mut self, src: &str) {
        if self.scripts.get(src) == Some(&ScriptState::Requested) {
            self.scripts.remove(src);
        }
    }

    #[must_use]
    pub fn state(&self, src: &str) -> Option<ScriptState> {
        self.scripts.get(src).copied()
    }
}

thread_local! {
    static REGISTRY: RefCell<ScriptRegistry> = RefCell::new(ScriptRegistry::default());
}

/// CSS selector matching an existing tag for `src`.
#[must_use]
pub fn script_selector(src: &str) -> String {
    format!("script[src=\"{src}\"]")
}

/// Whether the browser has reported `src` as loaded this session.
#[must_use]
pub fn is_loaded(src: &str) -> bool {
    REGISTRY.with_borrow(|r| r.state(src) == Some(ScriptState::Loaded))
}

/// Ensure exactly one `<script type="module" src=...>` exists for `src`.
pub fn ensure_module_script(src: &str) -> ScriptStatus {
    #[cfg(feature = "hydrate")]
    {
        if !REGISTRY.with_borrow_mut(|r| r.claim(src)) {
            return ScriptStatus::AlreadyPresent;
        }
        let status = attach(src);
        if status == ScriptStatus::Unavailable {
            REGISTRY.with_borrow_mut(|r| r.release(src));
        }
        status
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = src;
        ScriptStatus::Unavailable
    }
}

#[cfg(feature = "hydrate")]
fn attach(src: &str) -> ScriptStatus {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return ScriptStatus::Unavailable;
    };
    if let Ok(Some(_)) = document.query_selector(&script_selector(src)) {
        REGISTRY.with_borrow_mut(|r| r.mark_loaded(src));
        return ScriptStatus::AlreadyPresent;
    }
    let Some(head) = document.head() else {
        return ScriptStatus::Unavailable;
    };
    let Ok(script) = document.create_element("script") else {
        return ScriptStatus::Unavailable;
    };
    let _ = script.set_attribute("type", "module");
    let _ = script.set_attribute("src", src);

    let loaded_src = src.to_owned();
    let on_load = Closure::once_into_js(move || {
        REGISTRY.with_borrow_mut(|r| r.mark_loaded(&loaded_src));
        log::debug!("script loaded: {loaded_src}");
    });
    let _ = script.add_event_listener_with_callback("load", on_load.unchecked_ref());

    if head.append_child(&script).is_err() {
        return ScriptStatus::Unavailable;
    }
    ScriptStatus::Inserted
}
