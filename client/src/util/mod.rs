//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from panel logic so
//! the SSR build and native tests never touch the DOM.

pub mod lifetime;
pub mod script_loader;
