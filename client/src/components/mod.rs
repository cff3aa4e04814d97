//! Page sections and the surfaces they render through.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every panel owns its own fetch lifecycle and local signal. Panels never
//! read each other's state; the page only stacks them.

pub mod ar_overlay;
pub mod concierge_panel;
pub mod hero;
pub mod menu_panel;
pub mod quote_panel;
pub mod rooms_panel;
pub mod surfaces;
