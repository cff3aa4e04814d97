//! Per-panel state.
//!
//! ARCHITECTURE
//! ============
//! Each panel wraps one of these plain structs in a local `RwSignal`. Nothing
//! here is shared between panels or provided through context.

pub mod concierge;
pub mod overlay;
pub mod quote;
pub mod resource;
