//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The single landing page stacks panels and owns no state; each section
//! lives in `components`.

pub mod home;
